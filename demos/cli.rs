extern crate greatcircle;

use std::env;
use std::process;

use failure::{format_err, Error};

use greatcircle::{deg2km, from_points, Algorithm, LatLng};

#[allow(dead_code)]
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        return help();
    }

    if let Err(error) = run(&args[1..]) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Error> {
    let coords = args[..4].iter()
        .map(|arg| arg.parse::<f64>().map_err(|_| format_err!("not a number: {}", arg)))
        .collect::<Result<Vec<_>, _>>()?;

    let algorithm = match args.get(4) {
        Some(name) => name.parse::<Algorithm>()?,
        None => Algorithm::default(),
    };

    let point1 = LatLng::new(coords[0], coords[1]);
    let point2 = LatLng::new(coords[2], coords[3]);
    let degrees = from_points(&point1, &point2, algorithm);

    println!("--- {} -> {} ({})", point1, point2, algorithm);
    println!("distance: {:.6}°", degrees);
    println!("distance: {:.2} km", deg2km(degrees));

    Ok(())
}

fn help() {
    println!("usage: greatcircle <lat1> <lng1> <lat2> <lng2> [haversine|vincenty]");
}
