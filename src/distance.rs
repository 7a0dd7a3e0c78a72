use std::convert::TryFrom;

use log::{debug, trace};

use crate::{Algorithm, LatLng, Point, Result};
use crate::haversine::haversine_distance;
use crate::vincenty::vincenty_distance;

/// Kilometers per degree of great-circle rotation on Earth's mean radius.
pub const KM_PER_DEGREE: f64 = 111.045;

pub fn from_lat_lng(lat1: f64, lng1: f64, lat2: f64, lng2: f64, algorithm: Algorithm) -> f64 {
    from_points(&LatLng::new(lat1, lng1), &LatLng::new(lat2, lng2), algorithm)
}

/// Takes two `[lat, long]` slices.
///
/// Fails with `DistanceError::InvalidArgument` if either slice holds fewer
/// than two values.
pub fn from_array(point1: &[f64], point2: &[f64], algorithm: Algorithm) -> Result<f64> {
    let point1 = LatLng::try_from(point1)?;
    let point2 = LatLng::try_from(point2)?;

    Ok(from_points(&point1, &point2, algorithm))
}

/// Distance between two points in degrees of rotation.
pub fn from_points(point1: &dyn Point, point2: &dyn Point, algorithm: Algorithm) -> f64 {
    trace!(
        "Calculating {} distance ({}, {}) -> ({}, {})",
        algorithm,
        point1.latitude(), point1.longitude(),
        point2.latitude(), point2.longitude()
    );

    let degrees = match algorithm {
        Algorithm::Haversine => haversine_distance(point1, point2),
        Algorithm::Vincenty => vincenty_distance(point1, point2),
    };

    if degrees.is_nan() {
        debug!("{} distance is NaN, check the input coordinates", algorithm);
    }

    degrees
}

/// `from_points` with the default algorithm.
pub fn distance(point1: &dyn Point, point2: &dyn Point) -> f64 {
    from_points(point1, point2, Algorithm::default())
}

pub fn deg2km(degrees: f64) -> f64 {
    degrees * KM_PER_DEGREE
}
