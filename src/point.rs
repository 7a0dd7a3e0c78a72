use std::convert::TryFrom;
use std::fmt;

use crate::error::DistanceError;

pub trait Point {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

impl<T: Point + ?Sized> Point for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }
    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

/// Immutable latitude/longitude pair in decimal degrees.
///
/// Values are stored as given. Out-of-range or non-finite coordinates are
/// not rejected; they flow into the trigonometry unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    lat: f64,
    long: f64,
}

impl LatLng {
    pub fn new(lat: f64, long: f64) -> LatLng {
        LatLng { lat, long }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn long(&self) -> f64 {
        self.long
    }
}

impl Point for LatLng {
    fn latitude(&self) -> f64 {
        self.lat
    }
    fn longitude(&self) -> f64 {
        self.long
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, long): (f64, f64)) -> Self {
        LatLng::new(lat, long)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(pair: [f64; 2]) -> Self {
        LatLng::new(pair[0], pair[1])
    }
}

/// Reads `[lat, long, ..]`; anything past index 1 is ignored.
impl TryFrom<&[f64]> for LatLng {
    type Error = DistanceError;

    fn try_from(pair: &[f64]) -> Result<Self, Self::Error> {
        match *pair {
            [lat, long, ..] => Ok(LatLng::new(lat, long)),
            _ => Err(DistanceError::InvalidArgument(format!(
                "coordinate pair needs latitude and longitude, got {} value(s)",
                pair.len()
            ))),
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.long)
    }
}
