//! Great-circle distances between two latitude/longitude points.
//!
//! All `from_*` functions return the distance in **degrees of rotation**
//! along the great-circle arc. Use [`deg2km`] to convert to kilometers.
//!
//! ```
//! use greatcircle::{from_lat_lng, deg2km, Algorithm};
//!
//! let degrees = from_lat_lng(53.556, 6.492, 50.750, 5.9149, Algorithm::Haversine);
//! assert!((deg2km(degrees) - 314.06).abs() < 0.01);
//! ```

extern crate failure;
extern crate log;

pub mod algorithm;
pub mod distance;
pub mod error;
pub mod haversine;
pub mod point;
pub mod vincenty;

pub use crate::algorithm::{Algorithm, DEFAULT_ALGORITHM};
pub use crate::distance::{deg2km, distance, from_array, from_lat_lng, from_points, KM_PER_DEGREE};
pub use crate::error::{DistanceError, Result};
pub use crate::point::{LatLng, Point};
