use log::trace;

use crate::Point;

/// Great-circle distance in degrees of rotation.
///
/// The `acos` argument is clamped to `[-1, 1]` so that rounding on identical
/// or antipodal points cannot produce NaN. NaN coordinates still yield NaN.
pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let rho1 = fix1.longitude().to_radians();
    let rho2 = fix2.longitude().to_radians();

    let cos_d = phi1.cos() * phi2.cos() * (rho2 - rho1).cos() + phi1.sin() * phi2.sin();

    let clamped = cos_d.clamp(-1., 1.);
    if clamped != cos_d && !cos_d.is_nan() {
        trace!("Clamping acos argument {:e} to {}", cos_d, clamped);
    }

    clamped.acos().to_degrees()
}
