use crate::Point;

/// Great-circle distance in degrees of rotation, using the special case of
/// Vincenty's formula for a sphere.
pub fn vincenty_distance(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_rho = (fix2.longitude() - fix1.longitude()).to_radians();

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_phi2, cos_phi2) = phi2.sin_cos();
    let (sin_delta, cos_delta) = delta_rho.sin_cos();

    let numerator = ((cos_phi2 * sin_delta).powi(2) +
        (cos_phi1 * sin_phi2 - sin_phi1 * cos_phi2 * cos_delta).powi(2)).sqrt();
    let denominator = sin_phi1 * sin_phi2 + cos_phi1 * cos_phi2 * cos_delta;

    numerator.atan2(denominator).to_degrees()
}
