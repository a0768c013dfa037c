//! A few general-purpose geometry functions for working with tessellations
//! of the disk and the hemisphere, which might also be useful for users of
//! this library.
//!
//! Spherical coordinates follow the physics convention: `theta` is the zenith
//! angle measured from the `+z` axis and `phi` the azimuth measured from the
//! `+x` axis.

use glam::{DVec2, DVec3};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Length of the chord between the pole of a sphere of `radius` and a point at
/// zenith angle `theta`.
///
/// This is also the planar radius of that point in the Lambert azimuthal
/// equal-area projection.
pub fn chord_length(radius: f64, theta: f64) -> f64 {
    2. * radius * (0.5 * theta).sin()
}

/// Project a point of a sphere of `radius` onto the plane tangent at its pole,
/// preserving areas.
pub fn lambert_projection(radius: f64, theta: f64, phi: f64) -> DVec2 {
    chord_length(radius, theta) * DVec2::from_angle(phi)
}

/// Polar to Cartesian coordinates in the plane.
pub fn cartesian_from_polar(r: f64, phi: f64) -> DVec2 {
    r * DVec2::from_angle(phi)
}

/// Compute the Cartesian coordinates of the point with spherical coordinates
/// `(r, theta, phi)`.
pub fn cartesian_from_spherical(r: f64, theta: f64, phi: f64) -> DVec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    r * DVec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// Compute the Cartesian coordinates of many points at once. This method runs
/// in parallel if the `"rayon"` feature is enabled.
///
/// * `r`, `theta`, `phi` - The spherical coordinates of the points, which must
///   all have the same length.
pub fn cartesian_from_spherical_all(r: &[f64], theta: &[f64], phi: &[f64]) -> Vec<DVec3> {
    assert!(
        r.len() == theta.len() && r.len() == phi.len(),
        "Spherical coordinate slices differ in length!"
    );
    #[cfg(feature = "rayon")]
    let points = (0..r.len())
        .into_par_iter()
        .map(|i| cartesian_from_spherical(r[i], theta[i], phi[i]))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let points = (0..r.len())
        .map(|i| cartesian_from_spherical(r[i], theta[i], phi[i]))
        .collect();
    points
}

/// Compute the spherical coordinates `(r, theta, phi)` of a point.
///
/// `phi` lies in `(-π, π]`. The origin maps to `(0, 0, 0)`.
pub fn spherical_from_cartesian(v: DVec3) -> (f64, f64, f64) {
    let r = v.length();
    if r == 0. {
        return (0., 0., 0.);
    }
    let theta = (v.z / r).clamp(-1., 1.).acos();
    let phi = v.y.atan2(v.x);
    (r, theta, phi)
}

/// Rotate `v` by `angle` radians about the unit axis `k`, using Rodrigues'
/// rotation formula.
pub fn rotate_about(v: DVec3, k: DVec3, angle: f64) -> DVec3 {
    debug_assert!(k.is_normalized(), "Rotation axis must be a unit vector!");
    let (sin_a, cos_a) = angle.sin_cos();
    v * cos_a + k.cross(v) * sin_a + k * k.dot(v) * (1. - cos_a)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;
    use glam::DVec3;
    use rand::{prelude::*, rngs::StdRng};

    use super::*;

    #[test]
    fn test_chord_length() {
        assert_eq!(chord_length(3., 0.), 0.);
        assert_approx_eq!(f64, chord_length(1., PI), 2.);
        assert_approx_eq!(f64, chord_length(1., FRAC_PI_2), 2f64.sqrt(), ulps = 2);
    }

    #[test]
    fn test_lambert_projection() {
        let p = lambert_projection(1., FRAC_PI_2, FRAC_PI_2);
        assert_approx_eq!(f64, p.x, 0., epsilon = 1e-15);
        assert_approx_eq!(f64, p.y, 2f64.sqrt(), ulps = 2);
    }

    #[test]
    fn test_cartesian_from_spherical() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = 8;
        let r: Vec<f64> = (0..n).map(|_| rng.gen()).collect();
        let theta: Vec<f64> = (0..n).map(|_| rng.gen()).collect();
        let phi: Vec<f64> = (0..n).map(|_| rng.gen()).collect();

        let points = cartesian_from_spherical_all(&r, &theta, &phi);
        for k in 0..n {
            let expected = DVec3::new(
                r[k] * theta[k].sin() * phi[k].cos(),
                r[k] * theta[k].sin() * phi[k].sin(),
                r[k] * theta[k].cos(),
            );
            assert!(points[k].abs_diff_eq(expected, 1e-14));
        }
    }

    #[test]
    fn test_spherical_from_cartesian() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let r = 0.1 + rng.gen::<f64>();
            let theta = PI * rng.gen::<f64>();
            let phi = PI * (2. * rng.gen::<f64>() - 1.);
            let (r2, theta2, phi2) = spherical_from_cartesian(cartesian_from_spherical(r, theta, phi));
            assert_approx_eq!(f64, r, r2, epsilon = 1e-12);
            assert_approx_eq!(f64, theta, theta2, epsilon = 1e-7);
            assert_approx_eq!(f64, phi, phi2, epsilon = 1e-7);
        }
        assert_eq!(spherical_from_cartesian(DVec3::ZERO), (0., 0., 0.));
    }

    #[test]
    fn test_rotate_about() {
        let mut rng = StdRng::seed_from_u64(5);
        let angle: f64 = rng.gen_range(-3.0..3.0);
        let k = DVec3::new(rng.gen(), rng.gen(), rng.gen()).normalize();
        let v = DVec3::Y;
        let rotated = rotate_about(v, k, angle);
        let expected = angle.cos() * v + k.cross(v) * angle.sin() + k * k.dot(v) * (1. - angle.cos());
        assert!(rotated.abs_diff_eq(expected, 1e-14));
        assert_approx_eq!(f64, rotated.length(), 1., epsilon = 1e-14);

        let quarter = rotate_about(DVec3::X, DVec3::Z, FRAC_PI_2);
        assert!(quarter.abs_diff_eq(DVec3::Y, 1e-15));
    }
}
