//! Spherically symmetric particle-density profiles and the number of particles
//! they place in concentric shells.

use crate::{
    band::{Band, BandMarker},
    error::{Result, TessellationError},
};

/// A spherically symmetric radial profile.
pub trait RadialProfile {
    /// Radius enclosing 90% of the particles.
    fn r90(&self) -> f64;

    /// Fraction of the particles within radius `r`.
    fn particle_number(&self, r: f64) -> f64;

    /// [`RadialProfile::particle_number`] evaluated at each of the `radii`.
    fn particle_numbers(&self, radii: &[f64]) -> Vec<f64> {
        radii.iter().map(|&r| self.particle_number(r)).collect()
    }
}

/// Profile whose density decays exponentially with the radius, like the
/// electron density of the hydrogen ground state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exponential;

impl RadialProfile for Exponential {
    fn r90(&self) -> f64 {
        2.661160168917105
    }

    fn particle_number(&self, r: f64) -> f64 {
        1. - (-2. * r).exp() * (1. + 2. * r * (1. + r))
    }
}

/// Distribute `total` particles over the shells delimited by `radii`.
///
/// Shell `j` extends over `[radii[j], radii[j + 1]]`, so `radii` must be
/// ascending and holds one more entry than the result. Every shell receives
/// its share of `total` according to `profile`, rounded to the nearest
/// integer.
pub fn shell_particle_numbers<P: RadialProfile + ?Sized>(
    profile: &P,
    total: u32,
    radii: &[f64],
) -> Result<Vec<u32>> {
    if radii.len() < 2 {
        return Err(TessellationError::invalid(
            "at least two radii are needed to delimit a shell",
        ));
    }
    if radii.windows(2).any(|pair| !(pair[0] <= pair[1])) {
        return Err(TessellationError::invalid("shell radii must be ascending"));
    }

    let fractions = profile.particle_numbers(radii);
    Ok(fractions
        .windows(2)
        .map(|pair| (total as f64 * (pair[1] - pair[0])).round().max(0.) as u32)
        .collect())
}

/// Distribute `total` particles over the bands of a tessellation, innermost
/// band first, using the band extents as shell radii.
pub fn band_particle_numbers<P: RadialProfile + ?Sized, M: BandMarker>(
    profile: &P,
    total: u32,
    bands: &[&Band<M>],
) -> Result<Vec<u32>> {
    let mut radii: Vec<f64> = bands.iter().map(|b| b.lower()).collect();
    match bands.last() {
        Some(outermost) => radii.push(outermost.upper()),
        None => return Ok(vec![]),
    }
    shell_particle_numbers(profile, total, &radii)
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;
    use rand::{prelude::*, rngs::StdRng};

    use super::*;
    use crate::{Disk, Tessellation};

    #[test]
    fn test_exponential() {
        let profile = Exponential;
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let r: f64 = rng.gen();
            let expected = 1. - (-2. * r).exp() * (1. + 2. * r + 2. * r * r);
            assert_approx_eq!(f64, profile.particle_number(r), expected, epsilon = 1e-14);
        }
        assert_eq!(profile.particle_number(0.), 0.);
        assert_approx_eq!(f64, profile.particle_number(profile.r90()), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_shell_particle_numbers() {
        let profile = Exponential;
        let mut rng = StdRng::seed_from_u64(12);
        let total = rng.gen_range(100..1000);
        let n_shells = rng.gen_range(3..10);
        let radii: Vec<f64> = (0..=n_shells).map(|k| 0.1 * k as f64).collect();

        let numbers = shell_particle_numbers(&profile, total, &radii).unwrap();
        assert_eq!(numbers.len(), n_shells);
        for j in 0..n_shells {
            let f0 = profile.particle_number(radii[j]);
            let f1 = profile.particle_number(radii[j + 1]);
            assert_eq!(numbers[j], (total as f64 * (f1 - f0)).round() as u32);
        }
    }

    #[test]
    fn test_shell_particle_numbers_invalid() {
        assert!(shell_particle_numbers(&Exponential, 10, &[1.]).is_err());
        assert!(shell_particle_numbers(&Exponential, 10, &[0., 2., 1.]).is_err());
        assert!(shell_particle_numbers(&Exponential, 10, &[0., f64::NAN]).is_err());
    }

    #[test]
    fn test_band_particle_numbers() {
        let disk = Disk::build(5., 100, 1.).unwrap();
        let bands = disk.sorted_bands();
        let numbers = band_particle_numbers(&Exponential, 10_000, &bands).unwrap();
        assert_eq!(numbers.len(), bands.len());
        let sum: u32 = numbers.iter().sum();
        let expected = 10_000. * Exponential.particle_number(5.);
        assert!((sum as f64 - expected).abs() <= bands.len() as f64);
    }
}
