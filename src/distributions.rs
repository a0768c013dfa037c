//! Placement of points on the sphere.

use glam::DVec3;

use crate::{
    error::{Result, TessellationError},
    geometry::cartesian_from_spherical_all,
};

/// The parameterized spiraling scheme of Saff & Kuijlaars (1997).
///
/// Places `n` points along a spiral running from the south pole to the north
/// pole, such that consecutive points are roughly equidistant.
#[derive(Clone, Debug)]
pub struct GeneralizedSpiral {
    theta: Vec<f64>,
    phi: Vec<f64>,
}

impl GeneralizedSpiral {
    pub fn new(n: usize) -> Result<Self> {
        if n < 2 {
            return Err(TessellationError::invalid(format!(
                "a generalized spiral needs at least 2 points, got {n}"
            )));
        }

        let h: Vec<f64> = (1..=n).map(|k| Self::h(n, k)).collect();
        let theta = h.iter().map(|h_k| h_k.acos()).collect();

        let mut phi = vec![0.; n];
        // Both poles are at phi = 0.
        for k in 1..n - 1 {
            phi[k] = phi[k - 1] + Self::phase(n, h[k]);
        }

        Ok(Self { theta, phi })
    }

    /// Height of the `k`-th point (1-based) on the unit sphere.
    fn h(n: usize, k: usize) -> f64 {
        debug_assert!(1 <= k && k <= n);
        -1. + 2. * (k as f64 - 1.) / (n as f64 - 1.)
    }

    /// Azimuthal advance from the previous point to the one at height `h_k`.
    fn phase(n: usize, h_k: f64) -> f64 {
        3.6 / (n as f64).sqrt() / (1. - h_k * h_k).sqrt()
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// The zenith angle of every point.
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// The azimuth of every point.
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// Cartesian positions of the points on a sphere of the given `radius`.
    pub fn points(&self, radius: f64) -> Vec<DVec3> {
        let r = vec![radius; self.len()];
        cartesian_from_spherical_all(&r, &self.theta, &self.phi)
    }
}
