use std::f64::consts::{FRAC_PI_2, PI, TAU};

use log::{debug, trace, warn};
use serde::Serialize;

use super::{check_patch_number, check_ring, Tessellation};
use crate::{
    band::{Zenithal, Zone},
    error::{Result, TessellationError},
    geometry::chord_length,
    params::TessellationParams,
};

/// Equal-area hemisphere tessellation based on Beckers & Beckers (2012).
///
/// The hemisphere is divided into zones holding a variable number of patches,
/// from the equator up to a polar cap made of a single patch. The recurrence
/// is the one of the [`Disk`](super::Disk), applied to the Lambert azimuthal
/// projection of the hemisphere: the planar radius of a zone boundary at zenith
/// angle `θ` is the chord length `2R sin(θ/2)`.
#[derive(Clone, Debug, Serialize)]
pub struct Hemisphere {
    radius: f64,
    patch_aspect: f64,
    zones: Vec<Zone>,
}

impl Hemisphere {
    /// Construct the tessellation of a hemisphere of `radius` into exactly
    /// `n_patches` patches, whose ratio of zenithal width to arc length is
    /// close to `patch_aspect`.
    pub fn build(radius: f64, n_patches: u32, patch_aspect: f64) -> Result<Self> {
        TessellationParams::new(radius, n_patches, patch_aspect).validate()?;

        let mut theta_lm1 = FRAC_PI_2;
        let mut r_lm1 = chord_length(radius, theta_lm1);
        let mut k_lm1 = n_patches as i64;

        // Maximum number of zones for which theta_l > 0, at least one.
        let lmax = (((radius * theta_lm1 / r_lm1) * (n_patches as f64 * patch_aspect / PI).sqrt())
            .floor() as usize)
            .max(1);
        debug!("Building hemisphere: {n_patches} patches, aspect {patch_aspect}, lmax {lmax}");

        // Not pre-sized: lmax grows without bound with the aspect ratio.
        let mut zones = Vec::new();
        for l in 1..=lmax {
            if l == lmax {
                let r_inner = r_lm1 / (k_lm1 as f64).sqrt();
                let theta_inner = 2. * (0.5 * r_inner / radius).asin();
                if k_lm1 > 1 {
                    zones.push(Zone::new((theta_inner, theta_lm1), (k_lm1 - 1) as u32)?);
                    trace!("Zone {l}: ({theta_inner}, {theta_lm1}), {} patches", k_lm1 - 1);
                }
                zones.push(Zone::new((0., theta_inner), 1)?);
                trace!("Polar cap: (0, {theta_inner}), 1 patch");
                break;
            }

            let theta_l =
                theta_lm1 - r_lm1 * (PI / (patch_aspect * k_lm1 as f64)).sqrt() / radius;
            let r_l = chord_length(radius, theta_l);
            let k_l = (k_lm1 as f64 * (r_l / r_lm1).powi(2)).round() as i64;
            if theta_l <= 0. {
                warn!("Recurrence crossed the pole at zone {l}");
                return Err(TessellationError::NumericalNonConvergence {
                    ring: l,
                    previous: k_lm1,
                    next: k_l,
                });
            }
            check_ring(l, k_lm1, k_l)?;
            zones.push(Zone::new((theta_l, theta_lm1), (k_lm1 - k_l) as u32)?);
            trace!("Zone {l}: ({theta_l}, {theta_lm1}), {} patches", k_lm1 - k_l);

            theta_lm1 = theta_l;
            r_lm1 = r_l;
            k_lm1 = k_l;
        }

        check_patch_number(n_patches, &zones)?;

        Ok(Self {
            radius,
            patch_aspect,
            zones,
        })
    }

    /// The zones that constitute the hemisphere, from the equator to the pole.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// The aspect ratio the patches were built for.
    pub fn patch_aspect(&self) -> f64 {
        self.patch_aspect
    }
}

impl Tessellation for Hemisphere {
    type Marker = Zenithal;

    fn from_params(params: &TessellationParams) -> Result<Self> {
        Self::build(params.radius, params.n_patches, params.patch_aspect)
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn bands(&self) -> &[Zone] {
        &self.zones
    }

    fn nominal_patch_area(&self) -> f64 {
        TAU * self.radius * self.radius / self.patch_number() as f64
    }
}
