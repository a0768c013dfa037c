use std::f64::consts::PI;

use log::{debug, trace};
use serde::Serialize;

use super::{check_patch_number, check_ring, Tessellation};
use crate::{
    band::{Annulus, Radial},
    error::Result,
    params::TessellationParams,
};

/// Equal-area disk tessellation based on Beckers & Beckers (2012).
///
/// The disk is divided into annuli holding a variable number of patches (i.e.
/// the patches are not congruent), and every patch throughout the disk has
/// exactly the same area.
///
/// The aspect ratio of every patch is only _approximately_ equal to the
/// requested one, since the number of patches of every annulus is rounded to
/// an integer. Aspect ratios far from 1 (roughly outside `[0.15, 50]` for a
/// thousand patches) may make the recurrence diverge, which is reported as a
/// [`TessellationError::NumericalNonConvergence`](crate::TessellationError).
#[derive(Clone, Debug, Serialize)]
pub struct Disk {
    radius: f64,
    patch_aspect: f64,
    annuli: Vec<Annulus>,
}

impl Disk {
    /// Construct the tessellation of a disk of `radius` into exactly
    /// `n_patches` patches of equal area, whose ratio of radial width to arc
    /// length is close to `patch_aspect`.
    pub fn build(radius: f64, n_patches: u32, patch_aspect: f64) -> Result<Self> {
        TessellationParams::new(radius, n_patches, patch_aspect).validate()?;

        // Maximum number of rings before the patch count would reach zero.
        // At least one step is needed to close off the center.
        let lmax = ((n_patches as f64 * patch_aspect / PI).sqrt().floor() as usize).max(1);
        debug!("Building disk: {n_patches} patches, aspect {patch_aspect}, lmax {lmax}");

        // Decrease of sqrt(k) from one ring to the next.
        let step = (PI / patch_aspect).sqrt();

        // Not pre-sized: lmax grows without bound with the aspect ratio.
        let mut annuli = Vec::new();
        let mut k_lm1 = n_patches as i64;
        let mut r_lm1 = radius;
        for l in 1..=lmax {
            if l == lmax {
                // The center cannot have a meaningful aspect ratio: it becomes
                // a single circular patch.
                let r_inner = r_lm1 / (k_lm1 as f64).sqrt();
                if k_lm1 > 1 {
                    annuli.push(Annulus::new((r_inner, r_lm1), (k_lm1 - 1) as u32)?);
                    trace!("Annulus {l}: ({r_inner}, {r_lm1}), {} patches", k_lm1 - 1);
                }
                annuli.push(Annulus::new((0., r_inner), 1)?);
                trace!("Center: (0, {r_inner}), 1 patch");
                break;
            }

            let k_l = ((k_lm1 as f64).sqrt() - step).powi(2).round() as i64;
            check_ring(l, k_lm1, k_l)?;
            // Keeps the area enclosed by r_l proportional to k_l.
            let r_l = r_lm1 * (k_l as f64 / k_lm1 as f64).sqrt();
            annuli.push(Annulus::new((r_l, r_lm1), (k_lm1 - k_l) as u32)?);
            trace!("Annulus {l}: ({r_l}, {r_lm1}), {} patches", k_lm1 - k_l);

            k_lm1 = k_l;
            r_lm1 = r_l;
        }

        check_patch_number(n_patches, &annuli)?;

        Ok(Self {
            radius,
            patch_aspect,
            annuli,
        })
    }

    /// The annuli that constitute the disk, outermost first.
    pub fn annuli(&self) -> &[Annulus] {
        &self.annuli
    }

    /// The aspect ratio the patches were built for.
    pub fn patch_aspect(&self) -> f64 {
        self.patch_aspect
    }
}

impl Tessellation for Disk {
    type Marker = Radial;

    fn from_params(params: &TessellationParams) -> Result<Self> {
        Self::build(params.radius, params.n_patches, params.patch_aspect)
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn bands(&self) -> &[Annulus] {
        &self.annuli
    }

    fn nominal_patch_area(&self) -> f64 {
        PI * self.radius * self.radius / self.patch_number() as f64
    }
}
