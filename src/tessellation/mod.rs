//! Equal-area tessellations of the disk and the hemisphere.
//!
//! Both tessellations peel rings off the outer boundary inward, following the
//! closed-form recurrence of Beckers & Beckers (2012). Each ring holds an
//! integer number of patches, and the innermost region (the center of the
//! disk, or the pole of the hemisphere) is always a single patch.

use log::warn;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::{
    band::{Band, BandMarker},
    error::{Result, TessellationError},
    params::TessellationParams,
};

mod disk;
mod hemisphere;

pub use disk::Disk;
pub use hemisphere::Hemisphere;

/// Common interface of the finished tessellations.
pub trait Tessellation: Sized {
    /// What the extents of the bands measure.
    type Marker: BandMarker;

    /// Run the recurrence for the given parameters.
    fn from_params(params: &TessellationParams) -> Result<Self>;

    /// The radius of the tessellated region.
    fn radius(&self) -> f64;

    /// The bands in the order they were built (outermost first).
    fn bands(&self) -> &[Band<Self::Marker>];

    /// The area that every patch of this tessellation covers.
    fn nominal_patch_area(&self) -> f64;

    /// The total number of patches over all bands.
    fn patch_number(&self) -> u32 {
        self.bands().iter().map(|b| b.patch_count()).sum()
    }

    /// The bands, ordered by ascending lower extent (innermost first).
    fn sorted_bands(&self) -> Vec<&Band<Self::Marker>> {
        let mut bands: Vec<_> = self.bands().iter().collect();
        bands.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
        bands
    }

    /// Running totals of the patch counts, innermost band first.
    fn cumulative_patch_counts(&self) -> Vec<u32> {
        self.sorted_bands()
            .iter()
            .scan(0, |total, band| {
                *total += band.patch_count();
                Some(*total)
            })
            .collect()
    }

    /// Find the patch containing the point at `extent` (radius or zenith
    /// angle) and azimuth `phi`.
    ///
    /// Returns the index of the band in [`Tessellation::sorted_bands`] order
    /// and the index of the patch within that band, or `None` when the point
    /// lies outside the tessellated region or `phi` is not finite.
    fn locate(&self, extent: f64, phi: f64) -> Option<(usize, usize)> {
        let bands = self.sorted_bands();
        let last = bands.len().checked_sub(1)?;
        bands
            .iter()
            .enumerate()
            .find(|(i, band)| band.contains(extent) || (*i == last && extent == band.upper()))
            .and_then(|(i, band)| band.patch_index(phi).map(|patch| (i, patch)))
    }
}

/// Build one tessellation per entry of `params`. This method runs in parallel
/// if the `"rayon"` feature is enabled.
///
/// Every tessellation is independent; a failure for one entry does not
/// affect the others.
pub fn tessellate_all<T: Tessellation + Send>(params: &[TessellationParams]) -> Vec<Result<T>> {
    #[cfg(feature = "rayon")]
    let tessellations = params.par_iter().map(T::from_params).collect();
    #[cfg(not(feature = "rayon"))]
    let tessellations = params.iter().map(T::from_params).collect();
    tessellations
}

/// Build one [`Disk`] per entry of `params`.
pub fn tessellate_disks(params: &[TessellationParams]) -> Vec<Result<Disk>> {
    tessellate_all(params)
}

/// Build one [`Hemisphere`] per entry of `params`.
pub fn tessellate_hemispheres(params: &[TessellationParams]) -> Vec<Result<Hemisphere>> {
    tessellate_all(params)
}

/// Ring `l` of the recurrence must hold at least one patch and leave at
/// least one patch for the rings inside it.
fn check_ring(ring: usize, k_lm1: i64, k_l: i64) -> Result<()> {
    if k_l <= 0 || k_lm1 - k_l <= 0 {
        warn!(
            "Recurrence diverged at ring {ring}: {k_lm1} patches remaining, {k_l} after rounding"
        );
        return Err(TessellationError::NumericalNonConvergence {
            ring,
            previous: k_lm1,
            next: k_l,
        });
    }
    Ok(())
}

/// End-of-recurrence check: the rounding must not have lost or gained patches.
fn check_patch_number<M: BandMarker>(expected: u32, bands: &[Band<M>]) -> Result<()> {
    let actual = bands.iter().map(|b| b.patch_count()).sum();
    if actual != expected {
        warn!("Tessellation holds {actual} patches, {expected} were requested");
        return Err(TessellationError::PatchCountMismatch { expected, actual });
    }
    Ok(())
}
