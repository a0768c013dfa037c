//! Rings of a tessellation and their uniform azimuthal subdivision.

use std::{f64::consts::PI, f64::consts::TAU, fmt::Debug, marker::PhantomData};

use serde::Serialize;

use crate::error::{Result, TessellationError};

/// Marks what the extents of a [`Band`] measure.
pub trait BandMarker: Clone + Copy + Debug + Default + Send + Sync {
    /// Human readable name of the extent coordinate.
    const EXTENT: &'static str;
}

/// Extents are radii in the plane of a disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct Radial;
impl BandMarker for Radial {
    const EXTENT: &'static str = "radius";
}

/// Extents are zenith angles on a hemisphere.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zenithal;
impl BandMarker for Zenithal {
    const EXTENT: &'static str = "zenith angle";
}

/// One ring of a tessellation, divided into `patch_count` identical patches.
///
/// The patches are delimited by `patch_count + 1` azimuthal boundaries,
/// uniformly spaced over `[0, 2π]`. A band is fully built on construction and
/// read-only thereafter.
#[derive(Clone, Debug, Serialize)]
pub struct Band<M: BandMarker> {
    extents: (f64, f64),
    patch_boundaries: Vec<f64>,
    #[serde(skip)]
    _marker: PhantomData<M>,
}

/// The region of a disk between two concentric circles.
pub type Annulus = Band<Radial>;

/// The surface of a spherical segment between two zenith angles (excluding
/// the bases).
pub type Zone = Band<Zenithal>;

impl<M: BandMarker> Band<M> {
    /// Create a band between `extents.0` and `extents.1`, divided into
    /// `n_patches` azimuthal patches.
    pub fn new(extents: (f64, f64), n_patches: u32) -> Result<Self> {
        let (lo, hi) = extents;
        if n_patches < 1 {
            return Err(TessellationError::invalid(
                "a band needs at least one patch",
            ));
        }
        if !(lo.is_finite() && hi.is_finite() && 0. <= lo && lo < hi) {
            return Err(TessellationError::invalid(format!(
                "invalid {} extents ({lo}, {hi})",
                M::EXTENT
            )));
        }
        let n = n_patches as f64;
        // m / n is exactly 1 for the last boundary, so the span ends at 2π.
        let patch_boundaries = (0..=n_patches).map(|m| TAU * (m as f64 / n)).collect();

        Ok(Self {
            extents,
            patch_boundaries,
            _marker: PhantomData,
        })
    }

    /// The lower and upper extents of this band.
    pub fn extents(&self) -> (f64, f64) {
        self.extents
    }

    pub fn lower(&self) -> f64 {
        self.extents.0
    }

    pub fn upper(&self) -> f64 {
        self.extents.1
    }

    /// Extent of the band perpendicular to the azimuthal direction.
    pub fn width(&self) -> f64 {
        self.extents.1 - self.extents.0
    }

    /// The number of patches covering this band.
    pub fn patch_count(&self) -> u32 {
        (self.patch_boundaries.len() - 1) as u32
    }

    /// The azimuthal boundaries of the patches, from `0` to `2π`.
    pub fn patch_boundaries(&self) -> &[f64] {
        &self.patch_boundaries
    }

    /// Azimuthal angle spanned by a single patch.
    pub fn patch_width(&self) -> f64 {
        TAU / self.patch_count() as f64
    }

    /// Whether `extent` falls within this band (lower bound inclusive).
    pub fn contains(&self, extent: f64) -> bool {
        self.extents.0 <= extent && extent < self.extents.1
    }

    /// Index of the patch containing azimuth `phi` (any finite angle).
    ///
    /// Returns `None` when `phi` is not finite.
    pub fn patch_index(&self, phi: f64) -> Option<usize> {
        if !phi.is_finite() {
            return None;
        }
        let phi = phi.rem_euclid(TAU);
        let idx = (phi / self.patch_width()).floor() as usize;
        Some(idx.min(self.patch_count() as usize - 1))
    }

    /// Key by which bands are ordered: their lower extent.
    ///
    /// This is not an identity; two bands with the same lower extent need not
    /// be equal.
    pub fn sort_key(&self) -> f64 {
        self.extents.0
    }
}

impl Annulus {
    /// Area of a single patch of this annulus.
    pub fn patch_area(&self) -> f64 {
        let (lo, hi) = self.extents;
        PI * (hi * hi - lo * lo) / self.patch_count() as f64
    }
}

impl Zone {
    /// Surface area of a single patch of this zone on a sphere of the given
    /// `radius`.
    pub fn patch_area(&self, radius: f64) -> f64 {
        let (lo, hi) = self.extents;
        TAU * radius * radius * (lo.cos() - hi.cos()) / self.patch_count() as f64
    }
}

/// Sort bands in place by ascending [`Band::sort_key`].
pub fn sort_bands<M: BandMarker>(bands: &mut [Band<M>]) {
    bands.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
}
