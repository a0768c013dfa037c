//! **Equal-area tessellations of the disk and the hemisphere, after
//! Beckers & Beckers (2012), in Rust.**
//!
//! Given a target number of patches, the region is partitioned into
//! concentric rings (annuli for the disk, latitude zones for the hemisphere),
//! each further split azimuthally into identical patches, such that every
//! patch has the same area and an aspect ratio close to a chosen target.
//!
//! > <cite>Benoit Beckers, Pierre Beckers. A general rule for disk and
//! > hemisphere partition into equal-area cells. Computational Geometry, 2012,
//! > 45 (7), pp.275-283.</cite>
//!
//! ```
//! use equal_area_tessellation::{Disk, Tessellation};
//!
//! let disk = Disk::build(1., 288, 1.).unwrap();
//! assert_eq!(disk.patch_number(), 288);
//! assert_eq!(
//!     disk.cumulative_patch_counts(),
//!     vec![1, 8, 21, 40, 66, 98, 136, 180, 231, 288]
//! );
//! ```
//!
//! # Features
//!
//! - Construction of equal-area disk and hemisphere tessellations with an
//!   exact number of patches.
//!
//! - Detection of the aspect ratios for which the rounded recurrence fails to
//!   converge.
//!
//! - Parallel construction of batches of tessellations.
//!
//! - Per-shell particle counts for radial profiles, generalized spiral point
//!   placement and coordinate transforms.
//!
//! - Drawing tessellations to SVG.
//!
//! # Cargo Features
#![doc = document_features::document_features!()]

mod band;
pub mod distributions;
mod error;
pub mod geometry;
mod params;
pub mod profile;
pub mod render;
mod tessellation;

pub use band::{sort_bands, Annulus, Band, BandMarker, Radial, Zenithal, Zone};
pub use error::{Result, TessellationError};
pub use params::TessellationParams;
pub use tessellation::{
    tessellate_all, tessellate_disks, tessellate_hemispheres, Disk, Hemisphere, Tessellation,
};
