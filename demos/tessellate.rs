//! Example that builds the equal-area tessellations of a disk and a hemisphere
//! and draws them to `disk.svg` and `hemisphere.svg`.
//!
//! Run with: `cargo run --release --example tessellate`
//!
//! The number of patches and the patch aspect ratio can optionally be given as
//! command line arguments: `cargo run --release --example tessellate -- [n] [a]`
//!
//! Their default values are:
//! - `n`: 288
//! - `a`: 1.0

use std::env;
use std::path::Path;

use equal_area_tessellation::{
    render::{Renderer, SvgRenderer},
    Disk, Hemisphere, Tessellation,
};

fn main() -> equal_area_tessellation::Result<()> {
    let mut args = env::args().skip(1);
    let n_patches = match args.next() {
        Some(n) => n
            .parse::<u32>()
            .expect("The first argument should be a positive integer denoting the number of patches!"),
        None => 288,
    };
    let patch_aspect = match args.next() {
        Some(a) => a
            .parse::<f64>()
            .expect("The second argument should be a positive number denoting the patch aspect ratio!"),
        None => 1.,
    };

    let renderer = SvgRenderer::default();

    let disk = Disk::build(1., n_patches, patch_aspect)?;
    println!("disk: {:?}", disk.cumulative_patch_counts());
    renderer.render_disk(&disk, Path::new("disk.svg"))?;

    let hemisphere = Hemisphere::build(1., n_patches, patch_aspect)?;
    println!("hemisphere: {:?}", hemisphere.cumulative_patch_counts());
    renderer.render_hemisphere(&hemisphere, Path::new("hemisphere.svg"))?;

    Ok(())
}
