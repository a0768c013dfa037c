//! Drawing finished tessellations.
//!
//! Rendering is decoupled from construction: the tessellators never draw
//! themselves, the caller picks a [`Renderer`] and hands it the result.

use std::{
    f64::consts::FRAC_PI_2,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use glam::DVec2;
use log::info;

use crate::{
    error::Result,
    geometry::{cartesian_from_polar, chord_length},
    Disk, Hemisphere, Tessellation,
};

/// Draws the patch boundaries of a tessellation to a file.
pub trait Renderer {
    fn render_disk(&self, disk: &Disk, path: &Path) -> Result<()>;

    /// The hemisphere is drawn in a projection onto the plane.
    fn render_hemisphere(&self, hemisphere: &Hemisphere, path: &Path) -> Result<()>;
}

/// Renders tessellations as SVG documents.
///
/// Every band is drawn as its outer circle, plus one radial segment per patch
/// boundary when it holds more than one patch. Hemispheres are drawn in the
/// Lambert azimuthal equal-area projection, which keeps the patches equal in
/// area on the page.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    /// Width and height of the image.
    pub size: f64,
    pub stroke_width: f64,
    pub color: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            size: 512.,
            stroke_width: 0.5,
            color: "purple".to_owned(),
        }
    }
}

/// A band as drawn in the plane: inner and outer radius and the azimuthal
/// patch boundaries.
struct PlanarBand<'a> {
    inner: f64,
    outer: f64,
    boundaries: &'a [f64],
}

impl SvgRenderer {
    /// Write the SVG document of a disk tessellation to `writer`.
    pub fn write_disk<W: Write>(&self, disk: &Disk, writer: &mut W) -> Result<()> {
        let bands: Vec<PlanarBand> = disk
            .bands()
            .iter()
            .map(|annulus| PlanarBand {
                inner: annulus.lower(),
                outer: annulus.upper(),
                boundaries: annulus.patch_boundaries(),
            })
            .collect();
        self.write_bands(&bands, disk.radius(), writer)
    }

    /// Write the SVG document of the Lambert projection of a hemisphere
    /// tessellation to `writer`.
    pub fn write_hemisphere<W: Write>(&self, hemisphere: &Hemisphere, writer: &mut W) -> Result<()> {
        let radius = hemisphere.radius();
        let bands: Vec<PlanarBand> = hemisphere
            .bands()
            .iter()
            .map(|zone| PlanarBand {
                inner: chord_length(radius, zone.lower()),
                outer: chord_length(radius, zone.upper()),
                boundaries: zone.patch_boundaries(),
            })
            .collect();
        self.write_bands(&bands, chord_length(radius, FRAC_PI_2), writer)
    }

    fn write_bands<W: Write>(&self, bands: &[PlanarBand], extent: f64, writer: &mut W) -> Result<()> {
        let center = DVec2::splat(0.5 * self.size);
        // Leave a small margin around the outermost circle.
        let scale = 0.475 * self.size / extent;
        let to_page = |p: DVec2| center + scale * DVec2::new(p.x, -p.y);

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
            self.size
        )?;
        writeln!(
            writer,
            r#"<g fill="none" stroke="{}" stroke-width="{}">"#,
            self.color, self.stroke_width
        )?;
        for band in bands {
            writeln!(
                writer,
                r#"<circle cx="{}" cy="{}" r="{}"/>"#,
                center.x,
                center.y,
                scale * band.outer
            )?;
            if band.boundaries.len() > 2 {
                // The last boundary coincides with the first one.
                for &phi in &band.boundaries[..band.boundaries.len() - 1] {
                    let a = to_page(cartesian_from_polar(band.inner, phi));
                    let b = to_page(cartesian_from_polar(band.outer, phi));
                    writeln!(
                        writer,
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                        a.x, a.y, b.x, b.y
                    )?;
                }
            }
        }
        writeln!(writer, "</g>")?;
        writeln!(writer, "</svg>")?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render_disk(&self, disk: &Disk, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_disk(disk, &mut writer)?;
        writer.flush()?;
        info!("Wrote disk tessellation to {}", path.display());
        Ok(())
    }

    fn render_hemisphere(&self, hemisphere: &Hemisphere, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_hemisphere(hemisphere, &mut writer)?;
        writer.flush()?;
        info!("Wrote hemisphere tessellation to {}", path.display());
        Ok(())
    }
}
