// SPDX-License-Identifier: MPL-2.0
//! SVG rasterization using resvg.

use crate::domain::compositing::ScaleFactor;
use crate::error::{Error, Result};
use image_rs::{Rgba, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;

/// Largest raster (in pixels) a drawing may be scaled to. Each pixel costs
/// 4 bytes in the pixmap and again in the returned image.
pub const MAX_RASTER_PIXELS: u64 = 8192 * 8192;

/// Parse the SVG at `path` and rasterize it scaled by `scale`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file cannot be read and
/// [`Error::Parse`] if it is not a valid drawing.
pub fn rasterize_vector<P: AsRef<Path>>(path: P, scale: ScaleFactor) -> Result<RgbaImage> {
    let path = path.as_ref();
    let svg_data = fs::read(path).map_err(|e| Error::Decode(format!("{}: {e}", path.display())))?;
    rasterize_vector_data(&svg_data, scale)
        .map_err(|err| match err {
            Error::Parse(message) => Error::Parse(format!("{}: {message}", path.display())),
            other => other,
        })
}

/// Rasterize SVG source bytes scaled by `scale`.
///
/// Geometry and the reported width/height are scaled by the same factor, so
/// the output is `intrinsic size * scale` pixels with the drawing filling it
/// exactly. Pixels come back with straight (non-premultiplied) alpha.
///
/// # Errors
///
/// Returns [`Error::Parse`] on malformed input, a drawing with no area, or
/// one whose scaled size exceeds [`MAX_RASTER_PIXELS`].
pub fn rasterize_vector_data(svg_data: &[u8], scale: ScaleFactor) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(Error::Parse("SVG has empty dimensions".into()));
    }
    let (width, height) = scale.apply_to_size(size.width(), size.height());
    log::debug!(
        "Rasterizing {}x{} drawing at x{} -> {}x{}",
        size.width(),
        size.height(),
        scale.value(),
        width,
        height
    );

    if u64::from(width) * u64::from(height) > MAX_RASTER_PIXELS {
        return Err(Error::Parse(format!(
            "scaled drawing {width}x{height} exceeds the {MAX_RASTER_PIXELS} pixel limit"
        )));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Parse(format!("Failed to allocate {width}x{height} pixmap")))?;

    let transform = tiny_skia::Transform::from_scale(scale.value(), scale.value());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut raster = RgbaImage::new(width, height);
    for (target, source) in raster.pixels_mut().zip(pixmap.pixels()) {
        let color = source.demultiply();
        *target = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    Ok(raster)
}
