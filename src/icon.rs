// SPDX-License-Identifier: MPL-2.0
//! Application icon generation.
//!
//! Two variants share the compositor and differ only in where the foreground
//! comes from:
//! - [`Variant::Raster`] decodes an existing icon and lays it over a canvas of
//!   the same size at the origin.
//! - [`Variant::Vector`] rasterizes an SVG at an enlarged scale and centers it
//!   on a fixed-size canvas.

use crate::compositor::{center_offset, composite, make_canvas};
use crate::config::{DEFAULT_OUTPUT, DEFAULT_RASTER_INPUT, DEFAULT_VECTOR_INPUT};
use crate::domain::compositing::{BackgroundColor, CanvasSize, Offset, ScaleFactor};
use crate::error::Result;
use crate::media;
use image_rs::RgbaImage;
use std::fmt;
use std::path::PathBuf;

/// Where the foreground comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Existing raster icon, canvas sized to match.
    #[default]
    Raster,
    /// SVG drawing, upscaled and centered on a fixed canvas.
    Vector,
}

impl Variant {
    /// Parses a command line name (`raster`/`png` or `svg`/`vector`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "raster" | "png" => Some(Variant::Raster),
            "svg" | "vector" => Some(Variant::Vector),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::Raster => "raster",
            Variant::Vector => "svg",
        }
    }

    /// Input read when nothing else is configured.
    #[must_use]
    pub fn default_input(self) -> &'static str {
        match self {
            Variant::Raster => DEFAULT_RASTER_INPUT,
            Variant::Vector => DEFAULT_VECTOR_INPUT,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct IconJob {
    pub variant: Variant,
    pub input: PathBuf,
    pub output: PathBuf,
    pub background: BackgroundColor,
    /// Canvas for [`Variant::Vector`]; raster input always uses its own size.
    pub canvas_size: CanvasSize,
    /// Upscale for [`Variant::Vector`].
    pub scale: ScaleFactor,
}

impl IconJob {
    /// Job with the built-in defaults for `variant`.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            input: PathBuf::from(variant.default_input()),
            output: PathBuf::from(DEFAULT_OUTPUT),
            background: BackgroundColor::default(),
            canvas_size: CanvasSize::default(),
            scale: ScaleFactor::default(),
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub variant: Variant,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Where the foreground's top-left corner landed.
    pub offset: Offset,
    pub background: BackgroundColor,
}

impl GeneratedIcon {
    /// One-line confirmation printed on success.
    #[must_use]
    pub fn summary(&self) -> String {
        let source = match self.variant {
            Variant::Raster => "",
            Variant::Vector => " from SVG",
        };
        format!(
            "Successfully created {}{} with {} background",
            self.path.display(),
            source,
            self.background
        )
    }
}

/// Lays `foreground` over a canvas of the same size at the origin.
#[must_use]
pub fn compose_from_raster(foreground: &RgbaImage, background: BackgroundColor) -> RgbaImage {
    let (width, height) = foreground.dimensions();
    let mut canvas = make_canvas(width, height, background);
    composite(&mut canvas, foreground, 0, 0);
    canvas
}

/// Centers `foreground` on a new canvas of `canvas_size`.
///
/// Returns the composite and the offset used.
#[must_use]
pub fn compose_centered(
    foreground: &RgbaImage,
    canvas_size: CanvasSize,
    background: BackgroundColor,
) -> (RgbaImage, Offset) {
    let offset = center_offset(canvas_size.dimensions(), foreground.dimensions());
    let mut canvas = make_canvas(canvas_size.width(), canvas_size.height(), background);
    composite(&mut canvas, foreground, offset.x, offset.y);
    (canvas, offset)
}

/// Runs `job`: obtains the foreground, composites it and writes the result.
///
/// # Errors
///
/// Propagates decode, parse and write failures unchanged.
pub fn generate(job: &IconJob) -> Result<GeneratedIcon> {
    log::debug!("Generating icon: {job:?}");

    let (icon, offset) = match job.variant {
        Variant::Raster => {
            let foreground = media::load_raster(&job.input)?;
            (
                compose_from_raster(&foreground, job.background),
                Offset::ORIGIN,
            )
        }
        Variant::Vector => {
            let foreground = media::rasterize_vector(&job.input, job.scale)?;
            let (icon, offset) = compose_centered(&foreground, job.canvas_size, job.background);
            if offset.x < 0 || offset.y < 0 {
                log::warn!(
                    "Rasterized drawing ({}x{}) is larger than the {} canvas and will be clipped",
                    foreground.width(),
                    foreground.height(),
                    job.canvas_size
                );
            }
            (icon, offset)
        }
    };
    log::debug!("Foreground placed at {offset}");

    media::save_raster(&icon, &job.output)?;

    Ok(GeneratedIcon {
        variant: job.variant,
        path: job.output.clone(),
        width: icon.width(),
        height: icon.height(),
        offset,
        background: job.background,
    })
}
