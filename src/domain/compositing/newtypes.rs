// SPDX-License-Identifier: MPL-2.0
//! Compositing newtypes.
//!
//! This module provides type-safe wrappers for the values that drive icon
//! generation, ensuring they are always within valid ranges.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// BackgroundColor
// =============================================================================

/// Opaque RGB color used to fill the canvas.
///
/// The canvas must stay fully opaque, so there is no way to build a
/// translucent value. Textual form is `#rrggbb`; `#rrggbbff` is accepted
/// when parsing and any other alpha is rejected. The leading `#` is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundColor([u8; 3]);

impl BackgroundColor {
    /// `#212121`, the dark grey used behind the application icon.
    pub const DARK_GREY: Self = Self::rgb(33, 33, 33);

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Returns the channels in RGBA order; alpha is always 255.
    #[must_use]
    pub const fn channels(self) -> [u8; 4] {
        let [r, g, b] = self.0;
        [r, g, b, 255]
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::DARK_GREY
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Error returned when a color string cannot be used as a background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Not `#rrggbb` / `#rrggbbaa` hex notation.
    Malformed(String),
    /// Valid hex with an alpha below `ff`.
    Translucent(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Malformed(input) => {
                write!(f, "invalid color '{input}', expected #rrggbb")
            }
            ParseColorError::Translucent(input) => {
                write!(f, "background color '{input}' must be fully opaque")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for BackgroundColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(ParseColorError::Malformed(s.to_string()));
        }

        let mut channels = [255u8; 4];
        for (channel, start) in channels.iter_mut().zip((0..hex.len()).step_by(2)) {
            *channel = u8::from_str_radix(&hex[start..start + 2], 16)
                .map_err(|_| ParseColorError::Malformed(s.to_string()))?;
        }
        let [r, g, b, a] = channels;
        if a != 255 {
            return Err(ParseColorError::Translucent(s.to_string()));
        }
        Ok(Self::rgb(r, g, b))
    }
}

// =============================================================================
// Scale Factor Bounds
// =============================================================================

/// Scale factor bounds for vector rasterization.
pub mod scale_bounds {
    /// Minimum scale factor.
    pub const MIN: f32 = 0.01;
    /// Maximum scale factor.
    pub const MAX: f32 = 1000.0;
    /// Default scale factor (a drawing a few dozen pixels wide fills most of a
    /// 1024 canvas).
    pub const DEFAULT: f32 = 20.0;
}

// =============================================================================
// ScaleFactor
// =============================================================================

/// Uniform scale applied to a vector drawing before rasterization.
///
/// The same factor is used for both axes so drawings never stretch.
/// Non-finite input falls back to the default.
///
/// # Example
///
/// ```ignore
/// let scale = ScaleFactor::new(20.0);
/// assert_eq!(scale.apply_to_size(44.0, 26.0), (880, 520));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Creates a new scale factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        Self(factor.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scales intrinsic drawing dimensions to whole pixel dimensions.
    ///
    /// Each dimension is rounded to the nearest pixel and is at least 1.
    #[must_use]
    pub fn apply_to_size(self, width: f32, height: f32) -> (u32, u32) {
        let factor = f64::from(self.0);
        (
            scale_dimension(f64::from(width), factor),
            scale_dimension(f64::from(height), factor),
        )
    }
}

fn scale_dimension(value: f64, factor: f64) -> u32 {
    let scaled = (value * factor).round().max(1.0);
    // The conditional guarantees value is <= u32::MAX, so cast is safe
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pixels = if scaled > f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    };
    pixels
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// CanvasSize
// =============================================================================

/// Default edge length of a square icon canvas (macOS icon size).
pub const DEFAULT_CANVAS_EDGE: u32 = 1024;

/// Canvas dimensions, each guaranteed to be at least 1 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[must_use]
    pub fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::square(DEFAULT_CANVAS_EDGE)
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// =============================================================================
// Offset
// =============================================================================

/// Placement of a foreground's top-left corner on the canvas.
///
/// Coordinates are signed: a foreground larger than the canvas is centered
/// with negative offsets and clipped on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

impl Offset {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset that centers `foreground` on `canvas`.
    ///
    /// Uses floor division, so an odd size difference leaves the extra pixel
    /// on the right/bottom and oversized foregrounds round toward negative
    /// infinity.
    #[must_use]
    pub fn centered(canvas: (u32, u32), foreground: (u32, u32)) -> Self {
        let axis = |canvas: u32, foreground: u32| {
            (i64::from(canvas) - i64::from(foreground)).div_euclid(2)
        };
        Self {
            x: axis(canvas.0, foreground.0),
            y: axis(canvas.1, foreground.1),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
