// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the values used when
//! neither the command line nor `settings.toml` provides one.
//!
//! # Categories
//!
//! - **Canvas**: Background color and size
//! - **Vector**: Rasterization scale for SVG input
//! - **Paths**: Input and output locations relative to the working directory

use crate::domain::compositing::{scale_bounds, BackgroundColor, DEFAULT_CANVAS_EDGE};

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Default canvas fill, `#212121`.
pub const DEFAULT_BACKGROUND_COLOR: BackgroundColor = BackgroundColor::DARK_GREY;

/// Default edge length of the square canvas used for vector input.
pub const DEFAULT_CANVAS_SIZE: u32 = DEFAULT_CANVAS_EDGE;

// ==========================================================================
// Vector Defaults
// ==========================================================================

/// Default scale applied to SVG drawings before rasterization.
pub const DEFAULT_SCALE_FACTOR: f32 = scale_bounds::DEFAULT;

// ==========================================================================
// Path Defaults
// ==========================================================================

/// Raster icon read by the `raster` variant.
pub const DEFAULT_RASTER_INPUT: &str = "assets/icon.png";

/// Vector drawing read by the `svg` variant.
pub const DEFAULT_VECTOR_INPUT: &str = "assets/capsule.svg";

/// Output written by both variants.
pub const DEFAULT_OUTPUT: &str = "assets/icon_bg.png";
