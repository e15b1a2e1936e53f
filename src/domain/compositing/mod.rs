// SPDX-License-Identifier: MPL-2.0
//! Compositing domain types.
//!
//! This module provides pure domain types for icon generation:
//! - [`BackgroundColor`]: Canvas fill color
//! - [`ScaleFactor`]: Uniform vector rasterization scale
//! - [`CanvasSize`]: Output canvas dimensions
//! - [`Offset`]: Foreground placement on the canvas

pub mod newtypes;

pub use newtypes::{
    scale_bounds, BackgroundColor, CanvasSize, Offset, ParseColorError, ScaleFactor,
    DEFAULT_CANVAS_EDGE,
};
