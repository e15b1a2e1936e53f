// SPDX-License-Identifier: MPL-2.0
//! `icon_backdrop` generates application icons with a solid background.
//!
//! It composites an existing image, either a raster file or an SVG rendered
//! at an enlarged scale, onto an opaque canvas using the image's own alpha
//! channel as the blend mask.

#![doc(html_root_url = "https://docs.rs/icon_backdrop/0.1.0")]

pub mod cli;
pub mod compositor;
pub mod config;
pub mod domain;
pub mod error;
pub mod icon;
pub mod media;

pub use error::{Error, Result};
