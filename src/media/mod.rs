// SPDX-License-Identifier: MPL-2.0
//! Image input and output.
//!
//! Raster files are decoded and encoded with the `image` crate, vector
//! drawings are rasterized with resvg. Everything is exchanged as 8-bit
//! straight-alpha RGBA.

pub mod image;
pub mod vector;

// Re-export commonly used types
pub use image::{load_raster, save_raster};
pub use vector::{rasterize_vector, rasterize_vector_data};

/// Extensions handled by the vector pipeline.
pub const VECTOR_EXTENSIONS: &[&str] = &["svg"];

/// Returns whether `path` names a vector drawing, by extension.
pub fn is_vector_path(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VECTOR_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
