// SPDX-License-Identifier: MPL-2.0
//! Raster image decoding and encoding (PNG, JPEG, GIF, WebP, etc.).

use crate::error::{Error, Result};
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Load a raster image from the given path as 8-bit RGBA.
///
/// Sources without an alpha channel (RGB, grayscale, palette) are converted
/// to fully opaque RGBA.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file cannot be read or the image format
/// is invalid or unsupported.
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img_bytes = fs::read(path).map_err(|e| Error::Decode(format!("{}: {e}", path.display())))?;

    let img = image_rs::load_from_memory(&img_bytes)
        .map_err(|e| Error::Decode(format!("{}: {e}", path.display())))?;
    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgba8())
}

/// Encode `image` and write it to `path`, replacing any existing file.
///
/// The format follows the file extension and defaults to PNG. JPEG output
/// drops the alpha channel since the format cannot store it.
///
/// The bytes go to a temporary file next to the destination which is then
/// renamed over it, so a failed write never leaves a truncated output.
/// A replaced file keeps its permissions; a new one gets the usual
/// `0666 & !umask` mode.
///
/// # Errors
///
/// Returns [`Error::Write`] if the image cannot be encoded or the
/// destination directory is not writable.
pub fn save_raster<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);

    let mut encoded = Cursor::new(Vec::new());
    let encode_result = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .write_to(&mut encoded, format)
    } else {
        image.write_to(&mut encoded, format)
    };
    encode_result
        .map_err(|e| Error::Write(format!("Failed to encode {}: {e}", path.display())))?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error = |e: std::io::Error| Error::Write(format!("{}: {e}", path.display()));

    let mut staged = staging_file(directory).map_err(write_error)?;
    staged.write_all(encoded.get_ref()).map_err(write_error)?;
    staged.flush().map_err(write_error)?;
    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(write_error)?;
        }
    }
    staged.persist(path).map_err(|e| write_error(e.error))?;

    log::debug!(
        "Wrote {} ({} bytes, {:?})",
        path.display(),
        encoded.get_ref().len(),
        format
    );
    Ok(())
}

/// Temporary file in `directory` created with regular file permissions
/// rather than the private mode temp files get by default.
fn staging_file(directory: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".icon_backdrop");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(directory)
}
