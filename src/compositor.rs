// SPDX-License-Identifier: MPL-2.0
//! Canvas creation and alpha compositing.
//!
//! The blend is the classic "paste with the foreground as its own mask":
//! each color channel becomes `α·fg + (1-α)·bg` and alpha is combined
//! source-over, so an opaque canvas stays opaque. Integer arithmetic keeps
//! the result exact at α = 0 and α = 255 and makes output deterministic.

use crate::domain::compositing::{BackgroundColor, Offset};
use image_rs::{Rgba, RgbaImage};

/// Allocates a `width` x `height` canvas filled with `color`.
#[must_use]
pub fn make_canvas(width: u32, height: u32, color: BackgroundColor) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color.channels()))
}

/// Offset that centers a `foreground` of the given dimensions on `canvas`.
#[must_use]
pub fn center_offset(canvas: (u32, u32), foreground: (u32, u32)) -> Offset {
    Offset::centered(canvas, foreground)
}

/// Blends `foreground` onto `canvas` with its top-left corner at
/// (`x_offset`, `y_offset`).
///
/// Foreground pixels outside the canvas are clipped.
pub fn composite(canvas: &mut RgbaImage, foreground: &RgbaImage, x_offset: i64, y_offset: i64) {
    let (canvas_width, canvas_height) = canvas.dimensions();
    let (fg_width, fg_height) = foreground.dimensions();

    let x_start = x_offset.max(0);
    let y_start = y_offset.max(0);
    let x_end = (x_offset + i64::from(fg_width)).min(i64::from(canvas_width));
    let y_end = (y_offset + i64::from(fg_height)).min(i64::from(canvas_height));
    if x_start >= x_end || y_start >= y_end {
        log::debug!("Foreground at ({x_offset}, {y_offset}) lies outside the canvas");
        return;
    }

    for y in y_start..y_end {
        for x in x_start..x_end {
            // Both ranges are clipped to [0, canvas) and [offset, offset + fg),
            // so every coordinate fits in u32.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let (canvas_x, canvas_y, fg_x, fg_y) = (
                x as u32,
                y as u32,
                (x - x_offset) as u32,
                (y - y_offset) as u32,
            );
            let source = *foreground.get_pixel(fg_x, fg_y);
            let target = canvas.get_pixel_mut(canvas_x, canvas_y);
            *target = blend_pixel(source, *target);
        }
    }
}

/// Blends one straight-alpha pixel over another.
#[must_use]
pub fn blend_pixel(foreground: Rgba<u8>, background: Rgba<u8>) -> Rgba<u8> {
    let alpha = u32::from(foreground[3]);
    let inverse = 255 - alpha;

    // (255 * a + 255 * (255 - a) + 127) / 255 == 255, so results fit in u8.
    #[allow(clippy::cast_possible_truncation)]
    let mix = |fg: u8, bg: u8| ((u32::from(fg) * alpha + u32::from(bg) * inverse + 127) / 255) as u8;
    #[allow(clippy::cast_possible_truncation)]
    let out_alpha = (alpha + (u32::from(background[3]) * inverse + 127) / 255) as u8;

    Rgba([
        mix(foreground[0], background[0]),
        mix(foreground[1], background[1]),
        mix(foreground[2], background[2]),
        out_alpha,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgba<u8> = Rgba([33, 33, 33, 255]);

    #[test]
    fn make_canvas_fills_every_pixel() {
        let canvas = make_canvas(3, 2, BackgroundColor::DARK_GREY);
        assert_eq!(canvas.dimensions(), (3, 2));
        assert!(canvas.pixels().all(|p| *p == GREY));
    }

    #[test]
    fn transparent_pixel_keeps_background() {
        assert_eq!(blend_pixel(Rgba([255, 0, 0, 0]), GREY), GREY);
    }

    #[test]
    fn opaque_pixel_replaces_background() {
        let red = Rgba([250, 10, 20, 255]);
        assert_eq!(blend_pixel(red, GREY), red);
    }

    #[test]
    fn half_alpha_mixes_evenly() {
        let blended = blend_pixel(Rgba([255, 255, 255, 128]), Rgba([0, 0, 0, 255]));
        // 255 * 128 / 255 = 128
        assert_eq!(blended, Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn blending_over_opaque_canvas_is_always_opaque() {
        for alpha in 0..=255u8 {
            let blended = blend_pixel(Rgba([200, 100, 0, alpha]), GREY);
            assert_eq!(blended[3], 255, "alpha {alpha}");
        }
    }

    #[test]
    fn blending_over_transparent_canvas_keeps_foreground_alpha() {
        let blended = blend_pixel(Rgba([10, 20, 30, 77]), Rgba([0, 0, 0, 0]));
        assert_eq!(blended[3], 77);
    }

    #[test]
    fn composite_at_origin_covers_matching_area() {
        let mut canvas = make_canvas(4, 4, BackgroundColor::DARK_GREY);
        let foreground = RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 255]));

        composite(&mut canvas, &foreground, 0, 0);

        for (x, y, pixel) in canvas.enumerate_pixels() {
            let expected = if x < 2 && y < 2 {
                Rgba([0, 255, 0, 255])
            } else {
                GREY
            };
            assert_eq!(*pixel, expected, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn composite_with_offset_places_foreground() {
        let mut canvas = make_canvas(5, 5, BackgroundColor::DARK_GREY);
        let foreground = RgbaImage::from_pixel(1, 1, Rgba([9, 9, 9, 255]));

        composite(&mut canvas, &foreground, 3, 1);

        assert_eq!(*canvas.get_pixel(3, 1), Rgba([9, 9, 9, 255]));
        assert_eq!(canvas.pixels().filter(|p| **p != GREY).count(), 1);
    }

    #[test]
    fn composite_clips_negative_offsets() {
        let mut canvas = make_canvas(4, 4, BackgroundColor::DARK_GREY);
        let foreground = RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8, y as u8, 0, 255]));

        composite(&mut canvas, &foreground, -2, -3);

        // Foreground (2, 3) lands on canvas (0, 0).
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([2, 3, 0, 255]));
        assert_eq!(*canvas.get_pixel(1, 0), Rgba([3, 3, 0, 255]));
        assert_eq!(*canvas.get_pixel(0, 1), GREY);
        assert_eq!(*canvas.get_pixel(2, 0), GREY);
    }

    #[test]
    fn composite_clips_past_right_and_bottom_edges() {
        let mut canvas = make_canvas(3, 3, BackgroundColor::DARK_GREY);
        let foreground = RgbaImage::from_pixel(5, 5, Rgba([255, 255, 255, 255]));

        composite(&mut canvas, &foreground, 1, 1);

        assert_eq!(*canvas.get_pixel(0, 0), GREY);
        assert_eq!(*canvas.get_pixel(2, 2), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn composite_entirely_outside_is_noop() {
        let mut canvas = make_canvas(3, 3, BackgroundColor::DARK_GREY);
        let foreground = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));

        composite(&mut canvas, &foreground, 10, 0);
        composite(&mut canvas, &foreground, -2, 0);

        assert!(canvas.pixels().all(|p| *p == GREY));
    }

    #[test]
    fn center_offset_uses_floor_division() {
        assert_eq!(center_offset((1024, 1024), (880, 880)), Offset::new(72, 72));
        assert_eq!(center_offset((10, 10), (3, 4)), Offset::new(3, 3));
    }
}
