//! Rounded-corner alpha masks.

use image::{GrayImage, Luma, RgbaImage};

/// Samples per pixel axis when measuring arc coverage.
const SUPERSAMPLE: u32 = 4;

/// Build a mask that is opaque inside a rounded rectangle covering the whole
/// `width × height` area and transparent outside it.
///
/// Pixels cut by an arc get partial coverage so the edge is anti-aliased. The
/// radius is clamped to half the shorter side; a radius of 0 yields a fully
/// opaque mask.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::from_pixel(width, height, Luma([u8::MAX]));

    let (w, h) = (width as f32, height as f32);
    let r = (radius as f32).min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        return mask;
    }

    let span = r.ceil() as u32;
    let samples = SUPERSAMPLE * SUPERSAMPLE;

    for y in 0..height {
        let in_band_y = y < span || y >= height.saturating_sub(span);
        if !in_band_y {
            continue;
        }
        for x in 0..width {
            let in_band_x = x < span || x >= width.saturating_sub(span);
            if !in_band_x {
                continue;
            }

            let mut covered = 0;
            for sy in 0..SUPERSAMPLE {
                let py = y as f32 + (sy as f32 + 0.5) / SUPERSAMPLE as f32;
                let dy = (r - py).max(py - (h - r)).max(0.0);
                for sx in 0..SUPERSAMPLE {
                    let px = x as f32 + (sx as f32 + 0.5) / SUPERSAMPLE as f32;
                    let dx = (r - px).max(px - (w - r)).max(0.0);
                    if dx * dx + dy * dy <= r * r {
                        covered += 1;
                    }
                }
            }

            let alpha = (covered * u32::from(u8::MAX) + samples / 2) / samples;
            mask.put_pixel(x, y, Luma([alpha as u8]));
        }
    }

    // Small radii leave inner subsamples of the corner pixel inside the arc;
    // the outermost pixel is always cut.
    let (right, bottom) = (width.saturating_sub(1), height.saturating_sub(1));
    for (x, y) in [(0, 0), (right, 0), (0, bottom), (right, bottom)] {
        if x < width && y < height {
            mask.put_pixel(x, y, Luma([0]));
        }
    }

    mask
}

/// Replace the alpha channel of `image` with `mask`.
///
/// Both must have the same dimensions.
pub fn apply_mask(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(image.dimensions(), mask.dimensions());
    for (pixel, coverage) in image.pixels_mut().zip(mask.pixels()) {
        pixel[3] = coverage[0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_corners_transparent_centre_opaque() {
        let mask = rounded_mask(100, 60, 20);
        for (x, y) in [(0, 0), (99, 0), (0, 59), (99, 59)] {
            assert_eq!(mask.get_pixel(x, y)[0], 0, "corner ({x}, {y})");
        }
        assert_eq!(mask.get_pixel(50, 30)[0], 255);
        // Straight edges between the arcs stay opaque
        assert_eq!(mask.get_pixel(50, 0)[0], 255);
        assert_eq!(mask.get_pixel(0, 30)[0], 255);
    }

    #[test]
    fn test_small_radii_cut_corners() {
        for radius in 1..=5 {
            let mask = rounded_mask(100, 60, radius);
            for (x, y) in [(0, 0), (99, 0), (0, 59), (99, 59)] {
                assert_eq!(mask.get_pixel(x, y)[0], 0, "radius {radius} corner ({x}, {y})");
            }
            assert_eq!(mask.get_pixel(50, 30)[0], 255);
            assert_eq!(mask.get_pixel(50, 0)[0], 255);
        }
    }

    #[test]
    fn test_arc_is_antialiased() {
        let mask = rounded_mask(100, 60, 20);
        let partial = (0..20)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .any(|(x, y)| {
                let a = mask.get_pixel(x, y)[0];
                a > 0 && a < 255
            });
        assert!(partial);
    }

    #[test]
    fn test_mask_is_symmetric() {
        let mask = rounded_mask(64, 40, 12);
        for y in 0..40 {
            for x in 0..64 {
                assert_eq!(mask.get_pixel(x, y), mask.get_pixel(63 - x, y));
                assert_eq!(mask.get_pixel(x, y), mask.get_pixel(x, 39 - y));
            }
        }
    }

    #[test]
    fn test_zero_radius_is_opaque() {
        let mask = rounded_mask(10, 10, 0);
        assert!(mask.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_radius_clamped_to_short_side() {
        let mask = rounded_mask(40, 20, 500);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(20, 10)[0], 255);
        assert_eq!(mask.get_pixel(20, 0)[0], 255);
    }

    #[test]
    fn test_apply_mask_replaces_alpha() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([10, 20, 30, 255]));
        let mask = rounded_mask(10, 10, 4);
        apply_mask(&mut img, &mask);
        assert_eq!(*img.get_pixel(0, 0), Rgba([10, 20, 30, 0]));
        assert_eq!(*img.get_pixel(5, 5), Rgba([10, 20, 30, 255]));
    }
}
