//! Test utilities for quickblur
//!
//! This module provides common functionality for testing the blur engine.
//! It is only compiled when running tests.

use image::Rgba;

use crate::Image;

/// Creates a test RGBA image with predefined pixel values for testing.
///
/// This function creates a 2x2 test image with known pixel values including alpha:
/// - (0,0): [200, 150, 100, 255] (opaque)
/// - (1,0): [100, 200, 150, 128] (semi-transparent)
/// - (0,1): [150, 100, 200, 64]  (more transparent)
/// - (1,1): [50, 75, 25, 0]      (fully transparent)
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Builds a white image whose alpha channel holds `values` in row-major order.
///
/// Premultiplied, every channel of such a pixel equals its alpha, which is the
/// layout the single-channel reference fixtures describe.
pub fn alpha_image(width: u32, height: u32, values: &[u8]) -> Image<Rgba<u8>> {
    assert_eq!(values.len(), (width * height) as usize);
    Image::from_fn(width, height, |x, y| {
        Rgba([255, 255, 255, values[(y * width + x) as usize]])
    })
}

/// Alpha channel of `image` in row-major order.
pub fn to_alpha_values(image: &Image<Rgba<u8>>) -> Vec<u8> {
    image.pixels().map(|p| p[3]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgba_image_with_valid_input_creates_image() {
        let image = create_test_rgba_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 150, 100, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([50, 75, 25, 0]));
    }

    #[test]
    fn alpha_image_round_trips_values() {
        let values = [0, 1, 2, 3, 4, 5];
        let image = alpha_image(3, 2, &values);
        assert_eq!(image.get_pixel(2, 1), &Rgba([255, 255, 255, 5]));
        assert_eq!(to_alpha_values(&image), values);
    }
}
