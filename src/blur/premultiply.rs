use image::Rgba;

/// Fractional bits of the fixed-point channel values used while filtering.
pub const FRACTION_BITS: u32 = 12;

/// Fixed-point representation of one 8-bit step.
pub const FIXED_ONE: u32 = 1 << FRACTION_BITS;

/// A premultiplied RGBA sample in fixed point, each channel in `0..=255 * FIXED_ONE`.
pub type FixedRgba = [u32; 4];

/// Converts a straight-alpha pixel to premultiplied fixed point.
///
/// Colour channels are scaled by `alpha / 255`, so fully transparent pixels
/// carry no colour weight into the convolution.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use quickblur::{premultiply, FIXED_ONE};
///
/// assert_eq!(premultiply(Rgba([255, 0, 0, 0])), [0, 0, 0, 0]);
/// assert_eq!(premultiply(Rgba([10, 20, 30, 255]))[0], 10 * FIXED_ONE);
/// ```
#[inline]
pub fn premultiply(pixel: Rgba<u8>) -> FixedRgba {
    let Rgba([red, green, blue, alpha]) = pixel;
    let alpha = u32::from(alpha);
    let scale = |channel: u8| (u32::from(channel) * alpha * FIXED_ONE + 127) / 255;
    [scale(red), scale(green), scale(blue), alpha * FIXED_ONE]
}

/// Converts a premultiplied fixed-point sample back to a straight-alpha pixel.
///
/// Alpha is rounded to the nearest 8-bit value. A pixel whose alpha rounds to
/// zero comes back fully transparent black; otherwise each colour channel is
/// divided by the alpha, rounded, and clamped to 255.
#[inline]
pub fn unpremultiply(sample: FixedRgba) -> Rgba<u8> {
    let [red, green, blue, alpha] = sample;
    let alpha8 = ((alpha + FIXED_ONE / 2) >> FRACTION_BITS).min(255);
    if alpha8 == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let alpha = u64::from(alpha);
    let restore = |channel: u32| {
        let value = (u64::from(channel) * 255 + alpha / 2) / alpha;
        value.min(255) as u8
    };
    Rgba([restore(red), restore(green), restore(blue), alpha8 as u8])
}
