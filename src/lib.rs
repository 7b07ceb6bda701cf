//! Fast approximate Gaussian blur for RGBA images.
//!
//! The blur runs a configurable number of one-dimensional box passes per axis
//! over premultiplied fixed-point samples, with clamp-to-edge boundaries.
//! A short sampled Gaussian pass makes up whatever variance the boxes leave
//! out, and is the whole blur for sub-pixel deviations.

mod blur;
mod error;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use blur::engine::{blur, GaussianBlurExt};
pub use blur::kernel::{
    box_radii, box_variance, sampled_gaussian, BlurPlan, PassKernel, WEIGHT_BITS, WEIGHT_ONE,
};
pub use blur::options::{BlurOptions, DEFAULT_PASSES};
pub use blur::premultiply::{premultiply, unpremultiply, FixedRgba, FIXED_ONE, FRACTION_BITS};
pub use error::BlurError;

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
