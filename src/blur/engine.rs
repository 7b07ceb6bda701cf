use image::{GenericImage, GenericImageView, Rgba};
use itertools::iproduct;
use tracing::debug;

use super::kernel::BlurPlan;
use super::options::BlurOptions;
use super::pass::blur_rows;
use super::plane::Plane;
use crate::error::BlurError;
use crate::utils::validate_matching_dimensions;
use crate::Image;

/// Blurs `src` into `dst` with an approximate Gaussian of `options.std_dev`.
///
/// Each axis runs `options.effective_passes()` box passes, sized per pass so
/// their combined variance stays at or below `std_dev^2`, plus one short
/// sampled Gaussian pass for the remainder. Passes work on premultiplied
/// samples, horizontally first, with clamp-to-edge boundaries.
///
/// # Errors
///
/// * `BlurError::InvalidParameter` if `std_dev` is negative or not finite
/// * `BlurError::DimensionMismatch` if `dst` and `src` differ in size
///
/// `dst` is left untouched on error.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use quickblur::{blur, BlurOptions, Image};
///
/// # fn main() -> Result<(), quickblur::BlurError> {
/// let src: Image<Rgba<u8>> = Image::from_pixel(8, 8, Rgba([10, 20, 30, 255]));
/// let mut dst: Image<Rgba<u8>> = Image::new(8, 8);
/// blur(&mut dst, &src, &BlurOptions::new(1.1))?;
/// assert_eq!(dst, src);
/// # Ok(())
/// # }
/// ```
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(std_dev = options.std_dev, passes = options.effective_passes())
)]
pub fn blur<O, I>(dst: &mut O, src: &I, options: &BlurOptions) -> Result<(), BlurError>
where
    O: GenericImage<Pixel = Rgba<u8>>,
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    options.validate()?;
    validate_matching_dimensions(src.dimensions(), dst.dimensions())?;

    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return Ok(());
    }

    let Some(plan) = BlurPlan::from_options(options) else {
        for (y, x) in iproduct!(0..height, 0..width) {
            dst.put_pixel(x, y, src.get_pixel(x, y));
        }
        return Ok(());
    };

    debug!(kernels = ?plan.kernels(), reach = plan.radius(), width, height, "blurring");
    blur_plane(Plane::from_image(src), &plan).write_to(dst);
    Ok(())
}

/// Horizontal passes, then vertical passes on the transposed plane.
fn blur_plane(plane: Plane, plan: &BlurPlan) -> Plane {
    let horizontal = blur_rows(plane, plan.kernels());
    blur_rows(horizontal.transpose(), plan.kernels()).transpose()
}

/// Trait for applying an approximate Gaussian blur to an owned RGBA image.
pub trait GaussianBlurExt {
    type Output;

    /// Returns a blurred copy of the image.
    ///
    /// # Examples
    /// ```
    /// use image::Rgba;
    /// use quickblur::{BlurOptions, GaussianBlurExt, Image};
    ///
    /// # fn main() -> Result<(), quickblur::BlurError> {
    /// let image: Image<Rgba<u8>> = Image::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
    /// let blurred = image.gaussian_blur(&BlurOptions::new(0.83).with_passes(2))?;
    /// assert_eq!(blurred.dimensions(), (4, 4));
    /// # Ok(())
    /// # }
    /// ```
    fn gaussian_blur(&self, options: &BlurOptions) -> Result<Self::Output, BlurError>;

    /// Blurs the image in place.
    fn gaussian_blur_mut(&mut self, options: &BlurOptions) -> Result<&mut Self, BlurError>
    where
        Self: Sized;
}

impl GaussianBlurExt for Image<Rgba<u8>> {
    type Output = Self;

    fn gaussian_blur(&self, options: &BlurOptions) -> Result<Self::Output, BlurError> {
        let (width, height) = self.dimensions();
        let mut output = Image::new(width, height);
        blur(&mut output, self, options)?;
        Ok(output)
    }

    fn gaussian_blur_mut(&mut self, options: &BlurOptions) -> Result<&mut Self, BlurError> {
        options.validate()?;
        if self.width() == 0 || self.height() == 0 {
            return Ok(self);
        }
        if let Some(plan) = BlurPlan::from_options(options) {
            debug!(kernels = ?plan.kernels(), reach = plan.radius(), "blurring in place");
            blur_plane(Plane::from_image(&*self), &plan).write_to(self);
        }
        Ok(self)
    }
}
