use image::{GenericImage, GenericImageView, Rgba};
use itertools::iproduct;

use super::premultiply::{premultiply, unpremultiply, FixedRgba};

/// Row-major working buffer of premultiplied fixed-point samples.
///
/// Every pass reads one `Plane` and writes another, so a pass never observes
/// its own output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: usize,
    height: usize,
    samples: Vec<FixedRgba>,
}

impl Plane {
    /// Creates a zero-filled plane.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            samples: vec![[0; 4]; width * height],
        }
    }

    /// Reads and premultiplies every pixel of `image`.
    pub fn from_image<I>(image: &I) -> Self
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let (width, height) = image.dimensions();
        let samples = iproduct!(0..height, 0..width)
            .map(|(y, x)| premultiply(image.get_pixel(x, y)))
            .collect();
        Self {
            width: width as usize,
            height: height as usize,
            samples,
        }
    }

    /// Unpremultiplies every sample into `image`, which must have the plane's dimensions.
    pub fn write_to<O>(&self, image: &mut O)
    where
        O: GenericImage<Pixel = Rgba<u8>>,
    {
        debug_assert_eq!(
            image.dimensions(),
            (self.width as u32, self.height as u32)
        );
        for (index, sample) in self.samples.iter().enumerate() {
            let x = (index % self.width) as u32;
            let y = (index / self.width) as u32;
            image.put_pixel(x, y, unpremultiply(*sample));
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn samples(&self) -> &[FixedRgba] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [FixedRgba] {
        &mut self.samples
    }

    /// Swaps rows and columns, so a column pass can run as a row pass.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.height, self.width);
        for (y, row) in self.samples.chunks_exact(self.width.max(1)).enumerate() {
            for (x, sample) in row.iter().enumerate() {
                transposed.samples[x * self.height + y] = *sample;
            }
        }
        transposed
    }
}
