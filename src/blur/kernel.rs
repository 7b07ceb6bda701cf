//! Per-pass kernel derivation.
//!
//! `passes` box blurs of widths `w_i` have a combined variance of
//! `sum((w_i^2 - 1) / 12)`. The ideal (real-valued) width is split between the
//! two nearest odd widths `wl` and `wu = wl + 2`, with as many passes at `wl`
//! as keep the total variance at or below `std_dev^2`.
//!
//! Whatever variance the boxes leave uncovered is added by one short sampled
//! Gaussian pass. For sub-pixel deviations every box has width one, so that
//! sampled pass is the whole blur.

use super::options::BlurOptions;

/// Fractional bits of the fixed-point weights of a sampled kernel.
pub const WEIGHT_BITS: u32 = 16;

/// Fixed-point representation of a total weight of one.
pub const WEIGHT_ONE: u32 = 1 << WEIGHT_BITS;

/// Upper bound on the standard deviation of the residual sampled pass.
const MAX_RESIDUAL_STD_DEV: f64 = 8.0;

/// A one-dimensional kernel applied by a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassKernel {
    /// Unweighted mean over `2 * radius + 1` samples.
    Box { radius: u32 },
    /// Symmetric fixed-point weights summing exactly to [`WEIGHT_ONE`].
    /// The length is always odd, with the centre tap in the middle.
    Sampled { weights: Vec<u32> },
}

impl PassKernel {
    /// Reach of the kernel on each side of the centre sample.
    pub fn radius(&self) -> u32 {
        match self {
            Self::Box { radius } => *radius,
            Self::Sampled { weights } => (weights.len() / 2) as u32,
        }
    }

    /// Variance of the kernel in square pixels.
    pub fn variance(&self) -> f64 {
        match self {
            Self::Box { radius } => box_variance(*radius),
            Self::Sampled { weights } => {
                let radius = (weights.len() / 2) as f64;
                weights
                    .iter()
                    .enumerate()
                    .map(|(i, &w)| f64::from(w) * (i as f64 - radius).powi(2))
                    .sum::<f64>()
                    / f64::from(WEIGHT_ONE)
            }
        }
    }
}

/// The sequence of passes run along each axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlurPlan {
    kernels: Vec<PassKernel>,
}

impl BlurPlan {
    /// Derives the passes for `options`, or `None` when the blur is the identity.
    ///
    /// The options are expected to be validated already.
    pub fn from_options(options: &BlurOptions) -> Option<Self> {
        if options.is_identity() {
            return None;
        }

        let std_dev = options.std_dev;
        let radii = box_radii(std_dev, options.effective_passes());
        let covered: f64 = radii.iter().map(|&r| box_variance(r)).sum();

        // 幅1の箱は恒等変換なので省く
        let mut kernels: Vec<PassKernel> = radii
            .into_iter()
            .filter(|&radius| radius > 0)
            .map(|radius| PassKernel::Box { radius })
            .collect();

        let residual = (std_dev * std_dev - covered).min(MAX_RESIDUAL_STD_DEV.powi(2));
        if residual > 0.0 {
            let residual_std_dev = residual.sqrt();
            let radius = ((3.0 * residual_std_dev).ceil() as u32).max(1);
            let weights = sampled_gaussian(residual_std_dev, radius);
            if weights[radius as usize] != WEIGHT_ONE {
                kernels.push(PassKernel::Sampled { weights });
            }
        }

        Some(Self { kernels })
    }

    pub fn kernels(&self) -> &[PassKernel] {
        &self.kernels
    }

    /// Total reach of all passes on each side of a sample.
    pub fn radius(&self) -> u64 {
        self.kernels.iter().map(|k| u64::from(k.radius())).sum()
    }

    /// Variance of the combined per-axis kernel in square pixels.
    pub fn variance(&self) -> f64 {
        self.kernels.iter().map(PassKernel::variance).sum()
    }
}

/// Variance of a box of width `2 * radius + 1`.
pub fn box_variance(radius: u32) -> f64 {
    let width = 2.0 * f64::from(radius) + 1.0;
    (width * width - 1.0) / 12.0
}

/// Per-pass box radii whose combined variance best approaches `std_dev^2`
/// from below.
///
/// Passes use the two odd widths around the ideal width, narrower first.
pub fn box_radii(std_dev: f64, passes: u32) -> Vec<u32> {
    let passes = passes.max(1);
    let n = f64::from(passes);
    let target = 12.0 * std_dev * std_dev;

    // float-to-int casts saturate; keep the widths within u32 radii
    let ideal_width = (target / n + 1.0).sqrt().min(f64::from(u32::MAX));
    let mut lower = ideal_width.floor();
    if lower % 2.0 == 0.0 {
        lower -= 1.0;
    }

    let narrow_passes =
        (target - n * lower * lower - 4.0 * n * lower - 3.0 * n) / (-4.0 * lower - 4.0);
    let narrow_passes = narrow_passes.ceil().clamp(0.0, n) as u32;

    let lower_radius = ((lower - 1.0) / 2.0) as u32;
    (0..passes)
        .map(|pass| {
            if pass < narrow_passes {
                lower_radius
            } else {
                lower_radius + 1
            }
        })
        .collect()
}

/// Normalized Gaussian of `std_dev` sampled at integer offsets `-radius..=radius`,
/// quantized to fixed point.
///
/// Rounding residue goes to the centre tap so the weights sum to exactly
/// [`WEIGHT_ONE`], which keeps uniform regions unchanged.
pub fn sampled_gaussian(std_dev: f64, radius: u32) -> Vec<u32> {
    let radius = radius as i64;
    let denominator = 2.0 * std_dev * std_dev;
    let raw: Vec<f64> = (-radius..=radius)
        .map(|offset| (-((offset * offset) as f64) / denominator).exp())
        .collect();
    let total: f64 = raw.iter().sum();

    let mut weights: Vec<u32> = raw
        .iter()
        .map(|w| (w / total * f64::from(WEIGHT_ONE)).round() as u32)
        .collect();

    let centre = radius as usize;
    let others: u32 = weights
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != centre)
        .map(|(_, w)| *w)
        .sum();
    weights[centre] = WEIGHT_ONE - others;
    weights
}
