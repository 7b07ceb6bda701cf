use super::kernel::{PassKernel, WEIGHT_BITS, WEIGHT_ONE};
use super::plane::Plane;
use super::premultiply::FixedRgba;

/// Runs one row pass per kernel over `plane`, in order.
///
/// Two buffers ping-pong: each pass reads `current` and writes `scratch`,
/// then the roles swap.
pub fn blur_rows(plane: Plane, kernels: &[PassKernel]) -> Plane {
    let mut current = plane;
    let mut scratch = Plane::new(current.width(), current.height());
    for kernel in kernels {
        apply_rows(&current, &mut scratch, kernel);
        std::mem::swap(&mut current, &mut scratch);
    }
    current
}

/// Applies one pass to every row of `source`, writing `target`.
fn apply_rows(source: &Plane, target: &mut Plane, kernel: &PassKernel) {
    let width = source.width();
    if width == 0 {
        return;
    }

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        target
            .samples_mut()
            .par_chunks_mut(width)
            .zip(source.samples().par_chunks(width))
            .for_each(|(out, row)| filter_row(row, out, kernel));
    }

    #[cfg(not(feature = "rayon"))]
    {
        target
            .samples_mut()
            .chunks_mut(width)
            .zip(source.samples().chunks(width))
            .for_each(|(out, row)| filter_row(row, out, kernel));
    }
}

fn filter_row(row: &[FixedRgba], out: &mut [FixedRgba], kernel: &PassKernel) {
    match kernel {
        PassKernel::Box { radius } => box_row(row, out, *radius),
        PassKernel::Sampled { weights } => sampled_row(row, out, weights),
    }
}

/// Clamp-to-edge index into a row of `len` samples.
#[inline]
fn clamp_index(index: i64, len: usize) -> usize {
    index.clamp(0, len as i64 - 1) as usize
}

#[inline]
fn accumulate(sum: &mut [u64; 4], sample: &FixedRgba, times: u64) {
    for (total, &channel) in sum.iter_mut().zip(sample) {
        *total += u64::from(channel) * times;
    }
}

/// Box pass with a running sum: O(len) per row regardless of `radius`.
pub(crate) fn box_row(row: &[FixedRgba], out: &mut [FixedRgba], radius: u32) {
    let len = row.len();
    if len == 0 {
        return;
    }
    let last = len - 1;
    let radius = u64::from(radius);
    let window = 2 * radius + 1;

    // 窓の初期値: -r..=0 は左端に、last を超える分は右端に丸める
    let mut sum = [0u64; 4];
    accumulate(&mut sum, &row[0], radius + 1);
    let inside = radius.min(last as u64) as usize;
    for sample in &row[1..=inside] {
        accumulate(&mut sum, sample, 1);
    }
    accumulate(&mut sum, &row[last], radius - inside as u64);

    let radius = radius as i64;
    for (i, target) in out.iter_mut().enumerate() {
        for (channel, total) in target.iter_mut().zip(&sum) {
            *channel = ((total + window / 2) / window) as u32;
        }

        // 窓を1つ右へずらす
        let i = i as i64;
        let entering = &row[clamp_index(i + radius + 1, len)];
        let leaving = &row[clamp_index(i - radius, len)];
        for ((total, &add), &remove) in sum.iter_mut().zip(entering).zip(leaving) {
            *total = *total + u64::from(add) - u64::from(remove);
        }
    }
}

/// Fixed-point convolution with a short symmetric kernel.
pub(crate) fn sampled_row(row: &[FixedRgba], out: &mut [FixedRgba], weights: &[u32]) {
    let len = row.len();
    let radius = (weights.len() / 2) as i64;

    for (i, target) in out.iter_mut().enumerate() {
        let mut sum = [0u64; 4];
        for (k, &weight) in weights.iter().enumerate() {
            let sample = &row[clamp_index(i as i64 + k as i64 - radius, len)];
            accumulate(&mut sum, sample, u64::from(weight));
        }
        for (channel, total) in target.iter_mut().zip(&sum) {
            *channel = ((total + u64::from(WEIGHT_ONE / 2)) >> WEIGHT_BITS) as u32;
        }
    }
}
