//! Pixel-buffer effect filters.
//!
//! Every filter takes one or more [`PixelBuffer`](crate::PixelBuffer)s by
//! reference, validates them, and returns a freshly allocated result:
//!
//! - [`grayscale`] - BT.601 luminance, alpha preserved
//! - [`gaussian_blur`] / [`gaussian_blur_double`] - separable Gaussian blur
//!   with replicated edges
//! - [`resample`] / [`scale`] - bilinear resize
//! - [`screen_blend`] - screen compositing weighted by an alpha value
//!
//! The filters are the building blocks of the pipelines in
//! [`crate::pipeline`].

mod blur;
mod composite;
mod grayscale;
mod resample;

pub use blur::{build_kernel, gaussian_blur, gaussian_blur_double, MAX_BLUR_RADIUS};
pub use composite::{screen_blend, screen_channel};
pub use grayscale::grayscale;
pub use resample::{resample, scale};

/// Run `f(row_index, row)` over each `row_len`-sized chunk of `out`.
///
/// Rows are independent, so with the `parallel` feature they are spread
/// across the rayon pool.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_row<T, F>(out: &mut [T], row_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    use rayon::prelude::*;

    out.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_row<T, F>(out: &mut [T], row_len: usize, f: F)
where
    F: Fn(usize, &mut [T]),
{
    out.chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_row_visits_every_row() {
        let mut data = vec![0u32; 12];
        for_each_row(&mut data, 4, |y, row| {
            for v in row.iter_mut() {
                *v = y as u32 + 1;
            }
        });
        assert_eq!(data, vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
    }
}
