use maskblur_image::{Image, ImageError};
use rayon::prelude::*;

use crate::parallel::ExecutionStrategy;

/// Trait for floating point casting of pixel types.
pub trait PixelCast {
    /// Convert the type to f32
    fn to_f32(&self) -> f32;
    /// Convert the type from f32
    fn from_f32(val: f32) -> Self;
}

impl PixelCast for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }

    fn from_f32(val: f32) -> Self {
        val
    }
}

impl PixelCast for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }

    fn from_f32(val: f32) -> Self {
        val as f64
    }
}

impl PixelCast for u8 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }

    fn from_f32(val: f32) -> Self {
        val.round().clamp(0.0, 255.0) as u8
    }
}

/// A separable 2D filter that applies horizontal and vertical 1D convolutions sequentially.
///
/// Caches the kernel data and precomputed tap offsets. Samples outside the
/// image are clamped to the nearest edge pixel, so a normalized kernel maps a
/// constant image to itself.
struct SeparableFilter {
    kernel_x: Vec<f32>,
    kernel_y: Vec<f32>,
    offsets_x: Vec<isize>,
    offsets_y: Vec<isize>,
}

impl SeparableFilter {
    /// Create a new separable filter with the given kernels.
    ///
    /// # Arguments
    ///
    /// * `kernel_x` - The horizontal convolution kernel
    /// * `kernel_y` - The vertical convolution kernel
    fn new(kernel_x: &[f32], kernel_y: &[f32]) -> Self {
        let half_x = kernel_x.len() / 2;
        let half_y = kernel_y.len() / 2;

        let offsets_x = (0..kernel_x.len())
            .map(|i| i as isize - half_x as isize)
            .collect();

        let offsets_y = (0..kernel_y.len())
            .map(|i| i as isize - half_y as isize)
            .collect();

        Self {
            kernel_x: kernel_x.to_vec(),
            kernel_y: kernel_y.to_vec(),
            offsets_x,
            offsets_y,
        }
    }

    /// Apply the filter to an image with execution strategy control.
    ///
    /// Performs horizontal filtering followed by vertical filtering using a
    /// temporary f32 buffer.
    ///
    /// # Arguments
    ///
    /// * `src` - The source image
    /// * `dst` - The destination image (must be same size as source)
    /// * `strategy` - The execution strategy (Serial, Parallel, or Auto)
    fn apply<T, const C: usize>(
        &self,
        src: &Image<T, C>,
        dst: &mut Image<T, C>,
        strategy: ExecutionStrategy,
    ) -> Result<(), ImageError>
    where
        T: PixelCast + Clone + Send + Sync,
    {
        let rows = src.rows();
        let cols = src.cols();
        let num_pixels = rows * cols;

        // degenerate images have no pixels to filter; the parallel path
        // chunks by row width and requires a non-zero chunk size
        if num_pixels == 0 {
            return Ok(());
        }

        let src_data = src.as_slice();
        let dst_data = dst.as_slice_mut();
        let mut temp = vec![0.0f32; src_data.len()];

        if strategy.is_parallel(num_pixels) {
            self.apply_parallel::<T, C>(&mut temp, src_data, dst_data, rows, cols)
        } else {
            self.apply_serial::<T, C>(&mut temp, src_data, dst_data, rows, cols)
        }
    }

    fn apply_serial<T, const C: usize>(
        &self,
        temp: &mut [f32],
        src_data: &[T],
        dst_data: &mut [T],
        rows: usize,
        cols: usize,
    ) -> Result<(), ImageError>
    where
        T: PixelCast + Clone,
    {
        // Horizontal
        for r in 0..rows {
            let row_offset = r * cols * C;
            for c in 0..cols {
                let mut acc = [0.0f32; C];
                for (&k, &off) in self.kernel_x.iter().zip(self.offsets_x.iter()) {
                    let x = (c as isize + off).clamp(0, cols as isize - 1) as usize;
                    let idx = row_offset + x * C;
                    for (ch, acc_val) in acc.iter_mut().enumerate().take(C) {
                        *acc_val += unsafe { src_data.get_unchecked(idx + ch).to_f32() } * k;
                    }
                }

                let out_idx = row_offset + c * C;
                for (ch, &acc_val) in acc.iter().enumerate().take(C) {
                    unsafe {
                        *temp.get_unchecked_mut(out_idx + ch) = acc_val;
                    }
                }
            }
        }

        // Vertical
        for r in 0..rows {
            let row_offset = r * cols * C;

            for c in 0..cols {
                let mut acc = [0.0f32; C];

                for (&k, &off) in self.kernel_y.iter().zip(self.offsets_y.iter()) {
                    let y = (r as isize + off).clamp(0, rows as isize - 1) as usize;
                    let idx = y * cols * C + c * C;
                    for (ch, acc_val) in acc.iter_mut().enumerate().take(C) {
                        *acc_val += unsafe { *temp.get_unchecked(idx + ch) } * k;
                    }
                }

                let out_idx = row_offset + c * C;
                for (ch, &acc_val) in acc.iter().enumerate().take(C) {
                    unsafe {
                        *dst_data.get_unchecked_mut(out_idx + ch) = T::from_f32(acc_val);
                    }
                }
            }
        }

        Ok(())
    }

    fn apply_parallel<T, const C: usize>(
        &self,
        temp: &mut [f32],
        src_data: &[T],
        dst_data: &mut [T],
        rows: usize,
        cols: usize,
    ) -> Result<(), ImageError>
    where
        T: PixelCast + Clone + Send + Sync,
    {
        // Horizontal (parallel)
        temp.par_chunks_mut(cols * C)
            .enumerate()
            .for_each(|(r, row_temp)| {
                let row_offset = r * cols * C;

                for c in 0..cols {
                    let mut acc = [0.0f32; C];
                    for (&k, &off) in self.kernel_x.iter().zip(self.offsets_x.iter()) {
                        let x = (c as isize + off).clamp(0, cols as isize - 1) as usize;
                        let idx = row_offset + x * C;
                        for (ch, acc_val) in acc.iter_mut().enumerate().take(C) {
                            *acc_val += unsafe { src_data.get_unchecked(idx + ch).to_f32() } * k;
                        }
                    }

                    let out_idx = c * C;
                    for (ch, &acc_val) in acc.iter().enumerate().take(C) {
                        unsafe {
                            *row_temp.get_unchecked_mut(out_idx + ch) = acc_val;
                        }
                    }
                }
            });

        // Vertical (parallel)
        let temp = &*temp;
        dst_data
            .par_chunks_mut(cols * C)
            .enumerate()
            .for_each(|(r, row_dst)| {
                for c in 0..cols {
                    let mut acc = [0.0f32; C];
                    for (&k, &off) in self.kernel_y.iter().zip(self.offsets_y.iter()) {
                        let y = (r as isize + off).clamp(0, rows as isize - 1) as usize;
                        let idx = y * cols * C + c * C;
                        for (ch, acc_val) in acc.iter_mut().enumerate().take(C) {
                            *acc_val += unsafe { *temp.get_unchecked(idx + ch) } * k;
                        }
                    }

                    let out_idx = c * C;
                    for (ch, &acc_val) in acc.iter().enumerate().take(C) {
                        unsafe {
                            *row_dst.get_unchecked_mut(out_idx + ch) = T::from_f32(acc_val);
                        }
                    }
                }
            });
        Ok(())
    }
}

/// Apply a separable filter with execution strategy control.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
pub fn separable_filter_with_strategy<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_x: &[f32],
    kernel_y: &[f32],
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: PixelCast + Clone + Send + Sync,
{
    if kernel_x.is_empty() || kernel_y.is_empty() {
        return Err(ImageError::InvalidKernelLength(
            kernel_x.len(),
            kernel_y.len(),
        ));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let filter = SeparableFilter::new(kernel_x, kernel_y);
    filter.apply(src, dst, strategy)
}

/// Apply a separable filter to an image.
///
/// Uses `ExecutionStrategy::Auto` (parallel for images >=100K pixels, serial
/// otherwise). For explicit control, use [`separable_filter_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
pub fn separable_filter<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_x: &[f32],
    kernel_y: &[f32],
) -> Result<(), ImageError>
where
    T: PixelCast + Clone + Send + Sync,
{
    separable_filter_with_strategy(src, dst, kernel_x, kernel_y, ExecutionStrategy::Auto)
}
