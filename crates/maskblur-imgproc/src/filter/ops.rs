use maskblur_image::{Image, ImageError};

use super::{kernels, separable_filter, PixelCast};

/// Blur an image using a gaussian blur filter
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The size of the kernel (kernel_x, kernel_y).
/// * `sigma` - The sigma of the gaussian kernel.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_blur<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_size: (usize, usize),
    sigma: (f32, f32),
) -> Result<(), ImageError>
where
    T: PixelCast + Clone + Send + Sync,
{
    let kernel_x = kernels::gaussian_kernel_1d(kernel_size.0, sigma.0);
    let kernel_y = kernels::gaussian_kernel_1d(kernel_size.1, sigma.1);
    separable_filter(src, dst, &kernel_x, &kernel_y)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use maskblur_image::ImageSize;

    #[test]
    fn test_gaussian_blur_constant() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 4,
        };

        let img = Image::<f32, 1>::from_size_val(size, 0.5)?;
        let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;

        gaussian_blur(&img, &mut dst, (11, 11), (7.0, 7.0))?;

        for &x in dst.as_slice() {
            assert_relative_eq!(x, 0.5, epsilon = 1e-4);
        }

        Ok(())
    }

    #[test]
    fn test_gaussian_blur_preserves_mass() -> Result<(), ImageError> {
        // a normalized kernel with edge replication cannot lose intensity on
        // a symmetric input
        let size = ImageSize {
            width: 9,
            height: 9,
        };

        let mut img = Image::<f32, 1>::from_size_val(size, 0.0)?;
        img.as_slice_mut()[4 * 9 + 4] = 81.0;

        let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;
        gaussian_blur(&img, &mut dst, (3, 3), (0.8, 0.8))?;

        let sum = dst.as_slice().iter().sum::<f32>();
        assert_relative_eq!(sum, 81.0, epsilon = 1e-3);

        Ok(())
    }
}
