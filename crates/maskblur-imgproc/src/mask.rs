use maskblur_image::{Image, ImageError};
use num_traits::Zero;
use rayon::prelude::*;

/// Copy the source image into the destination where the mask is non-zero.
///
/// The mask is a binary image where the value 0 is considered as False and
/// any other value is considered as True. Pixels where the mask is zero are
/// written as zero in the destination, so the destination does not need to be
/// pre-initialized.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image.
/// * `mask` - The binary mask to apply to the image.
///
/// # Example
///
/// ```
/// use maskblur_image::{Image, ImageSize};
/// use maskblur_imgproc::mask::copy_masked;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0, 1, 2, 253, 254, 255, 128, 129, 130, 64, 65, 66],
/// ).unwrap();
///
/// let mask = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![255, 0, 255, 0],
/// ).unwrap();
///
/// let mut output = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// copy_masked(&image, &mut output, &mask).unwrap();
///
/// assert_eq!(output.as_slice(), &[0, 1, 2, 0, 0, 0, 128, 129, 130, 0, 0, 0]);
/// ```
pub fn copy_masked<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    mask: &Image<u8, 1>,
) -> Result<(), ImageError>
where
    T: Copy + Zero + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if src.size() != mask.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            mask.cols(),
            mask.rows(),
        ));
    }

    let cols = src.cols();

    // degenerate images have nothing to copy; the chunked iteration below
    // requires a non-zero chunk size
    if cols == 0 || src.rows() == 0 {
        return Ok(());
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .zip(src.as_slice().par_chunks_exact(cols * C))
        .zip(mask.as_slice().par_chunks_exact(cols))
        .for_each(|((dst_row, src_row), mask_row)| {
            dst_row
                .chunks_exact_mut(C)
                .zip(src_row.chunks_exact(C))
                .zip(mask_row.iter())
                .for_each(|((dst_pix, src_pix), &m)| {
                    if m != 0 {
                        dst_pix.copy_from_slice(src_pix);
                    } else {
                        dst_pix.fill(T::zero());
                    }
                });
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskblur_image::ImageSize;

    #[test]
    fn test_copy_masked() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };

        let image = Image::<u8, 1>::new(size, vec![10, 20, 30, 40])?;
        let mask = Image::<u8, 1>::new(size, vec![1, 0, 255, 0])?;

        let mut output = Image::<u8, 1>::from_size_val(size, 99)?;
        copy_masked(&image, &mut output, &mask)?;

        // masked-out pixels are overwritten with zero, not left untouched
        assert_eq!(output.as_slice(), &[10, 0, 30, 0]);

        Ok(())
    }

    #[test]
    fn test_copy_masked_binary_selection() -> Result<(), ImageError> {
        // mask magnitude does not scale the output
        let size = ImageSize {
            width: 2,
            height: 1,
        };

        let image = Image::<u8, 1>::new(size, vec![200, 200])?;
        let mask = Image::<u8, 1>::new(size, vec![1, 255])?;

        let mut output = Image::<u8, 1>::from_size_val(size, 0)?;
        copy_masked(&image, &mut output, &mask)?;

        assert_eq!(output.as_slice(), &[200, 200]);

        Ok(())
    }

    #[test]
    fn test_copy_masked_rgb() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };

        let image = Image::<u8, 3>::new(size, vec![1, 2, 3, 4, 5, 6])?;
        let mask = Image::<u8, 1>::new(size, vec![0, 7])?;

        let mut output = Image::<u8, 3>::from_size_val(size, 0)?;
        copy_masked(&image, &mut output, &mask)?;

        assert_eq!(output.as_slice(), &[0, 0, 0, 4, 5, 6]);

        Ok(())
    }

    #[test]
    fn test_copy_masked_zero_width() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 0,
            height: 2,
        };

        let image = Image::<u8, 1>::from_size_val(size, 0)?;
        let mask = Image::<u8, 1>::from_size_val(size, 0)?;

        let mut output = Image::<u8, 1>::from_size_val(size, 0)?;
        copy_masked(&image, &mut output, &mask)?;
        assert!(output.as_slice().is_empty());

        Ok(())
    }

    #[test]
    fn test_copy_masked_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mask = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;

        let mut output = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        let result = copy_masked(&image, &mut output, &mask);
        assert!(matches!(result, Err(ImageError::InvalidImageSize(..))));

        Ok(())
    }
}
