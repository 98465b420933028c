/// Create a gaussian blur kernel.
///
/// The kernel is sampled from a 1-D Gaussian and normalized so that its
/// coefficients sum to one.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_kernel_1d() {
        let kernel = gaussian_kernel_1d(11, 7.0);
        assert_eq!(kernel.len(), 11);

        // normalized
        assert_relative_eq!(kernel.iter().sum::<f32>(), 1.0, epsilon = 1e-5);

        // symmetric around the center tap
        for i in 0..5 {
            assert_relative_eq!(kernel[i], kernel[10 - i], epsilon = 1e-6);
        }

        // the center tap is the largest
        let center = kernel[5];
        assert!(kernel.iter().all(|&k| k <= center));
    }

    #[test]
    fn test_gaussian_kernel_1d_single_tap() {
        let kernel = gaussian_kernel_1d(1, 7.0);
        assert_eq!(kernel, vec![1.0]);
    }
}
