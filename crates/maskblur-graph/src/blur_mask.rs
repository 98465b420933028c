use log::debug;

use maskblur_image::Image;
use maskblur_imgproc::filter::gaussian_blur;
use maskblur_imgproc::mask::copy_masked;

use crate::error::StageError;
use crate::packet::{ImageFormat, ImageFrame, Packet};
use crate::stage::{Contract, Port, PortType, Stage, StageInputs, StageOutputs};

/// The name the stage is registered under.
pub const BLUR_MASK_STAGE_NAME: &str = "blur_mask";

/// Input port carrying the image to blur. Grayscale or RGB.
pub const IMAGE_PORT: &str = "image";

/// Input port carrying the segmentation mask. Grayscale only.
pub const MASK_PORT: &str = "mask";

/// Output port carrying the blurred, masked image.
pub const OUTPUT_PORT: &str = "blurred_image";

// Fixed blur parameters, not configurable.
const KERNEL_SIZE: usize = 11;
const SIGMA: f32 = 7.0;

/// A stage applying a Gaussian blur to an image, masked by a segmentation map.
///
/// Per invocation the input image is convolved with a fixed 11x11 Gaussian
/// kernel (sigma 7 on both axes, edge replication at the borders) and the
/// blurred pixels are copied into a zero-initialized output wherever the mask
/// is non-zero. The output packet carries the timestamp of the input image.
///
/// The mask selects binarily: any non-zero value keeps the blurred pixel,
/// zero keeps the output black.
#[derive(Debug, Default)]
pub struct BlurMaskStage;

impl BlurMaskStage {
    /// Create a new blur-and-mask stage.
    pub fn new() -> Self {
        Self
    }

    fn blur_and_mask<const C: usize>(
        image: &Image<u8, C>,
        mask: &Image<u8, 1>,
    ) -> Result<Image<u8, C>, StageError> {
        let mut blurred = Image::from_size_val(image.size(), 0)?;
        gaussian_blur(
            image,
            &mut blurred,
            (KERNEL_SIZE, KERNEL_SIZE),
            (SIGMA, SIGMA),
        )?;

        let mut output = Image::from_size_val(blurred.size(), 0)?;
        copy_masked(&blurred, &mut output, mask)?;

        Ok(output)
    }
}

impl Stage for BlurMaskStage {
    fn name(&self) -> &'static str {
        BLUR_MASK_STAGE_NAME
    }

    fn contract(&self) -> Contract {
        Contract {
            inputs: vec![
                Port {
                    name: IMAGE_PORT,
                    ty: PortType::Image,
                },
                Port {
                    name: MASK_PORT,
                    ty: PortType::Mask,
                },
            ],
            outputs: vec![Port {
                name: OUTPUT_PORT,
                ty: PortType::Image,
            }],
        }
    }

    fn process(&self, mut inputs: StageInputs) -> Result<StageOutputs, StageError> {
        let image_packet = inputs.take(IMAGE_PORT)?;
        let mask_packet = inputs.take(MASK_PORT)?;

        let mask = match &mask_packet.frame {
            ImageFrame::Grayscale(mask) => mask,
            frame => {
                return Err(StageError::InvalidFormat {
                    port: MASK_PORT,
                    expected: ImageFormat::Grayscale,
                    got: frame.format(),
                })
            }
        };

        debug!(
            "blur_mask: {} {} image, mask {}, ts {}",
            image_packet.frame.format(),
            image_packet.frame.size(),
            mask.size(),
            image_packet.timestamp,
        );

        // the output keeps the pixel format of the input image
        let output_frame = match &image_packet.frame {
            ImageFrame::Grayscale(image) => {
                ImageFrame::Grayscale(Self::blur_and_mask(image, mask)?)
            }
            ImageFrame::Rgb(image) => ImageFrame::Rgb(Self::blur_and_mask(image, mask)?),
        };

        let mut outputs = StageOutputs::new();
        outputs.insert(
            OUTPUT_PORT,
            Packet::new(output_frame, image_packet.timestamp),
        );

        Ok(outputs)
    }
}
