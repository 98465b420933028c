use maskblur_graph::{
    register_builtin, ImageFrame, Packet, StageError, StageInputs, StageRegistry, Timestamp,
    BLUR_MASK_STAGE_NAME, IMAGE_PORT, MASK_PORT, OUTPUT_PORT,
};
use maskblur_image::{Image, ImageSize};

fn main() -> Result<(), StageError> {
    env_logger::init();

    let mut registry = StageRegistry::new();
    register_builtin(&mut registry);
    let stage = registry.create(BLUR_MASK_STAGE_NAME)?;

    let size = ImageSize {
        width: 320,
        height: 240,
    };

    // synthetic input: a white square on a black background
    let mut image_data = vec![0u8; size.width * size.height];
    for y in 80..160 {
        for x in 100..220 {
            image_data[y * size.width + x] = 255;
        }
    }
    let image = Image::<u8, 1>::new(size, image_data)?;

    // mask the left half of the frame
    let mut mask_data = vec![0u8; size.width * size.height];
    for y in 0..size.height {
        for x in 0..size.width / 2 {
            mask_data[y * size.width + x] = 255;
        }
    }
    let mask = Image::<u8, 1>::new(size, mask_data)?;

    let timestamp = Timestamp::from_micros(0);
    let mut inputs = StageInputs::new();
    inputs.insert(IMAGE_PORT, Packet::new(ImageFrame::Grayscale(image), timestamp));
    inputs.insert(MASK_PORT, Packet::new(ImageFrame::Grayscale(mask), timestamp));

    let mut outputs = stage.process(inputs)?;
    let output = outputs.take(OUTPUT_PORT)?;

    let (nonzero, total) = match &output.frame {
        ImageFrame::Grayscale(img) => {
            let data = img.as_slice();
            (data.iter().filter(|&&x| x != 0).count(), data.len())
        }
        ImageFrame::Rgb(img) => {
            let data = img.as_slice();
            (data.iter().filter(|&&x| x != 0).count(), data.len())
        }
    };

    println!(
        "blurred {} at {}: {}/{} non-zero pixels inside the mask",
        output.frame.size(),
        output.timestamp,
        nonzero,
        total
    );

    Ok(())
}
