use maskblur_image::{Image, ImageSize};

/// A logical timestamp on a packet, in microseconds.
///
/// Timestamps order packets within a stream; they carry no wall-clock
/// meaning. A stage emits its output with the timestamp of the triggering
/// input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// A sentinel for packets that have not been assigned a timestamp.
    pub const UNSET: Timestamp = Timestamp(i64::MIN);

    /// Create a timestamp from a microsecond value.
    pub fn from_micros(micros: i64) -> Self {
        Timestamp(micros)
    }

    /// The microsecond value of the timestamp.
    pub fn as_micros(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if *self == Timestamp::UNSET {
            write!(f, "Timestamp::UNSET")
        } else {
            write!(f, "{}us", self.0)
        }
    }
}

/// The pixel format of an [`ImageFrame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Single-channel 8-bit image.
    Grayscale,
    /// Three-channel 8-bit image.
    Rgb,
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ImageFormat::Grayscale => write!(f, "grayscale"),
            ImageFormat::Rgb => write!(f, "rgb"),
        }
    }
}

/// An image whose pixel format is only known at runtime.
///
/// Stages exchange [`ImageFrame`]s so that one port can accept either a
/// grayscale or a color image.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageFrame {
    /// Single-channel 8-bit image.
    Grayscale(Image<u8, 1>),
    /// Three-channel 8-bit image.
    Rgb(Image<u8, 3>),
}

impl ImageFrame {
    /// The pixel format of the frame.
    pub fn format(&self) -> ImageFormat {
        match self {
            ImageFrame::Grayscale(_) => ImageFormat::Grayscale,
            ImageFrame::Rgb(_) => ImageFormat::Rgb,
        }
    }

    /// The spatial size of the frame.
    pub fn size(&self) -> ImageSize {
        match self {
            ImageFrame::Grayscale(img) => img.size(),
            ImageFrame::Rgb(img) => img.size(),
        }
    }

    /// The number of channels of the frame.
    pub fn num_channels(&self) -> usize {
        match self {
            ImageFrame::Grayscale(_) => 1,
            ImageFrame::Rgb(_) => 3,
        }
    }
}

/// An [`ImageFrame`] tagged with a logical [`Timestamp`].
#[derive(Clone, Debug, PartialEq)]
pub struct Packet {
    /// The image payload.
    pub frame: ImageFrame,
    /// The logical timestamp of the payload.
    pub timestamp: Timestamp,
}

impl Packet {
    /// Create a new packet from a frame and a timestamp.
    pub fn new(frame: ImageFrame, timestamp: Timestamp) -> Self {
        Self { frame, timestamp }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_ordering() {
        let t0 = Timestamp::from_micros(0);
        let t1 = Timestamp::from_micros(33_333);
        assert!(t0 < t1);
        assert!(Timestamp::UNSET < t0);
        assert_eq!(t1.as_micros(), 33_333);
    }

    #[test]
    fn frame_format() {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let gray = ImageFrame::Grayscale(Image::from_size_val(size, 0).unwrap());
        let rgb = ImageFrame::Rgb(Image::from_size_val(size, 0).unwrap());

        assert_eq!(gray.format(), ImageFormat::Grayscale);
        assert_eq!(gray.num_channels(), 1);
        assert_eq!(rgb.format(), ImageFormat::Rgb);
        assert_eq!(rgb.num_channels(), 3);
        assert_eq!(rgb.size(), size);
    }
}
