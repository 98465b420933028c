use crate::packet::ImageFormat;

/// An error type for stage processing.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    /// A declared input port received no packet.
    #[error("Missing packet on input port '{0}'")]
    MissingInput(&'static str),

    /// A declared output port emitted no packet.
    #[error("Missing packet on output port '{0}'")]
    MissingOutput(&'static str),

    /// A port received a frame with an unsupported pixel format.
    #[error("Port '{port}' expects a {expected} frame, got {got}")]
    InvalidFormat {
        /// The port that received the frame.
        port: &'static str,
        /// The format the port expects.
        expected: ImageFormat,
        /// The format the frame carries.
        got: ImageFormat,
    },

    /// No stage with the given name exists in the registry.
    #[error("Unknown stage '{0}'")]
    UnknownStage(String),

    /// An image operation failed.
    #[error(transparent)]
    Image(#[from] maskblur_image::ImageError),
}
