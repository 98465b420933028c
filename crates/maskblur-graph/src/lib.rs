#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// the blur-and-mask stage.
pub mod blur_mask;

/// error types for the graph module.
pub mod error;

/// image packets and logical timestamps.
pub mod packet;

/// the stage registry capability table.
pub mod registry;

/// the stage trait and port contracts.
pub mod stage;

pub use crate::blur_mask::{
    BlurMaskStage, BLUR_MASK_STAGE_NAME, IMAGE_PORT, MASK_PORT, OUTPUT_PORT,
};
pub use crate::error::StageError;
pub use crate::packet::{ImageFormat, ImageFrame, Packet, Timestamp};
pub use crate::registry::{register_builtin, StageFactory, StageRegistry};
pub use crate::stage::{Contract, Port, PortType, Stage, StageInputs, StageOutputs};
