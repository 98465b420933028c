#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use maskblur_image as image;

#[doc(inline)]
pub use maskblur_imgproc as imgproc;

#[doc(inline)]
pub use maskblur_graph as graph;
