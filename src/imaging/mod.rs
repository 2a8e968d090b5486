//! Menu image preparation: bounding-box downsampling and lossy JPEG encoding.

mod codec;

pub use codec::*;
