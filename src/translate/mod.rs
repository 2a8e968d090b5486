mod client;
pub mod multipart;
mod types;

pub use client::*;
pub use multipart::{MultipartBody, build_multipart};
pub use types::*;
