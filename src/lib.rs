pub mod config;
pub mod error;
pub mod imaging;
pub mod state;
pub mod translate;

pub use error::{Error, Result};
