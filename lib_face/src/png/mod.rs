pub mod chunk;
pub mod encoder;
pub mod format;
pub mod zlib;

pub use encoder::{render, RenderError};
pub use format::ImageSpec;
