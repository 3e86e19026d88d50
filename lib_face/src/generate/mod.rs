pub mod faces;
pub mod palette;
pub mod sink;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::compositor::CompositeError;
use crate::png::RenderError;
use crate::sprite::SpriteError;

pub use faces::{face_label, generate_faces};
pub use palette::{generate_palettes, palette_variants, PaletteVariant};
pub use sink::{DirectorySink, MemorySink, OutputSink};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Compositing failed: {0}")]
    Composite(#[from] CompositeError),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("Sprite loading failed: {0}")]
    Sprite(#[from] SpriteError),
    #[error("Output directory {dir} is also an input directory")]
    OutputIsInput { dir: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
