pub mod color;
pub mod compositor;
pub mod constants;
pub mod generate;
pub mod hexify;
pub mod png;
pub mod sprite;

use log::*;
use std::io::Write;

pub use crate::color::Rgb;
pub use crate::compositor::{composite, PixelMatrix};
pub use crate::generate::{generate_faces, generate_palettes, GenerateError};
pub use crate::png::{render, ImageSpec};
pub use crate::sprite::Sprite;

/// Installs the stderr logger. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter(Some("lib_face"), LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
