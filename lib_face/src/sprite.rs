use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::GrayImage;
use log::{debug, error, info};
use thiserror::Error;

use crate::compositor::PixelMatrix;
use crate::constants::FILE_EXT;

/// Luma at or above this value packs as a set bit.
pub const LUMA_THRESHOLD: u8 = 128;

#[derive(Error, Debug)]
pub enum SpriteError {
    #[error("Failed to decode sprite {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("No sprite assets found in {dir}")]
    NoAssets { dir: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A decoded sprite fragment (an eye or a nose) with the name it is known by
/// in output labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub name: String,
    pub pixels: PixelMatrix,
}

impl Sprite {
    pub fn new(name: impl Into<String>, pixels: PixelMatrix) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }

    /// Decodes an image file; the sprite is named after the file stem.
    pub fn open(path: &Path) -> Result<Self, SpriteError> {
        let image = image::open(path).map_err(|source| {
            error!("Failed to decode sprite {}: {}", path.display(), source);
            SpriteError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let sprite = Self::from_luma(name, &image.into_luma8());
        debug!(
            "Sprite {} decoded: {}x{}",
            sprite.name,
            sprite.pixels.width,
            sprite.pixels.height()
        );
        Ok(sprite)
    }

    pub fn from_luma(name: impl Into<String>, image: &GrayImage) -> Self {
        Self::new(name, pack_luma(image))
    }
}

/// Packs a greyscale image at one bit per pixel, most-significant bit first,
/// padding each row with zero bits to a byte boundary.
pub fn pack_luma(image: &GrayImage) -> PixelMatrix {
    let (width, height) = image.dimensions();
    let stride = (width as usize).div_ceil(8);

    let rows = (0..height)
        .map(|y| {
            let mut row = vec![0u8; stride];
            for x in 0..width {
                if image.get_pixel(x, y)[0] >= LUMA_THRESHOLD {
                    row[x as usize / 8] |= 0x80 >> (x % 8);
                }
            }
            row
        })
        .collect();

    PixelMatrix::new(width, rows)
}

/// Decodes every `*.png` in `dir`, ordered by file name.
///
/// A sprite that fails to decode aborts discovery.
pub fn discover(dir: &Path) -> Result<Vec<Sprite>, SpriteError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXT));
        if is_png && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        error!("No sprite assets in {}", dir.display());
        return Err(SpriteError::NoAssets {
            dir: dir.to_path_buf(),
        });
    }

    let sprites = paths
        .iter()
        .map(|path| Sprite::open(path))
        .collect::<Result<Vec<_>, _>>()?;
    info!("Discovered {} sprites in {}", sprites.len(), dir.display());
    Ok(sprites)
}
