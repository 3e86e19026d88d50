use log::{debug, error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositeError {
    #[error("No sprites to composite")]
    NoSprites,
    #[error("Sprite #{index} has {found} rows, expected {expected}")]
    HeightMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// Rows of 1-bit pixels packed most-significant bit first, each row padded
/// to a whole number of bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    pub width: u32,
    pub rows: Vec<Vec<u8>>,
}

impl PixelMatrix {
    pub fn new(width: u32, rows: Vec<Vec<u8>>) -> Self {
        Self { width, rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Packed width of a row in bytes.
    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Reads pixel `(x, y)`; out-of-range coordinates read as 0.
    pub fn pixel(&self, x: u32, y: usize) -> bool {
        let Some(row) = self.rows.get(y) else {
            return false;
        };
        let Some(byte) = row.get(x as usize / 8) else {
            return false;
        };
        byte & (0x80 >> (x % 8)) != 0
    }
}

/// Joins sprites side by side: composite row `i` is the concatenation of
/// row `i` of every sprite, in argument order.
///
/// All sprites must have the same number of rows. The composite is as wide
/// as the sum of the sprites' padded widths.
pub fn composite(sprites: &[&PixelMatrix]) -> Result<PixelMatrix, CompositeError> {
    let Some(first) = sprites.first() else {
        error!("Composite requested without any sprite");
        return Err(CompositeError::NoSprites);
    };

    let height = first.height();
    if let Some((index, sprite)) = sprites
        .iter()
        .enumerate()
        .find(|(_, sprite)| sprite.height() != height)
    {
        error!(
            "Sprite #{} has {} rows, expected {}",
            index,
            sprite.height(),
            height
        );
        return Err(CompositeError::HeightMismatch {
            index,
            expected: height,
            found: sprite.height(),
        });
    }

    let stride: usize = sprites.iter().map(|sprite| sprite.stride()).sum();
    let rows = (0..height)
        .map(|y| {
            let mut row = Vec::with_capacity(stride);
            for sprite in sprites {
                row.extend_from_slice(&sprite.rows[y]);
            }
            row
        })
        .collect();

    debug!(
        "Composited {} sprites into {} rows of {} bytes",
        sprites.len(),
        height,
        stride
    );
    Ok(PixelMatrix::new(stride as u32 * 8, rows))
}
