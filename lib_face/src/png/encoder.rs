use log::{debug, error};
use thiserror::Error;

use super::chunk::{encode_chunk, IDAT, IEND, IHDR, PLTE};
use super::format::{ImageSpec, FILTER_NONE};
use super::zlib::{wrap_stored, StoredBlockError};
use crate::color::{palette_bytes, Rgb};
use crate::constants::SIGNATURE;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Colour table is empty")]
    EmptyPalette,
    #[error("Colour table holds {len} entries, bit depth allows at most {max}")]
    PaletteTooLarge { len: usize, max: usize },
    #[error("Expected {expected} scanlines, got {found}")]
    RowCount { expected: usize, found: usize },
    #[error("Scanline {row} is {found} bytes wide, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Failed to wrap image data: {0}")]
    StoredBlock(#[from] StoredBlockError),
}

/// Assembles a complete indexed-colour PNG from a colour table and packed
/// scanlines: signature, `IHDR`, `PLTE`, a single `IDAT` and `IEND`.
pub fn render<R: AsRef<[u8]>>(
    spec: &ImageSpec,
    palette: &[Rgb],
    scanlines: &[R],
) -> Result<Vec<u8>, RenderError> {
    debug!(
        "Rendering {}x{} image with {} colours",
        spec.width,
        spec.height,
        palette.len()
    );

    if palette.is_empty() {
        error!("Cannot render without a colour table");
        return Err(RenderError::EmptyPalette);
    }
    if palette.len() > spec.max_palette_len() {
        error!(
            "Colour table of {} entries exceeds bit depth {}",
            palette.len(),
            spec.bit_depth
        );
        return Err(RenderError::PaletteTooLarge {
            len: palette.len(),
            max: spec.max_palette_len(),
        });
    }
    if scanlines.len() != spec.height as usize {
        error!(
            "Scanline count {} does not match image height {}",
            scanlines.len(),
            spec.height
        );
        return Err(RenderError::RowCount {
            expected: spec.height as usize,
            found: scanlines.len(),
        });
    }

    // Step 1: Filter-tag every scanline
    let stride = spec.stride();
    let mut image_data = Vec::with_capacity(spec.filtered_len());
    for (row, line) in scanlines.iter().enumerate() {
        let line = line.as_ref();
        if line.len() != stride {
            error!(
                "Scanline {} is {} bytes wide, expected {}",
                row,
                line.len(),
                stride
            );
            return Err(RenderError::RowWidth {
                row,
                expected: stride,
                found: line.len(),
            });
        }
        image_data.push(FILTER_NONE);
        image_data.extend_from_slice(line);
    }
    debug!("Filtered image data: {} bytes", image_data.len());

    // Step 2: Wrap it in a stored zlib stream
    let zlib_data = wrap_stored(&image_data)?;

    // Step 3: Emit the chunks in their fixed order
    let mut output = Vec::with_capacity(SIGNATURE.len() + zlib_data.len() + 128);
    output.extend_from_slice(&SIGNATURE);
    output.extend(encode_chunk(IHDR, &spec.header_bytes()));
    output.extend(encode_chunk(PLTE, &palette_bytes(palette)));
    output.extend(encode_chunk(IDAT, &zlib_data));
    output.extend(encode_chunk(IEND, &[]));

    debug!("Rendered image: {} bytes", output.len());
    Ok(output)
}
