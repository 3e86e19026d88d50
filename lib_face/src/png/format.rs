use crate::constants::{BIT_DEPTH, COLOR_TYPE, IMAGE_HEIGHT, IMAGE_WIDTH};

pub const COMPRESSION_DEFLATE: u8 = 0;
pub const FILTER_ADAPTIVE: u8 = 0;
pub const INTERLACE_NONE: u8 = 0;

/// Per-scanline filter tag meaning "no filter".
pub const FILTER_NONE: u8 = 0;

/// Fixed image geometry handed to the assembler and the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
}

impl ImageSpec {
    pub const HEADER_SIZE: usize = 13;

    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: BIT_DEPTH,
            color_type: COLOR_TYPE,
        }
    }

    /// Bytes per packed scanline, without the filter tag.
    pub const fn stride(&self) -> usize {
        (self.width as usize * self.bit_depth as usize).div_ceil(8)
    }

    pub const fn max_palette_len(&self) -> usize {
        1 << self.bit_depth
    }

    /// Filtered image data size: one tag byte plus one packed row per scanline.
    pub const fn filtered_len(&self) -> usize {
        (self.stride() + 1) * self.height as usize
    }

    /// `IHDR` payload: width, height, then the five single-byte fields.
    pub fn header_bytes(&self) -> [u8; Self::HEADER_SIZE] {
        let mut header = [0u8; Self::HEADER_SIZE];
        header[0..4].copy_from_slice(&self.width.to_be_bytes());
        header[4..8].copy_from_slice(&self.height.to_be_bytes());
        header[8] = self.bit_depth;
        header[9] = self.color_type;
        header[10] = COMPRESSION_DEFLATE;
        header[11] = FILTER_ADAPTIVE;
        header[12] = INTERLACE_NONE;
        header
    }
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self::new(IMAGE_WIDTH, IMAGE_HEIGHT)
    }
}
