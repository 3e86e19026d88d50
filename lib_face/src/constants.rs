use crate::color::Rgb;

pub const FILE_EXT: &str = "png";

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

pub const IMAGE_WIDTH: u32 = 48;
pub const IMAGE_HEIGHT: u32 = 48;
pub const BIT_DEPTH: u8 = 1;
/// Indexed colour.
pub const COLOR_TYPE: u8 = 3;

pub const DEFAULT_EYES_DIR: &str = "eyes";
pub const DEFAULT_NOSES_DIR: &str = "noses";
pub const DEFAULT_PALETTE_DIR: &str = "palette";
pub const DEFAULT_FACES_DIR: &str = "faces";
pub const DEFAULT_SAMPLE_FILE: &str = "output.png";

pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);

/// Colour table used for the sample ring and every generated face.
pub const SAMPLE_PALETTE: [Rgb; 2] = [BLACK, CYAN];

pub const BACKGROUNDS: [Rgb; 2] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0xff, 0xff, 0xff),
];

pub const FOREGROUNDS: [Rgb; 7] = [
    Rgb::new(0xcc, 0x00, 0x00),
    Rgb::new(0xf1, 0x5d, 0x22),
    Rgb::new(0x64, 0xcf, 0x00),
    Rgb::new(0x00, 0x6f, 0xff),
    Rgb::new(0x22, 0x22, 0xcc),
    Rgb::new(0xad, 0x7f, 0xa8),
    Rgb::new(0x34, 0xe2, 0xe2),
];

/// A small ring drawn in the right half of the canvas, one 48-bit row per entry.
pub const SAMPLE_RING: [u64; 48] = [
    0b00000000000000000000000000000000,
    0b00000000000000000000000000000000,
    0b00000000000000000000000000000000,
    0b00000000000000000000000000000000,
    0b00000000000000000000000000000000,
    0b00000000000000000000000000000000,
    0b00000000000000000000000000000000,
    0b00000000000000000000000011110000,
    0b00000000000000000000000111111000,
    0b00000000000000000000001100001100,
    0b00000000000000000000001100001100,
    0b00000000000000000000001100001100,
    0b00000000000000000000011000000110,
    0b00000000000000000000011000000110,
    0b00000000000000000000011000000110,
    0b00000000000000000000011000000110,
    0b00000000000000000000001100001100,
    0b00000000000000000000001100001100,
    0b00000000000000000000001100001100,
    0b00000000000000000000000111111000,
    0b00000000000000000000000011110000,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Rows of [`SAMPLE_RING`] as 6-byte big-endian scanlines.
pub fn sample_scanlines() -> Vec<Vec<u8>> {
    SAMPLE_RING
        .iter()
        .map(|row| row.to_be_bytes()[2..].to_vec())
        .collect()
}
