#![allow(dead_code)]

use lib_face::{PixelMatrix, Rgb, Sprite};

pub const SPRITE_WIDTH: u32 = 16;
pub const SPRITE_HEIGHT: usize = 48;

pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const RED: Rgb = Rgb::new(0xcc, 0x00, 0x00);

/// A 16x48 sprite with a filled square whose top-left corner is `(x, y)`.
pub fn square_sprite(name: &str, x: u32, y: usize, size: u32) -> Sprite {
    let mut rows = vec![vec![0u8; 2]; SPRITE_HEIGHT];
    for row in rows.iter_mut().skip(y).take(size as usize) {
        for px in x..(x + size).min(SPRITE_WIDTH) {
            row[px as usize / 8] |= 0x80 >> (px % 8);
        }
    }
    Sprite::new(name, PixelMatrix::new(SPRITE_WIDTH, rows))
}

pub fn eyes() -> Vec<Sprite> {
    vec![
        square_sprite("dot", 6, 20, 4),
        square_sprite("wide", 2, 18, 12),
        square_sprite("tiny", 7, 22, 1),
    ]
}

pub fn noses() -> Vec<Sprite> {
    vec![square_sprite("button", 6, 30, 3), square_sprite("long", 7, 24, 2)]
}
