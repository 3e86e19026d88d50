use std::fmt;

/// One colour table entry, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Componentwise one's-complement, i.e. `0xFFFFFF - rgb` as a 24-bit value.
    pub const fn invert(self) -> Self {
        let [r, g, b] = self.0;
        Self([!r, !g, !b])
    }

    pub const fn is_black(self) -> bool {
        matches!(self.0, [0, 0, 0])
    }

    /// Lower-case six digit hex encoding, as used in output labels.
    pub fn hex(self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

/// Serializes a colour table into the byte layout of a `PLTE` payload.
pub fn palette_bytes(palette: &[Rgb]) -> Vec<u8> {
    palette.iter().flat_map(|color| color.0).collect()
}
