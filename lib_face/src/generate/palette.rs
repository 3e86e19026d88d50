use log::{debug, info};

use super::sink::OutputSink;
use super::GenerateError;
use crate::color::Rgb;
use crate::png::{render, ImageSpec};

/// One colour table of the palette run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteVariant {
    /// 0 for the base foreground, 1 for its inverse.
    pub index: usize,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl PaletteVariant {
    pub fn label(&self) -> String {
        format!(
            "{}_{}_{}",
            self.index,
            self.background.hex(),
            self.foreground.hex()
        )
    }

    pub fn palette(&self) -> [Rgb; 2] {
        [self.background, self.foreground]
    }
}

/// Enumerates every background against every foreground and its inverse,
/// backgrounds outermost.
///
/// On a pure black background only the base foreground is kept.
pub fn palette_variants(backgrounds: &[Rgb], foregrounds: &[Rgb]) -> Vec<PaletteVariant> {
    let mut variants = Vec::new();
    for &background in backgrounds {
        for &base in foregrounds {
            let pairs = [base, base.invert()];
            let pairs = if background.is_black() {
                &pairs[..1]
            } else {
                &pairs[..]
            };

            for (index, &foreground) in pairs.iter().enumerate() {
                variants.push(PaletteVariant {
                    index,
                    background,
                    foreground,
                });
            }
        }
    }
    variants
}

/// Renders `scanlines` once per palette variant and hands each image to `sink`.
///
/// Returns the number of images written.
pub fn generate_palettes<R: AsRef<[u8]>>(
    spec: &ImageSpec,
    scanlines: &[R],
    backgrounds: &[Rgb],
    foregrounds: &[Rgb],
    sink: &mut dyn OutputSink,
) -> Result<usize, GenerateError> {
    let variants = palette_variants(backgrounds, foregrounds);
    debug!(
        "{} palette variants from {} backgrounds and {} foregrounds",
        variants.len(),
        backgrounds.len(),
        foregrounds.len()
    );

    for variant in &variants {
        let label = variant.label();
        let output = render(spec, &variant.palette(), scanlines)?;
        sink.emit(&label, &output)?;
        debug!("Palette variant {} written", label);
    }

    info!("Palette run completed: {} images", variants.len());
    Ok(variants.len())
}
