//! Glyph source: renders a single character through the first system font
//! that loads, centered on the visual ink box.

use crate::{Canvas, Rgba, Tier};
use fontdue::{Font, FontSettings};
use std::fs;

/// Fraction of the tier dimension used as the glyph point size
const GLYPH_SCALE: f32 = 0.7;

/// A character rendered through a font, with a fallback chain of candidate
/// font files tried in order.
#[derive(Debug, Clone)]
pub struct GlyphSource<'a> {
    pub glyph: char,
    /// Candidate font paths, first readable and parseable one wins
    pub fonts: &'a [&'a str],
    /// Ink color the glyph coverage is tinted with
    pub ink: Rgba,
}

impl GlyphSource<'_> {
    fn load_font(&self) -> Option<Font> {
        for &path in self.fonts {
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::debug!(path, %error, "font path not readable");
                    continue;
                }
            };
            match Font::from_bytes(bytes, FontSettings::default()) {
                Ok(font) => return Some(font),
                Err(error) => tracing::debug!(path, error, "failed to parse font"),
            }
        }
        None
    }

    /// Render the glyph onto a white canvas of the tier's dimension.
    ///
    /// If no candidate font loads the canvas is left blank and a warning is
    /// logged; the run continues.
    pub fn render(&self, tier: Tier) -> Canvas {
        let mut canvas = Canvas::new(tier.size);
        let Some(font) = self.load_font() else {
            tracing::warn!(
                density = tier.density,
                "could not load a glyph font, leaving icon blank"
            );
            return canvas;
        };

        let px = tier.size as f32 * GLYPH_SCALE;
        let (metrics, coverage) = font.rasterize(self.glyph, px);
        // center the visual ink box, not the advance box: the rasterized
        // bitmap is already tight, so the bounding-box left/top offsets
        // cancel out of the placement
        let col = (tier.size as i64 - metrics.width as i64) / 2;
        let row = (tier.size as i64 - metrics.height as i64) / 2;
        canvas.blit_coverage(&coverage, metrics.width, metrics.height, (row, col), self.ink);
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rgb, TIERS};

    #[test]
    fn test_missing_fonts_give_blank_canvas() {
        let source = GlyphSource {
            glyph: '\u{1F338}',
            fonts: &["/nonexistent/emoji.ttc", "/nonexistent/fallback.ttf"],
            ink: Rgba::new(233, 30, 99, 255),
        };
        for tier in TIERS {
            let canvas = source.render(tier);
            assert_eq!(canvas.size(), tier.size);
            for row in 0..canvas.size() as usize {
                for col in 0..canvas.size() as usize {
                    assert_eq!(canvas.get(row, col), Some(Rgb::WHITE));
                }
            }
        }
    }

    #[test]
    fn test_empty_font_chain_is_blank() {
        let source = GlyphSource {
            glyph: 'A',
            fonts: &[],
            ink: Rgba::new(0, 0, 0, 255),
        };
        let canvas = source.render(TIERS[0]);
        assert!(
            (0..48usize)
                .flat_map(|row| (0..48usize).map(move |col| (row, col)))
                .all(|(row, col)| canvas.get(row, col) == Some(Rgb::WHITE))
        );
    }
}
