//! Bitmap source: an externally supplied image scaled into the tier canvas,
//! either edge to edge or at half size with equal padding.

use crate::{Canvas, Error, Tier};
use image::{RgbaImage, imageops::FilterType};
use std::path::PathBuf;

/// How much of the tier dimension the scaled bitmap occupies
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Padding {
    /// Bitmap fills the whole tier
    None,
    /// Bitmap is scaled to half the tier dimension and centered
    Half,
}

impl Padding {
    /// Inner bitmap dimension for a tier of the given size
    pub fn inner_size(self, size: u32) -> u32 {
        match self {
            Padding::None => size,
            Padding::Half => size / 2,
        }
    }
}

/// An external bitmap file composited into each tier.
///
/// A missing or unreadable file is fatal for the whole run, there is no
/// fallback.
#[derive(Debug, Clone)]
pub struct BitmapSource {
    pub path: PathBuf,
    pub padding: Padding,
}

impl BitmapSource {
    pub fn new(path: impl Into<PathBuf>, padding: Padding) -> Self {
        Self {
            path: path.into(),
            padding,
        }
    }

    /// Load and decode the source bitmap once for the whole run
    pub fn load(&self) -> Result<RgbaImage, Error> {
        let img = image::open(&self.path)?;
        tracing::debug!(path = %self.path.display(), width = img.width(), height = img.height(), "loaded source bitmap");
        Ok(img.to_rgba8())
    }

    /// Scale the loaded bitmap for one tier and composite it over white
    pub fn render(&self, source: &RgbaImage, tier: Tier) -> Canvas {
        let inner = self.padding.inner_size(tier.size);
        let pad = (tier.size - inner) / 2;
        let resized = image::imageops::resize(source, inner, inner, FilterType::Lanczos3);
        let mut canvas = Canvas::new(tier.size);
        canvas.blit_rgba(&resized, (pad, pad));
        canvas
    }
}
