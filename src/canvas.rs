//! Opaque square pixel canvas that sources are composited onto.

use crate::{Error, Rgb, Rgba, Scalar, SurfaceOwned};
use image::RgbaImage;

/// Square bitmap with an opaque white background.
///
/// Transparency only exists transiently in the sources composited onto the
/// canvas; the canvas itself is always opaque RGB and is encoded that way.
pub struct Canvas {
    surf: SurfaceOwned<Rgb>,
}

impl Canvas {
    /// Allocate a white canvas of `size` x `size` pixels
    pub fn new(size: u32) -> Self {
        let size = size as usize;
        Self {
            surf: SurfaceOwned::new_with(size, size, |_, _| Rgb::WHITE),
        }
    }

    pub fn size(&self) -> u32 {
        self.surf.width() as u32
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        self.surf.get(row, col).copied()
    }

    /// Blend `color` over the whole canvas through a coverage mask of the
    /// same dimensions.
    pub fn fill_mask(&mut self, mask: &SurfaceOwned<Scalar>, color: Rgba) {
        debug_assert_eq!(mask.width(), self.surf.width());
        debug_assert_eq!(mask.height(), self.surf.height());
        for row in 0..self.surf.height() {
            for col in 0..self.surf.width() {
                let Some(coverage) = mask.get(row, col).copied() else {
                    continue;
                };
                if coverage <= 0.0 {
                    continue;
                }
                if let Some(pixel) = self.surf.get_mut(row, col) {
                    *pixel = pixel.blend(color, coverage);
                }
            }
        }
    }

    /// Blend `color` through a row-major 8-bit coverage bitmap placed with
    /// its top-left corner at `(row, col)`; out-of-bounds texels are skipped.
    pub fn blit_coverage(
        &mut self,
        coverage: &[u8],
        width: usize,
        height: usize,
        at: (i64, i64),
        color: Rgba,
    ) {
        debug_assert_eq!(coverage.len(), width * height);
        let (row0, col0) = at;
        for row in 0..height {
            for col in 0..width {
                let value = coverage[row * width + col];
                if value == 0 {
                    continue;
                }
                let (y, x) = (row0 + row as i64, col0 + col as i64);
                if y < 0 || x < 0 {
                    continue;
                }
                if let Some(pixel) = self.surf.get_mut(y as usize, x as usize) {
                    *pixel = pixel.blend(color, value as Scalar / 255.0);
                }
            }
        }
    }

    /// Alpha-composite an RGBA sprite with its top-left corner at `(x, y)`
    pub fn blit_rgba(&mut self, sprite: &RgbaImage, at: (u32, u32)) {
        let (x0, y0) = at;
        for (x, y, pixel) in sprite.enumerate_pixels() {
            let image::Rgba([r, g, b, a]) = *pixel;
            if a == 0 {
                continue;
            }
            let (row, col) = ((y0 + y) as usize, (x0 + x) as usize);
            if let Some(dst) = self.surf.get_mut(row, col) {
                *dst = dst.blend(Rgba::new(r, g, b, a), 1.0);
            }
        }
    }

    /// Encode the canvas as an 8-bit RGB PNG (no alpha channel)
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::new();
        let mut encoder = png::Encoder::new(&mut bytes, self.size(), self.size());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(bytemuck::cast_slice(self.surf.data()))?;
        writer.finish()?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = Canvas::new(16);
        assert_eq!(canvas.size(), 16);
        for row in 0..16 {
            for col in 0..16 {
                assert_eq!(canvas.get(row, col), Some(Rgb::WHITE));
            }
        }
    }

    #[test]
    fn test_encode_opaque_rgb() -> Result<(), Error> {
        let canvas = Canvas::new(8);
        let bytes = canvas.encode()?;
        let decoded = image::load_from_memory(&bytes)?;
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
        Ok(())
    }

    #[test]
    fn test_blit_coverage_clips() {
        let mut canvas = Canvas::new(4);
        let coverage = [255u8; 9];
        // top-left corner hangs off the canvas
        canvas.blit_coverage(&coverage, 3, 3, (-1, -1), Rgba::new(0, 0, 0, 255));
        assert_eq!(canvas.get(0, 0), Some(Rgb([0, 0, 0])));
        assert_eq!(canvas.get(1, 1), Some(Rgb([0, 0, 0])));
        assert_eq!(canvas.get(2, 2), Some(Rgb::WHITE));
    }

    #[test]
    fn test_blit_rgba_respects_alpha() {
        let mut canvas = Canvas::new(4);
        let mut sprite = RgbaImage::new(2, 2);
        sprite.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        sprite.put_pixel(1, 0, image::Rgba([255, 0, 0, 0]));
        canvas.blit_rgba(&sprite, (1, 1));
        assert_eq!(canvas.get(1, 1), Some(Rgb([255, 0, 0])));
        // fully transparent texel leaves the background untouched
        assert_eq!(canvas.get(1, 2), Some(Rgb::WHITE));
        assert_eq!(canvas.get(0, 0), Some(Rgb::WHITE));
    }
}
