//! Launcher icon set generator.
//!
//! Produces the five Android `mipmap-<density>` launcher icon PNGs from one
//! of three source visuals:
//!  - a glyph rendered through a system font
//!  - a procedurally drawn flower
//!  - an externally supplied bitmap, full bleed or padded
//!
//! Each output tier is rendered onto an opaque white canvas, flattened to
//! RGB, encoded once and written under the three launcher roles
//! (`ic_launcher`, `ic_launcher_round`, `ic_launcher_foreground`), which are
//! intentionally byte-identical.
#![deny(warnings)]

mod bitmap;
mod canvas;
mod color;
mod emit;
mod flower;
mod geometry;
mod glyph;
mod mask;
mod surface;
mod tier;

pub use bitmap::{BitmapSource, Padding};
pub use canvas::Canvas;
pub use color::{ColorError, Rgb, Rgba};
pub use emit::write_tiers;
pub use flower::{Flower, petal_centers};
pub use geometry::{EPSILON, Line, PI, Point, Scalar};
pub use glyph::GlyphSource;
pub use mask::{DEFAULT_FLATNESS, circle_lines, fill_circle};
pub use surface::{Shape, SurfaceOwned};
pub use tier::{Role, TIERS, Tier};

use std::{fmt, io};

/// Failures that abort an icon generation run
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    PngEncode(png::EncodingError),
    Image(image::ImageError),
    Color(ColorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(error) => write!(f, "io error: {}", error),
            Error::PngEncode(error) => write!(f, "png encoding error: {}", error),
            Error::Image(error) => write!(f, "image error: {}", error),
            Error::Color(error) => write!(f, "color error: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            Error::PngEncode(error) => Some(error),
            Error::Image(error) => Some(error),
            Error::Color(error) => Some(error),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<png::EncodingError> for Error {
    fn from(error: png::EncodingError) -> Self {
        Self::PngEncode(error)
    }
}

impl From<image::ImageError> for Error {
    fn from(error: image::ImageError) -> Self {
        Self::Image(error)
    }
}

impl From<ColorError> for Error {
    fn from(error: ColorError) -> Self {
        Self::Color(error)
    }
}
