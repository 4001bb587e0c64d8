//! Generates the launcher icon set from an emoji glyph rendered through the
//! first system font that loads. An unavailable font degrades to blank white
//! icons with a warning instead of aborting the run.
#![deny(warnings)]

use anyhow::Context;
use icongen::{GlyphSource, Rgba, write_tiers};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const RES_DIR: &str = "android/app/src/main/res";
const FONTS: [&str; 2] = [
    "/System/Library/Fonts/Apple Color Emoji.ttc",
    "/System/Library/Fonts/Supplemental/AppleColorEmoji.ttf",
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = GlyphSource {
        glyph: '\u{1F338}', // cherry blossom
        fonts: &FONTS,
        ink: "#e91e63".parse::<Rgba>()?,
    };
    write_tiers(Path::new(RES_DIR), |tier| Ok(source.render(tier)))
        .context("writing launcher icons")?;

    println!("\n✅ All Android icons generated successfully!");
    Ok(())
}
