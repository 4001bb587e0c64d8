//! Generates the launcher icon set from the flower emoji bitmap, scaled to
//! half the tier dimension and centered with equal padding on all sides.
//! A missing source bitmap aborts the whole run.
#![deny(warnings)]

use anyhow::Context;
use icongen::{BitmapSource, Padding, write_tiers};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const RES_DIR: &str = "android/app/src/main/res";
const SOURCE: &str = "/tmp/flower_emoji.png";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = BitmapSource::new(SOURCE, Padding::Half);
    let bitmap = source
        .load()
        .with_context(|| format!("loading source bitmap {}", SOURCE))?;
    write_tiers(Path::new(RES_DIR), |tier| Ok(source.render(&bitmap, tier)))
        .context("writing launcher icons")?;

    println!("\n🌸 All Android icons with padded flower emoji generated successfully!");
    println!("   Padding: 25% on each side (50% emoji size)");
    Ok(())
}
