//! Generates the launcher icon set with the procedurally drawn flower:
//! five pink petals around a gold center, sized from the tier dimension.
#![deny(warnings)]

use anyhow::Context;
use icongen::{Flower, write_tiers};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const RES_DIR: &str = "android/app/src/main/res";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let flower = Flower {
        petals: 5,
        petal_color: "#FFB6C1".parse()?, // light pink
        center_color: "#FFD700".parse()?, // gold
    };
    write_tiers(Path::new(RES_DIR), |tier| Ok(flower.render(tier)))
        .context("writing launcher icons")?;

    println!("\n✅ All Android icons with flower design generated successfully!");
    Ok(())
}
