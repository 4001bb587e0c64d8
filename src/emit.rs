//! Per-tier output pass: render, encode once, write the three role files.

use crate::{Canvas, Error, Role, TIERS, Tier};
use std::{fs, path::Path};

/// Run the single forward pass over all density tiers.
///
/// For every tier the rendered canvas is encoded exactly once and the same
/// bytes are written under each role name, so the three files of a tier are
/// always byte-identical. Existing files are overwritten, directories are
/// created as needed. One confirmation line per tier goes to stdout.
pub fn write_tiers<F>(res_dir: &Path, mut render: F) -> Result<(), Error>
where
    F: FnMut(Tier) -> Result<Canvas, Error>,
{
    for tier in TIERS {
        let canvas = render(tier)?;
        debug_assert_eq!(canvas.size(), tier.size);
        let encoded = canvas.encode()?;

        let dir = res_dir.join(tier.mipmap_dir());
        fs::create_dir_all(&dir)?;
        for role in Role::ALL {
            fs::write(dir.join(role.file_name()), &encoded)?;
        }
        tracing::debug!(
            density = tier.density,
            size = tier.size,
            bytes = encoded.len(),
            "tier written"
        );
        println!(
            "✓ Generated icons for mipmap-{} ({}x{})",
            tier.density, tier.size, tier.size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Flower;

    #[test]
    fn test_flower_run_writes_all_roles() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let flower = Flower::default();
        write_tiers(dir.path(), |tier| Ok(flower.render(tier)))?;

        let mut files = 0;
        for tier in TIERS {
            let tier_dir = dir.path().join(tier.mipmap_dir());
            let main = fs::read(tier_dir.join(Role::Main.file_name()))?;
            let round = fs::read(tier_dir.join(Role::Round.file_name()))?;
            let foreground = fs::read(tier_dir.join(Role::Foreground.file_name()))?;
            files += 3;

            // the three roles of a tier are byte-identical
            assert_eq!(main, round);
            assert_eq!(main, foreground);

            // valid opaque PNG of the declared dimension
            let decoded = image::load_from_memory(&main)?;
            assert_eq!(decoded.color(), image::ColorType::Rgb8);
            assert_eq!((decoded.width(), decoded.height()), (tier.size, tier.size));
        }
        assert_eq!(files, 15);
        Ok(())
    }

    #[test]
    fn test_rerun_overwrites_deterministically() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let flower = Flower::default();
        write_tiers(dir.path(), |tier| Ok(flower.render(tier)))?;
        let first = fs::read(dir.path().join("mipmap-mdpi").join("ic_launcher.png"))?;
        write_tiers(dir.path(), |tier| Ok(flower.render(tier)))?;
        let second = fs::read(dir.path().join("mipmap-mdpi").join("ic_launcher.png"))?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_render_failure_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_tiers(dir.path(), |tier| {
            if tier.density == "xhdpi" {
                Err(Error::Io(std::io::Error::other("source bitmap missing")))
            } else {
                Ok(Canvas::new(tier.size))
            }
        });
        assert!(result.is_err());
        // tiers before the failure keep their output, nothing is rolled back
        assert!(dir.path().join("mipmap-mdpi/ic_launcher.png").exists());
        assert!(dir.path().join("mipmap-hdpi/ic_launcher_round.png").exists());
        assert!(!dir.path().join("mipmap-xhdpi").exists());
        assert!(!dir.path().join("mipmap-xxhdpi").exists());
    }
}
