//! The fixed set of launcher icon output sizes and file roles.

/// Pairing of an Android density bucket with its launcher icon dimension
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Tier {
    /// Density bucket name as it appears in the resource directory
    pub density: &'static str,
    /// Square icon dimension in pixels
    pub size: u32,
}

/// All density tiers a launcher icon set must provide, smallest first
pub const TIERS: [Tier; 5] = [
    Tier::new("mdpi", 48),
    Tier::new("hdpi", 72),
    Tier::new("xhdpi", 96),
    Tier::new("xxhdpi", 144),
    Tier::new("xxxhdpi", 192),
];

impl Tier {
    pub const fn new(density: &'static str, size: u32) -> Self {
        Self { density, size }
    }

    /// Resource directory name holding this tier's icons
    pub fn mipmap_dir(&self) -> String {
        format!("mipmap-{}", self.density)
    }
}

/// Output file role within a tier directory.
///
/// The roles carry distinct names for the Android resource pipeline but all
/// three receive the same bitmap; no round masking or foreground trimming is
/// applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Role {
    Main,
    Round,
    Foreground,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Main, Role::Round, Role::Foreground];

    pub fn file_name(self) -> &'static str {
        match self {
            Role::Main => "ic_launcher.png",
            Role::Round => "ic_launcher_round.png",
            Role::Foreground => "ic_launcher_foreground.png",
        }
    }
}
