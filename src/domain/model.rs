use serde::{Deserialize, Serialize};
use std::fmt;

/// A banner size in the mediation host's taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdSize {
    width: i32,
    height: i32,
}

impl AdSize {
    pub const BANNER: AdSize = AdSize::new(320, 50);
    pub const LEADERBOARD: AdSize = AdSize::new(728, 90);
    pub const MEDIUM_RECTANGLE: AdSize = AdSize::new(300, 250);
    pub const WIDE_SKYSCRAPER: AdSize = AdSize::new(160, 600);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl fmt::Display for AdSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A banner size in the Liftoff Monetize taxonomy.
///
/// Standard sizes carry fixed dimensions; `Custom` carries arbitrary
/// dimensions for requests that match no standard size. No two standard
/// variants share a dimension pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiftoffAdSize {
    BannerShort,
    Banner,
    Leaderboard,
    Mrec,
    Custom { width: i32, height: i32 },
}

impl LiftoffAdSize {
    pub fn width(&self) -> i32 {
        match self {
            LiftoffAdSize::BannerShort => 300,
            LiftoffAdSize::Banner => 320,
            LiftoffAdSize::Leaderboard => 728,
            LiftoffAdSize::Mrec => 300,
            LiftoffAdSize::Custom { width, .. } => *width,
        }
    }

    pub fn height(&self) -> i32 {
        match self {
            LiftoffAdSize::BannerShort => 50,
            LiftoffAdSize::Banner => 50,
            LiftoffAdSize::Leaderboard => 90,
            LiftoffAdSize::Mrec => 250,
            LiftoffAdSize::Custom { height, .. } => *height,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LiftoffAdSize::BannerShort => "BANNER_SHORT",
            LiftoffAdSize::Banner => "BANNER",
            LiftoffAdSize::Leaderboard => "BANNER_LEADERBOARD",
            LiftoffAdSize::Mrec => "MREC",
            LiftoffAdSize::Custom { .. } => "CUSTOM",
        }
    }
}

impl fmt::Display for LiftoffAdSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.name(), self.width(), self.height())
    }
}

/// Ad format being requested, used in host-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdFormat {
    Banner,
    Interstitial,
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdFormat::Banner => write!(f, "banner"),
            AdFormat::Interstitial => write!(f, "interstitial"),
        }
    }
}

/// Interstitial ad orientation, carried in mediation extras as a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
    #[default]
    AutoRotate,
}

impl Orientation {
    /// Unknown codes fall back to auto-rotate, matching the SDK default.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Orientation::Portrait,
            1 => Orientation::Landscape,
            _ => Orientation::AutoRotate,
        }
    }
}

/// Per-ad configuration handed to the SDK when loading an interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdConfig {
    pub orientation: Orientation,
}
