use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel sizes served by Vanillicon v1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported size tier: {0}")]
pub struct UnsupportedSize(pub u32);

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    /// Smallest tier that covers `requested`, else the largest tier.
    ///
    /// Total over all integers: zero and negative sizes land on `Small`.
    pub fn from_requested(requested: i64) -> Self {
        if requested <= 50 {
            SizeTier::Small
        } else if requested <= 100 {
            SizeTier::Medium
        } else {
            SizeTier::Large
        }
    }

    pub fn pixels(self) -> u32 {
        match self {
            SizeTier::Small => 50,
            SizeTier::Medium => 100,
            SizeTier::Large => 200,
        }
    }
}

impl From<SizeTier> for u32 {
    fn from(tier: SizeTier) -> Self {
        tier.pixels()
    }
}

impl TryFrom<u32> for SizeTier {
    type Error = UnsupportedSize;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        SizeTier::ALL
            .into_iter()
            .find(|tier| tier.pixels() == pixels)
            .ok_or(UnsupportedSize(pixels))
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels())
    }
}
