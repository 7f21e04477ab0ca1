pub mod identifiers;
pub mod size_tier;

pub use identifiers::{IdHash, Identifier};
pub use size_tier::{SizeTier, UnsupportedSize};
