use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;

/// Canonical string form of whoever an avatar is for.
///
/// Numeric ids, email addresses and display names all collapse into this
/// before hashing. The empty string is a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier(value)
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier(value.to_string())
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier(value.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hex SHA-1 of an identifier, truncated to a fixed length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdHash(String);

impl IdHash {
    /// Full length of a hex-encoded SHA-1 digest.
    pub const MAX_LEN: usize = 40;

    /// Hash `identifier` and keep the first `len` hex characters.
    ///
    /// `len` is clamped to [`IdHash::MAX_LEN`].
    pub fn compute(identifier: &Identifier, len: usize) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(identifier.as_str().as_bytes());

        let digest = hasher.finalize();
        let mut hex = hex::encode(digest);
        hex.truncate(len.min(Self::MAX_LEN));

        IdHash(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IdHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
