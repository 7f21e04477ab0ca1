use std::fmt;

use regex::Regex;

use crate::types::{IdHash, SizeTier};

/// `{base_url}/{hash}_{tier}.png`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUrl {
    base_url: String,
    hash: IdHash,
    tier: SizeTier,
}

impl AvatarUrl {
    pub fn new(base_url: impl Into<String>, hash: IdHash, tier: SizeTier) -> Self {
        Self {
            base_url: base_url.into(),
            hash,
            tier,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn hash(&self) -> &IdHash {
        &self.hash
    }

    pub fn tier(&self) -> SizeTier {
        self.tier
    }
}

impl fmt::Display for AvatarUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}_{}.png", self.base_url, self.hash, self.tier)
    }
}

/// Hash and size segments captured from an existing avatar URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captured<'a> {
    pub hash: &'a str,
    pub size: &'a str,
}

/// Recognizes default-avatar settings that point at the service.
#[derive(Debug, Clone)]
pub struct DefaultPattern {
    regex: Regex,
}

impl DefaultPattern {
    pub fn new(base_url: &str) -> Result<Self, regex::Error> {
        let pattern = format!(r"{}/(.*?)_([0-9]+)\.png", regex::escape(base_url));
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// First match in `setting`, if any. The match is not anchored.
    pub fn capture<'a>(&self, setting: &'a str) -> Option<Captured<'a>> {
        let caps = self.regex.captures(setting)?;
        Some(Captured {
            hash: caps.get(1)?.as_str(),
            size: caps.get(2)?.as_str(),
        })
    }

    pub fn is_match(&self, setting: &str) -> bool {
        self.regex.is_match(setting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_splits_hash_and_size() {
        let pattern = DefaultPattern::new("https://vanillicon.com").unwrap();
        let caps = pattern
            .capture("https://vanillicon.com/abc123_100.png")
            .unwrap();
        assert_eq!(caps.hash, "abc123");
        assert_eq!(caps.size, "100");
    }

    #[test]
    fn base_url_dots_are_literal() {
        let pattern = DefaultPattern::new("https://vanillicon.com").unwrap();
        assert!(!pattern.is_match("https://vanilliconXcom/abc_50.png"));
    }

    #[test]
    fn hash_capture_is_lazy() {
        let pattern = DefaultPattern::new("https://vanillicon.com").unwrap();
        let caps = pattern
            .capture("https://vanillicon.com/a_b_200.png")
            .unwrap();
        assert_eq!(caps.hash, "a_b");
        assert_eq!(caps.size, "200");
    }

    #[test]
    fn non_numeric_size_does_not_match() {
        let pattern = DefaultPattern::new("https://vanillicon.com").unwrap();
        assert!(pattern.capture("https://vanillicon.com/abc_big.png").is_none());
    }
}
