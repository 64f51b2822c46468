//! Utility functions for Markdown generation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{PastedownError, Result};

static HEADING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^h([1-6])$").unwrap());

static MARKDOWN_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\\`*_{}\[\]()#+\-.!|]").unwrap());

/// Repeat a string n times
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Level of a heading tag (`h1` → 1 … `h6` → 6)
pub fn heading_level(tag: &str) -> Result<usize> {
    HEADING_TAG
        .captures(tag)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| PastedownError::InvalidHeading(tag.to_string()))
}

/// Escape markdown special characters
pub fn escape_markdown(text: &str) -> String {
    MARKDOWN_SPECIAL.replace_all(text, r"\$0").into_owned()
}
