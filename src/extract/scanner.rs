//! Layout-specific list scanners
//!
//! A scanner finds the block belonging to a named list, then pulls string
//! items out of that block. Both steps are plain regex matches over the
//! source text; nothing is parsed as Python.

use crate::core::{ListLayout, WEIGHTED_MARKER};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// `("Aaron", 0.006741589)`: a letters-only name followed by a numeric weight
    static ref WEIGHTED_ITEM: Regex = Regex::new(r#"\(?"([A-Za-z]+)",\s*[\d.]+"#).unwrap();
    /// `"alias"`: letters and whitespace only
    static ref PLAIN_ITEM: Regex = Regex::new(r#""([a-zA-Z\s]+)""#).unwrap();
}

/// Locates a named list in source text and extracts its items
pub trait Scanner {
    /// Pattern whose first capture group is the body of the list named `name`
    ///
    /// # Errors
    /// Returns a regex error if the compiled pattern exceeds size limits.
    fn block_pattern(&self, name: &str) -> Result<Regex, regex::Error>;

    /// Pattern whose first capture group is one item inside a list body
    fn item_pattern(&self) -> &Regex;

    /// Scan `content` for the list named `name`
    ///
    /// Returns `Ok(None)` when the list cannot be located. Items keep source
    /// order and duplicates are preserved.
    ///
    /// # Errors
    /// Returns a regex error if the block pattern cannot be compiled.
    fn scan(&self, content: &str, name: &str) -> Result<Option<Vec<String>>, regex::Error> {
        let block_re = self.block_pattern(name)?;
        debug!(pattern = block_re.as_str(), "scanning for list '{name}'");

        let Some(block) = block_re.captures(content).and_then(|caps| caps.get(1)) else {
            return Ok(None);
        };
        debug!(bytes = block.len(), "matched block for list '{name}'");

        let items = self
            .item_pattern()
            .captures_iter(block.as_str())
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        Ok(Some(items))
    }
}

/// Scanner for `name = OrderedDict(( ("Name", weight), ... ))`
pub struct WeightedScanner;

impl Scanner for WeightedScanner {
    fn block_pattern(&self, name: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!(
            r"(?s)\b{}\s*=\s*OrderedDict\s*\(\s*\((.*?)\)\s*\)",
            regex::escape(name)
        ))
    }

    fn item_pattern(&self) -> &Regex {
        &WEIGHTED_ITEM
    }
}

/// Scanner for `name = ( "word", ... )`
pub struct PlainScanner;

impl Scanner for PlainScanner {
    fn block_pattern(&self, name: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!(r"(?s)\b{}\s*=\s*\((.*?)\)", regex::escape(name)))
    }

    fn item_pattern(&self) -> &Regex {
        &PLAIN_ITEM
    }
}

/// Enum wrapper over the concrete scanners
///
/// Keeps layout selection a runtime decision with static dispatch.
pub enum ScannerType {
    Weighted(WeightedScanner),
    Plain(PlainScanner),
}

impl ScannerType {
    /// Pick the scanner for `layout`, detecting from `content` when `Auto`
    #[must_use]
    pub fn for_content(layout: ListLayout, content: &str) -> Self {
        match layout {
            ListLayout::Weighted => Self::Weighted(WeightedScanner),
            ListLayout::Plain => Self::Plain(PlainScanner),
            ListLayout::Auto if content.contains(WEIGHTED_MARKER) => {
                Self::Weighted(WeightedScanner)
            }
            ListLayout::Auto => Self::Plain(PlainScanner),
        }
    }

    /// Layout this scanner reads
    #[must_use]
    pub const fn layout(&self) -> ListLayout {
        match self {
            Self::Weighted(_) => ListLayout::Weighted,
            Self::Plain(_) => ListLayout::Plain,
        }
    }
}

impl Scanner for ScannerType {
    fn block_pattern(&self, name: &str) -> Result<Regex, regex::Error> {
        match self {
            Self::Weighted(s) => s.block_pattern(name),
            Self::Plain(s) => s.block_pattern(name),
        }
    }

    fn item_pattern(&self) -> &Regex {
        match self {
            Self::Weighted(s) => s.item_pattern(),
            Self::Plain(s) => s.item_pattern(),
        }
    }
}
