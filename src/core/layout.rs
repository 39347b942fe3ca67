//! Source list layouts
//!
//! Faker providers declare their tables in one of two shapes:
//! - Weighted: `name = OrderedDict(( ("Aaron", 0.0067), ... ))`
//! - Plain: `name = ( "alpha", "beta", ... )`

use serde::Deserialize;
use std::fmt;

/// Marker whose presence anywhere in a source file selects the weighted layout
pub const WEIGHTED_MARKER: &str = "OrderedDict";

/// Textual layout of a list inside a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    /// Detect from file content (default)
    #[default]
    Auto,
    /// Name/weight pairs wrapped in an `OrderedDict`
    Weighted,
    /// Tuple of bare string literals
    Plain,
}

impl ListLayout {
    /// Detect the layout of a whole file
    ///
    /// Detection is file-wide: one `OrderedDict` anywhere makes every list in
    /// the file weighted.
    ///
    /// # Examples
    /// ```
    /// use faker_extract::core::ListLayout;
    ///
    /// assert_eq!(ListLayout::detect("x = OrderedDict(())"), ListLayout::Weighted);
    /// assert_eq!(ListLayout::detect("x = (\"a\",)"), ListLayout::Plain);
    /// ```
    #[must_use]
    pub fn detect(content: &str) -> Self {
        if content.contains(WEIGHTED_MARKER) {
            Self::Weighted
        } else {
            Self::Plain
        }
    }

    /// Resolve `Auto` against file content; explicit layouts pass through
    #[must_use]
    pub fn resolve(self, content: &str) -> Self {
        match self {
            Self::Auto => Self::detect(content),
            explicit => explicit,
        }
    }

    /// Lowercase name as used on the command line and in manifests
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Weighted => "weighted",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for ListLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
