//! Extraction jobs and their results

use super::{CIdent, ListLayout};
use std::path::PathBuf;

/// One list to pull out of a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSpec {
    /// Array symbol in the generated header
    pub symbol: CIdent,
    /// Source file, relative to the source root
    pub source: PathBuf,
    /// Variable name of the list inside the source file
    pub name: String,
    /// How the list is written; `Auto` detects it per file
    pub layout: ListLayout,
}

impl ListSpec {
    /// Describe a job reading list `name` from `source` into `symbol`
    #[must_use]
    pub fn new(
        symbol: CIdent,
        source: impl Into<PathBuf>,
        name: impl Into<String>,
        layout: ListLayout,
    ) -> Self {
        Self {
            symbol,
            source: source.into(),
            name: name.into(),
            layout,
        }
    }
}

/// Items extracted for one symbol
///
/// A list that could not be located is kept with no items and
/// `found == false`, so the header still declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedList {
    pub symbol: CIdent,
    pub items: Vec<String>,
    pub found: bool,
}

impl ExtractedList {
    #[must_use]
    pub const fn found(symbol: CIdent, items: Vec<String>) -> Self {
        Self {
            symbol,
            items,
            found: true,
        }
    }

    #[must_use]
    pub const fn missing(symbol: CIdent) -> Self {
        Self {
            symbol,
            items: Vec::new(),
            found: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> CIdent {
        CIdent::new(s).unwrap()
    }

    #[test]
    fn missing_list_is_empty() {
        let list = ExtractedList::missing(ident("faker_words"));
        assert!(!list.found);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn found_list_counts_items() {
        let list = ExtractedList::found(
            ident("faker_words"),
            vec!["alias".to_string(), "consequatur".to_string()],
        );
        assert!(list.found);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn found_list_may_be_empty() {
        let list = ExtractedList::found(ident("faker_words"), Vec::new());
        assert!(list.found);
        assert!(list.is_empty());
    }
}
