//! File-level list extraction

use super::scanner::{Scanner, ScannerType};
use crate::core::{ExtractedList, ListLayout, ListSpec};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that stop extraction of a list
///
/// A list that is merely absent from its source file is not an error; see
/// [`extract_from_file`].
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read source file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not build pattern for list '{name}'")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Extract the items of the list named `name` from `content`
///
/// Returns `Ok(None)` when the list cannot be located.
///
/// # Errors
/// Returns `ExtractError::Pattern` if the search pattern cannot be compiled.
///
/// # Examples
/// ```
/// use faker_extract::core::ListLayout;
/// use faker_extract::extract::extract_list;
///
/// let source = r#"word_list = ("alpha", "beta")"#;
/// let words = extract_list(source, "word_list", ListLayout::Auto).unwrap();
/// assert_eq!(words, Some(vec!["alpha".to_string(), "beta".to_string()]));
/// ```
pub fn extract_list(
    content: &str,
    name: &str,
    layout: ListLayout,
) -> Result<Option<Vec<String>>, ExtractError> {
    let scanner = ScannerType::for_content(layout, content);
    scanner
        .scan(content, name)
        .map_err(|source| ExtractError::Pattern {
            name: name.to_string(),
            source,
        })
}

/// Read `spec.source` under `root` and extract the list it names
///
/// A list that cannot be located produces a warning and an empty
/// [`ExtractedList`] marked as not found; the caller decides whether that
/// is fatal.
///
/// # Errors
/// Returns an error if the source file cannot be read or the search
/// pattern cannot be compiled.
pub fn extract_from_file(root: &Path, spec: &ListSpec) -> Result<ExtractedList, ExtractError> {
    let path = root.join(&spec.source);
    let content = fs::read_to_string(&path).map_err(|source| ExtractError::Read {
        path: path.clone(),
        source,
    })?;

    match extract_list(&content, &spec.name, spec.layout)? {
        Some(items) => {
            info!(
                symbol = spec.symbol.as_str(),
                count = items.len(),
                "extracted {} from {}",
                spec.name,
                path.display()
            );
            Ok(ExtractedList::found(spec.symbol.clone(), items))
        }
        None => {
            warn!("Could not find {} in {}", spec.name, path.display());
            Ok(ExtractedList::missing(spec.symbol.clone()))
        }
    }
}

/// Extract every list in `specs`, in order
///
/// # Errors
/// Stops at the first source file that cannot be read.
pub fn extract_all(root: &Path, specs: &[ListSpec]) -> Result<Vec<ExtractedList>, ExtractError> {
    specs
        .iter()
        .map(|spec| extract_from_file(root, spec))
        .collect()
}
