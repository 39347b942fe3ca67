//! Job configuration
//!
//! The built-in job table reproduces the faker data refresh: three weighted
//! name tables from the `en_US` person provider and the `en_US` lorem word
//! list. A TOML manifest can replace it.

use crate::core::{CIdent, IdentError, ListLayout, ListSpec};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding the checked-out faker sources
pub const DEFAULT_ROOT: &str = "temp_faker";
/// Generated header location
pub const DEFAULT_OUTPUT: &str = "src/faker/faker_data.h";
/// Include guard macro
pub const DEFAULT_GUARD: &str = "FAKER_DATA_H";

const PERSON_SOURCE: &str = "faker/providers/person/en_US/__init__.py";
const LOREM_SOURCE: &str = "faker/providers/lorem/en_US/__init__.py";

/// `(symbol, source, list name)` for the built-in job table
const DEFAULT_LISTS: &[(&str, &str, &str)] = &[
    ("faker_first_names_male", PERSON_SOURCE, "first_names_male"),
    ("faker_first_names_female", PERSON_SOURCE, "first_names_female"),
    ("faker_last_names", PERSON_SOURCE, "last_names"),
    ("faker_words", LOREM_SOURCE, "word_list"),
];

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Ident(#[from] IdentError),
    #[error("manifest declares no lists")]
    NoLists,
    #[error("symbol '{0}' is declared more than once")]
    DuplicateSymbol(String),
    #[error("symbol '{0}' collides with the length constant of another list")]
    CountCollision(String),
}

/// On-disk manifest
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub guard: Option<CIdent>,
    pub output: Option<PathBuf>,
    pub root: Option<PathBuf>,
    #[serde(default, rename = "list")]
    pub lists: Vec<ManifestList>,
}

/// One `[[list]]` table
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestList {
    pub symbol: CIdent,
    pub source: PathBuf,
    pub name: String,
    #[serde(default)]
    pub layout: ListLayout,
}

impl Manifest {
    /// Parse a manifest from TOML text
    ///
    /// # Errors
    /// Returns `ManifestError::Parse` on malformed TOML, unknown keys, or
    /// invalid identifiers.
    pub fn parse(path: &Path, text: &str) -> Result<Self, ManifestError> {
        toml::from_str(text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load a manifest from a file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Manifest, ManifestError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Manifest::parse(path, &text)
}

/// Fully resolved job: where to read, what to extract, where to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub guard: CIdent,
    pub lists: Vec<ListSpec>,
}

/// Values given on the command line; each one overrides the manifest
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub guard: Option<CIdent>,
}

impl JobConfig {
    /// The built-in faker job table
    ///
    /// # Errors
    /// Never fails in practice; identifiers are validated like any other.
    pub fn defaults() -> Result<Self, ManifestError> {
        let lists = DEFAULT_LISTS
            .iter()
            .map(|&(symbol, source, name)| {
                Ok(ListSpec::new(
                    CIdent::new(symbol)?,
                    source,
                    name,
                    ListLayout::Auto,
                ))
            })
            .collect::<Result<Vec<_>, IdentError>>()?;

        Ok(Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            guard: CIdent::new(DEFAULT_GUARD)?,
            lists,
        })
    }

    /// Build a job from a manifest, filling unset fields from the defaults
    ///
    /// # Errors
    /// Returns an error if the manifest has no lists or its symbols collide.
    pub fn from_manifest(manifest: Manifest) -> Result<Self, ManifestError> {
        let defaults = Self::defaults()?;

        let lists = manifest
            .lists
            .into_iter()
            .map(|l| ListSpec::new(l.symbol, l.source, l.name, l.layout))
            .collect();

        let config = Self {
            root: manifest.root.unwrap_or(defaults.root),
            output: manifest.output.unwrap_or(defaults.output),
            guard: manifest.guard.unwrap_or(defaults.guard),
            lists,
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve the job from an optional manifest path plus CLI overrides
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be loaded or is invalid.
    pub fn resolve(manifest: Option<&Path>, overrides: Overrides) -> Result<Self, ManifestError> {
        let config = match manifest {
            Some(path) => Self::from_manifest(load_manifest(path)?)?,
            None => Self::defaults()?,
        };
        Ok(config.with_overrides(overrides))
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(root) = overrides.root {
            self.root = root;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(guard) = overrides.guard {
            self.guard = guard;
        }
        self
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.lists.is_empty() {
            return Err(ManifestError::NoLists);
        }

        let mut symbols = FxHashSet::default();
        for spec in &self.lists {
            if !symbols.insert(spec.symbol.as_str()) {
                return Err(ManifestError::DuplicateSymbol(spec.symbol.to_string()));
            }
        }

        // `words` and `words_count` would both be declared
        for spec in &self.lists {
            let count = spec.symbol.count_symbol();
            if symbols.contains(count.as_str()) {
                return Err(ManifestError::CountCollision(count));
            }
        }

        Ok(())
    }
}
