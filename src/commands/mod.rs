//! Command implementations

pub mod check;
pub mod generate;

pub use check::{CheckReport, check_sources};
pub use generate::{GenerateConfig, GenerateReport, generate};

use crate::extract::ExtractError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from running a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("could not locate lists: {}", .0.join(", "))]
    MissingLists(Vec<String>),
    #[error("failed to write header {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
