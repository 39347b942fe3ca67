//! Source check command
//!
//! Runs extraction without writing anything, to see whether an updated faker
//! checkout still has every list in a recognizable shape.

use crate::core::ExtractedList;
use crate::extract::{ExtractError, extract_all};
use crate::manifest::JobConfig;

/// Result of checking the sources of a job
#[derive(Debug)]
pub struct CheckReport {
    pub lists: Vec<ExtractedList>,
}

impl CheckReport {
    /// True when every list was located
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.lists.iter().all(|l| l.found)
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.lists.iter().filter(|l| !l.found).count()
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.lists.iter().map(ExtractedList::len).sum()
    }
}

/// Extract every list of `job` and report what was found
///
/// # Errors
///
/// Returns an error if a source file cannot be read.
pub fn check_sources(job: &JobConfig) -> Result<CheckReport, ExtractError> {
    let lists = extract_all(&job.root, &job.lists)?;
    Ok(CheckReport { lists })
}
