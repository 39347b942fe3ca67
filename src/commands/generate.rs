//! Header generation command
//!
//! Extracts every configured list and writes the C header.

use super::CommandError;
use crate::core::ExtractedList;
use crate::extract::extract_all;
use crate::manifest::JobConfig;
use crate::output::{render_header, write_header};
use std::path::PathBuf;
use tracing::info;

/// Options for a generate run
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateConfig {
    /// Abort instead of emitting empty arrays for lists that cannot be found
    pub strict: bool,
    /// Render the header but do not write it to disk
    pub dry_run: bool,
}

/// Result of a generate run
#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub written: bool,
    pub header: String,
    pub lists: Vec<ExtractedList>,
}

impl GenerateReport {
    /// Lists that could not be located and were emitted empty
    pub fn missing(&self) -> impl Iterator<Item = &ExtractedList> {
        self.lists.iter().filter(|l| !l.found)
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.missing().next().is_some()
    }
}

/// Run extraction for `job` and produce the header
///
/// Missing lists are emitted as empty arrays unless `config.strict` is set.
///
/// # Errors
///
/// Returns an error if:
/// - A source file cannot be read
/// - `config.strict` is set and any list is missing
/// - The header cannot be written
pub fn generate(job: &JobConfig, config: GenerateConfig) -> Result<GenerateReport, CommandError> {
    let lists = extract_all(&job.root, &job.lists)?;

    if config.strict {
        let missing: Vec<String> = lists
            .iter()
            .filter(|l| !l.found)
            .map(|l| l.symbol.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CommandError::MissingLists(missing));
        }
    }

    let header = render_header(&job.guard, &lists);

    let written = if config.dry_run {
        false
    } else {
        write_header(&job.output, &header).map_err(|source| CommandError::Write {
            path: job.output.clone(),
            source,
        })?;
        info!(path = %job.output.display(), lists = lists.len(), "wrote header");
        true
    };

    Ok(GenerateReport {
        output: job.output.clone(),
        written,
        header,
        lists,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CIdent, ListLayout, ListSpec};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const PERSON: &str = r#"from collections import OrderedDict

first_names_male = OrderedDict(
    (
        ("Aaron", 0.006741589),
        ("Adam", 0.002148),
    )
)

first_names_female = OrderedDict(
    (
        ("Abigail", 0.004346),
    )
)

last_names = OrderedDict(
    (
        ("Smith", 0.021712045),
        ("Johnson", 0.01696938),
        ("Williams", 0.014016962),
    )
)
"#;

    const LOREM: &str = r#"word_list = (
    "alias",
    "consequatur",
    "aut",
    "perferendis",
)
"#;

    fn faker_tree(person: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let providers = dir.path().join("faker/providers");
        fs::create_dir_all(providers.join("person/en_US")).unwrap();
        fs::create_dir_all(providers.join("lorem/en_US")).unwrap();
        fs::write(providers.join("person/en_US/__init__.py"), person).unwrap();
        fs::write(providers.join("lorem/en_US/__init__.py"), LOREM).unwrap();
        dir
    }

    fn job_for(root: &Path) -> JobConfig {
        let mut job = JobConfig::defaults().unwrap();
        job.root = root.to_path_buf();
        job.output = root.join("out/faker_data.h");
        job
    }

    #[test]
    fn generate_default_job() {
        let dir = faker_tree(PERSON);
        let job = job_for(dir.path());

        let report = generate(&job, GenerateConfig::default()).unwrap();

        assert!(report.written);
        assert!(!report.is_degraded());
        let counts: Vec<usize> = report.lists.iter().map(ExtractedList::len).collect();
        assert_eq!(counts, vec![2, 1, 3, 4]);

        let written = fs::read_to_string(&job.output).unwrap();
        assert_eq!(written, report.header);
        assert!(written.starts_with("#ifndef FAKER_DATA_H\n#define FAKER_DATA_H\n\n"));
        assert!(written.contains("static const int faker_words_count = 4;"));
        assert!(written.ends_with("#endif // FAKER_DATA_H\n"));
    }

    #[test]
    fn generate_missing_list_degrades() {
        let person = PERSON.replace("first_names_female", "first_names_nonbinary");
        let dir = faker_tree(&person);
        let job = job_for(dir.path());

        let report = generate(&job, GenerateConfig::default()).unwrap();

        assert!(report.written);
        assert!(report.is_degraded());
        let missing: Vec<&str> = report.missing().map(|l| l.symbol.as_str()).collect();
        assert_eq!(missing, vec!["faker_first_names_female"]);
        assert!(
            report
                .header
                .contains("static const int faker_first_names_female_count = 0;")
        );
    }

    #[test]
    fn generate_strict_aborts_without_writing() {
        let person = PERSON.replace("last_names", "surnames");
        let dir = faker_tree(&person);
        let job = job_for(dir.path());

        let config = GenerateConfig {
            strict: true,
            dry_run: false,
        };
        let err = generate(&job, config).unwrap_err();

        assert!(matches!(&err, CommandError::MissingLists(m) if m == &["faker_last_names"]));
        assert!(!job.output.exists());
    }

    #[test]
    fn generate_dry_run_does_not_write() {
        let dir = faker_tree(PERSON);
        let job = job_for(dir.path());

        let config = GenerateConfig {
            strict: false,
            dry_run: true,
        };
        let report = generate(&job, config).unwrap();

        assert!(!report.written);
        assert!(report.header.contains("\"Williams\","));
        assert!(!job.output.exists());
    }

    #[test]
    fn generate_unreadable_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_for(dir.path());

        let err = generate(&job, GenerateConfig::default()).unwrap_err();
        assert!(matches!(err, CommandError::Extract(_)));
    }

    #[test]
    fn generate_custom_job() {
        let dir = faker_tree(PERSON);
        let job = JobConfig {
            root: dir.path().to_path_buf(),
            output: dir.path().join("names.h"),
            guard: CIdent::new("NAMES_H").unwrap(),
            lists: vec![ListSpec::new(
                CIdent::new("surnames").unwrap(),
                "faker/providers/person/en_US/__init__.py",
                "last_names",
                ListLayout::Weighted,
            )],
        };

        generate(&job, GenerateConfig::default()).unwrap();

        let expected = "\
#ifndef NAMES_H
#define NAMES_H

static const char *surnames[] = {
    \"Smith\",
    \"Johnson\",
    \"Williams\",
};

static const int surnames_count = 3;

#endif // NAMES_H
";
        assert_eq!(fs::read_to_string(&job.output).unwrap(), expected);
    }
}
