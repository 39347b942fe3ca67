//! Generated C header
//!
//! Emits one `static const char *<symbol>[]` array and one
//! `static const int <symbol>_count` per list, inside an include guard.

use crate::core::{CIdent, ExtractedList};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A header ready to be rendered
pub struct HeaderFile<'a> {
    guard: &'a CIdent,
    lists: &'a [ExtractedList],
}

impl<'a> HeaderFile<'a> {
    #[must_use]
    pub const fn new(guard: &'a CIdent, lists: &'a [ExtractedList]) -> Self {
        Self { guard, lists }
    }
}

impl fmt::Display for HeaderFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.guard;
        writeln!(f, "#ifndef {guard}")?;
        writeln!(f, "#define {guard}")?;
        writeln!(f)?;

        for list in self.lists {
            writeln!(f, "static const char *{}[] = {{", list.symbol)?;
            for item in &list.items {
                writeln!(f, "    \"{}\",", escape_c(item))?;
            }
            writeln!(f, "}};")?;
            writeln!(f)?;
            writeln!(
                f,
                "static const int {} = {};",
                list.symbol.count_symbol(),
                list.len()
            )?;
            writeln!(f)?;
        }

        writeln!(f, "#endif // {guard}")
    }
}

/// Render the header text for `lists` guarded by `guard`
///
/// # Examples
/// ```
/// use faker_extract::core::{CIdent, ExtractedList};
/// use faker_extract::output::render_header;
///
/// let guard = CIdent::new("DATA_H").unwrap();
/// let lists = vec![ExtractedList::found(
///     CIdent::new("words").unwrap(),
///     vec!["alpha".to_string()],
/// )];
/// let header = render_header(&guard, &lists);
/// assert!(header.contains("static const int words_count = 1;"));
/// ```
#[must_use]
pub fn render_header(guard: &CIdent, lists: &[ExtractedList]) -> String {
    HeaderFile::new(guard, lists).to_string()
}

/// Write rendered header text to `path`, creating parent directories
///
/// # Errors
/// Returns an I/O error if a directory or the file cannot be written.
pub fn write_header(path: &Path, header: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, header)
}

/// Escape text for use inside a C string literal
fn escape_c(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> CIdent {
        CIdent::new(s).unwrap()
    }

    fn list(symbol: &str, items: &[&str]) -> ExtractedList {
        ExtractedList::found(
            ident(symbol),
            items.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn header_exact_layout() {
        let lists = vec![
            list("faker_first_names_male", &["Aaron", "Adam"]),
            list("faker_words", &["alias"]),
        ];
        let header = render_header(&ident("FAKER_DATA_H"), &lists);

        let expected = "\
#ifndef FAKER_DATA_H
#define FAKER_DATA_H

static const char *faker_first_names_male[] = {
    \"Aaron\",
    \"Adam\",
};

static const int faker_first_names_male_count = 2;

static const char *faker_words[] = {
    \"alias\",
};

static const int faker_words_count = 1;

#endif // FAKER_DATA_H
";
        assert_eq!(header, expected);
    }

    #[test]
    fn header_missing_list_renders_empty() {
        let lists = vec![ExtractedList::missing(ident("faker_last_names"))];
        let header = render_header(&ident("FAKER_DATA_H"), &lists);

        assert!(header.contains("static const char *faker_last_names[] = {\n};\n"));
        assert!(header.contains("static const int faker_last_names_count = 0;"));
    }

    #[test]
    fn header_without_lists_is_just_guards() {
        let header = render_header(&ident("EMPTY_H"), &[]);
        assert_eq!(header, "#ifndef EMPTY_H\n#define EMPTY_H\n\n#endif // EMPTY_H\n");
    }

    #[test]
    fn header_escapes_items() {
        let lists = vec![list("words", &["ice\ncream", "tab\there"])];
        let header = render_header(&ident("W_H"), &lists);

        assert!(header.contains("    \"ice\\ncream\",\n"));
        assert!(header.contains("    \"tab\\there\",\n"));
    }

    #[test]
    fn escape_c_passthrough() {
        assert!(matches!(escape_c("plain words"), Cow::Borrowed("plain words")));
    }

    #[test]
    fn escape_c_quotes_and_backslashes() {
        assert_eq!(escape_c(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
    }

    #[test]
    fn write_header_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src/faker/faker_data.h");
        let lists = vec![list("faker_words", &["alias"])];

        let header = render_header(&ident("FAKER_DATA_H"), &lists);

        write_header(&path, &header).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), header);
    }

    #[test]
    fn write_header_writes_text_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.h");

        write_header(&path, "/* hand edited */\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "/* hand edited */\n");
    }
}
