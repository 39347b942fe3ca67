//! Faker data extraction
//!
//! Pulls name and word tables out of faker's Python provider sources and
//! emits them as static arrays in a generated C header.
//!
//! # Quick Start
//!
//! ```rust
//! use faker_extract::core::{CIdent, ExtractedList, ListLayout};
//! use faker_extract::extract::extract_list;
//! use faker_extract::output::render_header;
//!
//! let source = r#"
//! first_names_male = OrderedDict((
//!     ("Aaron", 0.006741589),
//!     ("Adam", 0.002148),
//! ))
//! "#;
//!
//! let names = extract_list(source, "first_names_male", ListLayout::Auto)
//!     .unwrap()
//!     .unwrap_or_default();
//! let list = ExtractedList::found(CIdent::new("male_names").unwrap(), names);
//!
//! let header = render_header(&CIdent::new("NAMES_H").unwrap(), &[list]);
//! assert!(header.contains("static const int male_names_count = 2;"));
//! ```

// Core domain types
pub mod core;

// Regex list extraction
pub mod extract;

// Job configuration
pub mod manifest;

// Command implementations
pub mod commands;

// Header rendering and terminal output
pub mod output;

// Diagnostic logging
pub mod logging;
