//! Generated header and terminal output
//!
//! `header` renders the C file; `display` pretty-prints command results.

pub mod display;
pub mod header;

pub use display::{print_check_report, print_generate_report};
pub use header::{HeaderFile, render_header, write_header};
