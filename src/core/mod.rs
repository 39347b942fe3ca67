//! Core domain types for list extraction
//!
//! Plain data with validation at construction; no file or regex access here.

mod ident;
mod layout;
mod list;

pub use ident::{CIdent, IdentError};
pub use layout::{ListLayout, WEIGHTED_MARKER};
pub use list::{ExtractedList, ListSpec};
