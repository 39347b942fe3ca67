//! List extraction from faker provider sources
//!
//! Heuristic regex matching over Python source text. Only the two layouts
//! faker uses for its name and word tables are recognized.

mod extractor;
pub mod scanner;

pub use extractor::{ExtractError, extract_all, extract_from_file, extract_list};
pub use scanner::{PlainScanner, Scanner, ScannerType, WeightedScanner};
