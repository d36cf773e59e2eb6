// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - module_name_repetitions: Extractor types read better with their kind in the name
// - needless_pass_by_value: Sometimes clearer semantically
// - option_if_let_else: if-let is often clearer
// - case_sensitive_file_extension_comparisons: Extensions are normalized upstream
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::case_sensitive_file_extension_comparisons
)]

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod models;
pub mod operations;
pub mod serialize;

pub use convert::{convert_file, ConversionResult, Converter};
pub use error::{ConvertError, Result};
pub use models::{InputKind, OutputFormat};
