//! Operations shared by the CLI commands that do not convert files.

pub mod supported;

pub use supported::{list_supported, InputInfo, OcrStatus, SupportedResult};
