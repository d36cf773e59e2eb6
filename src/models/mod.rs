pub mod format;
pub mod kind;

pub use format::OutputFormat;
pub use kind::InputKind;
