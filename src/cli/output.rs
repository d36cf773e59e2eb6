use std::path::Path;

use serde::Serialize;

use crate::convert::ConversionResult;

/// Format a result as minified JSON.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Format an error as JSON.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    format_json(&serde_json::json!({ "error": err.to_string() }))
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

/// Human-readable lines reporting a conversion outcome.
pub fn format_outcome(input: &Path, result: &ConversionResult) -> String {
    if result.success {
        format!(
            "Successfully converted '{}' to '{}'.\nOutput saved to: {}",
            file_name(input),
            file_name(Path::new(&result.message)),
            result.message
        )
    } else {
        format!("Error: {}", result.message)
    }
}
