use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Outcome of loading the lint results file.
///
/// Read and parse failures both collapse into `Unavailable`; the underlying
/// error is logged and never crosses this boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum LintResults {
    Parsed(Value),
    Unavailable,
}

/// Zero-based source position as written by `tslint --format json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Position {
    pub line: u64,
    pub character: u64,
}

/// Lenient view of one issue record, used for display only.
///
/// Fields the linter omits stay `None`. Records that do not fit this shape
/// at all are rendered from their raw JSON instead (see the reporter).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub rule_name: String,
    pub failure: String,
    /// Path of the offending file.
    pub name: String,
    #[serde(default)]
    pub rule_severity: Option<String>,
    #[serde(default)]
    pub start_position: Option<Position>,
}

/// Read and parse the results file at `path`.
pub fn load_results(path: &Path) -> LintResults {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read lint results");
            return LintResults::Unavailable;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => LintResults::Parsed(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to parse lint results");
            LintResults::Unavailable
        }
    }
}
