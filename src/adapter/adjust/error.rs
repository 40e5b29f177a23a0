//! Adjust fetch errors

use thiserror::Error;

/// Errors raised while fetching or parsing one app's KPI report.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for app '{app}' failed: {source}")]
    Request {
        app: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("empty response for app '{app}'")]
    EmptyResponse { app: String },

    #[error("malformed CSV for app '{app}': {source}")]
    Csv {
        app: String,
        #[source]
        source: csv::Error,
    },

    #[error("app '{app}' line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        app: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("app '{app}' line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        app: String,
        line: u64,
        column: &'static str,
        value: String,
    },
}
