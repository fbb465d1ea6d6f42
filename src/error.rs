//! Error types for the ESPN Fantasy Basketball toolkit

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTML parsing failed: {message}")]
    Html { message: String },

    #[error("Spreadsheet export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("ESPN API returned no data")]
    NoData,

    #[error("Unknown stat window: {label}")]
    UnknownWindow { label: String },

    #[error("Unknown stat window code: {code}")]
    UnknownWindowCode { code: String },

    #[error("Unknown stat: {name}")]
    UnknownStat { name: String },

    #[error("Unknown stat code: {code}")]
    UnknownStatCode { code: String },

    #[error("Malformed table: column {column:?} has {found} rows, expected {expected}")]
    MalformedTable {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Malformed table: {found} columns, expected {expected}")]
    MalformedColumns { expected: usize, found: usize },

    #[error("Invalid entry {input:?}: {reason}")]
    InvalidEntry { input: String, reason: String },
}
