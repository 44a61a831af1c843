// src/error.rs
//! Crate-wide error type.
//!
//! Row-level misses (`ExtractionNotFound`, `RowShape`, `LabelMismatch`) are
//! recovered by the aggregator; everything else aborts the run.

use crate::model::Category;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no row labelled {contact:?} on the {category} report")]
    ExtractionNotFound { contact: String, category: Category },

    #[error("{category} row has {found} cells (expected {expected})")]
    RowShape {
        category: Category,
        found: usize,
        expected: &'static str,
    },

    #[error("{category} row for {contact:?} starts with {found:?}")]
    LabelMismatch {
        contact: String,
        category: Category,
        found: String,
    },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("sheet auth failed: {0}")]
    Auth(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid column: {0}")]
    InvalidColumn(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport(msg.into())
    }

    /// True for failures confined to one contact's row on one page.
    pub fn is_row_level(&self) -> bool {
        matches!(
            self,
            Error::ExtractionNotFound { .. } | Error::RowShape { .. } | Error::LabelMismatch { .. }
        )
    }
}
