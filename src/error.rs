//! Error types for forum-extract.
//!
//! This module defines the error types returned by extraction and
//! post assembly operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller supplied zero or two selector kinds, or an unusable tag name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The depth counter never returned to zero before the end of the document.
    #[error("Unbalanced markup: <{tag}> opened before byte {offset} is never closed (depth {depth} at end of document)")]
    UnbalancedMarkup {
        /// Tag name being balanced.
        tag: String,
        /// Byte offset just past the matched opening tag.
        offset: usize,
        /// Nesting depth left open when the scan hit the end of the document.
        depth: usize,
    },

    /// Parallel field sequences for one page have different lengths.
    #[error("Field count mismatch: {titles} titles, {authors} authors, {published} dates, {contents} contents")]
    DataMismatch {
        titles: usize,
        authors: usize,
        published: usize,
        contents: usize,
    },

    /// A matched tag carried neither a class nor an id selector.
    #[error("Unsupported attribute: {0}")]
    UnsupportedAttribute(String),

    /// A post date did not follow the platform's date format.
    #[error("Invalid date {input:?} (expected format {format:?}): {source}")]
    InvalidDate {
        input: String,
        format: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    /// A platform container was missing a field it is expected to hold.
    #[error("Missing {field} in {platform} post container")]
    MissingField {
        field: &'static str,
        platform: &'static str,
    },

    /// Reading a page or writing results failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serializing posts failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
