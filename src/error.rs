//! Error type shared by configuration loading and attribute list parsing
//!
//! Color resolution and sequence rendering are total and never return these.

/// Errors produced at the edges of the crate (files, JSON, user input)
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Text that does not parse as an 8-bit attribute code
    #[error("invalid attribute code: {input:?}")]
    InvalidCode { input: String },
    /// A code outside every SGR category, raised only by strict validation
    #[error("unrecognized attribute code: {0}")]
    UnrecognizedAttribute(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
