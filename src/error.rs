//! Error types for hocrtext library.

use std::io;
use thiserror::Error;

/// Result type alias for hocrtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during hOCR processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when opening, reading or seeking the source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The XML scan could not complete.
    #[error("Malformed markup at byte {position}: {message}")]
    MalformedMarkup {
        /// Byte position of the reader when the error was raised
        position: u64,
        /// Description from the underlying XML parser
        message: String,
    },

    /// The markup is well-formed but the hOCR structure is not usable.
    #[error("hOCR parsing error: {0}")]
    Hocr(String),

    /// The XML and plaintext offset lists cannot be joined.
    #[error("Page count mismatch: {xml} XML pages, {text} text pages")]
    PageCountMismatch {
        /// Number of pages found in the XML
        xml: usize,
        /// Number of pages produced as plaintext
        text: usize,
    },
}

impl Error {
    pub(crate) fn malformed(position: usize, err: impl std::fmt::Display) -> Self {
        Error::MalformedMarkup {
            position: position as u64,
            message: err.to_string(),
        }
    }
}
