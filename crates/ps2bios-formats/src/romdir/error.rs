//! Error types for ROMDIR parsing

use thiserror::Error;

/// Errors that can occur while parsing a ROMDIR table.
#[derive(Error, Debug)]
pub enum RomdirError {
    /// The image does not contain a usable directory table.
    #[error("Invalid BIOS image: {0}")]
    InvalidBiosFormat(&'static str),

    /// A fixed-size read ran past the end of the image.
    #[error("Truncated read at offset {offset:#x}: expected {expected} bytes")]
    TruncatedRead {
        /// Absolute offset where the read started
        offset: u64,
        /// Number of bytes the format requires at this offset
        expected: usize,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `BinRW` parsing/writing error.
    #[error("Binary format error: {0}")]
    BinRw(#[from] binrw::Error),
}

/// Type alias for ROMDIR operation results.
pub type Result<T> = std::result::Result<T, RomdirError>;
