//! Error types for `fsst-decode`

use thiserror::Error;

/// The error type for `fsst-decode` operations.
///
/// Decompression itself is infallible; these errors come from building,
/// loading, or strictly validating inputs.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error while reading or writing a serialized table.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Decoder Table Errors ====================
    /// The serialized table is shorter than the fixed layout.
    #[error("decoder table too short: expected {expected} bytes, found {found}")]
    TableTooShort {
        /// Bytes required by the layout.
        expected: usize,
        /// Bytes actually supplied.
        found: usize,
    },

    /// A code was given a symbol length outside `1..=8`.
    #[error("invalid symbol length {length} for code {code} (must be 1-8)")]
    InvalidSymbolLength {
        /// The offending code.
        code: u8,
        /// The length found for it.
        length: usize,
    },

    /// More symbols were supplied than there are codes.
    #[error("too many symbols: {count} (at most 255 codes available)")]
    TooManySymbols {
        /// The number of symbols supplied.
        count: usize,
    },

    // ==================== Compressed Stream Errors ====================
    /// The stream ends with an escape marker that has no literal byte.
    #[error("dangling escape marker at offset {offset}")]
    DanglingEscape {
        /// Offset of the escape byte within the compressed input.
        offset: usize,
    },
}

/// A specialized Result type for `fsst-decode` operations.
pub type Result<T> = std::result::Result<T, Error>;
