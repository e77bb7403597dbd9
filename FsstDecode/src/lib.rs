//! # fsst-decode
//!
//! A pure-Rust decoder for FSST (Fast Static Symbol Table) compressed strings.
//!
//! FSST replaces 1-8 byte symbols with single-byte codes, and escapes any
//! other byte as `255` followed by the literal. Every string decodes on its
//! own from a shared, read-only [`DecoderTable`], which makes random access
//! into columns of compressed strings cheap.
//!
//! ## Quick Start
//!
//! ```
//! use fsst_decode::prelude::*;
//!
//! let table = DecoderTable::from_symbols(false, &[b"ab"])?;
//!
//! let mut buf = [0u8; 10];
//! let len = decompress(&table, &[0, 0, 255, b'c'], &mut buf);
//! assert_eq!(&buf[..len], b"ababc");
//! # Ok::<(), fsst_decode::Error>(())
//! ```
//!
//! ### Truncated Output
//!
//! The return value is always the full decompressed length. When it exceeds
//! the buffer, only the prefix that fits was written:
//!
//! ```
//! use fsst_decode::prelude::*;
//!
//! let table = DecoderTable::from_symbols(false, &[b"hello"])?;
//!
//! let mut buf = [0u8; 3];
//! let len = decompress(&table, &[0], &mut buf);
//! assert_eq!(len, 5);
//! assert_eq!(&buf, b"hel");
//! # Ok::<(), fsst_decode::Error>(())
//! ```
//!
//! ### Loading a Table
//!
//! ```no_run
//! use fsst_decode::table::read_table;
//!
//! let table = read_table("strings.fsst")?;
//! let text = fsst_decode::decompress_to_vec(&table, &[0, 1, 2]);
//! # Ok::<(), fsst_decode::Error>(())
//! ```

pub mod decode;
pub mod error;
pub mod table;

// Re-exports for convenience
pub use decode::{decompress, decompress_to_vec, decompressed_len};
pub use error::{Error, Result};
pub use table::DecoderTable;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::decode::{
        Token, check_stream, decompress, decompress_to_vec, decompressed_len, tokens,
    };
    pub use crate::error::{Error, Result};
    pub use crate::table::{
        DecoderTable, ESCAPE_CODE, parse_table_bytes, read_table, write_table,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
