//! FSST string decompression
//!
//! Decoding is a pure function of the table and the compressed bytes, so any
//! number of threads may decode against one shared [`DecoderTable`].
//!
//! [`DecoderTable`]: crate::table::DecoderTable

mod decompress;
mod token;

pub use decompress::{decompress, decompress_to_vec, decompressed_len};
pub use token::{Token, Tokens, check_stream, tokens};
