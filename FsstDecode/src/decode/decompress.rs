//! Single-string FSST decompression

use super::token::{Token, tokens};
use crate::table::DecoderTable;

/// Decompress one string into `output`.
///
/// Returns the full decompressed length, which may exceed `output.len()`.
/// In that case only the first `output.len()` bytes were written and the
/// caller should retry with a buffer at least as large as the return value.
/// When the table is zero-terminated and the output is full, its last byte
/// is forced to `0`.
///
/// A trailing escape marker with no literal after it is ignored.
pub fn decompress(table: &DecoderTable, input: &[u8], output: &mut [u8]) -> usize {
    let capacity = output.len();
    let mut written = 0usize;

    for token in tokens(input) {
        match token {
            Token::Symbol(code) => {
                let (len, slot) = table.entry(code);
                let end = written + len;
                // Clip at the buffer boundary; None once already past it
                if let Some(dst) = output.get_mut(written..end.min(capacity)) {
                    dst.copy_from_slice(&slot[..dst.len()]);
                }
                written = end;
            }
            Token::Escape(literal) => {
                if let Some(byte) = output.get_mut(written) {
                    *byte = literal;
                }
                written += 1;
            }
        }
    }

    if written >= capacity && table.is_zero_terminated() {
        if let Some(last) = output.last_mut() {
            *last = 0;
        }
    }

    written
}

/// Full decompressed length of `input` without writing anything.
pub fn decompressed_len(table: &DecoderTable, input: &[u8]) -> usize {
    tokens(input).map(|token| token.decoded_len(table)).sum()
}

/// Decompress one string into a freshly allocated buffer.
pub fn decompress_to_vec(table: &DecoderTable, input: &[u8]) -> Vec<u8> {
    let len = decompressed_len(table, input);

    // One spare byte so a complete decode never hits the terminator override
    let mut out = vec![0u8; len + 1];
    let written = decompress(table, input, &mut out);
    debug_assert_eq!(written, len);
    out.truncate(len);

    tracing::trace!("Decompressed {} bytes into {}", input.len(), len);
    out
}
