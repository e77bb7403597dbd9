//! Decoder table parsing

use super::{CODE_COUNT, DecoderTable, TABLE_SIZE};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a serialized decoder table from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or holds fewer than
/// [`TABLE_SIZE`] bytes.
/// Returns [`Error::InvalidSymbolLength`] if a symbol length is outside `1..=8`.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::InvalidSymbolLength`]: crate::Error::InvalidSymbolLength
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<DecoderTable> {
    let path = path.as_ref();
    tracing::debug!("Reading decoder table from {}", path.display());
    let file = File::open(path)?;
    read_table_from(BufReader::new(file))
}

/// Parse a decoder table from the start of `data`
///
/// Only the first [`TABLE_SIZE`] bytes are consumed; anything after them is
/// left to the caller.
///
/// # Errors
///
/// Returns [`Error::TableTooShort`] if `data` is shorter than [`TABLE_SIZE`].
/// Returns [`Error::InvalidSymbolLength`] if a symbol length is outside `1..=8`.
///
/// [`Error::TableTooShort`]: crate::Error::TableTooShort
/// [`Error::InvalidSymbolLength`]: crate::Error::InvalidSymbolLength
pub fn parse_table_bytes(data: &[u8]) -> Result<DecoderTable> {
    if data.len() < TABLE_SIZE {
        return Err(Error::TableTooShort {
            expected: TABLE_SIZE,
            found: data.len(),
        });
    }
    read_table_from(&data[..TABLE_SIZE])
}

/// Read exactly [`TABLE_SIZE`] bytes from `reader` and build the table
///
/// # Errors
///
/// Returns [`Error::Io`] if the reader fails or ends early.
/// Returns [`Error::InvalidSymbolLength`] if a symbol length is outside `1..=8`.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::InvalidSymbolLength`]: crate::Error::InvalidSymbolLength
pub fn read_table_from<R: Read>(mut reader: R) -> Result<DecoderTable> {
    // Only bit 0 of the flag byte carries meaning
    let zero_terminated = reader.read_u8()? & 1 == 1;

    let mut lengths = [0u8; CODE_COUNT];
    reader.read_exact(&mut lengths)?;

    let mut words = [0u64; CODE_COUNT];
    reader.read_u64_into::<LittleEndian>(&mut words)?;

    let table = DecoderTable::from_parts(zero_terminated, lengths, words)?;
    tracing::debug!(
        "Parsed decoder table ({} bytes, zero_terminated: {})",
        TABLE_SIZE,
        zero_terminated
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with(flag: u8, first_len: u8, first_word: u64) -> Vec<u8> {
        let mut data = vec![flag];
        data.push(first_len);
        data.extend(std::iter::repeat_n(1u8, CODE_COUNT - 1));
        data.extend_from_slice(&first_word.to_le_bytes());
        data.extend(std::iter::repeat_n(0u8, (CODE_COUNT - 1) * 8));
        data
    }

    #[test]
    fn test_parse_reads_little_endian_symbols() {
        let data = layout_with(0, 3, u64::from_le_bytes(*b"abcXXXXX"));
        let table = parse_table_bytes(&data).unwrap();

        assert!(!table.is_zero_terminated());
        assert_eq!(table.symbol(0), Some(&b"abc"[..]));
        assert_eq!(table.symbol(1), Some(&[0u8][..]));
    }

    #[test]
    fn test_parse_honours_only_flag_bit_zero() {
        let table = parse_table_bytes(&layout_with(0xFE, 1, 0)).unwrap();
        assert!(!table.is_zero_terminated());

        let table = parse_table_bytes(&layout_with(0x03, 1, 0)).unwrap();
        assert!(table.is_zero_terminated());
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let mut data = layout_with(1, 2, 0x6261);
        data.extend_from_slice(b"payload follows");
        let table = parse_table_bytes(&data).unwrap();
        assert_eq!(table.symbol(0), Some(&b"ab"[..]));
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let data = layout_with(0, 1, 0);
        let err = parse_table_bytes(&data[..TABLE_SIZE - 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::TableTooShort { expected: TABLE_SIZE, found } if found == TABLE_SIZE - 1
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_length() {
        let err = parse_table_bytes(&layout_with(0, 0, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidSymbolLength { code: 0, length: 0 }));
    }

    #[test]
    fn test_reader_reports_truncation_as_io() {
        let data = layout_with(0, 1, 0);
        let err = read_table_from(&data[..100]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
