//! FSST decoder table
//!
//! The read-only symbol table shared by every decompression call. Each of the
//! 255 codes maps to a 1-8 byte symbol; code 255 is reserved as the escape
//! marker and never indexes the table.
//!
//! Serialized layout (2296 bytes, little-endian):
//!
//! | Size      | Field                                   |
//! |-----------|-----------------------------------------|
//! | 1         | zero-termination flag (bit 0)           |
//! | 255       | symbol length per code, each 1-8        |
//! | 255 x 8   | symbol per code as a little-endian word |

mod reader;
mod writer;

pub use reader::{parse_table_bytes, read_table, read_table_from};
pub use writer::{write_table, write_table_to};

use crate::error::{Error, Result};

/// Escape marker: the following input byte is an uncompressed literal.
pub const ESCAPE_CODE: u8 = 255;

/// Number of codes that reference symbols (`0..=254`).
pub const CODE_COUNT: usize = 255;

/// Longest symbol a single code can represent.
pub const MAX_SYMBOL_LEN: usize = 8;

/// Size of a serialized [`DecoderTable`] in bytes.
pub const TABLE_SIZE: usize = 1 + CODE_COUNT + CODE_COUNT * MAX_SYMBOL_LEN;

/// Maps every code to the symbol it stands for.
///
/// Symbols are held in their little-endian container form: byte 0 of the
/// symbol is byte 0 of the 8-byte slot. Lengths are validated on construction,
/// so every table in existence satisfies `1 <= len <= 8` for all codes.
///
/// Equality compares the flag and the meaningful bytes of every symbol; the
/// unused tail of each 8-byte slot is ignored.
#[derive(Clone, Copy)]
pub struct DecoderTable {
    zero_terminated: bool,
    lengths: [u8; CODE_COUNT],
    symbols: [[u8; MAX_SYMBOL_LEN]; CODE_COUNT],
}

impl DecoderTable {
    /// Build a table from per-code lengths and little-endian symbol words.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSymbolLength`] if any length is outside `1..=8`.
    pub fn from_parts(
        zero_terminated: bool,
        lengths: [u8; CODE_COUNT],
        words: [u64; CODE_COUNT],
    ) -> Result<Self> {
        validate_lengths(&lengths)?;
        Ok(Self {
            zero_terminated,
            lengths,
            symbols: words.map(u64::to_le_bytes),
        })
    }

    /// Build a table assigning codes `0, 1, 2, ...` to `symbols` in order.
    ///
    /// Codes past the end of `symbols` decode to a single `0x00` byte.
    ///
    /// # Errors
    /// Returns [`Error::TooManySymbols`] for more than 255 symbols, or
    /// [`Error::InvalidSymbolLength`] for an empty or over-long symbol.
    pub fn from_symbols(zero_terminated: bool, symbols: &[&[u8]]) -> Result<Self> {
        if symbols.len() > CODE_COUNT {
            return Err(Error::TooManySymbols { count: symbols.len() });
        }

        let mut table = Self {
            zero_terminated,
            lengths: [1; CODE_COUNT],
            symbols: [[0; MAX_SYMBOL_LEN]; CODE_COUNT],
        };

        for (code, symbol) in symbols.iter().enumerate() {
            if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
                return Err(Error::InvalidSymbolLength {
                    code: code as u8,
                    length: symbol.len(),
                });
            }
            table.lengths[code] = symbol.len() as u8;
            table.symbols[code][..symbol.len()].copy_from_slice(symbol);
        }

        Ok(table)
    }

    /// Whether truncated output is forced to end in a zero byte.
    #[inline]
    pub fn is_zero_terminated(&self) -> bool {
        self.zero_terminated
    }

    /// Byte length of the symbol behind `code`, or `None` for the escape code.
    #[inline]
    pub fn symbol_len(&self, code: u8) -> Option<usize> {
        self.lengths.get(usize::from(code)).map(|&len| usize::from(len))
    }

    /// The meaningful bytes of the symbol behind `code`.
    pub fn symbol(&self, code: u8) -> Option<&[u8]> {
        let index = usize::from(code);
        let len = usize::from(*self.lengths.get(index)?);
        Some(&self.symbols[index][..len])
    }

    /// The full 8-byte container for `code` as a little-endian word.
    ///
    /// Bytes past the symbol length are whatever the producer stored there.
    pub fn symbol_word(&self, code: u8) -> Option<u64> {
        self.symbols.get(usize::from(code)).map(|slot| u64::from_le_bytes(*slot))
    }

    /// Serialize into the fixed binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(TABLE_SIZE);
        out.push(u8::from(self.zero_terminated));
        out.extend_from_slice(&self.lengths);
        // Slots already hold the little-endian word bytes
        for slot in &self.symbols {
            out.extend_from_slice(slot);
        }
        out
    }

    /// Length and 8-byte slot for a code known to be below [`ESCAPE_CODE`].
    #[inline]
    pub(crate) fn entry(&self, code: u8) -> (usize, &[u8; MAX_SYMBOL_LEN]) {
        let index = usize::from(code);
        (usize::from(self.lengths[index]), &self.symbols[index])
    }

    pub(crate) fn lengths(&self) -> &[u8; CODE_COUNT] {
        &self.lengths
    }

    pub(crate) fn slots(&self) -> &[[u8; MAX_SYMBOL_LEN]; CODE_COUNT] {
        &self.symbols
    }
}

impl PartialEq for DecoderTable {
    fn eq(&self, other: &Self) -> bool {
        self.zero_terminated == other.zero_terminated
            && (0..ESCAPE_CODE).all(|code| self.symbol(code) == other.symbol(code))
    }
}

impl Eq for DecoderTable {}

impl std::fmt::Debug for DecoderTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for code in 0..ESCAPE_CODE {
            if let Some(symbol) = self.symbol(code) {
                map.entry(&code, &String::from_utf8_lossy(symbol));
            }
        }
        map.finish()?;
        write!(f, " (zero_terminated: {})", self.zero_terminated)
    }
}

fn validate_lengths(lengths: &[u8; CODE_COUNT]) -> Result<()> {
    match lengths
        .iter()
        .position(|&len| len == 0 || usize::from(len) > MAX_SYMBOL_LEN)
    {
        Some(code) => Err(Error::InvalidSymbolLength {
            code: code as u8,
            length: usize::from(lengths[code]),
        }),
        None => Ok(()),
    }
}
