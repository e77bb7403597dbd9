//! Decoder table serialization

use super::DecoderTable;
use crate::error::Result;
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a decoder table to disk in the fixed binary layout
///
/// # Errors
/// Returns an error if file writing fails.
pub fn write_table<P: AsRef<Path>>(path: P, table: &DecoderTable) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!("Writing decoder table to {}", path.display());
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_table_to(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Write a decoder table to any writer in the fixed binary layout
///
/// # Errors
/// Returns an error if the underlying writer fails.
pub fn write_table_to<W: Write>(mut writer: W, table: &DecoderTable) -> Result<()> {
    writer.write_u8(u8::from(table.is_zero_terminated()))?;
    writer.write_all(table.lengths())?;
    for slot in table.slots() {
        writer.write_u64::<LittleEndian>(u64::from_le_bytes(*slot))?;
    }
    Ok(())
}
