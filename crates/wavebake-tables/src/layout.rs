//! Self-indexing flat wavetable layout.
//!
//! The flat buffer opens with a zero prefix of `2^o_min` samples, then the
//! octave tables follow in increasing octave order with no gaps. Because the
//! prefix length plus the sum of all smaller table lengths is exactly `2^o`,
//! the table for octave `o` always occupies index range `[2^o, 2^(o+1))`.
//! A consumer that wants a period of length `L` (a power of two) reads
//! samples `[L, 2L)` directly; there is no stored offset table.

use crate::bandlimit::OctaveTable;
use crate::error::{BakeError, BakeResult};

/// Start offset of octave `o` inside the flat wavetable.
///
/// Pure arithmetic; this is the whole point of the layout.
pub fn offset(octave: u32) -> usize {
    1 << octave
}

/// Packs octave tables into one self-indexing flat buffer.
///
/// # Arguments
/// * `tables` - Octave tables in increasing octave order, starting at the
///   lowest octave the layout serves
///
/// # Returns
/// The flat wavetable. Every octave's actual start offset is re-derived
/// while appending and compared against [`offset`]; any mismatch is a fatal
/// invariant violation, never papered over, since the consumer's indexless
/// lookup depends on it.
pub fn build_wavetable(tables: &[OctaveTable]) -> BakeResult<Vec<f64>> {
    let octave_min = match tables.first() {
        Some(table) => table.octave,
        None => {
            return Err(BakeError::invalid_param(
                "tables",
                "at least one octave table is required",
            ))
        }
    };

    let mut flat = vec![0.0; 1 << octave_min];
    for table in tables {
        if table.samples.len() != table.declared_len() {
            return Err(BakeError::TableLengthMismatch {
                octave: table.octave,
                expected: table.declared_len(),
                actual: table.samples.len(),
            });
        }
        let actual = flat.len();
        if actual != offset(table.octave) {
            return Err(BakeError::OffsetMismatch {
                octave: table.octave,
                expected: offset(table.octave),
                actual,
            });
        }
        flat.extend_from_slice(&table.samples);
    }
    Ok(flat)
}
