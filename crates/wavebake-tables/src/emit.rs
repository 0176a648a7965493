//! Static-data emission.
//!
//! Serializes each generated table as a named, fixed-length
//! `pub static NAME: [f64; LEN] = [...];` declaration at a fixed decimal
//! precision, ready to be compiled into the host program. The emitter also
//! exposes a BLAKE3 hash over the raw numeric content so callers can check
//! that two runs produced byte-identical tables.

use std::io::Write;

use crate::error::BakeResult;

/// Fractional decimal digits in the emitted literals. Anything below six
/// risks audible quantization in the reconstructed waveform.
pub const EMIT_PRECISION: usize = 6;

/// One named table ready for emission.
#[derive(Debug, Clone)]
pub struct Table {
    /// Identifier used in the emitted declaration.
    pub name: String,
    /// Table contents.
    pub samples: Vec<f64>,
}

impl Table {
    /// Creates a named table.
    pub fn new(name: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }
}

/// The complete set of generated tables.
#[derive(Debug, Clone)]
pub struct TableSet {
    /// Tables in emission order.
    pub tables: Vec<Table>,
}

impl TableSet {
    /// Total number of samples across all tables.
    pub fn total_samples(&self) -> usize {
        self.tables.iter().map(|t| t.samples.len()).sum()
    }

    /// BLAKE3 hex hash over the raw sample bytes of every table, in
    /// emission order. Stable across runs for identical numeric content.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for table in &self.tables {
            hasher.update(table.name.as_bytes());
            for sample in &table.samples {
                hasher.update(&sample.to_le_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Writes the generated source file to `writer`.
    pub fn emit<W: Write>(&self, writer: &mut W) -> BakeResult<()> {
        writeln!(writer, "// Generated by wavebake. Do not edit by hand.")?;
        for table in &self.tables {
            emit_table(writer, table)?;
        }
        Ok(())
    }

    /// Emits the generated source file into a string.
    pub fn emit_to_string(&self) -> String {
        let mut buffer = Vec::new();
        self.emit(&mut buffer)
            .expect("writing to Vec should not fail");
        String::from_utf8(buffer).expect("emitted source is ASCII")
    }
}

/// Writes one `pub static` array declaration.
fn emit_table<W: Write>(writer: &mut W, table: &Table) -> BakeResult<()> {
    write!(
        writer,
        "pub static {}: [f64; {}] = [",
        table.name,
        table.samples.len()
    )?;
    for (i, sample) in table.samples.iter().enumerate() {
        if i > 0 {
            write!(writer, ", ")?;
        }
        write!(writer, "{:.*}", EMIT_PRECISION, sample)?;
    }
    writeln!(writer, "];")?;
    Ok(())
}
