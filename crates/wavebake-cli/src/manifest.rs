//! Machine-readable manifest of a pipeline run.

use serde::Serialize;
use wavebake_tables::GenerateResult;

/// Summary of one generated table.
#[derive(Debug, Serialize)]
pub struct TableEntry {
    /// Emitted declaration name.
    pub name: String,
    /// Number of samples.
    pub len: usize,
}

/// Summary of a full pipeline run, suitable for JSON output.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Per-table name and length, in emission order.
    pub tables: Vec<TableEntry>,
    /// Total samples across all tables.
    pub total_samples: usize,
    /// Number of octave bands per band-limited wavetable.
    pub num_octaves: usize,
    /// BLAKE3 hash of the numeric table content.
    pub content_hash: String,
}

impl Manifest {
    /// Builds the manifest from a pipeline result.
    pub fn from_result(result: &GenerateResult) -> Self {
        Self {
            tables: result
                .set
                .tables
                .iter()
                .map(|t| TableEntry {
                    name: t.name.clone(),
                    len: t.samples.len(),
                })
                .collect(),
            total_samples: result.set.total_samples(),
            num_octaves: result.num_octaves,
            content_hash: result.set.content_hash(),
        }
    }
}
