//! Octave band-limiting of a reference waveform.
//!
//! Each octave table is the reference period spectrally resampled down to
//! `2^o` samples. Shortening in the frequency domain discards every harmonic
//! at or above the new Nyquist bin, so a table stepped through at a rate
//! implying `2^o` samples per period cannot alias.

use crate::config::TableConfig;
use crate::error::{BakeError, BakeResult};
use crate::spectral;

/// One band-limited table, sized for a single octave.
#[derive(Debug, Clone)]
pub struct OctaveTable {
    /// Octave index `o`; the table holds `2^o` samples.
    pub octave: u32,
    /// Band-limited samples of one period.
    pub samples: Vec<f64>,
}

impl OctaveTable {
    /// Declared length for this octave (`2^o`).
    pub fn declared_len(&self) -> usize {
        1 << self.octave
    }
}

/// Derives the band-limited table for every octave in the configured range.
///
/// # Arguments
/// * `reference` - One clean period at nominal resolution
/// * `config` - Octave range to cover
///
/// # Returns
/// Octave tables in increasing octave order, each checked to hold exactly
/// `2^o` samples.
pub fn band_limit(reference: &[f64], config: &TableConfig) -> BakeResult<Vec<OctaveTable>> {
    (config.octave_min..=config.octave_max)
        .map(|octave| {
            let samples = spectral::resample(reference, 1 << octave)?;
            let table = OctaveTable { octave, samples };
            if table.samples.len() != table.declared_len() {
                return Err(BakeError::TableLengthMismatch {
                    octave,
                    expected: table.declared_len(),
                    actual: table.samples.len(),
                });
            }
            Ok(table)
        })
        .collect()
}
