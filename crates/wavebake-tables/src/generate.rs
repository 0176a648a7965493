//! Main entry point for table generation.
//!
//! Runs the whole pipeline as a single deterministic pass: validate the
//! configuration, synthesize reference waveforms, band-limit them per
//! octave, pack the self-indexing wavetables, and assemble the table set
//! for emission.

use crate::bandlimit;
use crate::config::{TableConfig, SINE_TABLE_LEN};
use crate::emit::{Table, TableSet};
use crate::error::BakeResult;
use crate::layout;
use crate::lfo;
use crate::pitch;
use crate::waveform::{self, Waveform};

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct GenerateResult {
    /// All generated tables, in emission order.
    pub set: TableSet,
    /// Number of octave bands in each band-limited wavetable.
    pub num_octaves: usize,
}

/// Generates every table from the given configuration.
///
/// # Arguments
/// * `config` - Pipeline constants; validated before any numeric work
///
/// # Returns
/// The complete table set: `SIN_TABLE`, `SAW_TABLE`, `SQUARE_TABLE`,
/// `LFO_SIN_TABLE`, `FREQ_FROM_PITCH`.
pub fn generate(config: &TableConfig) -> BakeResult<GenerateResult> {
    config.validate()?;

    let tables = vec![
        Table::new("SIN_TABLE", Waveform::Sine.sample_period(SINE_TABLE_LEN)),
        Table::new("SAW_TABLE", banded_wavetable(Waveform::Saw, config)?),
        Table::new("SQUARE_TABLE", banded_wavetable(Waveform::Square, config)?),
        Table::new("LFO_SIN_TABLE", lfo::modulation_table(config.lfo_len)),
        Table::new("FREQ_FROM_PITCH", pitch::freq_from_pitch()),
    ];

    Ok(GenerateResult {
        set: TableSet { tables },
        num_octaves: (config.octave_max - config.octave_min + 1) as usize,
    })
}

/// Synthesizes, band-limits, and packs one waveform family.
fn banded_wavetable(shape: Waveform, config: &TableConfig) -> BakeResult<Vec<f64>> {
    let reference = waveform::reference(shape, config.nominal_len(), config.oversample)?;
    let octaves = bandlimit::band_limit(&reference, config)?;
    layout::build_wavetable(&octaves)
}
