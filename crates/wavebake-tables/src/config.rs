//! Pipeline configuration and the reference-design constants.
//!
//! All input to the pipeline is a small set of fixed constants; there is no
//! runtime configuration file. [`TableConfig::default`] holds the reference
//! design and [`TableConfig::validate`] rejects bad combinations before any
//! numeric work runs.

use crate::error::{BakeError, BakeResult};

/// MIDI pitch index of A4.
pub const A4_PITCH: u32 = 69;

/// Frequency of A4 in Hz.
pub const A4_FREQ: f64 = 440.0;

/// Number of entries in the pitch-to-frequency table (MIDI pitch range).
pub const NUM_PITCHES: usize = 128;

/// Number of samples in the full-resolution sine table.
pub const SINE_TABLE_LEN: usize = 2048;

/// Highest octave index the flat layout will accept (tables of up to
/// `2^MAX_OCTAVE` samples).
pub const MAX_OCTAVE: u32 = 16;

/// Configuration for one full pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Lowest octave index; the smallest band-limited table holds
    /// `2^octave_min` samples and the flat wavetable starts with a zero
    /// prefix of the same length.
    pub octave_min: u32,
    /// Highest octave index; also fixes the nominal reference resolution at
    /// `2^octave_max` samples.
    pub octave_max: u32,
    /// Oversampling factor for reference waveform synthesis.
    pub oversample: usize,
    /// Modulation table length; equal to the consumer's audio sample rate so
    /// that stepping one sample per tick traverses one cycle per second.
    pub lfo_len: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            octave_min: 2,
            octave_max: 10,
            oversample: 10,
            lfo_len: 44_100,
        }
    }
}

impl TableConfig {
    /// Nominal reference waveform resolution (`2^octave_max`).
    ///
    /// Saturates instead of overflowing for octave ranges [`validate`]
    /// rejects, so it never panics.
    ///
    /// [`validate`]: TableConfig::validate
    pub fn nominal_len(&self) -> usize {
        1usize.checked_shl(self.octave_max).unwrap_or(usize::MAX)
    }

    /// Checks the configuration before generation begins.
    ///
    /// # Returns
    /// `Ok(())` if every constant is usable, otherwise the first
    /// configuration error found. Nothing numeric runs on a bad config.
    pub fn validate(&self) -> BakeResult<()> {
        if self.octave_min == 0 || self.octave_min > self.octave_max {
            return Err(BakeError::InvalidOctaveRange {
                min: self.octave_min,
                max: self.octave_max,
            });
        }
        // Checked before any shift by octave_max; a shift count of 64 or
        // more would overflow rather than report a configuration error.
        if self.octave_max > MAX_OCTAVE {
            return Err(BakeError::InvalidTableSize {
                octave: self.octave_max,
                max_octave: MAX_OCTAVE,
            });
        }
        if self.oversample == 0 {
            return Err(BakeError::InvalidOversample {
                factor: self.oversample,
            });
        }
        if self
            .nominal_len()
            .checked_mul(self.oversample)
            .is_none()
        {
            return Err(BakeError::InvalidOversample {
                factor: self.oversample,
            });
        }
        if self.lfo_len == 0 {
            return Err(BakeError::invalid_param("lfo_len", "must be positive"));
        }
        Ok(())
    }
}
