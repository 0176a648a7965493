//! Error types for the table generation backend.

use thiserror::Error;

/// Result type for table generation operations.
pub type BakeResult<T> = Result<T, BakeError>;

/// Errors that can occur during table generation.
///
/// The taxonomy is narrow on purpose: configuration errors are caught before
/// any numeric work begins, and invariant violations abort generation rather
/// than emit a table the real-time consumer could misindex.
#[derive(Debug, Error)]
pub enum BakeError {
    /// Requested octave table size is beyond the flat-layout cap.
    #[error("invalid table size: 2^{octave} samples (octave index must be at most {max_octave})")]
    InvalidTableSize {
        /// Offending octave index.
        octave: u32,
        /// Largest supported octave index.
        max_octave: u32,
    },

    /// Invalid oversampling factor.
    #[error("invalid oversampling factor: {factor} (must be positive)")]
    InvalidOversample {
        /// The invalid factor.
        factor: usize,
    },

    /// Invalid octave range.
    #[error("invalid octave range: {min}..={max}")]
    InvalidOctaveRange {
        /// Lowest octave index.
        min: u32,
        /// Highest octave index.
        max: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// An octave table's length does not match its declared power-of-two size.
    #[error("octave {octave} table length mismatch: expected {expected}, got {actual}")]
    TableLengthMismatch {
        /// Octave index.
        octave: u32,
        /// Expected length (`2^octave`).
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// An octave table's start offset inside the flat wavetable does not
    /// equal `2^octave`.
    #[error("octave {octave} layout offset mismatch: expected {expected}, got {actual}")]
    OffsetMismatch {
        /// Octave index.
        octave: u32,
        /// Expected start offset (`2^octave`).
        expected: usize,
        /// Actual start offset.
        actual: usize,
    },

    /// Spectral resampling was asked to operate on an empty buffer.
    #[error("resample error: {message}")]
    Resample {
        /// Error message.
        message: String,
    },

    /// I/O error while emitting tables.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BakeError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a resample error.
    pub fn resample(message: impl Into<String>) -> Self {
        Self::Resample {
            message: message.into(),
        }
    }
}
