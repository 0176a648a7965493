//! wavebake table generation backend.
//!
//! This crate implements an offline precomputation pipeline that produces
//! band-limited lookup tables for periodic waveforms, plus a sine modulation
//! table and an equal-tempered MIDI pitch-to-frequency table, for a
//! real-time oscillator to consume.
//!
//! # Overview
//!
//! Naively sampling a sharp-edged waveform (saw, square) injects harmonic
//! content above the Nyquist frequency, which aliases audibly when the table
//! is played at arbitrary pitches. The pipeline solves this per octave:
//!
//! - [`waveform`] - Reference period synthesis (oversampled, then decimated)
//! - [`spectral`] - Frequency-domain resampler used for decimation and
//!   band-limiting
//! - [`bandlimit`] - One table per octave, each holding only the harmonics
//!   safe at that octave
//! - [`layout`] - Self-indexing flat buffer: octave `o` occupies index range
//!   `[2^o, 2^(o+1))`, so the consumer needs no offset table
//! - [`pitch`] - 128-entry equal-tempered frequency table
//! - [`lfo`] - Unit-range sine modulation table
//! - [`emit`] - Static-array source emission with a BLAKE3 content hash
//!
//! # Determinism
//!
//! The whole pipeline is a pure function from fixed constants to numeric
//! arrays: single-threaded, no I/O during the numeric stages, no randomness.
//! Identical configurations produce byte-identical tables across runs.
//!
//! # Example
//!
//! ```
//! use wavebake_tables::{generate, TableConfig};
//!
//! let result = generate(&TableConfig::default()).unwrap();
//! let source = result.set.emit_to_string();
//! assert!(source.contains("pub static SAW_TABLE"));
//! ```

pub mod bandlimit;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod layout;
pub mod lfo;
pub mod pitch;
pub mod spectral;
pub mod waveform;

// Re-export main types at crate root
pub use config::TableConfig;
pub use emit::{Table, TableSet};
pub use error::{BakeError, BakeResult};
pub use generate::{generate, GenerateResult};
pub use waveform::Waveform;
