//! Equal-tempered MIDI pitch to frequency table.

use crate::config::{A4_FREQ, A4_PITCH, NUM_PITCHES};

/// Builds the 128-entry pitch-to-frequency table.
///
/// `freq(p) = 440 · 2^((p − 69)/12)`, the standard equal-tempered mapping
/// with pitch 69 = A4 = 440 Hz. Pure and infallible.
pub fn freq_from_pitch() -> Vec<f64> {
    (0..NUM_PITCHES)
        .map(|p| A4_FREQ * ((p as f64 - A4_PITCH as f64) / 12.0).exp2())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_is_exactly_440() {
        let freqs = freq_from_pitch();
        assert_eq!(freqs[69], 440.0);
    }

    #[test]
    fn test_octave_above_a4_doubles() {
        let freqs = freq_from_pitch();
        assert!((freqs[81] - 880.0).abs() < 1e-9);
    }

    #[test]
    fn test_a3_is_220() {
        let freqs = freq_from_pitch();
        assert!((freqs[57] - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_strictly_increasing() {
        let freqs = freq_from_pitch();
        assert_eq!(freqs.len(), 128);
        for pair in freqs.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_midi_range_endpoints() {
        let freqs = freq_from_pitch();
        // C-1 (pitch 0) and G9 (pitch 127), standard MIDI extremes.
        assert!((freqs[0] - 8.175_798_915_643_707).abs() < 1e-9);
        assert!((freqs[127] - 12_543.853_951_415_975).abs() < 1e-6);
    }
}
