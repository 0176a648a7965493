//! Reference waveform synthesis.
//!
//! Each waveform is a closed-form periodic function evaluated on equally
//! spaced phase points in `[0, 2π)` (endpoint exclusive, so the period tiles
//! seamlessly). The sharp-edged shapes (saw, square) are synthesized at an
//! oversampled resolution and decimated through the spectral resampler,
//! which keeps their own harmonic content clean before the octave
//! band-limiter sees them.

use std::f64::consts::PI;

use crate::error::BakeResult;
use crate::spectral;

/// Full circle in radians.
pub const TWO_PI: f64 = 2.0 * PI;

/// Waveform families the pipeline can synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine, `sin θ`. Single harmonic; already band-limited.
    Sine,
    /// Linear ramp from 1 down to −1 over one period, `1 − θ/π`.
    Saw,
    /// Signed square, symmetric about zero: `+1` for `θ < π`, `−1` after.
    /// The symmetric convention matches the saw's ±1 amplitude so the two
    /// families balance in loudness.
    Square,
}

impl Waveform {
    /// Evaluates the closed form at phase `theta` (radians, `[0, 2π)`).
    pub fn eval(&self, theta: f64) -> f64 {
        match self {
            Waveform::Sine => theta.sin(),
            Waveform::Saw => 1.0 - theta / PI,
            Waveform::Square => {
                if theta < PI {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }

    /// Samples exactly one period at `len` equally spaced phase points.
    pub fn sample_period(&self, len: usize) -> Vec<f64> {
        (0..len)
            .map(|k| self.eval(TWO_PI * k as f64 / len as f64))
            .collect()
    }
}

/// Produces the reference period of a waveform at nominal resolution.
///
/// # Arguments
/// * `waveform` - Waveform family to synthesize
/// * `nominal_len` - Target resolution `N` of the reference period
/// * `oversample` - Oversampling factor `R`; the closed form is evaluated at
///   `N·R` points and decimated back to `N`
///
/// # Returns
/// One clean period of `nominal_len` samples. Evaluating the discontinuous
/// closed forms directly at `N` would bake unbounded harmonic content into
/// the table; decimating from the oversampled grid bounds that error.
pub fn reference(waveform: Waveform, nominal_len: usize, oversample: usize) -> BakeResult<Vec<f64>> {
    let oversampled = waveform.sample_period(nominal_len * oversample);
    spectral::resample(&oversampled, nominal_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saw_closed_form_endpoints() {
        assert_eq!(Waveform::Saw.eval(0.0), 1.0);
        assert!((Waveform::Saw.eval(PI) - 0.0).abs() < 1e-12);
        // Just below 2π the ramp approaches −1 without touching it.
        assert!(Waveform::Saw.eval(TWO_PI * 0.999) < -0.99);
    }

    #[test]
    fn test_square_is_signed_and_symmetric() {
        assert_eq!(Waveform::Square.eval(0.0), 1.0);
        assert_eq!(Waveform::Square.eval(PI * 0.5), 1.0);
        assert_eq!(Waveform::Square.eval(PI), -1.0);
        assert_eq!(Waveform::Square.eval(PI * 1.5), -1.0);
    }

    #[test]
    fn test_sample_period_excludes_endpoint() {
        let period = Waveform::Sine.sample_period(8);
        assert_eq!(period.len(), 8);
        assert_eq!(period[0], 0.0);
        // An inclusive grid would land the last sample back on sin(2π) = 0;
        // the exclusive grid puts it at sin(7π/4) < 0 instead.
        assert!(period[7] < -0.5);
    }

    #[test]
    fn test_square_has_zero_mean_period() {
        let period = Waveform::Square.sample_period(64);
        let mean: f64 = period.iter().sum::<f64>() / 64.0;
        assert!(mean.abs() < 1e-12);
    }

    #[test]
    fn test_reference_sine_matches_closed_form() {
        // Sine fits entirely below every Nyquist limit involved, so the
        // oversample/decimate round trip must reproduce the closed form.
        let reference = reference(Waveform::Sine, 64, 10).unwrap();
        for (k, &sample) in reference.iter().enumerate() {
            let expected = (TWO_PI * k as f64 / 64.0).sin();
            assert!((sample - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reference_saw_has_expected_shape() {
        let reference = reference(Waveform::Saw, 256, 10).unwrap();
        assert_eq!(reference.len(), 256);
        // Band-limiting rings near the discontinuity but the midpoint of the
        // ramp is far from it and must sit close to the ideal line.
        let mid = reference[64];
        assert!((mid - 0.5).abs() < 0.05);
        // The ramp is descending across its linear region.
        assert!(reference[32] > reference[96]);
    }

    #[test]
    fn test_reference_amplitude_is_bounded() {
        // Gibbs overshoot exists but stays well under 20% for these shapes.
        for waveform in [Waveform::Saw, Waveform::Square] {
            let reference = reference(waveform, 256, 10).unwrap();
            for sample in reference {
                assert!(sample.abs() < 1.2);
            }
        }
    }
}
