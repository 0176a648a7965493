//! Frequency-domain resampling of single-period waveforms.
//!
//! Resampling to a shorter length in the frequency domain is equivalent to
//! applying an ideal low-pass filter at the new Nyquist frequency and then
//! subsampling: bins at or above the new Nyquist are never copied into the
//! shorter spectrum, so they cannot fold back into the passband. This one
//! routine therefore serves both as the decimation filter for the
//! oversampled reference waveform and as the band-limiter for the octave
//! tables.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::{BakeError, BakeResult};

/// Resamples one period of a waveform to `target_len` samples.
///
/// # Arguments
/// * `input` - Samples of exactly one period
/// * `target_len` - Desired number of samples for the same period
///
/// # Returns
/// The resampled period. Downsampling discards all spectral content at or
/// above the new Nyquist bin; upsampling adds none.
pub fn resample(input: &[f64], target_len: usize) -> BakeResult<Vec<f64>> {
    let n = input.len();
    if n == 0 {
        return Err(BakeError::resample("input period is empty"));
    }
    if target_len == 0 {
        return Err(BakeError::resample("target length is zero"));
    }
    if n == target_len {
        return Ok(input.to_vec());
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let mut spectrum: Vec<Complex<f64>> = input
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .collect();
    fft.process(&mut spectrum);

    // Copy the DC bin and every conjugate-symmetric pair that fits below the
    // smaller of the two Nyquist limits. When shortening, the new Nyquist
    // bin is left at zero; when lengthening, the old Nyquist bin is split
    // across its two mirrored slots to keep the output real.
    let m = target_len;
    let half = n.min(m) / 2;
    let mut resampled = vec![Complex::new(0.0, 0.0); m];
    resampled[0] = spectrum[0];
    for k in 1..half {
        resampled[k] = spectrum[k];
        resampled[m - k] = spectrum[n - k];
    }
    if m > n && n % 2 == 0 {
        resampled[half] = spectrum[half] * 0.5;
        resampled[m - half] = spectrum[half].conj() * 0.5;
    }

    let ifft = planner.plan_fft_inverse(m);
    ifft.process(&mut resampled);

    // rustfft leaves the inverse transform unnormalized; dividing by the
    // input length restores the original amplitude scale.
    let scale = 1.0 / n as f64;
    Ok(resampled.iter().map(|c| c.re * scale).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(resample(&[], 8).is_err());
    }

    #[test]
    fn test_rejects_zero_target() {
        assert!(resample(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn test_identity_when_lengths_match() {
        let input = vec![0.25, -0.5, 0.75, -1.0];
        assert_eq!(resample(&input, 4).unwrap(), input);
    }

    #[test]
    fn test_dc_survives_downsampling() {
        let input = vec![1.0; 64];
        let out = resample(&input, 8).unwrap();
        assert_eq!(out.len(), 8);
        for sample in out {
            assert!((sample - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dc_survives_upsampling() {
        let input = vec![0.5; 8];
        let out = resample(&input, 64).unwrap();
        assert_eq!(out.len(), 64);
        for sample in out {
            assert!((sample - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_harmonic_is_preserved() {
        // One sine cycle over 64 samples, downsampled to 16: the harmonic is
        // far below both Nyquist limits and must come through unchanged.
        let input: Vec<f64> = (0..64)
            .map(|k| (2.0 * PI * k as f64 / 64.0).sin())
            .collect();
        let expected: Vec<f64> = (0..16)
            .map(|k| (2.0 * PI * k as f64 / 16.0).sin())
            .collect();
        let out = resample(&input, 16).unwrap();
        assert!(max_abs_diff(&out, &expected) < 1e-9);
    }

    #[test]
    fn test_downsampling_discards_high_harmonic() {
        // Harmonic 6 cannot be represented in an 8-sample period (Nyquist
        // bin is 4), so downsampling must remove it entirely.
        let input: Vec<f64> = (0..64)
            .map(|k| (2.0 * PI * 6.0 * k as f64 / 64.0).sin())
            .collect();
        let out = resample(&input, 8).unwrap();
        for sample in out {
            assert!(sample.abs() < 1e-9);
        }
    }

    #[test]
    fn test_round_trip_of_band_limited_signal() {
        // A signal whose spectrum fits inside the shorter length survives a
        // down-then-up round trip at the original resolution.
        let input: Vec<f64> = (0..64)
            .map(|k| {
                let theta = 2.0 * PI * k as f64 / 64.0;
                theta.sin() + 0.5 * (3.0 * theta).cos()
            })
            .collect();
        let down = resample(&input, 16).unwrap();
        let up = resample(&down, 64).unwrap();
        assert!(max_abs_diff(&up, &input) < 1e-9);
    }
}
