//! Low-frequency modulation table.
//!
//! One full sine period rescaled into `[0, 1]`, at full resolution with no
//! band-limiting: modulation runs far below audio rate and is never
//! re-pitched, so aliasing is not a concern. The table length equals the
//! consumer's audio sample rate, so stepping one sample per audio tick
//! traverses one modulation cycle per second.

use crate::waveform::TWO_PI;

/// Builds the modulation table with `len` samples of `0.5 + 0.5·sin θ`.
pub fn modulation_table(len: usize) -> Vec<f64> {
    (0..len)
        .map(|k| 0.5 + 0.5 * (TWO_PI * k as f64 / len as f64).sin())
        .collect()
}
