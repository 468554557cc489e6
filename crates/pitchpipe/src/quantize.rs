//! Frequency gating and equal-tempered pitch quantization.

use serde::{Deserialize, Serialize};

/// Reference tuning: A4 sounds at 440 Hz and is MIDI note 69.
const A4_HZ: f64 = 440.0;
const A4_PITCH: f64 = 69.0;

/// The frequency window a reading must fall in to count as voiced.
///
/// Both bounds are exclusive: a reading at exactly `min_hz` or `max_hz` is
/// out of band. Defaults cover roughly B3 to F5, a comfortable window for
/// whistled or sung melody.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreqBand {
    pub min_hz: f64,
    pub max_hz: f64,
}

impl Default for FreqBand {
    fn default() -> Self {
        Self {
            min_hz: 250.0,
            max_hz: 700.0,
        }
    }
}

impl FreqBand {
    /// Pass an in-band reading through, gate everything else to unvoiced.
    ///
    /// NaN readings fail both comparisons, so a tracker's missing-pitch
    /// frames gate to `None` like any out-of-band frequency.
    pub fn gate(&self, hz: f64) -> Option<f64> {
        if self.min_hz < hz && hz < self.max_hz {
            Some(hz)
        } else {
            None
        }
    }

    /// Gate a reading and quantize the survivors to their pitch symbol.
    pub fn symbol(&self, hz: f64) -> Option<i32> {
        self.gate(hz).map(nearest_pitch)
    }
}

/// Continuous equal-tempered pitch number for a frequency.
pub fn hz_to_midi(hz: f64) -> f64 {
    12.0 * (hz.log2() - A4_HZ.log2()) + A4_PITCH
}

/// Nearest integer pitch for a frequency.
pub fn nearest_pitch(hz: f64) -> i32 {
    round_pitch(hz_to_midi(hz))
}

/// Ties at the midpoint between two pitches round to the even one.
fn round_pitch(midi: f64) -> i32 {
    midi.round_ties_even() as i32
}
