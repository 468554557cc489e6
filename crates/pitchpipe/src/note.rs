use std::fmt;

use serde::{Deserialize, Serialize};

/// A single transcribed note with second-based timing.
///
/// The interval is closed-open: the note sounds from `start` up to but not
/// including `end`. Pitch is an equal-tempered MIDI note number, kept as a
/// plain integer since a wide frequency band can quantize outside 0-127;
/// clamping happens only at the MIDI boundary, and the CSV carries the
/// exact quantized value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: i32,
    pub start: f64,
    pub end: f64,
}

impl Note {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.pitch, self.start, self.end)
    }
}
