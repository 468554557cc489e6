//! Reading f0 tracks: the frame-wise `time,frequency` format emitted by
//! upstream pitch trackers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reading from the pitch tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds from the start of the recording.
    pub time: f64,
    /// Estimated fundamental frequency in Hz. Trackers write `nan` for
    /// frames with no pitch estimate; that parses here and gates to
    /// unvoiced at the band check.
    pub hz: f64,
}

/// Errors from reading a track.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track line {number}: expected `time,frequency`, got {content:?}")]
    Line { number: usize, content: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse a whole track from text, one `time,frequency` pair per line.
///
/// Every line must carry exactly two comma-separated floats; the first
/// malformed line (blank lines included) fails the whole parse with its
/// 1-based line number. Fields tolerate surrounding whitespace.
pub fn parse_track(input: &str) -> Result<Vec<Sample>, TrackError> {
    let mut samples = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        let parsed = line.split_once(',').and_then(|(time, hz)| {
            let time = time.trim().parse::<f64>().ok()?;
            let hz = hz.trim().parse::<f64>().ok()?;
            Some(Sample { time, hz })
        });

        match parsed {
            Some(sample) => samples.push(sample),
            None => {
                return Err(TrackError::Line {
                    number: idx + 1,
                    content: line.to_string(),
                })
            }
        }
    }

    Ok(samples)
}

/// Read and parse a track file.
pub fn read_track(path: &Path) -> Result<Vec<Sample>, TrackError> {
    parse_track(&fs::read_to_string(path)?)
}
