//! Cleanup passes for segmented notes.
//!
//! Pitch quantization jitters at note boundaries, leaving sub-frame
//! slivers between real notes. Two alternative passes deal with them:
//! [`drop_short`] discards slivers, [`merge_short`] folds each into the
//! note that follows it. A transcription runs at most one of the two.

use serde::{Deserialize, Serialize};

use crate::note::Note;

/// Which cleanup pass to run. The passes are alternatives, never combined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cleanup {
    /// Discard notes shorter than `min_duration` seconds.
    Drop { min_duration: f64 },
    /// Fold notes of at most `max_duration` seconds into their successor.
    Merge { max_duration: f64 },
}

/// Run the selected pass, or none.
pub fn apply(pass: Option<Cleanup>, notes: Vec<Note>) -> Vec<Note> {
    match pass {
        None => notes,
        Some(Cleanup::Drop { min_duration }) => drop_short(notes, min_duration),
        Some(Cleanup::Merge { max_duration }) => merge_short(notes, max_duration),
    }
}

/// Keep only notes at least `min_duration` seconds long.
///
/// A note exactly at the threshold survives. Each note is judged on its
/// own duration alone, so running the pass twice changes nothing.
pub fn drop_short(notes: Vec<Note>, min_duration: f64) -> Vec<Note> {
    notes
        .into_iter()
        .filter(|note| note.duration() >= min_duration)
        .collect()
}

/// Absorb notes of at most `max_duration` seconds into their successor.
///
/// One left-to-right pass. A short note that ends exactly where the next
/// note starts donates its span: the successor's start moves back to the
/// short note's start, and the successor is judged against the threshold
/// with that extension applied. A run of adjacent short notes therefore
/// folds into the first note long enough to survive. Adjacency is exact
/// float equality; segmentation gives adjacent notes bit-identical
/// boundary times.
///
/// A short note with no adjacent successor is discarded outright and its
/// span becomes silence. In particular a short final note never survives.
pub fn merge_short(notes: Vec<Note>, max_duration: f64) -> Vec<Note> {
    let mut kept = Vec::with_capacity(notes.len());
    // Most recently removed short note, waiting for an adjacent successor
    // to absorb its span.
    let mut pending: Option<Note> = None;

    for mut note in notes {
        if let Some(short) = pending.take() {
            if note.start == short.end {
                note.start = short.start;
            }
        }
        if note.duration() <= max_duration {
            pending = Some(note);
        } else {
            kept.push(note);
        }
    }

    kept
}
