//! Monophonic f0 track to note transcription.
//!
//! Takes the frame-wise pitch track an external tracker produced (one
//! `time,frequency` line per frame), gates it to a frequency band,
//! quantizes the survivors to equal-tempered pitch numbers, and
//! run-length encodes the result into notes with second-based timing.
//! Optional cleanup passes deal with quantization jitter at note
//! boundaries. Notes export as headerless CSV or a format-0 MIDI file.
//!
//! ```
//! use pitchpipe::{parse_track, transcribe, FreqBand};
//!
//! let track = "0.0,440.0\n0.1,440.0\n0.2,0.0\n";
//! let samples = parse_track(track).unwrap();
//! let notes = transcribe(&samples, &FreqBand::default());
//!
//! assert_eq!(notes.len(), 1);
//! assert_eq!(notes[0].pitch, 69);
//! assert_eq!((notes[0].start, notes[0].end), (0.0, 0.2));
//! ```

pub mod cleanup;
pub mod csv_writer;
pub mod midi_writer;
pub mod note;
pub mod quantize;
pub mod segment;
pub mod track;

pub use cleanup::{drop_short, merge_short, Cleanup};
pub use csv_writer::notes_to_csv;
pub use midi_writer::{notes_to_midi, MidiParams};
pub use note::Note;
pub use quantize::{hz_to_midi, nearest_pitch, FreqBand};
pub use segment::segment;
pub use track::{parse_track, read_track, Sample, TrackError};

/// Gate, quantize and segment a sample sequence in one call.
pub fn transcribe(samples: &[Sample], band: &FreqBand) -> Vec<Note> {
    segment::segment(samples.iter().map(|s| (s.time, band.symbol(s.hz))))
}
