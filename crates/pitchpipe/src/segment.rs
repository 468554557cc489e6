//! Note segmentation: run-length encoding of the quantized symbol stream.

use crate::note::Note;

/// Segmenter state between samples.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// Nothing sounding. Also the initial state, so a voiced first sample
    /// opens a note at its own time rather than at zero.
    Silence,
    /// A note open at `pitch` since `since`.
    Voiced { pitch: i32, since: f64 },
}

/// Fold a `(time, symbol)` stream into closed-open notes.
///
/// A run of consecutive samples with the same pitch symbol becomes one
/// note; the first sample that breaks the run (different pitch, or `None`
/// for unvoiced) closes it, with that sample's time as the exclusive end.
/// On a direct pitch change the closing sample also opens the next note,
/// so adjacent notes share their boundary time exactly.
///
/// A note still open when the stream ends is discarded, not closed at the
/// final sample's time.
pub fn segment<I>(symbols: I) -> Vec<Note>
where
    I: IntoIterator<Item = (f64, Option<i32>)>,
{
    let mut notes = Vec::new();
    let mut state = State::Silence;

    for (time, symbol) in symbols {
        state = match (state, symbol) {
            (State::Silence, None) => State::Silence,
            (State::Silence, Some(pitch)) => State::Voiced { pitch, since: time },
            (State::Voiced { pitch, since }, Some(next)) if next == pitch => {
                State::Voiced { pitch, since }
            }
            (State::Voiced { pitch, since }, None) => {
                notes.push(Note {
                    pitch,
                    start: since,
                    end: time,
                });
                State::Silence
            }
            (State::Voiced { pitch, since }, Some(next)) => {
                notes.push(Note {
                    pitch,
                    start: since,
                    end: time,
                });
                State::Voiced {
                    pitch: next,
                    since: time,
                }
            }
        };
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(specs: &[(f64, Option<i32>)]) -> Vec<Note> {
        segment(specs.iter().copied())
    }

    fn note(pitch: i32, start: f64, end: f64) -> Note {
        Note { pitch, start, end }
    }

    #[test]
    fn empty_stream_yields_no_notes() {
        assert_eq!(run(&[]), vec![]);
    }

    #[test]
    fn silence_only_yields_no_notes() {
        assert_eq!(run(&[(0.0, None), (0.1, None), (0.2, None)]), vec![]);
    }

    #[test]
    fn run_closed_by_silence_becomes_one_note() {
        let notes = run(&[
            (0.0, Some(62)),
            (0.1, Some(62)),
            (0.2, Some(62)),
            (0.3, None),
        ]);
        assert_eq!(notes, vec![note(62, 0.0, 0.3)]);
    }

    #[test]
    fn voiced_first_sample_starts_at_its_own_time() {
        let notes = run(&[(1.5, Some(60)), (1.6, None)]);
        assert_eq!(notes, vec![note(60, 1.5, 1.6)]);
    }

    #[test]
    fn pitch_change_closes_and_opens_at_the_same_time() {
        let notes = run(&[
            (0.0, Some(60)),
            (0.1, Some(62)),
            (0.2, Some(62)),
            (0.3, None),
        ]);
        assert_eq!(notes, vec![note(60, 0.0, 0.1), note(62, 0.1, 0.3)]);
        // shared boundary is the same value, bit for bit
        assert_eq!(notes[0].end, notes[1].start);
    }

    #[test]
    fn silence_gap_separates_notes() {
        let notes = run(&[
            (0.0, Some(60)),
            (0.1, None),
            (0.2, Some(60)),
            (0.3, None),
        ]);
        assert_eq!(notes, vec![note(60, 0.0, 0.1), note(60, 0.2, 0.3)]);
    }

    #[test]
    fn trailing_open_note_is_discarded() {
        let notes = run(&[(0.0, Some(62)), (0.1, None), (0.2, Some(64))]);
        assert_eq!(notes, vec![note(62, 0.0, 0.1)]);
    }

    #[test]
    fn leading_silence_is_ignored() {
        let notes = run(&[(0.0, None), (0.1, Some(65)), (0.2, None)]);
        assert_eq!(notes, vec![note(65, 0.1, 0.2)]);
    }

    #[test]
    fn emitted_notes_are_ordered_with_positive_durations() {
        let notes = run(&[
            (0.0, Some(60)),
            (0.1, Some(61)),
            (0.2, Some(62)),
            (0.3, None),
            (0.4, Some(60)),
            (0.5, None),
        ]);
        assert_eq!(notes.len(), 4);
        for n in &notes {
            assert!(n.duration() > 0.0, "zero-length note: {n:?}");
        }
        for pair in notes.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap: {pair:?}");
            if pair[0].end == pair[1].start {
                // back-to-back notes only come from a pitch change
                assert_ne!(pair[0].pitch, pair[1].pitch);
            }
        }
    }
}
