//! CSV export: one `pitch,start,end` line per note, no header.

use crate::note::Note;

/// Render a note sequence to its CSV form.
///
/// Times print in Rust's shortest round-trip form, so whole seconds come
/// out bare (`0`, not `0.0`). An empty sequence renders as an empty
/// string, which written out makes a valid empty output file.
pub fn notes_to_csv(notes: &[Note]) -> String {
    let mut out = String::new();
    for note in notes {
        out.push_str(&note.to_string());
        out.push('\n');
    }
    out
}
