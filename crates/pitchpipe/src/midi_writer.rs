//! MIDI export: Standard MIDI File format 0, one instrument voice.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::note::Note;

/// Options for MIDI rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MidiParams {
    /// Note-on velocity.
    pub velocity: u8,
    /// Ticks per quarter note.
    pub ppq: u16,
    /// GM program for the single voice. Default: 4, Electric Piano 1.
    pub program: u8,
    /// MIDI channel (0-15).
    pub channel: u8,
    /// Tempo in microseconds per quarter note. Default: 500_000 (120 BPM).
    pub microseconds_per_beat: u32,
}

impl Default for MidiParams {
    fn default() -> Self {
        Self {
            velocity: 100,
            ppq: 480,
            program: 4,
            channel: 0,
            microseconds_per_beat: 500_000,
        }
    }
}

impl MidiParams {
    /// Seconds to absolute tick under the fixed tempo, nearest tick.
    fn tick(&self, seconds: f64) -> u64 {
        let ticks_per_second =
            self.ppq as f64 * 1_000_000.0 / self.microseconds_per_beat as f64;
        (seconds * ticks_per_second).round() as u64
    }
}

/// Render a note sequence as SMF format-0 bytes.
///
/// The single track carries the tempo, a program change, then one
/// note-on/note-off pair per note. Pitches outside the MIDI range are
/// clamped to 0-127 here; upstream stages keep the exact quantized
/// values.
pub fn notes_to_midi(notes: &[Note], params: &MidiParams) -> Vec<u8> {
    let mut events: Vec<(u64, Vec<u8>)> = Vec::new();

    let usec = params.microseconds_per_beat;
    events.push((
        0,
        vec![
            0xFF,
            0x51,
            0x03,
            (usec >> 16) as u8,
            (usec >> 8) as u8,
            usec as u8,
        ],
    ));
    events.push((0, vec![0xC0 | (params.channel & 0x0F), params.program & 0x7F]));

    for note in notes {
        let key = note.pitch.clamp(0, 127) as u8;
        debug!(pitch = note.pitch, start = note.start, end = note.end, "midi note");
        events.push((
            params.tick(note.start),
            vec![0x90 | (params.channel & 0x0F), key, params.velocity],
        ));
        events.push((
            params.tick(note.end),
            vec![0x80 | (params.channel & 0x0F), key, 0],
        ));
    }

    // Sort by tick, with note-offs before note-ons at the same tick
    events.sort_by(|a, b| {
        a.0.cmp(&b.0).then_with(|| {
            let a_is_off = a.1.first().is_some_and(|s| s & 0xF0 == 0x80);
            let b_is_off = b.1.first().is_some_and(|s| s & 0xF0 == 0x80);
            b_is_off.cmp(&a_is_off)
        })
    });

    let mut track_data = Vec::new();
    let mut last_tick = 0u64;

    for (tick, data) in events {
        let delta = tick.saturating_sub(last_tick);
        write_vlq(&mut track_data, delta as u32);
        track_data.extend_from_slice(&data);
        last_tick = tick;
    }

    // End of track
    write_vlq(&mut track_data, 0);
    track_data.extend_from_slice(&[0xFF, 0x2F, 0x00]);

    debug!(
        notes = notes.len(),
        track_bytes = track_data.len(),
        "rendered MIDI track"
    );

    let mut buf = Vec::new();
    buf.extend_from_slice(b"MThd");
    buf.extend_from_slice(&6u32.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes()); // format 0
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&params.ppq.to_be_bytes());
    buf.extend_from_slice(b"MTrk");
    buf.extend_from_slice(&(track_data.len() as u32).to_be_bytes());
    buf.extend_from_slice(&track_data);

    buf
}

/// Write a variable-length quantity to a byte buffer.
fn write_vlq(buf: &mut Vec<u8>, value: u32) {
    let mut shift = 28;
    let mut started = false;

    while shift > 0 {
        let byte = ((value >> shift) & 0x7F) as u8;
        if byte != 0 || started {
            buf.push(byte | 0x80);
            started = true;
        }
        shift -= 7;
    }
    buf.push((value & 0x7F) as u8);
}
