//! pitchpipe binary - f0 track in, note CSV (and optionally MIDI) out

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pitchpipe::{cleanup, notes_to_csv, notes_to_midi, read_track, transcribe};
use pitchpipe::{Cleanup, FreqBand, MidiParams};

/// Transcribe a frame-wise pitch track into discrete notes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the f0 track: one `time,frequency` line per frame
    input: PathBuf,

    /// Lowest in-band frequency in Hz (exclusive)
    #[arg(long, default_value = "250")]
    min_freq: u32,

    /// Highest in-band frequency in Hz (exclusive)
    #[arg(long, default_value = "700")]
    max_freq: u32,

    /// Drop notes shorter than this many seconds
    #[arg(long, conflicts_with = "merge")]
    drop: Option<f64>,

    /// Merge notes at most this many seconds long into the note that follows
    #[arg(long)]
    merge: Option<f64>,

    /// CSV output path
    #[arg(short = 'o', long, default_value = "out.csv")]
    output_csv: PathBuf,

    /// Also write a MIDI rendering to this path
    #[arg(long)]
    output_midi: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let samples = read_track(&cli.input)
        .with_context(|| format!("reading f0 track {}", cli.input.display()))?;
    info!(samples = samples.len(), "loaded f0 track");

    let band = FreqBand {
        min_hz: cli.min_freq as f64,
        max_hz: cli.max_freq as f64,
    };
    let notes = transcribe(&samples, &band);
    info!(notes = notes.len(), "segmented");

    let pass = cli
        .drop
        .map(|min_duration| Cleanup::Drop { min_duration })
        .or(cli.merge.map(|max_duration| Cleanup::Merge { max_duration }));
    let notes = cleanup::apply(pass, notes);
    if pass.is_some() {
        info!(notes = notes.len(), "cleaned up short notes");
    }

    fs::write(&cli.output_csv, notes_to_csv(&notes))
        .with_context(|| format!("writing {}", cli.output_csv.display()))?;
    info!(path = %cli.output_csv.display(), "wrote CSV");

    if let Some(midi_path) = &cli.output_midi {
        let bytes = notes_to_midi(&notes, &MidiParams::default());
        fs::write(midi_path, bytes).with_context(|| format!("writing {}", midi_path.display()))?;
        info!(path = %midi_path.display(), "wrote MIDI");
    }

    Ok(())
}
