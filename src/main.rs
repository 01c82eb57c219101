//! Play a bell song from a text file.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use carillon::pipeline::{parse_song, Player};
use carillon::sink::{DeviceSink, WavSink};
use carillon::synth::{PitchTable, SynthConfig};

const DEFAULT_SONG: &str = "songs/prelude.txt";

#[derive(Parser)]
#[command(name = "carillon", about = "Play a bell song from a text file")]
struct Args {
    /// Song file, one "<pitch> <duration>" note per line
    song: Option<PathBuf>,

    /// Render to a WAV file instead of the audio device
    #[arg(long, value_name = "PATH")]
    wav: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let path = args.song.unwrap_or_else(|| PathBuf::from(DEFAULT_SONG));
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading song file {}", path.display()))?;

    let song = parse_song(&text);
    if song.is_empty() {
        tracing::info!("no valid notes to play");
        return Ok(());
    }
    tracing::info!(notes = song.len(), song = %path.display(), "song loaded");

    let config = SynthConfig::default();
    let table = PitchTable::new(&config);
    let player = Player::new(&table, &config);

    let stats = match args.wav {
        Some(out) => {
            let mut sink = WavSink::create(&out, &config);
            let stats = player
                .play(&song, &mut sink)
                .context("rendering song to WAV")?;
            tracing::info!(path = %out.display(), "rendered WAV");
            stats
        }
        None => {
            let mut sink = DeviceSink::open(&config).context("opening audio device")?;
            player.play(&song, &mut sink).context("playing song")?
        }
    };

    tracing::info!(
        events = stats.events_played,
        samples = stats.samples_written,
        "playback complete"
    );
    Ok(())
}
