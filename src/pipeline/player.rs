//! Sequential playback
//!
//! Walks a song's events in order against a single sink: each note's play
//! window is clamped to one measure, the matching waveform slice is written,
//! and a short silence gap follows every note so back-to-back writes never
//! blur together or underrun the device. The sink is drained once, after the
//! final event.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::pipeline::parser::Song;
use crate::sink::{AudioSink, SinkError};
use crate::synth::{PitchTable, SynthConfig};

/// Counters from one playback run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Events written to the sink
    pub events_played: usize,
    /// Total samples written, gaps included
    pub samples_written: usize,
}

/// Lets another thread stop playback between notes.
///
/// Cancellation is cooperative: the in-flight note finishes, no later note
/// is written, and the sink is still drained and released normally.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Sequential scheduler over the precomputed waveform table.
pub struct Player<'a> {
    table: &'a PitchTable,
    config: &'a SynthConfig,
    cancel: CancelHandle,
}

impl<'a> Player<'a> {
    pub fn new(table: &'a PitchTable, config: &'a SynthConfig) -> Self {
        Self {
            table,
            config,
            cancel: CancelHandle::default(),
        }
    }

    /// Handle for stopping this player from another thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Play a song to completion (or cancellation) on one sink.
    ///
    /// Events are written strictly in song order. An empty song performs no
    /// sink calls at all and returns immediately.
    pub fn play<S: AudioSink>(&self, song: &Song, sink: &mut S) -> Result<PlaybackStats, SinkError> {
        let mut stats = PlaybackStats::default();
        if song.is_empty() {
            return Ok(stats);
        }

        let measure_ms = self.config.measure_ms();
        let gap = &self.table.silence()[..self.config.gap_samples];

        for event in song.events() {
            if self.cancel.is_cancelled() {
                tracing::info!(events = stats.events_played, "playback cancelled");
                break;
            }

            // No single note may exceed one measure, whatever its length says
            let play_ms = event.length.millis(measure_ms).min(measure_ms);
            let play_samples = (self.config.sample_rate as u64 * play_ms as u64 / 1000) as usize;

            sink.write(&self.table.waveform(event.pitch)[..play_samples])?;
            sink.write(gap)?;

            stats.events_played += 1;
            stats.samples_written += play_samples + gap.len();
        }

        sink.drain()?;
        Ok(stats)
    }
}
