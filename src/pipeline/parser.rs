//! Parser for the bell song text format
//!
//! Format: one note per line, two whitespace-separated tokens:
//!
//! ```text
//! <PITCH_NAME> <DURATION_CODE>
//! ```
//!
//! - Pitch names: the supported pitch set, including `REST` (see synth::pitch)
//! - Duration codes: 1 (whole), 2 (half), 4 (quarter), 8 (eighth)
//!
//! Malformed lines are expected input. Each line classifies independently
//! into an event or a skip; skips are logged and never abort the parse.

use crate::pipeline::duration::NoteLength;
use crate::synth::pitch::Pitch;

/// One note (or rest) to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongEvent {
    pub pitch: Pitch,
    pub length: NoteLength,
}

/// An ordered sequence of events; insertion order is playback order.
///
/// An empty song is valid and means "nothing to play".
#[derive(Debug, Clone, Default)]
pub struct Song {
    events: Vec<SongEvent>,
}

impl Song {
    pub fn events(&self) -> &[SongEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Why a line produced no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not exactly two tokens; skipped without a diagnostic
    Shape,
    UnknownPitch(String),
    BadDurationToken(String),
    UnsupportedCode(i64),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Shape => write!(f, "expected <pitch> <duration>"),
            SkipReason::UnknownPitch(name) => write!(f, "unknown pitch name: {}", name),
            SkipReason::BadDurationToken(tok) => write!(f, "duration is not an integer: {}", tok),
            SkipReason::UnsupportedCode(code) => write!(f, "unsupported duration code: {}", code),
        }
    }
}

/// Per-line classification result.
///
/// Skips are ordinary values consumed by the parse loop; there is no error
/// channel for line-level problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Event(SongEvent),
    Skipped(SkipReason),
}

/// Classify a single line of song text.
pub fn classify_line(line: &str) -> LineOutcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[name, code] = tokens.as_slice() else {
        return LineOutcome::Skipped(SkipReason::Shape);
    };

    let Some(pitch) = Pitch::from_name(name) else {
        return LineOutcome::Skipped(SkipReason::UnknownPitch(name.to_string()));
    };

    let Ok(code) = code.parse::<i64>() else {
        return LineOutcome::Skipped(SkipReason::BadDurationToken(code.to_string()));
    };

    let length = u32::try_from(code).ok().and_then(NoteLength::from_code);
    match length {
        Some(length) => LineOutcome::Event(SongEvent { pitch, length }),
        None => LineOutcome::Skipped(SkipReason::UnsupportedCode(code)),
    }
}

/// Parse song text into an ordered event sequence.
///
/// Valid lines append events in input order. Skipped lines log a warning
/// (except bare shape mismatches, which blank lines fall under) and parsing
/// continues. An empty result is a valid outcome.
pub fn parse_song(text: &str) -> Song {
    let mut events = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        match classify_line(line) {
            LineOutcome::Event(event) => events.push(event),
            LineOutcome::Skipped(SkipReason::Shape) => {}
            LineOutcome::Skipped(reason) => {
                tracing::warn!(line = idx + 1, "skipping note: {}", reason);
            }
        }
    }

    Song { events }
}
