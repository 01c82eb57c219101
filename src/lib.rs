//! Carillon plays bell songs written as plain text.
//!
//! A song file holds one note per line: a pitch name and a duration code
//! (`C4 4` is a quarter note of middle C). The [`pipeline`] module parses
//! that format and sequences playback, [`synth`] precomputes one measure of
//! sine waveform per supported pitch, and [`sink`] carries the audio to an
//! output device or a WAV file.

pub mod pipeline;
pub mod sink;
pub mod synth;
pub mod wav;
