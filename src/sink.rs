//! Audio sinks
//!
//! A sink accepts signed 8-bit mono PCM at the configured sample rate.
//! Opening a sink is constructing it; closing is dropping it, so a sink held
//! in a scope is released on every exit path. `drain` blocks until buffered
//! audio has been fully emitted.

use std::path::PathBuf;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use thiserror::Error;

use crate::synth::SynthConfig;
use crate::wav::write_wav_8bit;

/// Sink-layer failures.
///
/// Device errors are the fatal class: the output device could not be
/// acquired or the stream died underneath us. IO errors come from the WAV
/// sink's file writes.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("audio device unavailable: {0}")]
    Device(String),
    #[error("playback stream error: {0}")]
    Stream(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A PCM-writable output.
pub trait AudioSink {
    /// Queue a buffer of samples for output. Writes are emitted in call
    /// order and never overlap.
    fn write(&mut self, pcm: &[i8]) -> Result<(), SinkError>;

    /// Block until everything written so far has been emitted.
    fn drain(&mut self) -> Result<(), SinkError>;
}

/// Sink backed by the default audio output device.
///
/// Holds the one device handle for its whole lifetime; the stream is
/// released on drop. Sample format is negotiated once at open, not per note.
pub struct DeviceSink {
    // Dropping the stream kills the sink's queue; keep it alive alongside
    _stream: OutputStream,
    sink: Sink,
    sample_rate: u32,
}

impl DeviceSink {
    /// Acquire the default output device.
    pub fn open(config: &SynthConfig) -> Result<Self, SinkError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| SinkError::Device(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| SinkError::Device(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            sink,
            sample_rate: config.sample_rate,
        })
    }
}

impl AudioSink for DeviceSink {
    fn write(&mut self, pcm: &[i8]) -> Result<(), SinkError> {
        // i8 PCM to the f32 the device stream expects
        let samples: Vec<f32> = pcm.iter().map(|&s| s as f32 / 128.0).collect();
        self.sink
            .append(SamplesBuffer::new(1, self.sample_rate, samples));
        Ok(())
    }

    fn drain(&mut self) -> Result<(), SinkError> {
        self.sink.sleep_until_end();
        Ok(())
    }
}

/// Sink that renders to an 8-bit mono WAV file.
///
/// Samples accumulate in memory; the file is written on drain so a failed
/// playback never leaves a truncated WAV behind.
pub struct WavSink {
    path: PathBuf,
    sample_rate: u32,
    samples: Vec<i8>,
}

impl WavSink {
    pub fn create(path: impl Into<PathBuf>, config: &SynthConfig) -> Self {
        Self {
            path: path.into(),
            sample_rate: config.sample_rate,
            samples: Vec::new(),
        }
    }
}

impl AudioSink for WavSink {
    fn write(&mut self, pcm: &[i8]) -> Result<(), SinkError> {
        self.samples.extend_from_slice(pcm);
        Ok(())
    }

    fn drain(&mut self) -> Result<(), SinkError> {
        write_wav_8bit(&self.path, &self.samples, self.sample_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_sink_accumulates_and_writes() {
        let path = std::env::temp_dir().join("carillon_test_sink.wav");
        let config = SynthConfig::default();

        let mut sink = WavSink::create(&path, &config);
        sink.write(&[0, 10, -10]).unwrap();
        sink.write(&[127, -127]).unwrap();
        sink.drain().unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[0..4], b"RIFF");
        // 44-byte header plus one byte per sample
        assert_eq!(data.len(), 44 + 5);

        std::fs::remove_file(&path).unwrap();
    }
}
