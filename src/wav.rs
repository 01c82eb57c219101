//! WAV file writer utility
//!
//! Provides simple WAV file writing for 8-bit mono PCM audio.
//! The WAV container stores 8-bit audio unsigned, so signed samples are
//! midpoint-biased on the way out.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write an 8-bit mono PCM WAV file.
///
/// # Arguments
/// * `path` - Output file path
/// * `samples` - Signed 8-bit audio samples
/// * `sample_rate` - Sample rate in Hz
pub fn write_wav_8bit(path: &Path, samples: &[i8], sample_rate: u32) -> io::Result<()> {
    let mut file = File::create(path)?;

    let num_channels: u16 = 1; // Mono
    let bits_per_sample: u16 = 8;
    let byte_rate = sample_rate * num_channels as u32;
    let block_align = num_channels;
    let data_size = samples.len() as u32; // 1 byte per sample
    let file_size = 36 + data_size; // 44 - 8 (header excluding RIFF and size)

    // RIFF chunk
    file.write_all(b"RIFF")?;
    file.write_all(&file_size.to_le_bytes())?;
    file.write_all(b"WAVE")?;

    // fmt subchunk
    file.write_all(b"fmt ")?;
    file.write_all(&16u32.to_le_bytes())?; // Subchunk size
    file.write_all(&1u16.to_le_bytes())?; // Audio format (PCM)
    file.write_all(&num_channels.to_le_bytes())?;
    file.write_all(&sample_rate.to_le_bytes())?;
    file.write_all(&byte_rate.to_le_bytes())?;
    file.write_all(&block_align.to_le_bytes())?;
    file.write_all(&bits_per_sample.to_le_bytes())?;

    // data subchunk
    file.write_all(b"data")?;
    file.write_all(&data_size.to_le_bytes())?;

    // 8-bit WAV data is unsigned: bias signed samples by +128
    let biased: Vec<u8> = samples.iter().map(|&s| (s as i16 + 128) as u8).collect();
    file.write_all(&biased)?;

    Ok(())
}
