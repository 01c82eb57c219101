//! Precomputed waveform table
//!
//! Synthesizes one measure of signed 8-bit PCM sine waveform per pitch,
//! eagerly at startup, so playback never pays synthesis latency. Buffers are
//! immutable after construction and safe to share across readers.

use crate::synth::pitch::Pitch;
use crate::synth::SynthConfig;

/// Immutable pitch-to-waveform lookup.
///
/// Each buffer holds exactly one measure of audio
/// (`sample_rate * measure_secs` samples). The rest's buffer is silence.
pub struct PitchTable {
    buffers: Vec<Vec<i8>>,
}

impl PitchTable {
    /// Synthesize waveforms for every supported pitch.
    ///
    /// Cost is O(pitches * samples_per_measure); at the default configuration
    /// that is 26 buffers of 49152 samples each.
    pub fn new(config: &SynthConfig) -> Self {
        let len = config.samples_per_measure();
        // Radians advanced per sample at 1 Hz
        let step_alpha = 2.0 * std::f64::consts::PI / config.sample_rate as f64;

        let buffers = Pitch::all()
            .map(|pitch| match pitch.frequency(config.reference_hz) {
                None => vec![0i8; len],
                Some(freq) => {
                    let sin_step = freq * step_alpha;
                    (0..len)
                        .map(|i| ((i as f64 * sin_step).sin() * config.max_amplitude).round() as i8)
                        .collect()
                }
            })
            .collect();

        Self { buffers }
    }

    /// One measure of waveform for a pitch.
    pub fn waveform(&self, pitch: Pitch) -> &[i8] {
        &self.buffers[pitch.index()]
    }

    /// The silence buffer, used for rests and inter-note gaps.
    pub fn silence(&self) -> &[i8] {
        self.waveform(Pitch::Rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SynthConfig {
        // Small rate keeps synthesis cheap in tests
        SynthConfig {
            sample_rate: 8000,
            ..SynthConfig::default()
        }
    }

    #[test]
    fn test_buffer_lengths() {
        let config = test_config();
        let table = PitchTable::new(&config);

        for pitch in Pitch::all() {
            assert_eq!(
                table.waveform(pitch).len(),
                config.samples_per_measure(),
                "wrong buffer length for {}",
                pitch.name()
            );
        }
    }

    #[test]
    fn test_amplitude_bounds() {
        let config = test_config();
        let table = PitchTable::new(&config);
        let max = config.max_amplitude as i32;

        for pitch in Pitch::all() {
            for &sample in table.waveform(pitch) {
                assert!((sample as i32).abs() <= max);
            }
        }
    }

    #[test]
    fn test_rest_is_silence() {
        let table = PitchTable::new(&test_config());
        assert!(table.silence().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_tone_is_not_silence() {
        let table = PitchTable::new(&test_config());
        let non_zero = table
            .waveform(Pitch::A4)
            .iter()
            .filter(|&&s| s != 0)
            .count();
        assert!(non_zero > 0);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let config = test_config();
        let first = PitchTable::new(&config);
        let second = PitchTable::new(&config);

        for pitch in Pitch::all() {
            assert_eq!(first.waveform(pitch), second.waveform(pitch));
        }
    }

    #[test]
    fn test_waveform_starts_at_zero_crossing() {
        // sin(0) = 0: every tone starts at the midpoint, so back-to-back
        // writes never open with a click
        let table = PitchTable::new(&test_config());
        for pitch in Pitch::all() {
            assert_eq!(table.waveform(pitch)[0], 0);
        }
    }
}
