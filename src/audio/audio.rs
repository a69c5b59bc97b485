//! cpal-backed sound trigger for sargam degrees.
//!
//! Each degree symbol maps to a fixed frequency (equal-temperament offsets
//! from Sa, tuned to C4). Triggering a degree retunes a single sine voice
//! and restarts its decay envelope.

use crate::audio::playback::SoundTrigger;
use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Sample, SampleFormat, SizedSample, Stream, StreamConfig};
use std::sync::{Arc, Mutex};

/// Sa is tuned to middle C.
const SA_FREQUENCY: f32 = 261.63;

/// Peak amplitude when a degree is struck.
const STRIKE_VOLUME: f32 = 0.2;

/// Per-sample amplitude decay; fades a struck note out in well under a
/// second at common sample rates.
const DECAY: f32 = 0.9998;

/// Fixed symbol-to-pitch convention covering both alphabets. ऩि and ध़
/// sit below Sa; सां, रें and गं an octave above their plain forms.
fn semitones_from_sa(symbol: &str) -> Option<i32> {
    match symbol {
        "सा" => Some(0),
        "रे" => Some(2),
        "ग" => Some(4),
        "म" => Some(5),
        "प" => Some(7),
        "ध" => Some(9),
        "नि" => Some(11),
        "सां" => Some(12),
        "रें" => Some(14),
        "गं" => Some(16),
        "ऩि" => Some(-1),
        "ध़" => Some(-3),
        _ => None,
    }
}

/// Frequency in Hz for a degree symbol, or `None` for an unknown symbol.
pub fn frequency_for_symbol(symbol: &str) -> Option<f32> {
    semitones_from_sa(symbol).map(|s| SA_FREQUENCY * 2.0_f32.powf(s as f32 / 12.0))
}

// Shared state between the trigger side and the audio callback.
struct VoiceState {
    frequency: f32,
    amplitude: f32,
}

impl Default for VoiceState {
    fn default() -> Self {
        VoiceState {
            frequency: SA_FREQUENCY,
            amplitude: 0.0, // silent until first strike
        }
    }
}

/// Single-voice sine player over the default output device.
pub struct AudioPlayer {
    stream: Stream,
    state: Arc<Mutex<VoiceState>>,
}

impl AudioPlayer {
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("No output device available"))?;
        let config = device.default_output_config()?;

        let sample_format = config.sample_format();
        let config: StreamConfig = config.into();

        let state = Arc::new(Mutex::new(VoiceState::default()));
        let stream = match sample_format {
            SampleFormat::F32 => Self::build_stream::<f32>(&device, &config, state.clone())?,
            SampleFormat::I16 => Self::build_stream::<i16>(&device, &config, state.clone())?,
            SampleFormat::U16 => Self::build_stream::<u16>(&device, &config, state.clone())?,
            _ => return Err(anyhow!("Unsupported sample format: {:?}", sample_format)),
        };

        Ok(AudioPlayer { stream, state })
    }

    fn build_stream<T>(
        device: &cpal::Device,
        config: &StreamConfig,
        state: Arc<Mutex<VoiceState>>,
    ) -> Result<Stream>
    where
        T: Sample + SizedSample + Send + 'static + cpal::FromSample<f32>,
    {
        let channels = config.channels as usize;
        let sample_rate = config.sample_rate.0 as f32;
        let mut sample_clock = 0f32;

        let err_fn = |err| eprintln!("an error occurred on the output audio stream: {:?}", err);

        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let mut state = state.lock().unwrap();
                    for frame in data.chunks_mut(channels) {
                        let value = Self::next_sine_value(
                            sample_rate,
                            &mut sample_clock,
                            state.frequency,
                            state.amplitude,
                        );
                        state.amplitude *= DECAY;

                        let value: T = cpal::Sample::from_sample(value);
                        for sample in frame.iter_mut() {
                            *sample = value;
                        }
                    }
                },
                err_fn,
                None,
            )
            .map_err(|e| anyhow!("Failed to build output stream: {}", e))?;

        Ok(stream)
    }

    fn next_sine_value(
        sample_rate: f32,
        sample_clock: &mut f32,
        frequency: f32,
        amplitude: f32,
    ) -> f32 {
        let value =
            amplitude * (2.0 * std::f32::consts::PI * frequency * *sample_clock / sample_rate).sin();
        *sample_clock = (*sample_clock + 1.0) % sample_rate;
        value
    }

    /// Retune the voice and restart its decay.
    pub fn strike(&self, frequency: f32) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| anyhow!("Failed to lock voice state: {}", e))?;
        state.frequency = frequency;
        state.amplitude = STRIKE_VOLUME;
        Ok(())
    }

    pub fn play(&self) -> Result<()> {
        self.stream
            .play()
            .map_err(|e| anyhow!("Failed to play stream: {}", e))
    }

    pub fn pause(&self) -> Result<()> {
        self.stream
            .pause()
            .map_err(|e| anyhow!("Failed to pause stream: {}", e))
    }
}

/// `SoundTrigger` backed by the sine voice: one strike per degree.
pub struct SargamSynth {
    player: AudioPlayer,
}

impl SargamSynth {
    pub fn new() -> Result<Self> {
        let player = AudioPlayer::new()?;
        player.play()?;
        Ok(SargamSynth { player })
    }
}

// `cpal::Stream` carries a `!Send + !Sync` marker for platforms whose stream
// handles are thread-affine. After construction the synth is only driven
// through the `Mutex`-guarded `VoiceState`, never the stream handle itself.
unsafe impl Send for SargamSynth {}
unsafe impl Sync for SargamSynth {}

impl SoundTrigger for SargamSynth {
    fn trigger(&self, symbol: &str) -> Result<()> {
        let frequency = frequency_for_symbol(symbol)
            .ok_or_else(|| anyhow!("no sound mapped for '{}'", symbol))?;
        self.player.strike(frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_convention() {
        let sa = frequency_for_symbol("सा").unwrap();
        assert!((sa - 261.63).abs() < 0.01);

        // प is a perfect fifth above Sa.
        let pa = frequency_for_symbol("प").unwrap();
        assert!((pa - 391.99).abs() < 0.1);

        // सां is exactly an octave above सा.
        let sa_high = frequency_for_symbol("सां").unwrap();
        assert!((sa_high - 2.0 * sa).abs() < 0.01);

        // ध़ sits below Sa.
        let dha_low = frequency_for_symbol("ध़").unwrap();
        assert!(dha_low < sa);
    }

    #[test]
    fn test_unknown_symbol_has_no_frequency() {
        assert_eq!(frequency_for_symbol("C#"), None);
        assert_eq!(frequency_for_symbol(""), None);
    }

    #[test]
    fn test_sine_decay_stays_in_range() {
        let sample_rate = 44100.0;
        let mut sample_clock = 0.0;
        let mut amplitude = STRIKE_VOLUME;

        for _ in 0..1000 {
            let value =
                AudioPlayer::next_sine_value(sample_rate, &mut sample_clock, 440.0, amplitude);
            assert!(value.abs() <= STRIKE_VOLUME);
            amplitude *= DECAY;
        }
        assert!(amplitude < STRIKE_VOLUME);
        assert!(sample_clock < sample_rate);
    }

    #[test]
    fn test_synth_creation() {
        // May fail on systems without audio devices (like CI).
        match SargamSynth::new() {
            Ok(synth) => {
                assert!(synth.trigger("सा").is_ok());
                assert!(synth.trigger("not-a-degree").is_err());
            }
            Err(_) => {
                println!("SargamSynth creation failed - likely no audio device available");
            }
        }
    }
}
