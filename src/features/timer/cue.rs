//! Audible cue played when a period finishes.
//!
//! The cue is a generated tone rather than a sample file: an 800 Hz sine whose
//! gain falls off exponentially over half a second.

use std::io::Write;
use std::time::Duration;

use tracing::{debug, warn};

use super::engine::PhaseComplete;

/// Something that reacts to a finished period. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Chime: Send {
    fn play(&self, event: &PhaseComplete);
}

/// A decaying sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
    /// Starting amplitude.
    pub gain: f32,
    /// Amplitude reached at the end of `duration`.
    pub floor: f32,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            duration: Duration::from_millis(500),
            gain: 0.5,
            floor: 0.01,
        }
    }
}

impl Tone {
    /// Render the tone as mono `f32` samples.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn samples(&self, sample_rate: u32) -> Vec<f32> {
        let count = (self.duration.as_secs_f64() * f64::from(sample_rate)).round() as usize;
        if count == 0 || self.gain <= 0.0 {
            return Vec::new();
        }

        let rate = sample_rate as f32;
        let length = count as f32;
        // Per-sample multiplier taking `gain` to `floor` over `count` samples.
        let ratio = (self.floor / self.gain).max(f32::MIN_POSITIVE);

        (0..count)
            .map(|i| {
                let t = i as f32;
                let envelope = self.gain * ratio.powf(t / length);
                let phase = 2.0 * std::f32::consts::PI * self.frequency_hz * t / rate;
                envelope * phase.sin()
            })
            .collect()
    }
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn play(&self, event: &PhaseComplete) {
        debug!(mode = ?event.mode, "silent chime");
    }
}

/// Plays a [`Tone`] on the default output device.
///
/// Playback happens on a short-lived background thread. Without the `audio`
/// feature, or when no device can be opened, the terminal bell is rung.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneChime {
    tone: Tone,
}

impl ToneChime {
    #[must_use]
    pub const fn new(tone: Tone) -> Self {
        Self { tone }
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        self.tone
    }
}

impl Chime for ToneChime {
    fn play(&self, event: &PhaseComplete) {
        debug!(mode = ?event.mode, "playing phase-complete tone");
        let tone = self.tone;
        let spawned = std::thread::Builder::new()
            .name("focusdesk-chime".to_string())
            .spawn(move || {
                if let Err(e) = playback::play(&tone) {
                    warn!("tone playback unavailable, using terminal bell: {e}");
                    ring_bell();
                }
            });

        if let Err(e) = spawned {
            warn!("could not spawn chime thread: {e}");
            ring_bell();
        }
    }
}

fn ring_bell() {
    let mut stderr = std::io::stderr();
    let _ = stderr.write_all(b"\x07");
    let _ = stderr.flush();
}

#[cfg(feature = "audio")]
mod playback {
    use std::sync::{Arc, Mutex};

    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use cpal::StreamConfig;
    use tracing::error;

    use super::Tone;

    const SAMPLE_RATE: u32 = 44_100;

    struct PlaybackBuffer {
        samples: Vec<f32>,
        position: usize,
        finished: bool,
    }

    pub fn play(tone: &Tone) -> Result<(), String> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| "no default output device".to_string())?;

        let stream_config = StreamConfig {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            buffer_size: cpal::BufferSize::Default,
        };

        let buffer = Arc::new(Mutex::new(PlaybackBuffer {
            samples: tone.samples(SAMPLE_RATE),
            position: 0,
            finished: false,
        }));
        let buffer_clone = Arc::clone(&buffer);

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                    let Ok(mut buf) = buffer_clone.lock() else {
                        return;
                    };
                    for sample in data.iter_mut() {
                        if buf.position < buf.samples.len() {
                            *sample = buf.samples[buf.position];
                            buf.position += 1;
                        } else {
                            *sample = 0.0;
                            buf.finished = true;
                        }
                    }
                },
                move |err| {
                    error!("audio output stream error: {err}");
                },
                None,
            )
            .map_err(|e| format!("failed to build output stream: {e}"))?;

        stream
            .play()
            .map_err(|e| format!("failed to start output stream: {e}"))?;

        loop {
            std::thread::sleep(std::time::Duration::from_millis(10));
            let buf = buffer
                .lock()
                .map_err(|e| format!("playback buffer lock poisoned: {e}"))?;
            if buf.finished {
                break;
            }
        }

        drop(stream);
        Ok(())
    }
}

#[cfg(not(feature = "audio"))]
mod playback {
    use super::Tone;

    #[allow(clippy::unnecessary_wraps)]
    pub fn play(_tone: &Tone) -> Result<(), String> {
        Err("built without the `audio` feature".to_string())
    }
}
