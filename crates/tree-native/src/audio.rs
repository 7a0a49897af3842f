// ---------------- Native audio cues (cpal) ----------------

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tree_core::{AudioCue, CueShape, MASTER_GAIN};

struct CueVoice {
    shape: CueShape,
    t: f32,
    phase: f32,
}

#[derive(Default)]
struct Mixer {
    voices: Vec<CueVoice>,
}

impl Mixer {
    fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let dt = 1.0 / sample_rate;
        let mut out = 0.0f32;
        self.voices.retain_mut(|v| {
            if v.t >= v.shape.duration_sec {
                return false;
            }
            let (freq, gain) = v.shape.sample_at(v.t);
            out += v.phase.sin() * gain;
            v.phase = (v.phase + std::f32::consts::TAU * freq * dt) % std::f32::consts::TAU;
            v.t += dt;
            true
        });
        (out * MASTER_GAIN).tanh()
    }
}

/// Plays short cue tones on the default output device.
pub struct CuePlayer {
    mixer: Arc<Mutex<Mixer>>,
    muted: Arc<AtomicBool>,
    _stream: cpal::Stream,
}

impl CuePlayer {
    /// `None` when there is no usable output device; cues are then dropped.
    pub fn start() -> Option<Self> {
        let host = cpal::default_host();
        let device = host.default_output_device()?;
        let config = device.default_output_config().ok()?;
        let mixer = Arc::new(Mutex::new(Mixer::default()));
        let muted = Arc::new(AtomicBool::new(false));

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), &mixer, &muted),
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), &mixer, &muted),
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), &mixer, &muted),
            other => {
                log::warn!("[audio] unsupported sample format {:?}", other);
                return None;
            }
        }
        .map_err(|e| log::warn!("[audio] stream error: {}", e))
        .ok()?;
        stream.play().ok()?;
        log::info!("[audio] cue output ready");
        Some(Self {
            mixer,
            muted,
            _stream: stream,
        })
    }

    pub fn play(&self, cue: AudioCue) {
        if self.muted.load(Ordering::Relaxed) {
            return;
        }
        if let Ok(mut mixer) = self.mixer.lock() {
            mixer.voices.push(CueVoice {
                shape: cue.shape(),
                t: 0.0,
                phase: 0.0,
            });
        }
    }

    /// Flip mute; returns the new muted flag.
    pub fn toggle_mute(&self) -> bool {
        !self.muted.fetch_xor(true, Ordering::Relaxed)
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mixer: &Arc<Mutex<Mixer>>,
    muted: &Arc<AtomicBool>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let sample_rate = config.sample_rate.0 as f32;
    let mixer = Arc::clone(mixer);
    let muted = Arc::clone(muted);
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let silent = muted.load(Ordering::Relaxed);
            let Ok(mut mixer) = mixer.lock() else {
                return;
            };
            for frame in data.chunks_mut(channels.max(1)) {
                let v = if silent {
                    0.0
                } else {
                    mixer.next_sample(sample_rate)
                };
                for s in frame.iter_mut() {
                    *s = T::from_sample(v);
                }
            }
        },
        |err| log::error!("[audio] stream error: {err}"),
        None,
    )
}
