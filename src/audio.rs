use tree_core::{AudioCue, Ramp, MASTER_GAIN};
use wasm_bindgen::JsValue;
use web_sys as web;

/// WebAudio rendition of the gesture and transition cues.
pub struct CueSynth {
    ctx: web::AudioContext,
    master: web::GainNode,
    muted: bool,
}

impl CueSynth {
    pub fn new() -> Result<Self, JsValue> {
        let ctx = web::AudioContext::new()?;
        let master = web::GainNode::new(&ctx)?;
        master.gain().set_value(MASTER_GAIN);
        master.connect_with_audio_node(&ctx.destination())?;
        Ok(Self {
            ctx,
            master,
            muted: false,
        })
    }

    /// Browsers start the context suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        let level = if self.muted { 0.0 } else { MASTER_GAIN };
        _ = self
            .master
            .gain()
            .set_value_at_time(level, self.ctx.current_time());
        self.muted
    }

    pub fn play(&self, cue: AudioCue) {
        if self.muted {
            return;
        }
        if let Err(e) = self.schedule(cue) {
            log::warn!("[audio] cue {:?} failed: {:?}", cue, e);
        }
    }

    fn schedule(&self, cue: AudioCue) -> Result<(), JsValue> {
        let shape = cue.shape();
        let osc = web::OscillatorNode::new(&self.ctx)?;
        let gain = web::GainNode::new(&self.ctx)?;
        osc.set_type(web::OscillatorType::Sine);
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.master)?;

        let now = self.ctx.current_time();
        let end = now + shape.duration_sec as f64;
        let freq = osc.frequency();
        let level = gain.gain();
        freq.set_value_at_time(shape.start_hz, now)?;
        level.set_value_at_time(shape.start_gain, now)?;
        match shape.ramp {
            Ramp::Exponential => {
                freq.exponential_ramp_to_value_at_time(shape.end_hz, end)?;
                level.exponential_ramp_to_value_at_time(shape.end_gain, end)?;
            }
            Ramp::Linear => {
                freq.linear_ramp_to_value_at_time(shape.end_hz, end)?;
                level.linear_ramp_to_value_at_time(shape.end_gain, end)?;
            }
        }
        osc.start_with_when(now)?;
        osc.stop_with_when(end)?;
        Ok(())
    }
}
