//! Audio feedback cues. Synthesis belongs to the front-ends; this module only
//! decides which cue to play and describes its shape.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    /// Short rising blip for a newly recognized gesture.
    Gesture,
    /// Low falling whoosh when the sculpture changes shape.
    Transition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
    Linear,
    Exponential,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueShape {
    pub start_hz: f32,
    pub end_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_sec: f32,
    pub ramp: Ramp,
}

impl CueShape {
    /// Frequency and gain at `t` seconds into the cue.
    pub fn sample_at(&self, t: f32) -> (f32, f32) {
        let u = (t / self.duration_sec).clamp(0.0, 1.0);
        match self.ramp {
            Ramp::Linear => (
                self.start_hz + (self.end_hz - self.start_hz) * u,
                self.start_gain + (self.end_gain - self.start_gain) * u,
            ),
            Ramp::Exponential => (
                self.start_hz * (self.end_hz / self.start_hz).powf(u),
                self.start_gain * (self.end_gain / self.start_gain).powf(u),
            ),
        }
    }
}

impl AudioCue {
    pub fn shape(self) -> CueShape {
        match self {
            AudioCue::Gesture => CueShape {
                start_hz: 800.0,
                end_hz: 1200.0,
                start_gain: 0.3,
                end_gain: 0.01,
                duration_sec: 0.1,
                ramp: Ramp::Exponential,
            },
            AudioCue::Transition => CueShape {
                start_hz: 200.0,
                end_hz: 50.0,
                start_gain: 0.5,
                end_gain: 0.01,
                duration_sec: 1.0,
                ramp: Ramp::Linear,
            },
        }
    }

    /// A shape change outranks a plain gesture change.
    pub fn for_frame(gesture_changed: bool, mode_changed: bool) -> Option<AudioCue> {
        if mode_changed {
            Some(AudioCue::Transition)
        } else if gesture_changed {
            Some(AudioCue::Gesture)
        } else {
            None
        }
    }
}

/// Master level used when unmuted.
pub const MASTER_GAIN: f32 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_priority() {
        assert_eq!(AudioCue::for_frame(true, true), Some(AudioCue::Transition));
        assert_eq!(AudioCue::for_frame(true, false), Some(AudioCue::Gesture));
        assert_eq!(AudioCue::for_frame(false, false), None);
    }

    #[test]
    fn shapes_hit_their_endpoints() {
        for cue in [AudioCue::Gesture, AudioCue::Transition] {
            let s = cue.shape();
            let (f0, g0) = s.sample_at(0.0);
            let (f1, g1) = s.sample_at(s.duration_sec);
            assert!((f0 - s.start_hz).abs() < 1e-3 && (g0 - s.start_gain).abs() < 1e-6);
            assert!((f1 - s.end_hz).abs() < 1e-2 && (g1 - s.end_gain).abs() < 1e-5);
        }
    }
}
