//! Text shown in the heads-up display.

use crate::constants::FPS_WINDOW_SEC;
use crate::state::{GestureKind, InteractionMode, ShapeMode, SharedState};

pub fn gesture_text(gesture: Option<GestureKind>) -> &'static str {
    match gesture {
        None => "无",
        Some(GestureKind::OpenHands) => "双手展开 (绽放)",
        Some(GestureKind::CloseHands) => "双手合拢 (收缩)",
        Some(GestureKind::QuantumPinch) => "量子捏合 (叠加态)",
        Some(GestureKind::OneHandSpin) => "单手旋转",
        Some(GestureKind::TouchExpand) => "双指张开",
        Some(GestureKind::TouchCondense) => "双指捏合",
        Some(GestureKind::TouchSpin) => "滑动旋转",
    }
}

pub fn shape_text(mode: ShapeMode) -> &'static str {
    match mode {
        ShapeMode::Expanded => "绽放 (Expanded)",
        ShapeMode::Condensed => "收缩 (Condensed)",
        ShapeMode::Superposition => "叠加态 (Superposition)",
    }
}

pub fn interaction_text(mode: InteractionMode) -> &'static str {
    match mode {
        InteractionMode::Cruise => "自动巡航 (Cruise)",
        InteractionMode::Interactive => "交互模式 (Interactive)",
    }
}

/// Frames counted over one-second windows.
#[derive(Clone, Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    window_start: Option<f64>,
    last_fps: u32,
}

impl FpsCounter {
    /// Count a frame at `now` seconds. Returns the new reading when a window
    /// closes.
    pub fn frame(&mut self, now: f64) -> Option<u32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;
        if now - start >= FPS_WINDOW_SEC {
            self.last_fps = self.frames;
            self.frames = 0;
            self.window_start = Some(now);
            return Some(self.last_fps);
        }
        None
    }

    pub fn fps(&self) -> u32 {
        self.last_fps
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudSnapshot {
    pub mode: String,
    pub gesture: String,
    pub fps: String,
    pub speed: String,
}

impl HudSnapshot {
    pub fn capture(state: &SharedState, fps: u32) -> Self {
        Self {
            mode: format!(
                "模式: {} · {}",
                interaction_text(state.interaction),
                shape_text(state.shape_mode)
            ),
            gesture: format!("手势: {}", gesture_text(state.last_gesture())),
            fps: format!("FPS: {}", fps),
            speed: format!("旋转: {:+.2}", state.params.rotation_speed),
        }
    }

    /// Single-line form used where there is no DOM, such as a window title.
    pub fn one_line(&self) -> String {
        format!("{} | {} | {} | {}", self.mode, self.gesture, self.speed, self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_window_closes_after_a_second() {
        let mut fps = FpsCounter::default();
        assert_eq!(fps.frame(0.0), None);
        for i in 1..60 {
            assert_eq!(fps.frame(i as f64 / 60.0), None);
        }
        assert_eq!(fps.frame(1.0), Some(61));
        assert_eq!(fps.fps(), 61);
    }

    #[test]
    fn snapshot_shows_no_gesture_sentinel() {
        let state = SharedState::default();
        let hud = HudSnapshot::capture(&state, 60);
        assert_eq!(hud.gesture, "手势: 无");
        assert!(hud.one_line().contains("FPS: 60"));
    }
}
