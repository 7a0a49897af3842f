use crate::constants::*;
use crate::error::SettingsError;
use crate::integrator::Integrator;
use crate::state::SharedState;
use crate::theme::Theme;

/// A change requested from the settings drawer or its keyboard equivalent.
#[derive(Clone, Debug, PartialEq)]
pub enum Setting {
    ParticleCount(usize),
    Theme(Theme),
    Brightness(f32),
    PhotosVisible(bool),
    /// Restore the default particle count.
    Reset,
}

/// Result of an accepted setting, with the text for a confirmation toast.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingApplied {
    pub recreated: bool,
    pub message: String,
}

pub fn validate_particle_count(count: usize) -> Result<usize, SettingsError> {
    if (1..=MAX_PARTICLE_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(SettingsError::ParticleCount {
            requested: count,
            max: MAX_PARTICLE_COUNT,
        })
    }
}

pub fn validate_brightness(value: f32) -> Result<f32, SettingsError> {
    if value.is_finite() && (0.0..=MAX_BRIGHTNESS).contains(&value) {
        Ok(value)
    } else {
        Err(SettingsError::Brightness(value, MAX_BRIGHTNESS))
    }
}

/// Write a setting into the shared state, recreating or regenerating the
/// particle field where the change requires it. Rejected values leave the
/// state untouched.
pub fn apply_setting(
    state: &mut SharedState,
    integrator: &mut Integrator,
    setting: Setting,
) -> Result<SettingApplied, SettingsError> {
    let applied = match setting {
        Setting::ParticleCount(count) => {
            state.params.particle_count = validate_particle_count(count)?;
            integrator.recreate(state);
            SettingApplied {
                recreated: true,
                message: format!("粒子数: {}", count),
            }
        }
        Setting::Theme(theme) => {
            state.params.theme = theme;
            integrator.regenerate(state);
            SettingApplied {
                recreated: false,
                message: format!("主题切换: {}", theme),
            }
        }
        Setting::Brightness(value) => {
            state.params.brightness = validate_brightness(value)?;
            SettingApplied {
                recreated: false,
                message: format!("亮度: {:.1}", value),
            }
        }
        Setting::PhotosVisible(visible) => {
            state.params.photos_visible = visible;
            SettingApplied {
                recreated: false,
                message: if visible { "照片: 开" } else { "照片: 关" }.to_string(),
            }
        }
        Setting::Reset => {
            state.params.particle_count = DEFAULT_PARTICLE_COUNT;
            integrator.recreate(state);
            SettingApplied {
                recreated: true,
                message: "已恢复默认设置".to_string(),
            }
        }
    };
    log::info!("[settings] {}", applied.message);
    Ok(applied)
}
