use crate::constants::THEME_BLEND;
use crate::error::SettingsError;
use std::fmt;
use std::str::FromStr;

/// Color theme applied on top of the per-mode palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Unmodified palette.
    #[default]
    Aurora,
    /// Warm amber tint.
    Ember,
    /// Cold icy tint.
    Frost,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Aurora, Theme::Ember, Theme::Frost];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Aurora => "aurora",
            Theme::Ember => "ember",
            Theme::Frost => "frost",
        }
    }

    fn accent(self) -> Option<[f32; 3]> {
        match self {
            Theme::Aurora => None,
            Theme::Ember => Some([1.0, 0.45, 0.1]),
            Theme::Frost => Some([0.75, 0.9, 1.0]),
        }
    }

    /// Blend a palette color toward the theme accent. Inputs and outputs are
    /// in [0, 1].
    #[inline]
    pub fn tint(self, rgb: [f32; 3]) -> [f32; 3] {
        match self.accent() {
            None => rgb,
            Some(accent) => {
                let mut out = [0.0; 3];
                for c in 0..3 {
                    out[c] = (rgb[c] + (accent[c] - rgb[c]) * THEME_BLEND).clamp(0.0, 1.0);
                }
                out
            }
        }
    }

    pub fn next(self) -> Theme {
        match self {
            Theme::Aurora => Theme::Ember,
            Theme::Ember => Theme::Frost,
            Theme::Frost => Theme::Aurora,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SettingsError::UnknownTheme(wanted.to_string()))
    }
}
