use serde::{Deserialize, Serialize};

/// Preferred colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    System,
    Light,
    Dark,
}

impl AppearanceMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AppearanceMode::System => "system",
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// User preferences that shape answer feedback and presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppSettings {
    appearance_mode: AppearanceMode,
    auto_play_audio: bool,
    sound_effects_enabled: bool,
    haptic_enabled: bool,
}

impl AppSettings {
    /// Rehydrate settings from stored values. Missing toggles default to on and
    /// an unknown appearance mode falls back to `System`.
    #[must_use]
    pub fn from_persisted(
        appearance_mode: Option<&str>,
        auto_play_audio: Option<bool>,
        sound_effects_enabled: Option<bool>,
        haptic_enabled: Option<bool>,
    ) -> Self {
        Self {
            appearance_mode: appearance_mode
                .and_then(AppearanceMode::parse)
                .unwrap_or_default(),
            auto_play_audio: auto_play_audio.unwrap_or(true),
            sound_effects_enabled: sound_effects_enabled.unwrap_or(true),
            haptic_enabled: haptic_enabled.unwrap_or(true),
        }
    }

    #[must_use]
    pub fn appearance_mode(&self) -> AppearanceMode {
        self.appearance_mode
    }

    #[must_use]
    pub fn auto_play_audio(&self) -> bool {
        self.auto_play_audio
    }

    #[must_use]
    pub fn sound_effects_enabled(&self) -> bool {
        self.sound_effects_enabled
    }

    #[must_use]
    pub fn haptic_enabled(&self) -> bool {
        self.haptic_enabled
    }

    pub fn set_appearance_mode(&mut self, mode: AppearanceMode) {
        self.appearance_mode = mode;
    }

    pub fn set_auto_play_audio(&mut self, enabled: bool) {
        self.auto_play_audio = enabled;
    }

    pub fn set_sound_effects_enabled(&mut self, enabled: bool) {
        self.sound_effects_enabled = enabled;
    }

    pub fn set_haptic_enabled(&mut self, enabled: bool) {
        self.haptic_enabled = enabled;
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_persisted(None, None, None, None)
    }
}
