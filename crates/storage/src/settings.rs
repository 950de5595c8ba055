use std::sync::Arc;

use phrase_core::model::AppSettings;

use crate::repository::{KeyValueStore, StorageError, read_json, write_json};

const APPEARANCE_KEY: &str = "appearanceMode";
const AUTO_PLAY_KEY: &str = "autoPlayAudio";
const SOUND_EFFECTS_KEY: &str = "soundEffectsEnabled";
const HAPTIC_KEY: &str = "hapticEnabled";

/// Repository contract for user settings.
pub trait AppSettingsRepository: Send + Sync {
    /// Load settings; keys never written take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or holds malformed values.
    fn get_settings(&self) -> Result<AppSettings, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if any key cannot be written.
    fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError>;
}

/// Settings stored as individual keys in a [`KeyValueStore`].
#[derive(Clone)]
pub struct KeyValueSettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueSettingsRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl AppSettingsRepository for KeyValueSettingsRepository {
    fn get_settings(&self) -> Result<AppSettings, StorageError> {
        let store = self.store.as_ref();
        let appearance: Option<String> = read_json(store, APPEARANCE_KEY)?;
        Ok(AppSettings::from_persisted(
            appearance.as_deref(),
            read_json(store, AUTO_PLAY_KEY)?,
            read_json(store, SOUND_EFFECTS_KEY)?,
            read_json(store, HAPTIC_KEY)?,
        ))
    }

    fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let store = self.store.as_ref();
        write_json(store, APPEARANCE_KEY, settings.appearance_mode().as_str())?;
        write_json(store, AUTO_PLAY_KEY, &settings.auto_play_audio())?;
        write_json(store, SOUND_EFFECTS_KEY, &settings.sound_effects_enabled())?;
        write_json(store, HAPTIC_KEY, &settings.haptic_enabled())?;
        Ok(())
    }
}
