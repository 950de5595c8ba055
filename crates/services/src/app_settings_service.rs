use std::sync::Arc;

use phrase_core::model::AppSettings;
use storage::settings::AppSettingsRepository;

use crate::error::AppSettingsServiceError;

#[derive(Clone)]
pub struct AppSettingsService {
    repo: Arc<dyn AppSettingsRepository>,
}

impl AppSettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn AppSettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load persisted settings (defaults for anything never saved).
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsServiceError` on storage failures.
    pub fn load(&self) -> Result<AppSettings, AppSettingsServiceError> {
        Ok(self.repo.get_settings()?)
    }

    /// Persist settings.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsServiceError` if persistence fails.
    pub fn save(&self, settings: &AppSettings) -> Result<(), AppSettingsServiceError> {
        self.repo.save_settings(settings)?;
        Ok(())
    }

    /// Load settings, falling back to defaults when the store is unreadable.
    #[must_use]
    pub fn load_or_default(&self) -> AppSettings {
        self.load().unwrap_or_else(|err| {
            log::warn!("using default settings: {err}");
            AppSettings::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrase_core::model::AppearanceMode;
    use storage::InMemoryStore;
    use storage::repository::write_json;
    use storage::settings::KeyValueSettingsRepository;

    fn service(store: &InMemoryStore) -> AppSettingsService {
        AppSettingsService::new(Arc::new(KeyValueSettingsRepository::new(Arc::new(
            store.clone(),
        ))))
    }

    #[test]
    fn saved_settings_load_back() {
        let store = InMemoryStore::new();
        let svc = service(&store);

        let mut settings = svc.load().unwrap();
        settings.set_appearance_mode(AppearanceMode::Dark);
        settings.set_sound_effects_enabled(false);
        svc.save(&settings).unwrap();

        assert_eq!(service(&store).load().unwrap(), settings);
    }

    #[test]
    fn malformed_value_falls_back_to_defaults() {
        let store = InMemoryStore::new();
        write_json(&store, "hapticEnabled", "yes").unwrap();
        let svc = service(&store);

        assert!(svc.load().is_err());
        assert_eq!(svc.load_or_default(), AppSettings::default());
    }
}
