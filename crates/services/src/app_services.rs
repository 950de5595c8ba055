use std::path::PathBuf;
use std::sync::Arc;

use phrase_core::model::{Category, QuizMode};
use phrase_core::{Clock, PhraseCatalog};
use storage::catalog::load_catalog;
use storage::settings::KeyValueSettingsRepository;
use storage::{ProgressStore, Storage};

use crate::app_settings_service::AppSettingsService;
use crate::error::{AppServicesError, SessionError};
use crate::overview::HomeOverview;
use crate::sessions::{ReviewSession, StageSession};

const DATA_DIR_ENV: &str = "PHRASEBOOK_DATA_DIR";
const CATALOG_ENV: &str = "PHRASEBOOK_CATALOG";
const DEFAULT_DATA_DIR: &str = ".phrasebook";
const PROGRESS_FILE: &str = "progress.json";

/// Where the app keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Phrase catalog override; the bundled catalog is used when `None`.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads `PHRASEBOOK_DATA_DIR` and `PHRASEBOOK_CATALOG`.
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let catalog_path = std::env::var_os(CATALOG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            data_dir,
            catalog_path,
        }
    }

    #[must_use]
    pub fn progress_path(&self) -> PathBuf {
        self.data_dir.join(PROGRESS_FILE)
    }
}

/// Process-wide context handed to the presentation layer.
///
/// Owns the single `ProgressStore`; session controllers borrow it for their
/// lifetime.
pub struct AppServices {
    clock: Clock,
    catalog: Arc<PhraseCatalog>,
    progress: ProgressStore,
    app_settings: Arc<AppSettingsService>,
}

impl AppServices {
    /// Open file-backed storage and load the phrase catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if an existing progress file cannot be read.
    pub fn open(config: &AppConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::json_file(config.progress_path())?;
        let catalog = load_catalog(config.catalog_path.as_deref());
        Ok(Self::with_storage(&storage, catalog, clock))
    }

    #[must_use]
    pub fn in_memory(catalog: PhraseCatalog, clock: Clock) -> Self {
        Self::with_storage(&Storage::in_memory(), catalog, clock)
    }

    fn with_storage(storage: &Storage, catalog: PhraseCatalog, clock: Clock) -> Self {
        let progress = ProgressStore::load(Arc::clone(&storage.store));
        let app_settings = Arc::new(AppSettingsService::new(Arc::new(
            KeyValueSettingsRepository::new(Arc::clone(&storage.store)),
        )));
        Self {
            clock,
            catalog: Arc::new(catalog),
            progress,
            app_settings,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<PhraseCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressStore {
        &mut self.progress
    }

    #[must_use]
    pub fn app_settings(&self) -> Arc<AppSettingsService> {
        Arc::clone(&self.app_settings)
    }

    #[must_use]
    pub fn overview(&self) -> HomeOverview {
        HomeOverview::build(&self.catalog, &self.progress)
    }

    /// # Errors
    ///
    /// Returns `SessionError::EmptyCatalog` if the category has no phrases.
    pub fn start_stage(
        &mut self,
        category: Category,
        mode: QuizMode,
    ) -> Result<StageSession<'_>, SessionError> {
        let stage = self.catalog.stage(category, &self.progress);
        StageSession::start(&stage, mode, &mut self.progress)
    }

    /// # Errors
    ///
    /// Returns `SessionError::EmptyCatalog` if there are no core phrases.
    pub fn start_review(&self, mode: QuizMode) -> Result<ReviewSession, SessionError> {
        ReviewSession::start(&self.catalog, mode, self.clock)
    }

    /// Wipe all progress and the onboarding flag. Settings are kept.
    pub fn reset_all(&mut self) {
        self.progress.reset_all();
    }
}
