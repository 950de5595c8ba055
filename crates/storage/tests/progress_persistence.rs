use std::sync::Arc;

use phrase_core::model::{Category, ProgressView, StageId};
use storage::ProgressStore;
use storage::file::JsonFileStore;
use storage::settings::{AppSettingsRepository, KeyValueSettingsRepository};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn progress_survives_reopening_the_file() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("progress.json");
    let food = StageId::from(Category::Food);
    let hotel = StageId::from(Category::Hotel);

    {
        let store = Arc::new(JsonFileStore::open(&path).expect("open"));
        let mut progress = ProgressStore::load(store);
        for _ in 0..3 {
            progress.increment_streak(&hotel);
        }
        progress.mark_cleared(&food);
    }

    let store = Arc::new(JsonFileStore::open(&path).expect("reopen"));
    let progress = ProgressStore::load(store);
    assert!(progress.is_stage_cleared(&food));
    assert_eq!(ProgressView::streak(&progress, &hotel), 3);
    assert_eq!(progress.streak(&food), 0);
}

#[test]
fn reset_all_clears_the_file_but_keeps_settings() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("progress.json");
    let store = Arc::new(JsonFileStore::open(&path).expect("open"));

    let settings_repo = KeyValueSettingsRepository::new(store.clone());
    let mut settings = settings_repo.get_settings().unwrap();
    settings.set_sound_effects_enabled(false);
    settings_repo.save_settings(&settings).unwrap();

    let mut progress = ProgressStore::load(store);
    progress.mark_cleared(&StageId::from(Category::Airport));
    progress.complete_onboarding();
    progress.reset_all();

    let reopened = Arc::new(JsonFileStore::open(&path).expect("reopen"));
    let progress = ProgressStore::load(reopened.clone());
    for category in Category::ALL {
        let id = StageId::from(category);
        assert_eq!(progress.streak(&id), 0);
        assert!(!progress.is_stage_cleared(&id));
    }
    assert!(!progress.has_completed_onboarding());

    let settings = KeyValueSettingsRepository::new(reopened).get_settings().unwrap();
    assert!(!settings.sound_effects_enabled());
}
