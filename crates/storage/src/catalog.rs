use std::fs;
use std::path::Path;

use phrase_core::PhraseCatalog;
use phrase_core::model::Phrase;
use thiserror::Error;

/// Phrase data shipped with the app.
pub const BUNDLED_CATALOG: &str = include_str!("../data/phrases.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("cannot read phrase catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse phrase catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a JSON array of phrase records.
///
/// # Errors
///
/// Returns `CatalogError::Parse` if the document is not a valid phrase array.
pub fn parse_catalog(json: &str) -> Result<PhraseCatalog, CatalogError> {
    let phrases: Vec<Phrase> = serde_json::from_str(json)?;
    Ok(PhraseCatalog::new(phrases))
}

/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn read_catalog(path: &Path) -> Result<PhraseCatalog, CatalogError> {
    let json = fs::read_to_string(path)?;
    parse_catalog(&json)
}

/// Loads the catalog from `path`, or the bundled one when `path` is `None`.
///
/// Any failure degrades to an empty catalog; callers show an empty state.
#[must_use]
pub fn load_catalog(path: Option<&Path>) -> PhraseCatalog {
    let loaded = match path {
        Some(path) => read_catalog(path),
        None => parse_catalog(BUNDLED_CATALOG),
    };
    match loaded {
        Ok(catalog) => {
            log::debug!("loaded {} phrases", catalog.len());
            catalog
        }
        Err(err) => {
            log::warn!("{err}; continuing with an empty catalog");
            PhraseCatalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrase_core::model::{Category, PhraseId};

    #[test]
    fn bundled_catalog_covers_every_category() {
        let catalog = parse_catalog(BUNDLED_CATALOG).unwrap();
        for category in Category::ALL {
            assert!(
                catalog.for_category(category).len() >= 4,
                "{category:?} needs enough phrases for four options"
            );
        }
        assert!(catalog.core_phrases().len() >= 10);
    }

    #[test]
    fn legacy_field_names_are_accepted() {
        let json = r#"[{"id": 7, "category": "food", "thai": "ไม่เผ็ด", "reading": "mai phet",
                        "meaning": "Not spicy.", "note": null, "is_core": true}]"#;
        let catalog = parse_catalog(json).unwrap();
        let phrase = catalog.get(PhraseId::new(7)).unwrap();
        assert_eq!(phrase.source_text(), "ไม่เผ็ด");
        assert_eq!(phrase.pronunciation_guide(), "mai phet");
        assert!(phrase.is_core());
    }

    #[test]
    fn camel_case_field_names_are_accepted() {
        let json = r#"[{"id": 3, "category": "hotel", "sourceText": "เช็คอิน", "pronunciationGuide": "chek-in",
                        "meaning": "Check in.", "isCore": true}]"#;
        let catalog = parse_catalog(json).unwrap();
        let phrase = catalog.get(PhraseId::new(3)).unwrap();
        assert_eq!(phrase.category(), Category::Hotel);
        assert_eq!(phrase.pronunciation_guide(), "chek-in");
        assert!(phrase.is_core());
        assert_eq!(phrase.note(), None);
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(Some(&dir.path().join("absent.json")));
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phrases.json");
        fs::write(&path, r#"[{"id": "one"}]"#).unwrap();
        assert!(load_catalog(Some(&path)).is_empty());
    }
}
