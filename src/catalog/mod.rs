//! The recitation catalog that every search runs against.
//!
//! A [`Catalog`] is loaded once at startup, either from the built-in fixture or
//! from a JSON file, and is shared read-only behind an [`Arc`](std::sync::Arc)
//! for the rest of the process.

mod filter;
mod fixture;

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use filter::{Filter, FilterCategory, FilterParseError, FilterSet};

/// Closed set of catalog entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Surah,
    Reader,
    Recitation,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Surah, RecordKind::Reader, RecordKind::Recitation];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Surah => "surah",
            RecordKind::Reader => "reader",
            RecordKind::Recitation => "recitation",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single searchable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: RecordKind,
}

impl Record {
    /// Create a record without a description.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        kind: RecordKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: None,
            kind,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fixed filter values offered for each [`FilterCategory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vocabulary {
    pub reader: Vec<String>,
    pub surah: Vec<String>,
    pub recitation_type: Vec<String>,
}

impl Vocabulary {
    /// Values offered for a category, in display order.
    #[must_use]
    pub fn values(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::Reader => &self.reader,
            FilterCategory::Surah => &self.surah,
            FilterCategory::RecitationType => &self.recitation_type,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("record id '{id}' appears more than once in the catalog")]
    DuplicateId { id: String },
}

/// Immutable search universe plus the static UI vocabularies that go with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    records: Vec<Record>,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    vocabulary: Vocabulary,
    #[serde(default)]
    ai_prompts: Vec<String>,
}

impl Catalog {
    /// Build a catalog from records alone, validating id uniqueness.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        let catalog = Self {
            records,
            suggestions: Vec::new(),
            vocabulary: Vocabulary::default(),
            ai_prompts: Vec::new(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: fixture::records(),
            suggestions: fixture::suggestions(),
            vocabulary: fixture::vocabulary(),
            ai_prompts: fixture::ai_prompts(),
        }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(text: &str, origin: &Path) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text, path)?;
        log::info!(
            "loaded {} catalog records from {}",
            catalog.records.len(),
            path.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    #[must_use]
    pub fn with_ai_prompts(mut self, prompts: Vec<String>) -> Self {
        self.ai_prompts = prompts;
        self
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn ai_prompts(&self) -> &[String] {
        &self.ai_prompts
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_catalog_matches_fixture_shape() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(catalog.suggestions().len(), 11);
        assert_eq!(catalog.vocabulary().reader.len(), 4);
        assert_eq!(catalog.vocabulary().surah.len(), 5);
        assert_eq!(catalog.vocabulary().recitation_type.len(), 3);
        assert_eq!(catalog.ai_prompts().len(), 5);
        assert!(catalog.records()[3].description.is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let records = vec![
            Record::new("a", "one", "x", RecordKind::Surah),
            Record::new("a", "two", "y", RecordKind::Reader),
        ];
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn json_catalog_uses_type_field_and_optional_lists() {
        let json = r#"{
            "records": [
                {"id": "7", "title": "سورة يس", "subtitle": "مجود", "type": "surah"},
                {"id": "8", "title": "الحصري", "subtitle": "قارئ", "description": "مصر", "type": "reader"}
            ],
            "vocabulary": {"recitationType": ["حدر"]}
        }"#;
        let catalog = Catalog::from_json(json, Path::new("inline.json")).expect("parse");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].kind, RecordKind::Surah);
        assert_eq!(catalog.records()[1].description.as_deref(), Some("مصر"));
        assert!(catalog.suggestions().is_empty());
        assert_eq!(catalog.vocabulary().recitation_type, vec!["حدر".to_string()]);
        assert!(catalog.vocabulary().reader.is_empty());
    }

    #[test]
    fn from_path_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write");
        let err = Catalog::from_path(file.path()).unwrap_err();
        match err {
            CatalogError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_path_round_trips_builtin_catalog() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let json = serde_json::to_string(&Catalog::builtin()).expect("serialize");
        file.write_all(json.as_bytes()).expect("write");
        let loaded = Catalog::from_path(file.path()).expect("load");
        assert_eq!(loaded, Catalog::builtin());
    }
}
