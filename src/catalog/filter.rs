use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of dimensions a filter can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    Reader,
    Surah,
    RecitationType,
}

impl FilterCategory {
    /// Categories in the order the filter panel lays them out.
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::Reader,
        FilterCategory::Surah,
        FilterCategory::RecitationType,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterCategory::Reader => "reader",
            FilterCategory::Surah => "surah",
            FilterCategory::RecitationType => "recitationType",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    #[error("unknown filter category '{0}' (expected reader, surah, or recitationType)")]
    UnknownCategory(String),
    #[error("filter '{0}' must be written as CATEGORY=VALUE")]
    MissingSeparator(String),
    #[error("filter for category {0} has an empty value")]
    EmptyValue(FilterCategory),
}

impl FromStr for FilterCategory {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "reader" => Ok(FilterCategory::Reader),
            "surah" => Ok(FilterCategory::Surah),
            "recitationType" | "recitation-type" | "recitation_type" => {
                Ok(FilterCategory::RecitationType)
            }
            other => Err(FilterParseError::UnknownCategory(other.to_string())),
        }
    }
}

/// A category constraint with a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    pub category: FilterCategory,
    pub value: String,
}

impl Filter {
    #[must_use]
    pub fn new(category: FilterCategory, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category, self.value)
    }
}

impl FromStr for Filter {
    type Err = FilterParseError;

    /// Parse the `CATEGORY=VALUE` form accepted on the command line and in
    /// configuration files. The value is kept verbatim after the separator.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (category, value) = text
            .split_once('=')
            .ok_or_else(|| FilterParseError::MissingSeparator(text.to_string()))?;
        let category: FilterCategory = category.parse()?;
        if value.is_empty() {
            return Err(FilterParseError::EmptyValue(category));
        }
        Ok(Self::new(category, value))
    }
}

/// Insertion-ordered collection of filters with category+value uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter, returning `false` when an identical one is already present.
    pub fn insert(&mut self, filter: Filter) -> bool {
        if self.contains(&filter) {
            return false;
        }
        self.filters.push(filter);
        true
    }

    /// Remove the filter at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Filter> {
        if index < self.filters.len() {
            Some(self.filters.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    #[must_use]
    pub fn contains(&self, filter: &Filter) -> bool {
        self.filters.iter().any(|existing| existing == filter)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for filter in iter {
            set.insert(filter);
        }
        set
    }
}
