use serde::Serialize;

use crate::catalog::{FilterSet, Record};

/// What the interactive session ended with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// `true` when the user picked a result, `false` when they quit.
    pub accepted: bool,
    pub query: String,
    pub filters: FilterSet,
    pub selection: Option<Record>,
}

impl SearchOutcome {
    #[must_use]
    pub fn cancelled(query: impl Into<String>, filters: FilterSet) -> Self {
        Self {
            accepted: false,
            query: query.into(),
            filters,
            selection: None,
        }
    }

    #[must_use]
    pub fn accepted(query: impl Into<String>, filters: FilterSet, selection: Record) -> Self {
        Self {
            accepted: true,
            query: query.into(),
            filters,
            selection: Some(selection),
        }
    }
}
