use std::sync::Arc;

use crate::catalog::{Catalog, Filter, FilterCategory, FilterSet, Record, RecordKind};

/// Pure substring/filter evaluation over an injected [`Catalog`].
///
/// The evaluator never reorders or scores: its output is always an
/// order-preserving subsequence of the catalog.
#[derive(Debug, Clone)]
pub struct SearchEvaluator {
    catalog: Arc<Catalog>,
}

impl SearchEvaluator {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Return the records matching `query` and `filters`, in catalog order.
    ///
    /// An empty query with no filters yields nothing at all; callers treat that
    /// as the untouched state rather than as a search with zero matches.
    #[must_use]
    pub fn evaluate(&self, query: &str, filters: &FilterSet) -> Vec<&Record> {
        self.matching_indices(query, filters)
            .into_iter()
            .filter_map(|index| self.catalog.record(index))
            .collect()
    }

    /// Same as [`evaluate`](Self::evaluate) but returns catalog positions.
    #[must_use]
    pub fn matching_indices(&self, query: &str, filters: &FilterSet) -> Vec<usize> {
        if query.is_empty() && filters.is_empty() {
            return Vec::new();
        }

        self.catalog
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| query.is_empty() || matches_query(record, query))
            .filter(|(_, record)| filters.is_empty() || matches_any_filter(record, filters))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Case-sensitive literal containment across title, subtitle and description.
#[must_use]
pub fn matches_query(record: &Record, query: &str) -> bool {
    record.title.contains(query)
        || record.subtitle.contains(query)
        || record
            .description
            .as_deref()
            .is_some_and(|description| description.contains(query))
}

/// Filters combine with OR: one matching filter is enough.
#[must_use]
pub fn matches_any_filter(record: &Record, filters: &FilterSet) -> bool {
    filters.iter().any(|filter| matches_filter(record, filter))
}

#[must_use]
pub fn matches_filter(record: &Record, filter: &Filter) -> bool {
    let value = filter.value.as_str();
    match (filter.category, record.kind) {
        (FilterCategory::Surah, RecordKind::Surah) => record.title.contains(value),
        (FilterCategory::Reader, RecordKind::Reader | RecordKind::Recitation) => {
            record.title.contains(value) || record.subtitle.contains(value)
        }
        (FilterCategory::RecitationType, RecordKind::Recitation) => record.title.contains(value),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> SearchEvaluator {
        SearchEvaluator::new(Arc::new(Catalog::builtin()))
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|record| record.id.clone()).collect()
    }

    fn filters(items: &[(FilterCategory, &str)]) -> FilterSet {
        items
            .iter()
            .map(|(category, value)| Filter::new(*category, *value))
            .collect()
    }

    #[test]
    fn empty_query_and_no_filters_yield_nothing() {
        assert!(evaluator().evaluate("", &FilterSet::new()).is_empty());
    }

    #[test]
    fn query_matches_title_substring_in_catalog_order() {
        let evaluator = evaluator();
        let results = evaluator.evaluate("البقرة", &FilterSet::new());
        assert_eq!(ids(&results), vec!["1", "4", "5"]);
    }

    #[test]
    fn query_matches_subtitle_and_description() {
        let evaluator = evaluator();
        assert_eq!(ids(&evaluator.evaluate("الكويت", &FilterSet::new())), vec!["3"]);
        assert_eq!(ids(&evaluator.evaluate("المثاني", &FilterSet::new())), vec!["2"]);
        assert_eq!(
            ids(&evaluator.evaluate("المصحف المرتل", &FilterSet::new())),
            vec!["1", "2"]
        );
    }

    #[test]
    fn query_is_case_sensitive_and_untrimmed() {
        let catalog = Catalog::new(vec![
            Record::new("a", "Al-Fatiha", "Opening", RecordKind::Surah),
            Record::new("b", "al-baqara", "Cow", RecordKind::Surah),
        ])
        .expect("catalog");
        let evaluator = SearchEvaluator::new(Arc::new(catalog));
        assert_eq!(ids(&evaluator.evaluate("Al", &FilterSet::new())), vec!["a"]);
        assert!(evaluator.evaluate(" Al", &FilterSet::new()).is_empty());
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        assert!(evaluator().evaluate("xyz-not-present", &FilterSet::new()).is_empty());
    }

    #[test]
    fn reader_filter_matches_readers_and_recitations() {
        let evaluator = evaluator();
        let set = filters(&[(FilterCategory::Reader, "مشاري العفاسي")]);
        assert_eq!(ids(&evaluator.evaluate("", &set)), vec!["3", "4"]);
    }

    #[test]
    fn surah_filter_only_matches_surah_records() {
        let evaluator = evaluator();
        let set = filters(&[(FilterCategory::Surah, "البقرة")]);
        assert_eq!(ids(&evaluator.evaluate("", &set)), vec!["1"]);
    }

    #[test]
    fn recitation_type_filter_only_matches_recitations() {
        let evaluator = evaluator();
        let set = filters(&[(FilterCategory::RecitationType, "مجود")]);
        assert_eq!(ids(&evaluator.evaluate("", &set)), vec!["5"]);
        let set = filters(&[(FilterCategory::RecitationType, "حدر")]);
        assert!(evaluator.evaluate("", &set).is_empty());
    }

    #[test]
    fn filters_combine_with_or() {
        let evaluator = evaluator();
        let set = filters(&[
            (FilterCategory::Surah, "الفاتحة"),
            (FilterCategory::RecitationType, "مرتل"),
        ]);
        assert_eq!(ids(&evaluator.evaluate("", &set)), vec!["2", "4"]);
    }

    #[test]
    fn query_and_filters_intersect() {
        let evaluator = evaluator();
        let set = filters(&[(FilterCategory::Reader, "مشاري العفاسي")]);
        assert_eq!(ids(&evaluator.evaluate("البقرة", &set)), vec!["4"]);
        assert!(evaluator.evaluate("الفاتحة", &set).is_empty());
    }

    #[test]
    fn query_only_results_contain_query_and_exclude_the_rest() {
        let evaluator = evaluator();
        for query in ["سورة", "ال", "مرتل", "عبد", "ة"] {
            let kept = evaluator.matching_indices(query, &FilterSet::new());
            for (index, record) in evaluator.catalog().records().iter().enumerate() {
                assert_eq!(
                    kept.contains(&index),
                    matches_query(record, query),
                    "record {} with query {query}",
                    record.id
                );
            }
        }
    }

    #[test]
    fn filter_only_results_match_at_least_one_filter() {
        let evaluator = evaluator();
        let set = filters(&[
            (FilterCategory::Reader, "عبد الباسط عبد الصمد"),
            (FilterCategory::Surah, "الفاتحة"),
        ]);
        let kept = evaluator.matching_indices("", &set);
        assert_eq!(kept, vec![1, 4]);
        for (index, record) in evaluator.catalog().records().iter().enumerate() {
            assert_eq!(kept.contains(&index), matches_any_filter(record, &set));
        }
    }

    #[test]
    fn evaluation_is_idempotent_and_order_preserving() {
        let evaluator = evaluator();
        let set = filters(&[(FilterCategory::Reader, "مشاري العفاسي")]);
        let first = evaluator.matching_indices("سورة", &set);
        let second = evaluator.matching_indices("سورة", &set);
        assert_eq!(first, second);

        for query in ["", "سورة", "ال"] {
            let indices = evaluator.matching_indices(query, &set);
            assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
