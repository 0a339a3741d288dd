use crate::catalog::{FilterCategory, RecordKind};

/// Text rendered by the interface. Defaults are the catalog's Arabic labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
    pub title: String,
    pub subtitle: String,
    pub search_placeholder: String,
    pub filters: String,
    pub clear_filters: String,
    pub reader_column: String,
    pub surah_column: String,
    pub recitation_type_column: String,
    pub ai_title: String,
    pub ai_hint: String,
    pub ai_placeholder: String,
    pub ai_suggestions: String,
    pub loading: String,
    /// `{query}` is replaced with the submitted query.
    pub no_results: String,
    /// `{count}` is replaced with the number of results.
    pub results_header: String,
    pub surah_badge: String,
    pub reader_badge: String,
    pub recitation_badge: String,
    pub voice_start: String,
    pub voice_stop: String,
    pub logs_title: String,
}

impl Default for UiLabels {
    fn default() -> Self {
        Self {
            title: "البحث في القرآن الكريم".into(),
            subtitle: "ابحث عن السور، القراء، وأنماط التلاوة".into(),
            search_placeholder: "ابحث عن سور، قراء، أنماط تلاوة...".into(),
            filters: "الفلاتر".into(),
            clear_filters: "مسح الكل".into(),
            reader_column: "القارئ".into(),
            surah_column: "السورة".into(),
            recitation_type_column: "نوع التلاوة".into(),
            ai_title: "البحث بالذكاء الاصطناعي".into(),
            ai_hint: "اطرح سؤالاً أو ابحث عن موضوع محدد في القرآن الكريم".into(),
            ai_placeholder: "اكتب سؤالك أو موضوع البحث هنا...".into(),
            ai_suggestions: "اقتراحات البحث:".into(),
            loading: "جاري البحث...".into(),
            no_results: "لم يتم العثور على نتائج لـ \"{query}\"".into(),
            results_header: "نتائج البحث ({count})".into(),
            surah_badge: "سورة".into(),
            reader_badge: "قارئ".into(),
            recitation_badge: "تلاوة".into(),
            voice_start: "بدء الاستماع".into(),
            voice_stop: "إيقاف الاستماع".into(),
            logs_title: "Runtime log".into(),
        }
    }
}

impl UiLabels {
    #[must_use]
    pub fn badge(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Surah => &self.surah_badge,
            RecordKind::Reader => &self.reader_badge,
            RecordKind::Recitation => &self.recitation_badge,
        }
    }

    #[must_use]
    pub fn column(&self, category: FilterCategory) -> &str {
        match category {
            FilterCategory::Reader => &self.reader_column,
            FilterCategory::Surah => &self.surah_column,
            FilterCategory::RecitationType => &self.recitation_type_column,
        }
    }

    #[must_use]
    pub fn no_results_for(&self, query: &str) -> String {
        self.no_results.replace("{query}", query)
    }

    #[must_use]
    pub fn results_header_for(&self, count: usize) -> String {
        self.results_header.replace("{count}", &count.to_string())
    }
}

/// Presentation settings handed to the [`App`](super::App).
#[derive(Debug, Clone, Default)]
pub struct UiConfig {
    pub labels: UiLabels,
}

impl UiConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.labels.title = title.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.labels.search_placeholder = placeholder.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_substitute_query_and_count() {
        let labels = UiLabels::default();
        assert_eq!(labels.no_results_for("xyz"), "لم يتم العثور على نتائج لـ \"xyz\"");
        assert_eq!(labels.results_header_for(3), "نتائج البحث (3)");
        assert_eq!(labels.badge(RecordKind::Reader), "قارئ");
    }
}
