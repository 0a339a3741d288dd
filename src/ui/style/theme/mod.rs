mod builtins;
mod types;

pub use builtins::{SAGE, SLATE};
pub use types::{Theme, ThemeDefinition};

/// Return the theme used when no name is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SAGE
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
    builtins::DEFINITIONS.iter().map(|def| def.name).collect()
}

/// Look up a built-in theme by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    builtins::DEFINITIONS
        .iter()
        .find(|def| def.matches(name.trim()))
        .map(|def| def.theme)
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_aliases_and_case() {
        assert!(by_name("sage").is_some());
        assert!(by_name("SLATE").is_some());
        assert!(by_name("dark").is_some());
        assert!(by_name("default").is_some());
        assert!(by_name("neon").is_none());
        assert_eq!(names(), vec!["sage", "slate"]);
    }
}
