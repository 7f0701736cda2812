//! Query normalization and scope parsing.

use serde::Deserialize;

/// Minimum trimmed query length before the pipeline runs. Shorter queries
/// short-circuit to the empty envelope without touching the store.
pub const MIN_QUERY_LEN: usize = 2;

/// Requested search scope: everything, one entity type, or one of the
/// user-scope aliases. Unknown values are rejected at extraction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    Video,
    Channel,
    User,
    Projeto,
    Desafio,
    Category,
    Skill,
    /// Users with `account_type == talent`, still labeled `user`.
    Talentos,
    /// Users with `account_type == mentor`, still labeled `user`.
    Mentores,
}

/// Trim surrounding whitespace from the raw query.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_string()
}

/// Whether a normalized query is long enough to run the pipeline.
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  react  "), "react");
        assert_eq!(normalize("\treact\n"), "react");
    }

    #[test]
    fn test_is_searchable_boundaries() {
        assert!(!is_searchable(""));
        assert!(!is_searchable("a"));
        assert!(is_searchable("ab"));
        assert!(is_searchable("go"));
    }

    #[test]
    fn test_scope_parses_platform_aliases() {
        let scope: SearchScope = serde_json::from_str("\"talentos\"").unwrap();
        assert_eq!(scope, SearchScope::Talentos);
        let scope: SearchScope = serde_json::from_str("\"desafio\"").unwrap();
        assert_eq!(scope, SearchScope::Desafio);
    }

    #[test]
    fn test_scope_rejects_unknown_values() {
        assert!(serde_json::from_str::<SearchScope>("\"playlist\"").is_err());
    }
}
