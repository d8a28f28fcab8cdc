// ============================================================
// COLUMN RESOLVER
// ============================================================
// Map a header row to logical keyword fields by alias substring

use std::collections::HashMap;

use crate::domain::csv::{ColumnMap, FieldAliases, KeywordField};

/// Resolves header cells to keyword fields
pub struct ColumnResolver;

impl ColumnResolver {
    /// Resolve every field against the header row.
    ///
    /// A field claims the first header cell (by position) whose trimmed,
    /// lowercased text contains any of its aliases. Fields without a match are
    /// left out of the map.
    pub fn resolve(headers: &[String], aliases: &FieldAliases) -> ColumnMap {
        let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

        let positions: HashMap<KeywordField, usize> = KeywordField::ALL
            .into_iter()
            .filter_map(|field| {
                Self::find_column_index(&normalized, aliases.for_field(field))
                    .map(|idx| (field, idx))
            })
            .collect();

        ColumnMap::from_positions(positions)
    }

    /// Index of the first normalized header containing any alias
    fn find_column_index(normalized_headers: &[String], possible_names: &[String]) -> Option<usize> {
        let names: Vec<String> = possible_names
            .iter()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();

        normalized_headers
            .iter()
            .position(|header| names.iter().any(|name| header.contains(name.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolves_semrush_style_headers() {
        let map = ColumnResolver::resolve(
            &headers(&["Keyword", "Intent", "Search Volume", "Keyword Difficulty", "CPC"]),
            &FieldAliases::default(),
        );

        assert_eq!(map.get(KeywordField::Keyword), Some(0));
        assert_eq!(map.get(KeywordField::Intent), Some(1));
        assert_eq!(map.get(KeywordField::Volume), Some(2));
        assert_eq!(map.get(KeywordField::Difficulty), Some(3));
        assert_eq!(map.get(KeywordField::Status), None);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let aliases = FieldAliases {
            volume: vec!["volume".to_string()],
            ..Default::default()
        };
        let map = ColumnResolver::resolve(&headers(&["Keyword", " Search Volume "]), &aliases);
        assert_eq!(map.get(KeywordField::Volume), Some(1));
    }

    #[test]
    fn test_first_header_position_wins_over_alias_order() {
        // "kd" is the last alias but its header comes first
        let map = ColumnResolver::resolve(
            &headers(&["KD %", "Keyword Difficulty"]),
            &FieldAliases::default(),
        );
        assert_eq!(map.get(KeywordField::Difficulty), Some(0));
    }

    #[test]
    fn test_broad_alias_claims_qualified_header() {
        let map = ColumnResolver::resolve(
            &headers(&["Keyword", "Search Volume (exact)", "Volume"]),
            &FieldAliases::default(),
        );
        assert_eq!(map.get(KeywordField::Volume), Some(1));
    }

    #[test]
    fn test_fields_may_share_a_column() {
        // "keyword difficulty" contains "keyword"
        let map = ColumnResolver::resolve(
            &headers(&["Keyword Difficulty", "Keyword"]),
            &FieldAliases::default(),
        );
        assert_eq!(map.get(KeywordField::Keyword), Some(0));
        assert_eq!(map.get(KeywordField::Difficulty), Some(0));
    }

    #[test]
    fn test_missing_columns_are_not_an_error() {
        let map = ColumnResolver::resolve(&headers(&["foo", "bar"]), &FieldAliases::default());
        assert_eq!(map.missing_fields().len(), KeywordField::ALL.len());

        let map = ColumnResolver::resolve(&[], &FieldAliases::default());
        assert_eq!(map.get(KeywordField::Keyword), None);
    }
}
