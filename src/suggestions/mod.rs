//! Location autocomplete over a fixed candidate pool.

use serde::Deserialize;

/// Candidate locations, in presentation order.
pub const LOCATIONS: [&str; 7] = [
    "Himalayas, Nepal",
    "Swiss Alps, Switzerland",
    "Rocky Mountains, Canada",
    "Andes, Chile",
    "Mount Everest",
    "Kilimanjaro, Tanzania",
    "Mount Fuji, Japan",
];

pub const MAX_SUGGESTIONS: usize = 5;

/// Query string of `GET /api/location-suggestions`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionQuery {
    pub query: Option<String>,
}

/// Candidates containing `query` (case-insensitive), in pool order, at most
/// [`MAX_SUGGESTIONS`].
pub fn suggest(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    LOCATIONS
        .iter()
        .copied()
        .filter(|location| location.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alp_matches_only_swiss_alps() {
        assert_eq!(suggest("alp"), vec!["Swiss Alps, Switzerland"]);
        assert_eq!(suggest("ALP"), vec!["Swiss Alps, Switzerland"]);
    }

    #[test]
    fn test_mount_keeps_pool_order() {
        let got = suggest("mount");
        assert_eq!(
            got,
            vec!["Rocky Mountains, Canada", "Mount Everest", "Mount Fuji, Japan"]
        );
        assert!(got.iter().all(|s| s.to_lowercase().contains("mount")));
    }

    #[test]
    fn test_empty_query_truncates_to_limit() {
        let got = suggest("");
        assert_eq!(got.len(), MAX_SUGGESTIONS);
        assert_eq!(got, LOCATIONS[..MAX_SUGGESTIONS].to_vec());
    }

    #[test]
    fn test_no_match() {
        assert!(suggest("atlantis").is_empty());
    }
}
