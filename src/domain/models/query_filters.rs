use std::sync::OnceLock;

use regex::Regex;

/// Ordered keyword table mapping question keywords to a category label.
///
/// Evaluated top to bottom; the first row with any matching keyword wins.
/// Matching is substring containment on the lower-cased question, not word
/// matching, so a keyword embedded in a larger word still counts.
const CATEGORY_KEYWORDS: &[(&[&str], &str)] = &[
    (&["laptop", "notebook", "komputer", "computer"], "laptop"),
    (
        &["smartphone", "hp", "handphone", "ponsel", "phone", "telepon"],
        "smartphone",
    ),
    (&["tablet", "ipad"], "tablet"),
    (&["headphone", "headset", "earphone", "tws"], "headphone"),
    (&["kamera", "camera"], "kamera"),
    (&["audio", "speaker"], "audio"),
    (&["tv", "televisi"], "tv"),
    (&["drone"], "drone"),
    (&["jam", "smartwatch", "watch"], "jam"),
];

/// Keywords that imply a budget cap when no explicit amount is given.
const BUDGET_KEYWORDS: &[&str] = &["budget", "murah"];

/// Ceiling applied for bare "budget"/"murah" questions.
pub const DEFAULT_BUDGET_CEILING: u64 = 5_000_000;

const JUTA_MULTIPLIER: u64 = 1_000_000;

fn juta_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)\s*juta").unwrap())
}

/// Search filters interpreted from a free-text shopping question.
///
/// Category and price ceiling are detected independently; either or both
/// may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters {
    category: Option<&'static str>,
    max_price: Option<u64>,
}

impl QueryFilters {
    pub fn from_question(question: &str) -> Self {
        let lowered = question.to_lowercase();

        Self {
            category: detect_category(&lowered),
            max_price: detect_price_ceiling(&lowered),
        }
    }

    pub fn category(&self) -> Option<&'static str> {
        self.category
    }

    pub fn max_price(&self) -> Option<u64> {
        self.max_price
    }
}

fn detect_category(lowered: &str) -> Option<&'static str> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(_, label)| *label)
}

/// An explicit "<n> juta" amount beats the keyword default.
fn detect_price_ceiling(lowered: &str) -> Option<u64> {
    if let Some(captures) = juta_pattern().captures(lowered) {
        if let Some(ceiling) = captures[1]
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(JUTA_MULTIPLIER))
        {
            return Some(ceiling);
        }
    }

    if BUDGET_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return Some(DEFAULT_BUDGET_CEILING);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laptop_question_with_explicit_amount() {
        let filters = QueryFilters::from_question("Cari laptop gaming 15 juta");

        assert_eq!(filters.category(), Some("laptop"));
        assert_eq!(filters.max_price(), Some(15_000_000));
    }

    #[test]
    fn test_budget_keyword_applies_default_ceiling() {
        let filters = QueryFilters::from_question("hp murah");

        assert_eq!(filters.category(), Some("smartphone"));
        assert_eq!(filters.max_price(), Some(DEFAULT_BUDGET_CEILING));
    }

    #[test]
    fn test_empty_question_has_no_filters() {
        let filters = QueryFilters::from_question("");

        assert_eq!(filters.category(), None);
        assert_eq!(filters.max_price(), None);
    }

    #[test]
    fn test_plain_question_has_no_filters() {
        let filters = QueryFilters::from_question("apa rekomendasi terbaik?");

        assert_eq!(filters.category(), None);
        assert_eq!(filters.max_price(), None);
    }

    #[test]
    fn test_first_table_row_wins_on_ties() {
        // "laptop" precedes "smartphone" in the table regardless of word order.
        let filters = QueryFilters::from_question("smartphone atau laptop untuk kerja?");

        assert_eq!(filters.category(), Some("laptop"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let filters = QueryFilters::from_question("Rekomendasi KAMERA mirrorless");

        assert_eq!(filters.category(), Some("kamera"));
    }

    #[test]
    fn test_substring_containment_matches_embedded_keywords() {
        // "komputerisasi" contains "komputer".
        let filters = QueryFilters::from_question("alat komputerisasi kantor");

        assert_eq!(filters.category(), Some("laptop"));
    }

    #[test]
    fn test_juta_amount_without_space() {
        let filters = QueryFilters::from_question("tablet 5juta");

        assert_eq!(filters.category(), Some("tablet"));
        assert_eq!(filters.max_price(), Some(5_000_000));
    }

    #[test]
    fn test_explicit_amount_beats_budget_keyword() {
        let filters = QueryFilters::from_question("laptop murah 10 juta");

        assert_eq!(filters.max_price(), Some(10_000_000));
    }

    #[test]
    fn test_price_detection_is_independent_of_category() {
        let filters = QueryFilters::from_question("sekitar 3 juta");

        assert_eq!(filters.category(), None);
        assert_eq!(filters.max_price(), Some(3_000_000));
    }

    #[test]
    fn test_budget_keyword_in_english() {
        let filters = QueryFilters::from_question("earphone budget pilihan");

        assert_eq!(filters.category(), Some("headphone"));
        assert_eq!(filters.max_price(), Some(5_000_000));
    }
}
