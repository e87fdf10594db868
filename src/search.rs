//! Scored substring search over the native index.
//!
//! This is a heuristic relevance function, not a ranking model: no stemming,
//! no fuzzy matching, no locale-aware case folding beyond ASCII-ish
//! lowercasing. Scores are additive and each rule fires independently.

use crate::index::NativeEntry;

/// Default number of suggestions returned to the HTTP layer.
pub const DEFAULT_LIMIT: usize = 8;

/// Relevance tiers. An exact stem/title match also collects the substring
/// bonus, so a lone exact hit scores 160 before term bonuses.
const EXACT_MATCH: u32 = 100;
const SUBSTRING_MATCH: u32 = 60;
const NAMESPACE_MATCH: u32 = 20;
const TERM_MATCH: u32 = 10;

/// Searches the index for `query`, returning at most `limit` entries.
///
/// A blank query returns the head of the index unchanged (the index is
/// already namespace/title sorted). Otherwise entries are scored, zero
/// scores dropped, and results ordered by descending score with ties broken
/// by ascending title.
pub fn search<'a>(index: &'a [NativeEntry], query: &str, limit: usize) -> Vec<&'a NativeEntry> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return index.iter().take(limit).collect();
    }

    let terms: Vec<&str> = normalized.split_whitespace().collect();

    let mut scored: Vec<(u32, &NativeEntry)> = index
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, &normalized, &terms);
            (score > 0).then_some((score, entry))
        })
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then_with(|| a.title.cmp(&b.title))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, entry)| entry)
        .collect()
}

/// Additive relevance of one entry against a normalized query.
fn score_entry(entry: &NativeEntry, normalized: &str, terms: &[&str]) -> u32 {
    let stem = entry.stem().to_lowercase();
    let title = entry.title.to_lowercase();
    let namespace = entry.namespace.to_lowercase();
    let haystack = format!("{namespace} {stem} {title}");

    let mut score = 0;
    if stem == normalized || title == normalized {
        score += EXACT_MATCH;
    }
    if stem.contains(normalized) || title.contains(normalized) {
        score += SUBSTRING_MATCH;
    }
    if namespace.contains(normalized) {
        score += NAMESPACE_MATCH;
    }
    for term in terms {
        if haystack.contains(term) {
            score += TERM_MATCH;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn entry(namespace: &str, stem: &str, title: &str) -> NativeEntry {
        NativeEntry {
            namespace: namespace.to_string(),
            file_name: format!("{stem}.md"),
            title: title.to_string(),
        }
    }

    fn sample_index() -> Vec<NativeEntry> {
        vec![
            entry("PLAYER", "GET_PLAYER_PED", "GET_PLAYER_PED"),
            entry("PLAYER", "GET_WANTED_LEVEL", "GET_WANTED_LEVEL"),
            entry("VEHICLE", "CREATE_VEHICLE", "CREATE_VEHICLE"),
            entry("VEHICLE", "DELETE_VEHICLE", "DELETE_VEHICLE"),
        ]
    }

    #[rstest]
    #[case("", 4)]
    #[case("   ", 4)]
    #[case("wanted", 1)]
    #[case("vehicle", 2)]
    #[case("zzz_nothing", 0)]
    fn result_counts(#[case] query: &str, #[case] expected: usize) {
        let index = sample_index();
        check!(search(&index, query, 8).len() == expected);
    }

    #[test]
    fn blank_query_returns_index_head_in_order() {
        let index = sample_index();
        let results = search(&index, "", 2);
        check!(results.len() == 2);
        check!(results[0].title == "GET_PLAYER_PED");
        check!(results[1].title == "GET_WANTED_LEVEL");
    }

    #[test]
    fn limit_is_always_respected() {
        let index = sample_index();
        for query in ["", "vehicle", "get", "e"] {
            check!(search(&index, query, 3).len() <= 3);
        }
    }

    #[test]
    fn exact_stem_match_collects_both_tiers() {
        let index = sample_index();
        let e = &index[1];
        let terms = vec!["get_wanted_level"];
        // Exact (100) + substring (60) + one term in haystack (10).
        check!(score_entry(e, "get_wanted_level", &terms) == 170);
    }

    #[test]
    fn namespace_substring_scores_twenty_plus_term() {
        let index = sample_index();
        let e = &index[0];
        // "play" hits the namespace (+20), the stem/title substring tier
        // (+60), and the single term (+10).
        check!(score_entry(e, "play", &["play"]) == 90);
    }

    #[test]
    fn multi_term_queries_accumulate_term_bonuses() {
        let e = entry("VEHICLE", "CREATE_VEHICLE", "CREATE_VEHICLE");
        // Neither term is a stem/title substring-or-exact match on its own
        // ("create vehicle" as a whole is not contained), but both terms
        // appear in the haystack.
        check!(score_entry(&e, "create vehicle", &["create", "vehicle"]) == 20);
    }

    #[test]
    fn zero_score_entries_are_dropped() {
        let index = sample_index();
        let results = search(&index, "wanted", 8);
        check!(results.len() == 1);
        check!(results[0].title == "GET_WANTED_LEVEL");
    }

    #[test]
    fn ties_break_by_ascending_title() {
        let index = vec![
            entry("VEHICLE", "DELETE_VEHICLE", "DELETE_VEHICLE"),
            entry("VEHICLE", "CREATE_VEHICLE", "CREATE_VEHICLE"),
        ];
        let results = search(&index, "vehicle", 8);
        check!(results.len() == 2);
        check!(results[0].title == "CREATE_VEHICLE");
        check!(results[1].title == "DELETE_VEHICLE");
    }

    #[test]
    fn higher_scores_sort_first() {
        let index = vec![
            entry("MISC", "A_WANTED_HELPER", "A_WANTED_HELPER"),
            entry("PLAYER", "WANTED", "WANTED"),
        ];
        let results = search(&index, "wanted", 8);
        // Exact match (170) outranks the plain substring hit (70) despite
        // the substring entry sorting first by title.
        check!(results[0].title == "WANTED");
        check!(results[1].title == "A_WANTED_HELPER");
    }
}
