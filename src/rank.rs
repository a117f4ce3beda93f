// Copyright 2025-present Podex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Query ranking over a loaded search collection.
//!
//! A pure function of (collection, query): no shared accumulator, no
//! suspension, safe to call on every keystroke. The ranking signal is
//! deliberately simple - a count of query tokens contained in each
//! document's pre-lowered `search_text` - so results are exactly
//! reproducible across the browser, the CLI, and tests.
//!
//! Matching is substring containment, not word-boundary matching: the token
//! `row` matches a document containing `growth`. That is the published
//! contract of the search box and is pinned by tests; tightening it to word
//! boundaries would silently change result sets across every locale.

use crate::types::{RankedResult, SearchIndex};

/// Results are capped at this many entries, after sorting.
pub const MAX_RESULTS: usize = 20;

/// Split a query into lower-cased tokens on runs of whitespace.
///
/// Duplicates are preserved: a repeated token contributes to the score once
/// per occurrence, a term-frequency-style signal.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Rank a collection's documents against a query.
///
/// Scoring: one point per token (with repetition) contained in
/// `search_text`. Documents scoring zero are dropped. Ties keep collection
/// order - the sort is stable - so output is deterministic. The cap is
/// applied after sorting; truncating before it would bias toward collection
/// order rather than relevance.
///
/// An empty or whitespace-only query yields no results without scanning the
/// collection.
pub fn rank(index: &SearchIndex, query: &str) -> Vec<RankedResult> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<RankedResult> = index
        .documents
        .iter()
        .filter_map(|document| {
            let score = tokens
                .iter()
                .filter(|token| document.search_text.contains(token.as_str()))
                .count() as u32;
            (score > 0).then(|| RankedResult {
                document: document.clone(),
                score,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchDocument;

    fn doc(slug: &str, search_text: &str) -> SearchDocument {
        SearchDocument {
            slug: slug.to_string(),
            title: format!("Episode {}", slug),
            speaker: "Host".to_string(),
            timestamp: "0:00".to_string(),
            content: search_text.to_string(),
            search_text: search_text.to_string(),
        }
    }

    fn index(texts: &[&str]) -> SearchIndex {
        SearchIndex {
            documents: texts
                .iter()
                .enumerate()
                .map(|(i, text)| doc(&format!("ep-{}", i), text))
                .collect(),
            fallback_locale: None,
        }
    }

    #[test]
    fn empty_and_whitespace_queries_return_nothing() {
        let index = index(&["alice talks about growth metrics"]);
        assert!(rank(&index, "").is_empty());
        assert!(rank(&index, "   \t\n").is_empty());
    }

    #[test]
    fn single_token_scores_each_containing_document() {
        let index = index(&[
            "alice talks about growth metrics",
            "bob discusses hiring and growth",
        ]);
        let results = rank(&index, "growth");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 1));
        // Equal scores preserve collection order
        assert_eq!(results[0].document.slug, "ep-0");
        assert_eq!(results[1].document.slug, "ep-1");
    }

    #[test]
    fn repeated_token_counts_twice() {
        let index = index(&[
            "alice talks about growth metrics",
            "bob discusses hiring and growth",
        ]);
        let results = rank(&index, "growth growth");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 2));
        assert_eq!(results[0].document.slug, "ep-0");
    }

    #[test]
    fn zero_score_documents_are_excluded() {
        let index = index(&["alice talks about growth metrics"]);
        assert!(rank(&index, "zzz").is_empty());
    }

    #[test]
    fn higher_scores_rank_first() {
        let index = index(&[
            "hiring only",
            "hiring and growth together",
        ]);
        let results = rank(&index, "hiring growth");
        assert_eq!(results[0].document.slug, "ep-1");
        assert_eq!(results[0].score, 2);
        assert_eq!(results[1].score, 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let index = index(&["alice talks about growth metrics"]);
        assert_eq!(rank(&index, "GROWTH Alice").len(), 1);
        assert_eq!(rank(&index, "GROWTH Alice")[0].score, 2);
    }

    #[test]
    fn substring_containment_is_contractual() {
        // "row" matches inside "growth": containment, not word boundaries.
        let index = index(&["alice talks about growth metrics"]);
        let results = rank(&index, "row");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 1);
    }

    #[test]
    fn results_are_capped_after_sorting() {
        // 30 one-token matches in collection order, then one two-token
        // match last.
        let mut texts: Vec<String> = (0..30).map(|i| format!("growth segment {}", i)).collect();
        texts.push("growth and pricing".to_string());
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let index = index(&refs);

        let results = rank(&index, "growth pricing");
        assert_eq!(results.len(), MAX_RESULTS);
        // The strong match survives the cap because truncation happens
        // after the sort.
        assert_eq!(results[0].document.slug, "ep-30");
        assert_eq!(results[0].score, 2);
    }

    #[test]
    fn ranker_does_not_mutate_the_collection() {
        let before = index(&["alice talks about growth metrics"]);
        let after = before.clone();
        let _ = rank(&before, "growth");
        assert_eq!(before, after);
    }
}
