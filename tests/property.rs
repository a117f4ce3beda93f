//! Property tests pinning the ranking contract against a reference oracle.

mod common;

use common::make_index;
use podex::{rank, tokenize, MAX_RESULTS};
use proptest::prelude::*;

/// Independent re-statement of the scoring rule: one point per query token
/// (with repetition) contained in the search text.
fn reference_score(search_text: &str, query: &str) -> u32 {
    tokenize(query)
        .iter()
        .filter(|token| search_text.contains(token.as_str()))
        .count() as u32
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    let word = proptest::string::string_regex("[a-z]{2,7}").unwrap();
    let text = prop::collection::vec(word, 1..8).prop_map(|words| words.join(" "));
    prop::collection::vec(text, 0..50)
}

proptest! {
    #[test]
    fn tokens_are_lowercase_and_nonempty(query in "\\PC{0,24}") {
        for token in tokenize(&query) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.clone(), token.to_lowercase());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn reported_scores_match_the_oracle(
        texts in corpus_strategy(),
        query in "[a-z ]{0,16}",
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let index = make_index(&refs);
        for result in rank(&index, &query) {
            prop_assert_eq!(
                result.score,
                reference_score(&result.document.search_text, &query)
            );
        }
    }

    #[test]
    fn filter_is_complete(
        texts in corpus_strategy(),
        query in "[a-z ]{1,16}",
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let index = make_index(&refs);
        let results = rank(&index, &query);
        let returned: Vec<&str> = results.iter().map(|r| r.document.slug.as_str()).collect();

        // Every excluded document (when results are under the cap) scores
        // zero against the oracle; every included one scores at least one.
        if results.len() < MAX_RESULTS {
            for document in &index.documents {
                if !returned.contains(&document.slug.as_str()) {
                    prop_assert_eq!(reference_score(&document.search_text, &query), 0);
                }
            }
        }
        for result in &results {
            prop_assert!(result.score >= 1);
        }
    }

    #[test]
    fn truncation_never_drops_a_higher_score(
        texts in corpus_strategy(),
        query in "[a-z]{1,5}",
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let index = make_index(&refs);
        let results = rank(&index, &query);

        if results.len() == MAX_RESULTS {
            let cutoff = results.last().unwrap().score;
            let returned: Vec<&str> =
                results.iter().map(|r| r.document.slug.as_str()).collect();
            for document in &index.documents {
                if !returned.contains(&document.slug.as_str()) {
                    prop_assert!(reference_score(&document.search_text, &query) <= cutoff);
                }
            }
        }
    }
}
