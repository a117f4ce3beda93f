//! Shared test utilities and fixtures.

#![allow(dead_code)]

use podex::{SearchDocument, SearchIndex};

/// A document whose `search_text` doubles as its displayed content.
pub fn make_doc(slug: &str, search_text: &str) -> SearchDocument {
    SearchDocument {
        slug: slug.to_string(),
        title: format!("Episode {}", slug),
        speaker: "Host".to_string(),
        timestamp: "0:00".to_string(),
        content: search_text.to_string(),
        search_text: search_text.to_string(),
    }
}

/// An index of documents `ep-0`, `ep-1`, … over the given texts.
pub fn make_index(texts: &[&str]) -> SearchIndex {
    SearchIndex {
        documents: texts
            .iter()
            .enumerate()
            .map(|(i, text)| make_doc(&format!("ep-{}", i), text))
            .collect(),
        fallback_locale: None,
    }
}

/// An empty index deferring to another locale.
pub fn deferring_index(fallback: &str) -> SearchIndex {
    SearchIndex {
        documents: Vec::new(),
        fallback_locale: Some(fallback.to_string()),
    }
}
