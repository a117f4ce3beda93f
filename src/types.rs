// Copyright 2025-present Podex Contributors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the client-side search index.
//!
//! These types mirror the per-locale `search.json` resource byte for byte:
//! the build pipeline serializes them, the browser (and the loader) parses
//! them back. Field names are the wire names; do not rename without
//! regenerating every published index.
//!
//! # Invariants
//!
//! - **SearchDocument**: `search_text` is the pre-lowered concatenation of
//!   every piece of human-readable text a query may match (speaker plus
//!   content). It is derived at build time and never displayed.
//! - **SearchIndex**: read-only after load. A locale change replaces the
//!   whole collection; nothing mutates documents in place.
//! - **RankedResult**: transient. Recomputed from scratch on every query or
//!   collection change, never cached across either.

use serde::{Deserialize, Serialize};

/// One searchable unit: a single transcript segment.
///
/// `slug` and `title` identify and label the owning episode; `speaker`,
/// `timestamp`, and `content` are what the result list displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub slug: String,
    pub title: String,
    pub speaker: String,
    pub timestamp: String,
    pub content: String,
    /// Lower-cased `"{speaker} {content}"`, used only for matching.
    pub search_text: String,
}

/// A locale's document collection, as fetched from
/// `<data root>/<locale>/search.json`.
///
/// A locale published without its own translated documents carries an empty
/// `documents` array and a `fallback_locale` pointing at the locale whose
/// index should be used instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub documents: Vec<SearchDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_locale: Option<String>,
}

impl SearchIndex {
    /// An index with no documents and no fallback. What the loader commits
    /// when every retrieval step has failed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

/// A document annotated with its relevance score.
///
/// Serializes as the document's fields plus `score`, matching what the
/// result list consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub document: SearchDocument,
    /// Count of query tokens (with repetition) contained in `search_text`.
    pub score: u32,
}
