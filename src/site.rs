// Copyright 2025-present Podex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Read-only accessors over a built site data tree.
//!
//! The build pipeline emits one directory per locale:
//!
//! ```text
//! <root>/
//!   en/
//!     site.json            locale metadata
//!     episodes/index.json  episode summaries
//!     episodes/<slug>.json episode detail with segments
//!     guests.json
//!     topics.json
//!     frameworks.json
//!     failure.json
//!     interviews.json
//!     search.json          the client-side search index
//!   es/ …
//! ```
//!
//! Accessors deserialize on every call; the site generator reads each file a
//! handful of times per build and the detail pages read exactly one. A
//! missing item (unknown slug or id) is `Ok(None)` - the page renders "not
//! found" and the rest of the site is unaffected. A missing or malformed
//! file is an `Err` for the caller to report.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::SearchIndex;

/// One transcript segment of an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSegment {
    pub speaker: String,
    pub timestamp: String,
    pub timestamp_seconds: f64,
    pub content: String,
}

/// What the episodes listing shows for one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub slug: String,
    pub title: String,
    pub num_segments: usize,
    pub topics: Vec<String>,
    pub failure_patterns: Vec<String>,
    pub companies: Vec<String>,
}

/// A full episode: the summary plus its segments and source links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetail {
    #[serde(flatten)]
    pub summary: EpisodeSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_url: Option<String>,
    pub segments: Vec<EpisodeSegment>,
    pub full_text: String,
}

/// A guest entry linking to the episode they appear in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub slug: String,
    pub episode_slug: String,
}

/// A topic with the episodes classified under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub episodes: Vec<String>,
}

/// A decision framework surfaced from the interviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    pub id: String,
    pub name: String,
    pub description: String,
    pub source: String,
}

/// A failure pattern with example phrasings and matching episodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailurePattern {
    pub id: String,
    pub name: String,
    pub examples: Vec<String>,
    pub episodes: Vec<String>,
}

/// An interview question category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewCategory {
    pub id: String,
    pub name: String,
    pub questions: Vec<String>,
}

/// Topic reference inside [`SiteMetadata`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRef {
    pub id: String,
    pub name: String,
}

/// Locale reference inside [`SiteMetadata`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleRef {
    pub code: String,
    pub label: String,
}

/// Per-locale site metadata (`site.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub locale: String,
    pub updated_at: String,
    pub total_episodes: usize,
    pub topics: Vec<TopicRef>,
    pub locales: Vec<LocaleRef>,
}

/// Typed access to a built site data tree.
pub struct SiteData {
    root: PathBuf,
}

impl SiteData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locale_dir(&self, locale: &str) -> PathBuf {
        self.root.join(locale)
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn metadata(&self, locale: &str) -> Result<SiteMetadata> {
        self.read_json(&self.locale_dir(locale).join("site.json"))
    }

    pub fn episodes(&self, locale: &str) -> Result<Vec<EpisodeSummary>> {
        self.read_json(&self.locale_dir(locale).join("episodes").join("index.json"))
    }

    /// One episode by slug. Unknown slugs are `Ok(None)`, not errors.
    pub fn episode(&self, locale: &str, slug: &str) -> Result<Option<EpisodeDetail>> {
        let path = self
            .locale_dir(locale)
            .join("episodes")
            .join(format!("{slug}.json"));
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn guests(&self, locale: &str) -> Result<Vec<Guest>> {
        self.read_json(&self.locale_dir(locale).join("guests.json"))
    }

    pub fn topics(&self, locale: &str) -> Result<Vec<Topic>> {
        self.read_json(&self.locale_dir(locale).join("topics.json"))
    }

    /// One topic by id, or `None` for ids not in the taxonomy.
    pub fn topic(&self, locale: &str, id: &str) -> Result<Option<Topic>> {
        Ok(self.topics(locale)?.into_iter().find(|t| t.id == id))
    }

    pub fn frameworks(&self, locale: &str) -> Result<Vec<Framework>> {
        self.read_json(&self.locale_dir(locale).join("frameworks.json"))
    }

    pub fn failure_patterns(&self, locale: &str) -> Result<Vec<FailurePattern>> {
        self.read_json(&self.locale_dir(locale).join("failure.json"))
    }

    pub fn failure_pattern(&self, locale: &str, id: &str) -> Result<Option<FailurePattern>> {
        Ok(self
            .failure_patterns(locale)?
            .into_iter()
            .find(|p| p.id == id))
    }

    pub fn interview_categories(&self, locale: &str) -> Result<Vec<InterviewCategory>> {
        self.read_json(&self.locale_dir(locale).join("interviews.json"))
    }

    pub fn interview_category(&self, locale: &str, id: &str) -> Result<Option<InterviewCategory>> {
        Ok(self
            .interview_categories(locale)?
            .into_iter()
            .find(|c| c.id == id))
    }

    /// The raw per-locale search index, as the loader would fetch it.
    pub fn search_index(&self, locale: &str) -> Result<SearchIndex> {
        self.read_json(&self.locale_dir(locale).join("search.json"))
    }
}
