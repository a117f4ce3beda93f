// Copyright 2025-present Podex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-locale search index loading.
//!
//! The session is the single writer of the visible collection. Every locale
//! change issues a fresh [`RequestToken`]; a resolution may only commit if
//! its token is still the newest one issued. That gives the
//! cancellation-on-supersession contract without cancelling the in-flight
//! request itself: a stale fetch completes, its commit is dropped, and the
//! visible collection always corresponds to the most recently requested
//! locale.
//!
//! Loading is a two-step chain. The primary fetch may come back declaring a
//! fallback locale - "this locale has no native index, use that one's
//! documents" - in which case the session stays in `Loading` and a second
//! fetch resolves it. Supersession is checked the same way at both steps,
//! which is why the chain is modeled as two explicit commits rather than
//! nested conditionals inside one.
//!
//! No path out of this module returns an error: every failure (network,
//! parse, missing resource, failed fallback) commits the empty collection
//! and the search box simply shows no results.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::rank;
use crate::types::{RankedResult, SearchIndex};

/// Where search indexes come from.
///
/// One retrieval per call; the session decides what to do with the outcome.
/// Implementations should return `Err` for anything that prevented a parse;
/// the session maps every error to the empty collection.
#[async_trait]
pub trait IndexSource: Send + Sync {
    /// Fetch the index resource for a locale.
    async fn fetch(&self, locale: &str) -> Result<SearchIndex>;
}

/// Reads `<root>/<locale>/search.json` from a built site data tree.
///
/// Serves the CLI and tests; the browser equivalent lives behind the `wasm`
/// feature, where the host page performs the fetch.
pub struct FsIndexSource {
    root: PathBuf,
}

impl FsIndexSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn index_path(&self, locale: &str) -> PathBuf {
        self.root.join(locale).join("search.json")
    }
}

#[async_trait]
impl IndexSource for FsIndexSource {
    async fn fetch(&self, locale: &str) -> Result<SearchIndex> {
        let raw = fs::read_to_string(self.index_path(locale))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// An in-memory source keyed by locale. Missing locales resolve to an
/// I/O-style error, like a 404 would.
#[derive(Default)]
pub struct StaticIndexSource {
    indexes: HashMap<String, SearchIndex>,
}

impl StaticIndexSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, locale: impl Into<String>, index: SearchIndex) -> Self {
        self.indexes.insert(locale.into(), index);
        self
    }
}

#[async_trait]
impl IndexSource for StaticIndexSource {
    async fn fetch(&self, locale: &str) -> Result<SearchIndex> {
        self.indexes.get(locale).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no index for locale {locale}"),
            )
            .into()
        })
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// No load requested yet.
    Idle,
    /// A load for this locale is in flight.
    Loading(String),
    /// A non-empty collection is committed.
    Loaded,
    /// The committed collection is empty (no native index and no usable
    /// fallback, or every retrieval failed).
    Empty,
}

/// Proof that a resolution belongs to a particular load request.
///
/// Tokens are monotonically increasing; only the newest may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    pub(crate) generation: u64,
}

impl RequestToken {
    /// The raw generation number, for handing across the WASM boundary.
    pub fn value(&self) -> u64 {
        self.generation
    }

    pub(crate) fn from_value(generation: u64) -> Self {
        Self { generation }
    }
}

/// Outcome of offering a resolution to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The resolution was accepted and the visible collection replaced.
    Committed,
    /// A newer request was issued in the meantime; nothing changed.
    Superseded,
    /// The fetched index defers to another locale. The session is still
    /// `Loading`; fetch the named locale and offer it to
    /// [`SearchSession::commit_fallback`].
    FallbackNeeded(String),
}

struct SessionState {
    generation: u64,
    phase: LoadPhase,
    index: SearchIndex,
}

/// The client-side search state: one writer (the loader), any number of
/// synchronous readers (the ranker, the UI).
///
/// All mutation happens through token-gated commits, so interleaved loads
/// cannot produce a collection that belongs to a superseded request.
pub struct SearchSession {
    state: Mutex<SessionState>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState {
                generation: 0,
                phase: LoadPhase::Idle,
                index: SearchIndex::empty(),
            }),
        }
    }

    /// Start a load for a locale, superseding any outstanding request.
    ///
    /// The previously committed collection stays visible until the new
    /// request commits; only the token changes hands here.
    pub fn begin(&self, locale: &str) -> RequestToken {
        let mut state = self.state.lock();
        state.generation += 1;
        state.phase = LoadPhase::Loading(locale.to_string());
        debug!(locale, generation = state.generation, "index load started");
        RequestToken {
            generation: state.generation,
        }
    }

    /// Offer the primary fetch's outcome. `None` means the fetch failed.
    ///
    /// Returns [`CommitOutcome::FallbackNeeded`] when the fetched index
    /// defers to a different locale; the session remains in `Loading` and
    /// expects a [`commit_fallback`](Self::commit_fallback) with the same
    /// token.
    pub fn commit_primary(
        &self,
        token: &RequestToken,
        fetched: Option<SearchIndex>,
    ) -> CommitOutcome {
        let mut state = self.state.lock();
        if token.generation != state.generation {
            debug!(
                stale = token.generation,
                current = state.generation,
                "superseded resolution dropped"
            );
            return CommitOutcome::Superseded;
        }

        let Some(index) = fetched else {
            commit(&mut state, SearchIndex::empty());
            return CommitOutcome::Committed;
        };

        if let Some(fallback) = index.fallback_locale.as_deref() {
            let requested = match &state.phase {
                LoadPhase::Loading(locale) => locale.as_str(),
                _ => "",
            };
            if fallback != requested {
                debug!(requested, fallback, "locale defers to fallback index");
                return CommitOutcome::FallbackNeeded(fallback.to_string());
            }
        }

        commit(&mut state, index);
        CommitOutcome::Committed
    }

    /// Offer the fallback fetch's outcome. `None` means the fetch failed,
    /// which commits the empty collection.
    pub fn commit_fallback(
        &self,
        token: &RequestToken,
        fetched: Option<SearchIndex>,
    ) -> CommitOutcome {
        let mut state = self.state.lock();
        if token.generation != state.generation {
            debug!(
                stale = token.generation,
                current = state.generation,
                "superseded fallback resolution dropped"
            );
            return CommitOutcome::Superseded;
        }
        commit(&mut state, fetched.unwrap_or_default());
        CommitOutcome::Committed
    }

    /// Record a failure at any step: commits the empty collection if the
    /// token is still current.
    pub fn fail(&self, token: &RequestToken) -> CommitOutcome {
        let mut state = self.state.lock();
        if token.generation != state.generation {
            return CommitOutcome::Superseded;
        }
        commit(&mut state, SearchIndex::empty());
        CommitOutcome::Committed
    }

    /// Drive a full load against a source: primary fetch, fallback fetch if
    /// the primary defers, empty collection on any failure.
    pub async fn load<S>(&self, source: &S, locale: &str)
    where
        S: IndexSource + ?Sized,
    {
        let token = self.begin(locale);
        let fetched = fetch_logged(source, locale).await;
        if let CommitOutcome::FallbackNeeded(fallback) = self.commit_primary(&token, fetched) {
            let fetched = fetch_logged(source, &fallback).await;
            self.commit_fallback(&token, fetched);
        }
    }

    /// The current phase of the state machine.
    pub fn phase(&self) -> LoadPhase {
        self.state.lock().phase.clone()
    }

    /// Clone out the committed collection.
    pub fn snapshot(&self) -> SearchIndex {
        self.state.lock().index.clone()
    }

    /// Number of committed documents.
    pub fn document_count(&self) -> usize {
        self.state.lock().index.len()
    }

    /// Rank the committed collection against a query.
    ///
    /// Synchronous; borrows the collection for the duration of one ranking
    /// pass and never mutates it.
    pub fn search(&self, query: &str) -> Vec<RankedResult> {
        let state = self.state.lock();
        rank::rank(&state.index, query)
    }
}

fn commit(state: &mut SessionState, index: SearchIndex) {
    state.phase = if index.is_empty() {
        LoadPhase::Empty
    } else {
        LoadPhase::Loaded
    };
    state.index = index;
}

async fn fetch_logged<S>(source: &S, locale: &str) -> Option<SearchIndex>
where
    S: IndexSource + ?Sized,
{
    match source.fetch(locale).await {
        Ok(index) => Some(index),
        Err(err) => {
            warn!(locale, error = %err, "search index fetch failed");
            None
        }
    }
}
