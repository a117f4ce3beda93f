// Copyright 2025-present Podex Contributors
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the client-side search session.
//!
//! Division of labor: the host page performs every `fetch` (it already has
//! the right base URL, caching, and CORS context); Rust owns all session
//! state, so supersession cannot be bypassed from JavaScript.
//!
//! The page drives the protocol:
//!
//! ```js
//! const session = new WasmSearchSession();
//! const token = session.begin_load(locale);
//! try {
//!   const index = await (await fetch(`/data/${locale}/search.json`)).json();
//!   const fallback = session.commit_index(token, index);
//!   if (fallback !== undefined) {
//!     const fb = await (await fetch(`/data/${fallback}/search.json`)).json();
//!     session.commit_fallback(token, fb);
//!   }
//! } catch {
//!   session.fail(token);
//! }
//! const results = session.search(query);
//! ```
//!
//! Stale tokens are accepted and ignored, so the page never needs to
//! sequence or cancel its fetches.

use wasm_bindgen::prelude::*;

use crate::loader::{CommitOutcome, RequestToken, SearchSession};
use crate::types::SearchIndex;

/// Browser-facing search session: token-gated index loading plus ranking.
#[wasm_bindgen]
pub struct WasmSearchSession {
    inner: SearchSession,
}

impl Default for WasmSearchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmSearchSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSearchSession {
        WasmSearchSession {
            inner: SearchSession::new(),
        }
    }

    /// Start loading a locale. Returns the request token the page must pass
    /// back with every commit for this load.
    pub fn begin_load(&self, locale: &str) -> u64 {
        self.inner.begin(locale).value()
    }

    /// Offer the primary fetch's parsed JSON. Returns the fallback locale
    /// the page must fetch next, or `undefined` when the commit completed
    /// (or was superseded, or the payload failed to parse).
    pub fn commit_index(&self, token: u64, index: JsValue) -> Option<String> {
        let token = RequestToken::from_value(token);
        let parsed: Option<SearchIndex> = serde_wasm_bindgen::from_value(index).ok();
        match self.inner.commit_primary(&token, parsed) {
            CommitOutcome::FallbackNeeded(locale) => Some(locale),
            CommitOutcome::Committed | CommitOutcome::Superseded => None,
        }
    }

    /// Offer the fallback fetch's parsed JSON. An unparsable payload
    /// commits the empty collection.
    pub fn commit_fallback(&self, token: u64, index: JsValue) {
        let token = RequestToken::from_value(token);
        let parsed: Option<SearchIndex> = serde_wasm_bindgen::from_value(index).ok();
        self.inner.commit_fallback(&token, parsed);
    }

    /// Record a fetch failure at either step. Commits the empty collection
    /// if the token is still current.
    pub fn fail(&self, token: u64) {
        self.inner.fail(&RequestToken::from_value(token));
    }

    /// Rank the committed collection against a query. Returns an array of
    /// result objects (document fields plus `score`), capped at 20.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let results = self.inner.search(query);
        serde_wasm_bindgen::to_value(&results).map_err(|err| JsValue::from(err.to_string()))
    }

    /// Number of committed documents.
    pub fn document_count(&self) -> usize {
        self.inner.document_count()
    }

    /// Current phase: `"idle"`, `"loading"`, `"loaded"`, or `"empty"`.
    pub fn phase(&self) -> String {
        use crate::loader::LoadPhase;
        match self.inner.phase() {
            LoadPhase::Idle => "idle".to_string(),
            LoadPhase::Loading(_) => "loading".to_string(),
            LoadPhase::Loaded => "loaded".to_string(),
            LoadPhase::Empty => "empty".to_string(),
        }
    }
}
