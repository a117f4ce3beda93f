//! Site data pipeline and client-side search for a multi-locale podcast
//! transcript archive.
//!
//! The site itself is statically generated; everything dynamic happens in
//! the visitor's browser. This crate builds the per-locale JSON tree the
//! site is rendered from and implements the one genuinely stateful piece:
//! the search box.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  build/     │────▶│   site.rs    │────▶│ sitemap.rs  │
//! │ (transcripts│     │ (typed data  │     │ (urlset)    │
//! │  → JSON)    │     │  accessors)  │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  loader.rs   │────▶│   rank.rs   │
//! │ (SearchDoc, │     │ (per-locale  │     │ (token      │
//! │  index)     │     │  load + fall-│     │  scoring)   │
//! │             │     │  back chain) │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! The loader/ranker pair is what ships to the browser (see the `wasm`
//! feature): the loader resolves a locale's index with fallback chaining
//! and a supersession token so a stale fetch can never clobber a newer
//! locale selection; the ranker is a pure function recomputed on every
//! keystroke.

// Module declarations
pub mod build;
mod error;
pub mod locales;
mod loader;
mod rank;
pub mod site;
pub mod sitemap;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{Error, Result};
pub use loader::{
    CommitOutcome, FsIndexSource, IndexSource, LoadPhase, RequestToken, SearchSession,
    StaticIndexSource,
};
pub use rank::{rank, tokenize, MAX_RESULTS};
pub use types::{RankedResult, SearchDocument, SearchIndex};
