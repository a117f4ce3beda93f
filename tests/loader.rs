//! Loader behavior: fallback chaining, failure degradation, and
//! cancellation-on-supersession under interleaved resolutions.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use common::{deferring_index, make_index};
use podex::{IndexSource, LoadPhase, SearchIndex, SearchSession, StaticIndexSource};

#[tokio::test]
async fn native_index_loads_directly() {
    let source = StaticIndexSource::new().insert("en", make_index(&["alice on growth"]));
    let session = SearchSession::new();

    session.load(&source, "en").await;

    assert_eq!(session.phase(), LoadPhase::Loaded);
    assert_eq!(session.document_count(), 1);
    assert_eq!(session.search("growth").len(), 1);
}

#[tokio::test]
async fn deferring_locale_serves_fallback_documents() {
    let source = StaticIndexSource::new()
        .insert("es", deferring_index("en"))
        .insert("en", make_index(&["alice on growth", "bob on hiring"]));
    let session = SearchSession::new();

    session.load(&source, "es").await;

    // The effective collection is the fallback's, not the empty native one.
    assert_eq!(session.document_count(), 2);
    assert_eq!(session.snapshot().documents[0].search_text, "alice on growth");
}

#[tokio::test]
async fn missing_locale_resolves_to_empty() {
    let source = StaticIndexSource::new();
    let session = SearchSession::new();

    session.load(&source, "en").await;

    assert_eq!(session.phase(), LoadPhase::Empty);
    assert!(session.search("anything").is_empty());
}

#[tokio::test]
async fn failed_fallback_resolves_to_empty() {
    // "es" defers to "en", but "en" is missing too.
    let source = StaticIndexSource::new().insert("es", deferring_index("en"));
    let session = SearchSession::new();

    session.load(&source, "es").await;

    assert_eq!(session.phase(), LoadPhase::Empty);
    assert_eq!(session.document_count(), 0);
}

#[tokio::test]
async fn self_referential_fallback_does_not_chain() {
    let source = StaticIndexSource::new().insert(
        "en",
        SearchIndex {
            documents: make_index(&["alice on growth"]).documents,
            fallback_locale: Some("en".to_string()),
        },
    );
    let session = SearchSession::new();

    session.load(&source, "en").await;

    assert_eq!(session.phase(), LoadPhase::Loaded);
    assert_eq!(session.document_count(), 1);
}

/// Wraps a static source and blocks the fetch for one locale until released,
/// signalling when the fetch has been entered.
struct GatedSource {
    inner: StaticIndexSource,
    gated_locale: String,
    entered: std::sync::Mutex<Option<oneshot::Sender<()>>>,
    release: tokio::sync::Mutex<Option<oneshot::Receiver<()>>>,
}

impl GatedSource {
    fn new(
        inner: StaticIndexSource,
        gated_locale: &str,
    ) -> (Arc<Self>, oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        let source = Arc::new(Self {
            inner,
            gated_locale: gated_locale.to_string(),
            entered: std::sync::Mutex::new(Some(entered_tx)),
            release: tokio::sync::Mutex::new(Some(release_rx)),
        });
        (source, entered_rx, release_tx)
    }
}

#[async_trait]
impl IndexSource for GatedSource {
    async fn fetch(&self, locale: &str) -> podex::Result<SearchIndex> {
        if locale == self.gated_locale {
            if let Some(entered) = self.entered.lock().unwrap().take() {
                let _ = entered.send(());
            }
            let release = self.release.lock().await.take();
            if let Some(release) = release {
                let _ = release.await;
            }
        }
        self.inner.fetch(locale).await
    }
}

#[tokio::test]
async fn slow_primary_resolution_cannot_override_newer_locale() {
    let inner = StaticIndexSource::new()
        .insert("en", make_index(&["english document"]))
        .insert("es", make_index(&["documento espanol"]));
    let (source, entered, release) = GatedSource::new(inner, "en");
    let session = Arc::new(SearchSession::new());

    let slow = tokio::spawn({
        let session = Arc::clone(&session);
        let source = Arc::clone(&source);
        async move { session.load(source.as_ref(), "en").await }
    });

    // Wait until the first load is suspended inside its fetch, then let a
    // newer locale request run to completion.
    entered.await.unwrap();
    session.load(source.as_ref(), "es").await;
    assert_eq!(session.snapshot().documents[0].search_text, "documento espanol");

    // Release the stale fetch; its resolution must be discarded.
    release.send(()).unwrap();
    slow.await.unwrap();

    assert_eq!(session.phase(), LoadPhase::Loaded);
    assert_eq!(session.snapshot().documents[0].search_text, "documento espanol");
}

#[tokio::test]
async fn slow_fallback_resolution_cannot_override_newer_locale() {
    // "es" defers to "en"; the fallback fetch is the slow one.
    let inner = StaticIndexSource::new()
        .insert("es", deferring_index("en"))
        .insert("en", make_index(&["english document"]))
        .insert("fr", make_index(&["document francais"]));
    let (source, entered, release) = GatedSource::new(inner, "en");
    let session = Arc::new(SearchSession::new());

    let slow = tokio::spawn({
        let session = Arc::clone(&session);
        let source = Arc::clone(&source);
        async move { session.load(source.as_ref(), "es").await }
    });

    entered.await.unwrap();
    session.load(source.as_ref(), "fr").await;

    release.send(()).unwrap();
    slow.await.unwrap();

    assert_eq!(session.snapshot().documents[0].search_text, "document francais");
}
