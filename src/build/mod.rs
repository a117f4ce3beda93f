// Copyright 2025-present Podex Contributors
// SPDX-License-Identifier: Apache-2.0

//! The site build pipeline: raw transcripts in, per-locale JSON tree out.
//!
//! Input layout:
//!
//! ```text
//! <input>/
//!   some-episode.txt         default-locale transcripts
//!   another-episode.txt
//!   overrides.json           optional audio/episode link overrides
//!   es/
//!     some-episode.txt       translated transcripts, when they exist
//! ```
//!
//! Every configured locale gets a full payload directory. A locale with its
//! own translated transcripts gets a native search index; a locale without
//! them reuses the default-locale content pages and publishes a stub search
//! index that declares `fallback_locale`, which the client-side loader
//! resolves by fetching the default locale's documents.

pub mod taxonomy;
pub mod transcript;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::locales::{self, DEFAULT_LOCALE};
use crate::site::{
    EpisodeDetail, EpisodeSegment, EpisodeSummary, FailurePattern, Framework, Guest,
    InterviewCategory, LocaleRef, SiteMetadata, Topic, TopicRef,
};
use crate::types::{SearchDocument, SearchIndex};
use taxonomy::{FAILURE_PATTERNS, FRAMEWORKS, INTERVIEW_CATEGORIES, TOPICS};
use transcript::{parse_transcript, Transcript};

/// Build configuration, filled in by the CLI.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory of raw transcripts, with optional per-locale subdirectories.
    pub input_dir: PathBuf,
    /// Root of the emitted site data tree.
    pub output_dir: PathBuf,
    /// Optional mirror for `search.json`, typically the web root's data dir.
    pub public_dir: Option<PathBuf>,
    /// Locales to publish, in registry order.
    pub locales: Vec<String>,
    /// Cap on episodes, for preview builds.
    pub max_episodes: Option<usize>,
}

/// What one locale's build produced.
#[derive(Debug, Clone)]
pub struct LocaleSummary {
    pub locale: String,
    pub episodes: usize,
    /// Search documents published natively for this locale. Zero when the
    /// locale defers to a fallback index.
    pub documents: usize,
    pub fallback: bool,
}

/// Per-locale summaries for the whole build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub locales: Vec<LocaleSummary>,
}

impl BuildReport {
    pub fn total_documents(&self) -> usize {
        self.locales.iter().map(|l| l.documents).sum()
    }
}

/// Optional per-episode link metadata, keyed by episode name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkOverride {
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub episode_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Overrides {
    #[serde(default)]
    episode_overrides: HashMap<String, LinkOverride>,
}

fn load_overrides(input_dir: &Path) -> Result<Overrides> {
    let path = input_dir.join("overrides.json");
    if !path.exists() {
        return Ok(Overrides::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Read and parse every `*.txt` transcript in a directory, in filename
/// order.
fn load_transcripts(dir: &Path, max_episodes: Option<usize>) -> Result<Vec<Transcript>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();
    if let Some(max) = max_episodes {
        paths.truncate(max);
    }

    let mut transcripts = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text = fs::read_to_string(&path)?;
        let parsed = parse_transcript(&name, &text);
        debug!(episode = %name, segments = parsed.segments.len(), "transcript parsed");
        transcripts.push(parsed);
    }
    Ok(transcripts)
}

fn episode_from_transcript(transcript: Transcript, overrides: &Overrides) -> EpisodeDetail {
    let links = overrides
        .episode_overrides
        .get(&transcript.episode_name)
        .cloned()
        .unwrap_or_default();

    let topics = taxonomy::classify_topics(&transcript.full_text);
    let failure_patterns = taxonomy::classify_failures(&transcript.full_text);

    EpisodeDetail {
        summary: EpisodeSummary {
            slug: transcript.slug,
            title: transcript.episode_name,
            num_segments: transcript.segments.len(),
            topics,
            failure_patterns,
            companies: transcript.companies,
        },
        audio_url: links.audio_url,
        episode_url: links.episode_url,
        segments: transcript
            .segments
            .into_iter()
            .map(|segment| EpisodeSegment {
                speaker: segment.speaker,
                timestamp: segment.timestamp,
                timestamp_seconds: segment.timestamp_seconds,
                content: segment.content,
            })
            .collect(),
        full_text: transcript.full_text,
    }
}

/// The per-locale search index: one document per segment, with the
/// pre-lowered `search_text` the ranker matches against.
pub fn build_search_index(episodes: &[EpisodeDetail]) -> SearchIndex {
    let documents = episodes
        .iter()
        .flat_map(|episode| {
            episode.segments.iter().map(|segment| SearchDocument {
                slug: episode.summary.slug.clone(),
                title: episode.summary.title.clone(),
                speaker: segment.speaker.clone(),
                timestamp: segment.timestamp.clone(),
                content: segment.content.clone(),
                search_text: format!("{} {}", segment.speaker, segment.content).to_lowercase(),
            })
        })
        .collect();

    SearchIndex {
        documents,
        fallback_locale: None,
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Emit one locale's payload directory.
pub fn write_locale_payload(
    locale_dir: &Path,
    public_dir: Option<&Path>,
    locale: &str,
    episodes: &[EpisodeDetail],
    search: &SearchIndex,
) -> Result<()> {
    let episodes_dir = locale_dir.join("episodes");

    let index: Vec<&EpisodeSummary> = episodes.iter().map(|e| &e.summary).collect();
    write_json(&episodes_dir.join("index.json"), &index)?;
    for episode in episodes {
        write_json(
            &episodes_dir.join(format!("{}.json", episode.summary.slug)),
            episode,
        )?;
    }

    let guests: Vec<Guest> = episodes
        .iter()
        .map(|episode| Guest {
            name: episode.summary.title.clone(),
            slug: episode.summary.slug.clone(),
            episode_slug: episode.summary.slug.clone(),
        })
        .collect();
    write_json(&locale_dir.join("guests.json"), &guests)?;

    let topics: Vec<Topic> = TOPICS
        .iter()
        .map(|topic| Topic {
            id: topic.id.to_string(),
            name: topic.name.to_string(),
            episodes: episodes
                .iter()
                .filter(|e| e.summary.topics.iter().any(|t| t == topic.id))
                .map(|e| e.summary.slug.clone())
                .collect(),
        })
        .collect();
    write_json(&locale_dir.join("topics.json"), &topics)?;

    let frameworks: Vec<Framework> = FRAMEWORKS
        .iter()
        .map(|framework| Framework {
            id: framework.id.to_string(),
            name: framework.name.to_string(),
            description: framework.description.to_string(),
            source: framework.source.to_string(),
        })
        .collect();
    write_json(&locale_dir.join("frameworks.json"), &frameworks)?;

    let failure: Vec<FailurePattern> = FAILURE_PATTERNS
        .iter()
        .map(|pattern| FailurePattern {
            id: pattern.id.to_string(),
            name: pattern.name.to_string(),
            examples: pattern.examples.iter().map(|s| (*s).to_string()).collect(),
            episodes: episodes
                .iter()
                .filter(|e| e.summary.failure_patterns.iter().any(|p| p == pattern.id))
                .map(|e| e.summary.slug.clone())
                .collect(),
        })
        .collect();
    write_json(&locale_dir.join("failure.json"), &failure)?;

    let interviews: Vec<InterviewCategory> = INTERVIEW_CATEGORIES
        .iter()
        .map(|category| InterviewCategory {
            id: category.id.to_string(),
            name: category.name.to_string(),
            questions: category.questions.iter().map(|s| (*s).to_string()).collect(),
        })
        .collect();
    write_json(&locale_dir.join("interviews.json"), &interviews)?;

    write_json(&locale_dir.join("search.json"), search)?;
    if let Some(public_dir) = public_dir {
        write_json(&public_dir.join(locale).join("search.json"), search)?;
    }

    Ok(())
}

fn build_locale(
    config: &BuildConfig,
    locale: &str,
    base: &[EpisodeDetail],
    overrides: &Overrides,
) -> Result<LocaleSummary> {
    let locale_dir = config.output_dir.join(locale);
    let public_dir = config.public_dir.as_deref();

    let translated_dir = config.input_dir.join(locale);
    let native_dataset = if locale == DEFAULT_LOCALE {
        None // the base dataset is already the default locale's
    } else if translated_dir.is_dir() {
        let transcripts = load_transcripts(&translated_dir, config.max_episodes)?;
        Some(
            transcripts
                .into_iter()
                .map(|t| episode_from_transcript(t, overrides))
                .collect::<Vec<_>>(),
        )
    } else {
        // No translated transcripts: content pages reuse the default
        // locale's text and search defers to its index.
        let stub = SearchIndex {
            documents: Vec::new(),
            fallback_locale: Some(DEFAULT_LOCALE.to_string()),
        };
        write_locale_payload(&locale_dir, public_dir, locale, base, &stub)?;
        write_metadata(&locale_dir, config, locale, base.len())?;
        info!(locale, "locale published with fallback search index");
        return Ok(LocaleSummary {
            locale: locale.to_string(),
            episodes: base.len(),
            documents: 0,
            fallback: true,
        });
    };

    let dataset = native_dataset.as_deref().unwrap_or(base);
    let search = build_search_index(dataset);
    write_locale_payload(&locale_dir, public_dir, locale, dataset, &search)?;
    write_metadata(&locale_dir, config, locale, dataset.len())?;
    info!(
        locale,
        episodes = dataset.len(),
        documents = search.len(),
        "locale published"
    );

    Ok(LocaleSummary {
        locale: locale.to_string(),
        episodes: dataset.len(),
        documents: search.len(),
        fallback: false,
    })
}

fn write_metadata(
    locale_dir: &Path,
    config: &BuildConfig,
    locale: &str,
    total_episodes: usize,
) -> Result<()> {
    let metadata = SiteMetadata {
        locale: locale.to_string(),
        updated_at: chrono::Utc::now().to_rfc3339(),
        total_episodes,
        topics: TOPICS
            .iter()
            .map(|topic| TopicRef {
                id: topic.id.to_string(),
                name: topic.name.to_string(),
            })
            .collect(),
        locales: config
            .locales
            .iter()
            .map(|code| LocaleRef {
                code: code.clone(),
                label: locales::find(code).map_or_else(|| code.clone(), |l| l.label.to_string()),
            })
            .collect(),
    };
    write_json(&locale_dir.join("site.json"), &metadata)
}

/// Run the full build: parse the default-locale corpus once, then publish
/// every configured locale.
pub fn build_site(config: &BuildConfig) -> Result<BuildReport> {
    for locale in &config.locales {
        if !locales::is_supported(locale) {
            return Err(Error::UnsupportedLocale(locale.clone()));
        }
    }

    let overrides = load_overrides(&config.input_dir)?;
    let base: Vec<EpisodeDetail> = load_transcripts(&config.input_dir, config.max_episodes)?
        .into_iter()
        .map(|t| episode_from_transcript(t, &overrides))
        .collect();
    info!(episodes = base.len(), "base corpus parsed");

    #[cfg(feature = "parallel")]
    let summaries: Result<Vec<LocaleSummary>> = config
        .locales
        .par_iter()
        .map(|locale| build_locale(config, locale, &base, &overrides))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let summaries: Result<Vec<LocaleSummary>> = config
        .locales
        .iter()
        .map(|locale| build_locale(config, locale, &base, &overrides))
        .collect();

    Ok(BuildReport {
        locales: summaries?,
    })
}
