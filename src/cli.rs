//! Command-line interface definitions and terminal display helpers.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "podex",
    about = "Site data pipeline and transcript search for multi-locale podcast archives",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the per-locale site data tree from raw transcripts
    Build {
        /// Directory of transcript files (.txt), with optional per-locale
        /// subdirectories of translated transcripts
        #[arg(short, long)]
        input: String,

        /// Output directory for the site data tree
        #[arg(short, long)]
        output: String,

        /// Mirror directory for search.json files (the web root's data dir)
        #[arg(long)]
        public: Option<String>,

        /// Locales to publish, comma separated (default: every registered locale)
        #[arg(short, long, value_delimiter = ',')]
        locales: Option<Vec<String>>,

        /// Cap the number of episodes, for preview builds
        #[arg(long)]
        max_episodes: Option<usize>,
    },

    /// Load a built index and search it from the terminal
    Search {
        /// Root of the built site data tree
        #[arg(short, long)]
        data: String,

        /// Locale whose index to load
        #[arg(short, long, default_value = podex::locales::DEFAULT_LOCALE)]
        locale: String,

        /// Free-text query
        query: String,

        /// Maximum results to print
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Emit sitemap.xml for a built site
    Sitemap {
        /// Root of the built site data tree
        #[arg(short, long)]
        data: String,

        /// Canonical site URL prefix
        #[arg(long, default_value = "https://example.com")]
        site_url: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ═══════════════════════════════════════════════════════════════════════════
// DISPLAY HELPERS
// ═══════════════════════════════════════════════════════════════════════════

fn paint(code: &str, text: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint("1", text)
}

pub fn dim(text: &str) -> String {
    paint("2", text)
}

pub fn green(text: &str) -> String {
    paint("32", text)
}

pub fn red(text: &str) -> String {
    paint("31", text)
}
