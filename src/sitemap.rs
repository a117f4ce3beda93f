//! Sitemap generation.
//!
//! Enumerates every locale × content-item combination as a publishable URL
//! and renders the sitemap.org urlset document. Pure data transformation:
//! the only inputs are the site URL and the per-locale episode listings.

use crate::error::Result;
use crate::locales;
use crate::site::SiteData;

/// Per-locale section paths, in the order they appear in the sitemap.
/// The empty entry is the locale front page.
const SECTIONS: &[&str] = &[
    "",
    "search/",
    "episodes/",
    "guests/",
    "topics/",
    "frameworks/",
    "failure/",
    "interviews/",
];

/// All publishable URLs: for each locale, the section pages followed by one
/// URL per episode detail page.
pub fn urls(site_url: &str, site: &SiteData) -> Result<Vec<String>> {
    let base = site_url.trim_end_matches('/');
    let mut urls = Vec::new();

    for locale in locales::codes() {
        for section in SECTIONS {
            urls.push(format!("{base}/{locale}/{section}"));
        }
        for episode in site.episodes(locale)? {
            urls.push(format!("{base}/{locale}/episodes/{}/", episode.slug));
        }
    }

    Ok(urls)
}

/// Render a urlset document around the given URLs.
pub fn render(urls: &[String]) -> String {
    let items: String = urls
        .iter()
        .map(|url| format!("<url><loc>{url}</loc></url>"))
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">{items}</urlset>"
    )
}

/// Convenience: enumerate and render in one step.
pub fn generate(site_url: &str, site: &SiteData) -> Result<String> {
    Ok(render(&urls(site_url, site)?))
}
