// Copyright 2025-present Podex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Raw transcript parsing.
//!
//! Published transcripts are plain text with speaker headers of the form
//! `Speaker Name (12:34):` or `Speaker Name (1:02:03):`, content following
//! either on the same line or on the next. A segment runs from one header
//! to the start of the next.
//!
//! The scanner is hand-rolled: find a parenthesized timestamp followed by a
//! colon, then walk backwards over name characters to recover the speaker.
//! The backward walk stops at a newline, so a sentence ending just before a
//! header is never swallowed into the speaker name.

/// One parsed segment of a transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub speaker: String,
    pub timestamp: String,
    pub timestamp_seconds: f64,
    pub content: String,
}

/// A parsed transcript file.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub episode_name: String,
    pub slug: String,
    pub segments: Vec<Segment>,
    pub full_text: String,
    pub companies: Vec<String>,
}

/// Company names recognized in transcript text.
const COMPANIES: &[&str] = &[
    "Airbnb", "Stripe", "Google", "Facebook", "Meta", "Apple", "Amazon",
    "Microsoft", "Netflix", "Uber", "Lyft", "Figma", "Linear", "Notion",
    "Slack", "Discord", "Twitter", "Instagram", "LinkedIn", "Pinterest",
    "DoorDash", "Instacart", "Coinbase", "Robinhood", "Square", "Shopify",
    "Zoom", "Dropbox", "Box", "Okta", "Datadog", "Snowflake", "MongoDB",
    "Redis", "Elastic", "Confluence", "Atlassian", "Salesforce", "HubSpot",
    "Intercom", "Segment", "Mixpanel", "Amplitude", "Optimizely", "Vercel",
    "Replit", "Bolt", "Lovable", "Perplexity", "Cursor", "OpenAI", "Anthropic",
];

/// Convert a display timestamp to seconds. Accepts `H:MM:SS`, `MM:SS`, or a
/// bare seconds value; anything unparsable is 0.0.
pub fn parse_timestamp(raw: &str) -> f64 {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    let as_num = |part: &str| part.parse::<f64>().ok();
    match parts.as_slice() {
        [h, m, s] => match (as_num(h), as_num(m), as_num(s)) {
            (Some(h), Some(m), Some(s)) => h * 3600.0 + m * 60.0 + s,
            _ => 0.0,
        },
        [m, s] => match (as_num(m), as_num(s)) {
            (Some(m), Some(s)) => m * 60.0 + s,
            _ => 0.0,
        },
        [s] => as_num(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Slug form of an episode name: lowercase alphanumerics joined by single
/// dashes.
pub fn slugify(value: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in value.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }
    slug
}

/// Bytes allowed inside a speaker name. Newlines are deliberately excluded:
/// a name never spans lines.
fn is_speaker_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b' ' | b'\t' | b'.' | b'-' | b'\'' | b'&' | b'+' | b'/')
}

/// Match `D?D:DD(:DD)?)` starting at `start` (just past the opening paren).
/// Returns the index past the closing paren.
fn scan_timestamp(bytes: &[u8], start: usize) -> Option<usize> {
    fn digit_run(bytes: &[u8], i: usize) -> usize {
        bytes[i.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    }

    let mut i = start;
    let lead = digit_run(bytes, i);
    if !(1..=2).contains(&lead) {
        return None;
    }
    i += lead;
    if bytes.get(i) != Some(&b':') {
        return None;
    }
    i += 1;
    if digit_run(bytes, i) != 2 {
        return None;
    }
    i += 2;
    if bytes.get(i) == Some(&b':') {
        i += 1;
        if digit_run(bytes, i) != 2 {
            return None;
        }
        i += 2;
    }
    if bytes.get(i) != Some(&b')') {
        return None;
    }
    Some(i + 1)
}

struct Header {
    /// Byte offset where the speaker name run begins; the previous
    /// segment's content ends here.
    cut: usize,
    /// Byte offset just past the trailing colon.
    content_start: usize,
    speaker: String,
    timestamp: String,
}

fn find_headers(text: &str) -> Vec<Header> {
    let bytes = text.as_bytes();
    let mut headers = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'(' {
            if let Some(after_paren) = scan_timestamp(bytes, i + 1) {
                if bytes.get(after_paren) == Some(&b':') {
                    let mut cut = i;
                    while cut > 0 && is_speaker_byte(bytes[cut - 1]) {
                        cut -= 1;
                    }
                    let speaker = text[cut..i].trim();
                    if speaker
                        .as_bytes()
                        .first()
                        .is_some_and(u8::is_ascii_alphabetic)
                    {
                        headers.push(Header {
                            cut,
                            content_start: after_paren + 1,
                            speaker: speaker.to_string(),
                            timestamp: text[i + 1..after_paren - 1].to_string(),
                        });
                        i = after_paren + 1;
                        continue;
                    }
                }
            }
        }
        i += 1;
    }
    headers
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn detect_companies(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    COMPANIES
        .iter()
        .filter(|company| haystack.contains(&company.to_lowercase()))
        .map(|company| (*company).to_string())
        .collect()
}

/// Parse one transcript file into segments.
///
/// Segments with no content after whitespace collapsing are dropped.
pub fn parse_transcript(episode_name: &str, text: &str) -> Transcript {
    let headers = find_headers(text);
    let mut segments = Vec::with_capacity(headers.len());

    for (idx, header) in headers.iter().enumerate() {
        let end = headers.get(idx + 1).map_or(text.len(), |next| next.cut);
        if header.content_start >= end {
            continue;
        }
        let content = collapse_whitespace(&text[header.content_start..end]);
        if content.is_empty() {
            continue;
        }
        segments.push(Segment {
            speaker: header.speaker.clone(),
            timestamp: header.timestamp.clone(),
            timestamp_seconds: parse_timestamp(&header.timestamp),
            content,
        });
    }

    Transcript {
        episode_name: episode_name.to_string(),
        slug: slugify(episode_name),
        segments,
        full_text: text.to_string(),
        companies: detect_companies(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_forms() {
        assert_eq!(parse_timestamp("12:34"), 754.0);
        assert_eq!(parse_timestamp("1:02:03"), 3723.0);
        assert_eq!(parse_timestamp("45"), 45.0);
        assert_eq!(parse_timestamp("not a time"), 0.0);
        assert_eq!(parse_timestamp("xx:yy"), 0.0);
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Growth Loops with Alice Chen"), "growth-loops-with-alice-chen");
        assert_eq!(slugify("  What's  Next?  "), "whats-next");
        assert_eq!(slugify("a--b c"), "a-b-c");
    }

    #[test]
    fn content_on_same_line() {
        let text = "Alice Chen (12:34): Growth metrics matter.\nBob Lee (13:05): They do.";
        let t = parse_transcript("ep", text);
        assert_eq!(t.segments.len(), 2);
        assert_eq!(t.segments[0].speaker, "Alice Chen");
        assert_eq!(t.segments[0].timestamp, "12:34");
        assert_eq!(t.segments[0].content, "Growth metrics matter.");
        assert_eq!(t.segments[1].speaker, "Bob Lee");
    }

    #[test]
    fn content_on_next_line_is_joined() {
        let text = "Alice Chen (0:10):\nGrowth metrics\nmatter a lot.\n\nBob Lee (0:42):\nAgreed.";
        let t = parse_transcript("ep", text);
        assert_eq!(t.segments[0].content, "Growth metrics matter a lot.");
        assert_eq!(t.segments[1].content, "Agreed.");
    }

    #[test]
    fn hour_long_timestamps() {
        let text = "Host (1:02:03): Welcome back.";
        let t = parse_transcript("ep", text);
        assert_eq!(t.segments[0].timestamp, "1:02:03");
        assert_eq!(t.segments[0].timestamp_seconds, 3723.0);
    }

    #[test]
    fn sentence_before_header_stays_in_previous_segment() {
        // "matter" ends the previous line; the backward walk must stop at
        // the newline rather than absorbing it into the speaker name.
        let text = "Alice (0:01): Metrics matter\nBob Lee (0:02): Sure.";
        let t = parse_transcript("ep", text);
        assert_eq!(t.segments[0].content, "Metrics matter");
        assert_eq!(t.segments[1].speaker, "Bob Lee");
    }

    #[test]
    fn parenthetical_without_colon_is_not_a_header() {
        let text = "Alice (0:01): We shipped it (2:1 odds against) and it held.";
        let t = parse_transcript("ep", text);
        assert_eq!(t.segments.len(), 1);
        assert!(t.segments[0].content.contains("(2:1 odds against)"));
    }

    #[test]
    fn companies_detected_case_insensitively() {
        let text = "Alice (0:01): Back at stripe we measured everything. Figma too.";
        let t = parse_transcript("ep", text);
        assert_eq!(t.companies, vec!["Stripe".to_string(), "Figma".to_string()]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        let text = "Alice (0:01):   \nBob (0:02): Something.";
        let t = parse_transcript("ep", text);
        assert_eq!(t.segments.len(), 1);
        assert_eq!(t.segments[0].speaker, "Bob");
    }
}
