use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::types::TextSegment;

fn html_anchor_regex() -> &'static Regex {
    static HTML_ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();
    HTML_ANCHOR_REGEX.get_or_init(|| {
        Regex::new(r#"<a\s+href="([^"]+)">([^<]+)</a>"#).expect("Invalid HTML anchor regex")
    })
}

fn markdown_link_regex() -> &'static Regex {
    static MARKDOWN_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKDOWN_LINK_REGEX.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid markdown link regex")
    })
}

/// Formats a hyperlink that opens in a new tab without leaking the referrer.
pub fn anchor(href: &str, label: &str) -> String {
    format!(r#"<a href="{href}" target="_blank" rel="noopener">{label}</a>"#)
}

/// Rewrites both link dialects into uniform anchors.
///
/// HTML anchors are rewritten first, then markdown links. The rest of the text
/// is passed through untouched, so authored HTML stays live.
pub fn render_links(text: &str) -> String {
    let text = html_anchor_regex().replace_all(text, |caps: &Captures<'_>| anchor(&caps[1], &caps[2]));
    markdown_link_regex()
        .replace_all(&text, |caps: &Captures<'_>| anchor(&caps[2], &caps[1]))
        .into_owned()
}

/// Splits text into plain text and link segments.
///
/// Uses the same patterns and precedence as [`render_links`]: a markdown link
/// overlapping an HTML anchor is part of that anchor.
pub fn parse_segments(text: &str) -> Vec<TextSegment> {
    let mut links: Vec<(Range<usize>, TextSegment)> = html_anchor_regex()
        .captures_iter(text)
        .filter_map(|caps| Some((caps.get(0)?.range(), link(&caps[2], &caps[1]))))
        .collect();

    let html_ranges: Vec<Range<usize>> = links.iter().map(|(r, _)| r.clone()).collect();
    for caps in markdown_link_regex().captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let overlaps = html_ranges
            .iter()
            .any(|r| whole.start() < r.end && whole.end() > r.start);
        if !overlaps {
            links.push((whole.range(), link(&caps[1], &caps[2])));
        }
    }

    links.sort_by_key(|(range, _)| range.start);

    let mut segments = Vec::new();
    let mut current_pos = 0;
    for (range, segment) in links {
        if current_pos < range.start {
            segments.push(TextSegment::Text(text[current_pos..range.start].to_string()));
        }
        segments.push(segment);
        current_pos = range.end;
    }
    if current_pos < text.len() {
        segments.push(TextSegment::Text(text[current_pos..].to_string()));
    }

    segments
}

fn link(label: &str, href: &str) -> TextSegment {
    TextSegment::Link {
        label: label.to_string(),
        href: href.to_string(),
    }
}
