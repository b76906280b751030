// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Recommendation Segmentation
//!
//! The enrichment service returns a single free-text recommendation string in
//! which known section headers ("Overall:", "Pace:", ...) introduce the parts
//! of the analysis. [`segment`] scans that text left to right for header
//! tokens and partitions it into ordered [`RecommendationSection`]s; text with
//! no recognized headers becomes one untitled section, so nothing the service
//! wrote is ever lost.
//!
//! A header with no trailing text still yields a section with empty content.
//! Callers that prefer compact output filter those out themselves; the
//! segmenter reports everything it matched.

use crate::models::RecommendationSection;

/// Recognized section headers, matched case-insensitively as whole words
/// immediately followed by a colon. Fixed vocabulary, not user-extensible.
pub const SECTION_HEADERS: [&str; 4] = ["Overall", "Pace", "Heart Rate", "Calories"];

/// One matched `<Header>:` occurrence, as byte offsets into the source text
struct HeaderToken {
    /// Offset of the first byte of the header word
    start: usize,
    /// Offset just past the header word, before the colon
    title_end: usize,
    /// Offset just past the colon
    end: usize,
}

/// Split recommendation text into ordered titled sections
///
/// The material strictly between one header token and the next (or end of
/// input) becomes that header's content, trimmed of surrounding whitespace.
/// Sections appear in header occurrence order. Boilerplate preceding the
/// first header is discarded.
///
/// Total over every input: `None` and blank text yield an empty vec, text
/// without any recognized header yields a single untitled section carrying
/// the whole trimmed input, and a header with nothing after it yields a
/// section with empty content.
///
/// # Examples
///
/// ```rust
/// use fittrack_client::segment::segment;
///
/// let sections = segment(Some("Overall: Good pace. Calories: On target."));
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].title.as_deref(), Some("Overall"));
/// assert_eq!(sections[0].content, "Good pace.");
/// ```
pub fn segment(text: Option<&str>) -> Vec<RecommendationSection> {
    let Some(raw) = text else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let tokens = find_header_tokens(raw);
    if tokens.is_empty() {
        return vec![RecommendationSection {
            title: None,
            content: raw.trim().to_string(),
        }];
    }

    let mut sections = Vec::with_capacity(tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        let content_end = tokens.get(idx + 1).map_or(raw.len(), |next| next.start);
        sections.push(RecommendationSection {
            // Title keeps the casing of the source occurrence
            title: Some(raw[token.start..token.title_end].to_string()),
            content: raw[token.end..content_end].trim().to_string(),
        });
    }
    sections
}

/// Scan for `<Header>:` tokens in source order
fn find_header_tokens(text: &str) -> Vec<HeaderToken> {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < text.len() {
        if !text.is_char_boundary(i) {
            i += 1;
            continue;
        }
        if at_word_boundary(text, i) {
            if let Some(header) = SECTION_HEADERS
                .iter()
                .find(|header| matches_header(text, i, header))
            {
                let title_end = i + header.len();
                tokens.push(HeaderToken {
                    start: i,
                    title_end,
                    end: title_end + 1,
                });
                i = title_end + 1;
                continue;
            }
        }
        i += 1;
    }
    tokens
}

/// A header may only start where no alphanumeric character precedes it,
/// so "caloriesBurned:" never opens a Calories section.
fn at_word_boundary(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

fn matches_header(text: &str, at: usize, header: &str) -> bool {
    let word_end = at + header.len();
    // The byte after the word must exist and be the colon
    if word_end >= text.len() || !text.is_char_boundary(word_end) {
        return false;
    }
    text[at..word_end].eq_ignore_ascii_case(header) && text.as_bytes()[word_end] == b':'
}
