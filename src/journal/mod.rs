//! Diary summarization.
//!
//! Turns raw reflection text into a short titled diary entry: a title picked
//! from a fixed category table, a first-person description, and a
//! whitespace-normalized summary capped for storage. Pure and total, like the
//! sentiment classifier.

pub mod event;

pub use event::{Event, EventAssembler, MoodAttachment};

use serde::{Deserialize, Serialize};

use crate::util::{char_len, char_prefix};

/// Ordered title categories. First category with a keyword hit wins; the
/// ordering (happy before study before sad before work before tired) is part
/// of the contract and must not be rearranged.
const TITLE_TABLE: &[(&[&str], &str)] = &[
    (
        &["happy", "joy", "excited", "great", "awesome"],
        "Happy Day",
    ),
    (
        &["study", "learn", "class", "homework", "exam"],
        "Study Day",
    ),
    (
        &["sad", "upset", "disappointed", "frustrated"],
        "Tough Day",
    ),
    (&["work", "meeting", "project", "deadline"], "Work Day"),
    (&["tired", "exhausted", "busy", "stressed"], "Busy Day"),
];

const DEFAULT_TITLE: &str = "Daily Reflection";

/// Inputs longer than this (in characters) get the reflective long-form
/// description instead of embedding the whole text.
const LONG_INPUT_THRESHOLD: usize = 200;

/// Number of characters of the original text quoted in the long-form
/// description.
const LONG_INPUT_EXCERPT: usize = 100;

/// Hard cap on the stored summary, in characters.
const SUMMARY_MAX: usize = 240;

/// Structured summary of one piece of reflection text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Diary title, at most three words, from the fixed category table.
    pub title: String,
    /// First-person diary description.
    pub description: String,
    /// Whitespace-normalized summary, at most 240 characters.
    pub summary: String,
}

/// Pick a title from the category table. Case-insensitive containment, first
/// matching category wins.
fn pick_title(lower: &str) -> &'static str {
    for (keywords, title) in TITLE_TABLE {
        if keywords.iter().any(|w| lower.contains(w)) {
            return title;
        }
    }
    DEFAULT_TITLE
}

/// Collapse whitespace runs to single spaces and trim the ends, then cap to
/// 240 characters with a trailing ellipsis marker.
fn normalized_summary(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if char_len(&collapsed) <= SUMMARY_MAX {
        collapsed
    } else {
        format!("{}...", char_prefix(&collapsed, SUMMARY_MAX - 3))
    }
}

/// Summarize raw reflection text into a [`SummaryResult`].
///
/// Pure and deterministic; never fails.
pub fn summarize(text: &str) -> SummaryResult {
    let lower = text.to_lowercase();
    let title = pick_title(&lower).to_string();

    let description = if char_len(text) > LONG_INPUT_THRESHOLD {
        format!(
            "Today I reflected on my experiences. {}... It was meaningful to process these thoughts.",
            char_prefix(text, LONG_INPUT_EXCERPT)
        )
    } else {
        format!("I spent time today thinking about my day. {text}")
    };

    SummaryResult {
        title,
        description,
        summary: normalized_summary(text),
    }
}
