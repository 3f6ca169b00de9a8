//! Sentiment-to-mood policies.
//!
//! The codebase that preceded this service grew two incompatible heuristics
//! for turning text into an emoji/mood pair: the ordered keyword tiers used by
//! [`crate::sentiment::classify`], and a word-frequency count over expanded
//! lexicons that lived in a server-side fallback path. Both are kept here
//! behind one trait so exactly one policy is wired per call path and their
//! thresholds never mix. Every request path in this service uses
//! [`TieredKeywordPolicy`]; [`WordFrequencyPolicy`] is the retained variant.

use crate::sentiment::{Emoji, MoodLabel, mood_from_score, tier_score};

/// A policy that maps raw text to the coarse emoji/mood classification.
pub trait SentimentPolicy: Send + Sync {
    /// Short identifier for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Classify text into an emoji token and mood label.
    fn mood(&self, text: &str) -> (Emoji, MoodLabel);
}

/// Canonical policy: ordered keyword tiers, then the +-0.5 score thresholds.
///
/// Produces results identical to [`crate::sentiment::classify`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredKeywordPolicy;

impl SentimentPolicy for TieredKeywordPolicy {
    fn name(&self) -> &'static str {
        "tiered-keyword"
    }

    fn mood(&self, text: &str) -> (Emoji, MoodLabel) {
        mood_from_score(tier_score(text))
    }
}

/// Expanded positive lexicon for the word-frequency variant.
const POSITIVE_LEXICON: &[&str] = &[
    "happy",
    "joy",
    "excited",
    "great",
    "awesome",
    "wonderful",
    "amazing",
    "love",
    "good",
    "fantastic",
    "excellent",
    "perfect",
    "brilliant",
    "fun",
    "enjoyable",
    "pleasant",
    "delighted",
    "thrilled",
    "cheerful",
    "optimistic",
    "confident",
    "successful",
    "accomplished",
    "proud",
    "satisfied",
    "content",
    "peaceful",
    "relaxed",
];

/// Expanded negative lexicon for the word-frequency variant.
const NEGATIVE_LEXICON: &[&str] = &[
    "sad",
    "upset",
    "angry",
    "frustrated",
    "terrible",
    "awful",
    "hate",
    "bad",
    "worried",
    "anxious",
    "depressed",
    "disappointed",
    "stressed",
    "overwhelmed",
    "hopeless",
    "miserable",
    "devastated",
    "heartbroken",
    "lonely",
    "scared",
    "fearful",
    "nervous",
    "irritated",
    "annoyed",
    "embarrassed",
    "ashamed",
    "guilty",
    "regret",
    "difficult",
    "tough",
    "hard",
];

/// Alternative policy: count lexicon hits on each side, majority wins, ties
/// (including zero hits) land on moderate/neutral.
///
/// Kept as a documented variant of the sentiment seam; no request path in
/// this service is wired to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordFrequencyPolicy;

impl SentimentPolicy for WordFrequencyPolicy {
    fn name(&self) -> &'static str {
        "word-frequency"
    }

    fn mood(&self, text: &str) -> (Emoji, MoodLabel) {
        let lower = text.to_lowercase();
        let positive = POSITIVE_LEXICON
            .iter()
            .filter(|w| lower.contains(*w))
            .count();
        let negative = NEGATIVE_LEXICON
            .iter()
            .filter(|w| lower.contains(*w))
            .count();

        if positive > negative && positive > 0 {
            (Emoji::Good, MoodLabel::Positive)
        } else if negative > positive && negative > 0 {
            (Emoji::Bad, MoodLabel::Negative)
        } else {
            (Emoji::Moderate, MoodLabel::Neutral)
        }
    }
}
