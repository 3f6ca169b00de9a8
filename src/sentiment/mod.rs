//! Keyword-tier sentiment classification.
//!
//! The classifier is pure and total: any input (including empty text) maps to
//! a bounded score with its derived mood fields. Scoring walks a fixed set of
//! keyword tiers in priority order; the first tier with a match decides the
//! score. Crisis phrases outrank everything else so that co-occurring positive
//! keywords can never mask them.

pub mod policy;

pub use policy::{SentimentPolicy, TieredKeywordPolicy, WordFrequencyPolicy};

use serde::{Deserialize, Serialize};

/// Crisis phrases. Top precedence: a match here pins the score regardless of
/// any other keywords in the text.
const CRISIS_PHRASES: &[&str] = &["suicide", "kill myself", "i can't go on", "i want to die"];

/// Negative-affect keywords (second tier).
const NEGATIVE_WORDS: &[&str] = &["sad", "depressed", "unhappy", "anxious", "anxiety", "stress"];

/// Positive-affect keywords (third tier).
const POSITIVE_WORDS: &[&str] = &["happy", "joy", "glad", "relieved", "awesome"];

const CRISIS_SCORE: f64 = -0.95;
const NEGATIVE_SCORE: f64 = -0.6;
const POSITIVE_SCORE: f64 = 0.7;

/// Opaque emoji classification token.
///
/// The core only ever produces one of these three identifiers; the web layer
/// maps them to whatever presentation assets the client expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emoji {
    Good,
    Moderate,
    Bad,
}

impl Emoji {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emoji::Good => "good",
            Emoji::Moderate => "moderate",
            Emoji::Bad => "bad",
        }
    }
}

/// Coarse three-way mood classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Positive,
    Negative,
    Neutral,
}

impl MoodLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Positive => "positive",
            MoodLabel::Negative => "negative",
            MoodLabel::Neutral => "neutral",
        }
    }
}

/// Result of classifying one piece of text. Computed fresh per call, never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Sentiment score in `[-1.0, 1.0]`.
    pub score: f64,
    /// Emotion tags derived from the sign of the score. Always exactly one.
    pub emotions: Vec<String>,
    /// Always `score.abs()`.
    pub intensity: f64,
    /// Emoji token for the score (see [`Emoji`]).
    #[serde(rename = "emoji_path")]
    pub emoji: Emoji,
    /// Mood label for the score, consistent with the emoji thresholds.
    pub mood_label: MoodLabel,
}

/// Score text against the ordered keyword tiers. First matching tier wins.
pub(crate) fn tier_score(text: &str) -> f64 {
    let lower = text.to_lowercase();
    if CRISIS_PHRASES.iter().any(|w| lower.contains(w)) {
        CRISIS_SCORE
    } else if NEGATIVE_WORDS.iter().any(|w| lower.contains(w)) {
        NEGATIVE_SCORE
    } else if POSITIVE_WORDS.iter().any(|w| lower.contains(w)) {
        POSITIVE_SCORE
    } else {
        0.0
    }
}

/// Map a score onto the emoji/label pair.
///
/// The +-0.5 thresholds are independent of the tier scores above; they must
/// stay exactly as written because the mood label and emoji token are part of
/// the wire contract.
pub fn mood_from_score(score: f64) -> (Emoji, MoodLabel) {
    if score >= 0.5 {
        (Emoji::Good, MoodLabel::Positive)
    } else if score <= -0.5 {
        (Emoji::Bad, MoodLabel::Negative)
    } else {
        (Emoji::Moderate, MoodLabel::Neutral)
    }
}

/// Classify raw text into a full [`SentimentResult`].
///
/// Pure and deterministic; never fails. Empty or whitespace-only input lands
/// in the default tier (score 0.0, neutral).
pub fn classify(text: &str) -> SentimentResult {
    let score = tier_score(text);

    let emotions = if score < 0.0 {
        vec!["sadness".to_string()]
    } else if score > 0.0 {
        vec!["happiness".to_string()]
    } else {
        vec!["neutral".to_string()]
    };

    let (emoji, mood_label) = mood_from_score(score);

    SentimentResult {
        score,
        emotions,
        intensity: score.abs(),
        emoji,
        mood_label,
    }
}
