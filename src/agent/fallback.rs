//! Deterministic reply templates.
//!
//! Used whenever the augmenter is unavailable or fails. The reply is routed
//! by coarse keyword groups so the tone still matches what the user shared.

use crate::util::char_prefix;

const UPBEAT_WORDS: &[&str] = &["happy", "great", "wonderful", "amazing", "excited"];

const HARD_DAY_WORDS: &[&str] = &["sad", "upset", "difficult", "tough", "stressed", "worried"];

const EFFORT_WORDS: &[&str] = &["study", "exam", "school", "work", "project"];

/// Empathetic chat reply for the given text.
pub fn chat_reply(text: &str) -> String {
    let lower = text.to_lowercase();

    if UPBEAT_WORDS.iter().any(|w| lower.contains(w)) {
        "That's wonderful to hear! It sounds like you're having a really positive experience. \
         I'm so happy for you and I'd love to hear more about what made your day so special."
            .to_string()
    } else if HARD_DAY_WORDS.iter().any(|w| lower.contains(w)) {
        "I can hear that you're going through something challenging right now. It takes courage \
         to share these feelings, and I want you to know that I'm here to listen and support you. \
         Your feelings are completely valid."
            .to_string()
    } else if EFFORT_WORDS.iter().any(|w| lower.contains(w)) {
        "It sounds like you're putting in a lot of effort with your responsibilities. That kind \
         of dedication is really admirable. How are you feeling about everything you're working on?"
            .to_string()
    } else {
        "Thank you for sharing that with me. I can tell this is something that's on your mind, \
         and I appreciate you trusting me with your thoughts. I'm here to listen and support you \
         however I can."
            .to_string()
    }
}

/// Acknowledgement attached to an analysis result when no augmented reply is
/// available.
pub fn analysis_ack(text: &str) -> String {
    format!(
        "I understand you're sharing something important with me. Thank you for trusting me \
         with your thoughts about: {}...",
        char_prefix(text, 100)
    )
}
