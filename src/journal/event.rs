//! Event assembly: summary + persistence + mood, merged into one record.
//!
//! The Event is the externally visible result of analyzing one piece of
//! reflection text. Assembly persists exactly one diary entry per call and the
//! returned `entry_id`/`timestamp` always belong to that entry.

use std::sync::Arc;

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::journal::summarize;
use crate::sentiment::{Emoji, MoodLabel, SentimentResult};
use crate::store::DiaryStore;

/// Mood data attached to an Event. All fields optional: a partial attachment
/// copies what is present and omits the rest from the serialized Event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodAttachment {
    #[serde(rename = "emoji_path")]
    pub emoji: Option<Emoji>,
    pub score: Option<f64>,
    pub mood_label: Option<MoodLabel>,
}

impl From<&SentimentResult> for MoodAttachment {
    fn from(result: &SentimentResult) -> Self {
        Self {
            emoji: Some(result.emoji),
            score: Some(result.score),
            mood_label: Some(result.mood_label),
        }
    }
}

/// Assembled output record for one analyzed reflection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// ISO-8601 local timestamp at assembly time.
    pub date: String,
    pub title: String,
    /// `hh:mm AM/PM`, derived from the same instant as `date`.
    pub time: String,
    pub description: String,
    /// Id of the diary entry persisted by this assembly.
    pub entry_id: Uuid,
    /// Timestamp of that same diary entry.
    pub timestamp: String,
    #[serde(rename = "emoji_path", skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Emoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_label: Option<MoodLabel>,
}

/// Combines the summarizer, the store, and an optional mood attachment into
/// [`Event`] records.
#[derive(Clone)]
pub struct EventAssembler {
    store: Arc<dyn DiaryStore>,
}

impl EventAssembler {
    pub fn new(store: Arc<dyn DiaryStore>) -> Self {
        Self { store }
    }

    /// Assemble an Event for `text`, persisting exactly one diary entry for
    /// `user_id`.
    ///
    /// A [`StoreError`] aborts the whole assembly; no partial Event is ever
    /// produced.
    pub async fn assemble(
        &self,
        text: &str,
        user_id: &str,
        mood: Option<MoodAttachment>,
    ) -> Result<Event, StoreError> {
        let summary = summarize(text);
        let entry = self.store.save(user_id, &summary.summary).await?;

        // One clock read; date and time must describe the same instant.
        let now = Local::now();
        let date = now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
        let time = now.format("%I:%M %p").to_string();

        let mood = mood.unwrap_or_default();

        Ok(Event {
            date,
            title: summary.title,
            time,
            description: summary.description,
            entry_id: entry.id,
            timestamp: entry.timestamp,
            emoji: mood.emoji,
            sentiment_score: mood.score,
            mood_label: mood.mood_label,
        })
    }
}
