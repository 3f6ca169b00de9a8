//! Per-user diary and mood persistence.
//!
//! The storage contract is a small repository trait so a durable backend can
//! be substituted later without touching the classifier or summarizer. The
//! shipped implementation is process-lifetime in-memory maps: entries survive
//! for as long as the process runs and are lost on restart, which is
//! acceptable for this service's scope.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::util::utc_timestamp;

/// One persisted diary entry. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub summary: String,
    /// ISO-8601 UTC instant with trailing `Z`, captured at save time.
    pub timestamp: String,
}

/// One point on a user's mood timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodPoint {
    pub date: String,
    pub score: f64,
}

/// Repository for diary entries and mood points.
///
/// Both sequences are append-only per user: an append never removes or
/// reorders earlier items, and insertion order is chronological order.
/// Appends to the same user's sequence are serialized by the implementation.
#[async_trait]
pub trait DiaryStore: Send + Sync {
    /// Persist a diary summary for a user. Generates a fresh entry id and a
    /// UTC timestamp at call time.
    async fn save(&self, user_id: &str, summary: &str) -> Result<DiaryEntry, StoreError>;

    /// All diary entries for a user, in insertion order.
    async fn entries(&self, user_id: &str) -> Result<Vec<DiaryEntry>, StoreError>;

    /// Append a point to the user's mood timeline.
    async fn append_mood_point(
        &self,
        user_id: &str,
        date: &str,
        score: f64,
    ) -> Result<(), StoreError>;

    /// The user's mood timeline, in insertion order.
    async fn mood_timeline(&self, user_id: &str) -> Result<Vec<MoodPoint>, StoreError>;
}

/// In-memory [`DiaryStore`]. Initialized empty at process start; grows
/// monotonically; no compaction.
#[derive(Default)]
pub struct MemoryStore {
    diaries: RwLock<HashMap<String, Vec<DiaryEntry>>>,
    moods: RwLock<HashMap<String, Vec<MoodPoint>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DiaryStore for MemoryStore {
    async fn save(&self, user_id: &str, summary: &str) -> Result<DiaryEntry, StoreError> {
        let entry = DiaryEntry {
            id: Uuid::new_v4(),
            summary: summary.to_string(),
            timestamp: utc_timestamp(),
        };

        let mut diaries = self.diaries.write().await;
        diaries
            .entry(user_id.to_string())
            .or_default()
            .push(entry.clone());

        tracing::debug!(user_id, entry_id = %entry.id, "Diary entry saved");
        Ok(entry)
    }

    async fn entries(&self, user_id: &str) -> Result<Vec<DiaryEntry>, StoreError> {
        let diaries = self.diaries.read().await;
        Ok(diaries.get(user_id).cloned().unwrap_or_default())
    }

    async fn append_mood_point(
        &self,
        user_id: &str,
        date: &str,
        score: f64,
    ) -> Result<(), StoreError> {
        let mut moods = self.moods.write().await;
        moods.entry(user_id.to_string()).or_default().push(MoodPoint {
            date: date.to_string(),
            score,
        });
        Ok(())
    }

    async fn mood_timeline(&self, user_id: &str) -> Result<Vec<MoodPoint>, StoreError> {
        let moods = self.moods.read().await;
        Ok(moods.get(user_id).cloned().unwrap_or_default())
    }
}
