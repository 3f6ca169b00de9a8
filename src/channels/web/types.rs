//! Wire types for the web channel.
//!
//! The core works with opaque emoji tokens; this module owns the mapping to
//! the client's presentation asset paths and the request/response shapes the
//! client expects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::AnalyzedEvent;
use crate::sentiment::{Emoji, MoodLabel};
use crate::store::{DiaryEntry, MoodPoint};

pub const SERVICE_NAME: &str = "Being Agent Service";

/// Map an emoji token to the client's asset path.
pub fn asset_path(emoji: Emoji) -> &'static str {
    match emoji {
        Emoji::Good => "assets/images/goodmood.png",
        Emoji::Moderate => "assets/images/moderatemode.png",
        Emoji::Bad => "assets/images/badmood.png",
    }
}

/// Body of `POST /chat` and `POST /analyze_conversation`.
#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    pub conversation: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "default_user".to_string()
}

/// Response of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

/// Response of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

/// Response of `POST /analyze_conversation`: the assembled Event plus the
/// conversational reply, with the emoji token swapped for its asset path.
#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub date: String,
    pub title: String,
    pub time: String,
    pub description: String,
    pub entry_id: Uuid,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_path: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_label: Option<MoodLabel>,
    pub agent_response: String,
}

impl From<AnalyzedEvent> for EventDetailResponse {
    fn from(analyzed: AnalyzedEvent) -> Self {
        let event = analyzed.event;
        Self {
            date: event.date,
            title: event.title,
            time: event.time,
            description: event.description,
            entry_id: event.entry_id,
            timestamp: event.timestamp,
            emoji_path: event.emoji.map(asset_path),
            sentiment_score: event.sentiment_score,
            mood_label: event.mood_label,
            agent_response: analyzed.agent_response,
        }
    }
}

/// Response of `GET /diary/{user_id}`.
#[derive(Debug, Serialize)]
pub struct DiaryResponse {
    pub user_id: String,
    pub entries: Vec<DiaryEntry>,
}

/// Response of `GET /mood/{user_id}`.
#[derive(Debug, Serialize)]
pub struct MoodTimelineResponse {
    pub user_id: String,
    pub points: Vec<MoodPoint>,
}

/// Response of `GET /test/{user_id}`.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub test_status: &'static str,
    pub test_conversation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EventDetailResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
