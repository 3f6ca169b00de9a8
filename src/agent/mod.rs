//! The buddy agent: request routing over the deterministic pipeline.
//!
//! Two operations, matching the two things a client can ask for: an
//! empathetic chat reply, and a full analysis of a reflection (sentiment +
//! diary event + mood tracking). Both validate input before the core runs,
//! and both treat the generative augmenter as optional: any failure there
//! drops to deterministic output and is never user-visible.

mod fallback;

use std::sync::Arc;

use serde::Serialize;

use crate::error::AgentError;
use crate::journal::{Event, EventAssembler, MoodAttachment};
use crate::llm::TextAugmenter;
use crate::sentiment::{SentimentResult, classify};
use crate::store::DiaryStore;
use crate::util::utc_timestamp;

/// Reply to a plain chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub timestamp: String,
}

/// Result of analyzing one reflection.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedEvent {
    pub event: Event,
    pub mood: SentimentResult,
    pub agent_response: String,
}

/// The main conversational agent.
pub struct BuddyAgent {
    store: Arc<dyn DiaryStore>,
    assembler: EventAssembler,
    augmenter: Option<Arc<dyn TextAugmenter>>,
}

impl BuddyAgent {
    pub fn new(store: Arc<dyn DiaryStore>, augmenter: Option<Arc<dyn TextAugmenter>>) -> Self {
        let assembler = EventAssembler::new(Arc::clone(&store));
        Self {
            store,
            assembler,
            augmenter,
        }
    }

    /// Produce an empathetic reply to `text`.
    ///
    /// Rejects blank input; never fails otherwise.
    pub async fn chat(&self, text: &str, user_id: &str) -> Result<ChatReply, AgentError> {
        if text.trim().is_empty() {
            return Err(AgentError::EmptyInput);
        }

        tracing::debug!(user_id, "Chat request");

        let response = match self.augment(&chat_prompt(text)).await {
            Some(reply) => reply,
            None => fallback::chat_reply(text),
        };

        Ok(ChatReply {
            response,
            timestamp: utc_timestamp(),
        })
    }

    /// Run the full analysis pipeline for `text`.
    ///
    /// Classifies, assembles (persisting exactly one diary entry), appends a
    /// mood point for the event's date, then attaches a conversational
    /// response. The Event is complete before the augmenter is consulted, so
    /// augmentation failure can never leave it half-assembled.
    pub async fn analyze(&self, text: &str, user_id: &str) -> Result<AnalyzedEvent, AgentError> {
        if text.trim().is_empty() {
            return Err(AgentError::EmptyInput);
        }

        let mood = classify(text);
        let event = self
            .assembler
            .assemble(text, user_id, Some(MoodAttachment::from(&mood)))
            .await?;
        self.store
            .append_mood_point(user_id, &event.date, mood.score)
            .await?;

        tracing::info!(
            user_id,
            entry_id = %event.entry_id,
            score = mood.score,
            label = mood.mood_label.as_str(),
            "Reflection analyzed"
        );

        let agent_response = match self.augment(&analysis_prompt(text)).await {
            Some(reply) => reply,
            None => fallback::analysis_ack(text),
        };

        Ok(AnalyzedEvent {
            event,
            mood,
            agent_response,
        })
    }

    /// Ask the augmenter for a reply. `None` on any failure, empty output
    /// included; callers fall back to deterministic text.
    async fn augment(&self, prompt: &str) -> Option<String> {
        let augmenter = self.augmenter.as_ref()?;
        match augmenter.generate(prompt).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                tracing::warn!("Augmenter returned empty text, using deterministic reply");
                None
            }
            Err(e) => {
                tracing::warn!("Augmentation failed, using deterministic reply: {}", e);
                None
            }
        }
    }
}

/// Prompt for a plain conversational reply.
fn chat_prompt(text: &str) -> String {
    format!(
        "The user just shared: \"{text}\"\n\n\
         Respond to them with warmth, empathy, and understanding. Show that you care about \
         what they're going through and provide a supportive response. Keep it conversational."
    )
}

/// Prompt for the caring response attached to an analysis.
fn analysis_prompt(text: &str) -> String {
    format!(
        "The user sent this reflection: \"{text}\"\n\n\
         Provide a caring, empathetic conversational response to what they shared. Be warm, \
         supportive, and genuine. Show that you understand and care."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::sentiment::{Emoji, MoodLabel};
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    struct CannedAugmenter(&'static str);

    #[async_trait]
    impl TextAugmenter for CannedAugmenter {
        fn model_name(&self) -> &str {
            "canned"
        }
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingAugmenter;

    #[async_trait]
    impl TextAugmenter for FailingAugmenter {
        fn model_name(&self) -> &str {
            "failing"
        }
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::RequestFailed {
                provider: "failing".to_string(),
                reason: "unreachable".to_string(),
            })
        }
    }

    fn agent_with(
        augmenter: Option<Arc<dyn TextAugmenter>>,
    ) -> (BuddyAgent, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let agent = BuddyAgent::new(store.clone() as Arc<dyn DiaryStore>, augmenter);
        (agent, store)
    }

    // ── chat ──

    #[tokio::test]
    async fn chat_rejects_blank_input() {
        let (agent, _) = agent_with(None);
        for text in ["", "   ", "\n"] {
            assert!(matches!(
                agent.chat(text, "user-1").await,
                Err(AgentError::EmptyInput)
            ));
        }
    }

    #[tokio::test]
    async fn chat_uses_augmenter_when_it_succeeds() {
        let (agent, _) = agent_with(Some(Arc::new(CannedAugmenter("A warm reply."))));
        let reply = agent.chat("hello there", "user-1").await.unwrap();
        assert_eq!(reply.response, "A warm reply.");
        assert!(reply.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn chat_falls_back_when_augmenter_fails() {
        let (agent, _) = agent_with(Some(Arc::new(FailingAugmenter)));
        let reply = agent.chat("feeling wonderful today", "user-1").await.unwrap();
        assert!(reply.response.contains("wonderful to hear"));
    }

    #[tokio::test]
    async fn chat_falls_back_without_augmenter() {
        let (agent, _) = agent_with(None);
        let reply = agent.chat("today was tough", "user-1").await.unwrap();
        assert!(reply.response.contains("here to listen"));
    }

    #[tokio::test]
    async fn chat_falls_back_on_empty_augmenter_output() {
        let (agent, _) = agent_with(Some(Arc::new(CannedAugmenter("   "))));
        let reply = agent.chat("ordinary evening", "user-1").await.unwrap();
        assert!(reply.response.contains("Thank you for sharing"));
    }

    // ── analyze ──

    #[tokio::test]
    async fn analyze_rejects_blank_input_before_persisting() {
        let (agent, store) = agent_with(None);
        assert!(matches!(
            agent.analyze("  ", "user-1").await,
            Err(AgentError::EmptyInput)
        ));
        assert!(store.entries("user-1").await.unwrap().is_empty());
        assert!(store.mood_timeline("user-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn analyze_persists_one_entry_and_one_mood_point() {
        let (agent, store) = agent_with(None);
        let analyzed = agent
            .analyze("so anxious about tomorrow", "user-1")
            .await
            .unwrap();

        let entries = store.entries("user-1").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(analyzed.event.entry_id, entries[0].id);

        let timeline = store.mood_timeline("user-1").await.unwrap();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].score, -0.6);
        assert_eq!(timeline[0].date, analyzed.event.date);
    }

    #[tokio::test]
    async fn analyze_event_carries_mood_fields() {
        let (agent, _) = agent_with(None);
        let analyzed = agent
            .analyze("I aced my exam and I'm so happy and awesome", "user-1")
            .await
            .unwrap();

        assert_eq!(analyzed.event.title, "Happy Day");
        assert_eq!(analyzed.mood.score, 0.7);
        assert_eq!(analyzed.event.sentiment_score, Some(0.7));
        assert_eq!(analyzed.event.emoji, Some(Emoji::Good));
        assert_eq!(analyzed.event.mood_label, Some(MoodLabel::Positive));
    }

    #[tokio::test]
    async fn analyze_event_is_complete_even_when_augmenter_fails() {
        let (agent, store) = agent_with(Some(Arc::new(FailingAugmenter)));
        let analyzed = agent
            .analyze("Today was really tough. I failed my presentation and I'm so stressed and frustrated.", "user-1")
            .await
            .unwrap();

        assert_eq!(analyzed.event.title, "Tough Day");
        assert_eq!(analyzed.mood.score, -0.6);
        assert_eq!(analyzed.event.emoji, Some(Emoji::Bad));
        assert!(analyzed.agent_response.contains("sharing something important"));
        assert_eq!(store.entries("user-1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn analyze_uses_augmenter_response_when_available() {
        let (agent, _) = agent_with(Some(Arc::new(CannedAugmenter("I hear you."))));
        let analyzed = agent.analyze("a normal day", "user-1").await.unwrap();
        assert_eq!(analyzed.agent_response, "I hear you.");
    }

    #[tokio::test]
    async fn crisis_text_is_never_masked() {
        let (agent, _) = agent_with(None);
        let analyzed = agent
            .analyze("I got great news but honestly I want to die", "user-1")
            .await
            .unwrap();
        assert_eq!(analyzed.mood.score, -0.95);
        assert_eq!(analyzed.mood.intensity, 0.95);
        assert_eq!(analyzed.event.emoji, Some(Emoji::Bad));
        assert_eq!(analyzed.event.mood_label, Some(MoodLabel::Negative));
    }
}
