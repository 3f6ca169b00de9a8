//! Axum HTTP server for the web channel.
//!
//! Routes, CORS, and the handler glue between HTTP and the agent. CORS is
//! permissive because the only consumer is the companion client app and the
//! service carries no credentials.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::agent::BuddyAgent;
use crate::channels::web::types::*;
use crate::error::{AgentError, ChannelError};
use crate::store::DiaryStore;
use crate::util::utc_timestamp;

/// Conversation used by the `GET /test/{user_id}` smoke endpoint.
const TEST_CONVERSATION: &str =
    "I had a great day today! Everything went well and I'm feeling happy.";

/// Shared state for all web handlers.
pub struct WebState {
    pub agent: BuddyAgent,
    pub store: Arc<dyn DiaryStore>,
}

/// Build the channel's router.
pub fn router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/analyze_conversation", post(analyze_handler))
        .route("/diary/{user_id}", get(diary_handler))
        .route("/mood/{user_id}", get(mood_handler))
        .route("/test/{user_id}", get(test_handler))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: SocketAddr, state: Arc<WebState>) -> Result<(), ChannelError> {
    let listener =
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ChannelError::StartupFailed {
                name: "web".to_string(),
                reason: format!("Failed to bind to {}: {}", addr, e),
            })?;

    let bound_addr = listener
        .local_addr()
        .map_err(|e| ChannelError::StartupFailed {
            name: "web".to_string(),
            reason: format!("Failed to get local addr: {}", e),
        })?;

    tracing::info!("Web channel listening on http://{}", bound_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ChannelError::StartupFailed {
            name: "web".to_string(),
            reason: e.to_string(),
        })
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Web channel shutting down");
}

/// Map agent errors onto HTTP responses.
fn into_response_error(err: AgentError) -> (StatusCode, String) {
    match err {
        AgentError::EmptyInput => (StatusCode::BAD_REQUEST, err.to_string()),
        AgentError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME,
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        description: "Emotional tracking agent service",
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: utc_timestamp(),
    })
}

async fn chat_handler(
    State(state): State<Arc<WebState>>,
    Json(req): Json<ConversationRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let reply = state
        .agent
        .chat(&req.conversation, &req.user_id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(ChatResponse {
        response: reply.response,
        timestamp: reply.timestamp,
    }))
}

async fn analyze_handler(
    State(state): State<Arc<WebState>>,
    Json(req): Json<ConversationRequest>,
) -> Result<Json<EventDetailResponse>, (StatusCode, String)> {
    let analyzed = state
        .agent
        .analyze(&req.conversation, &req.user_id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(EventDetailResponse::from(analyzed)))
}

async fn diary_handler(
    State(state): State<Arc<WebState>>,
    Path(user_id): Path<String>,
) -> Result<Json<DiaryResponse>, (StatusCode, String)> {
    let entries = state.store.entries(&user_id).await.map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(DiaryResponse { user_id, entries }))
}

async fn mood_handler(
    State(state): State<Arc<WebState>>,
    Path(user_id): Path<String>,
) -> Result<Json<MoodTimelineResponse>, (StatusCode, String)> {
    let points = state.store.mood_timeline(&user_id).await.map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(MoodTimelineResponse { user_id, points }))
}

async fn test_handler(
    State(state): State<Arc<WebState>>,
    Path(user_id): Path<String>,
) -> Json<TestResponse> {
    match state.agent.analyze(TEST_CONVERSATION, &user_id).await {
        Ok(analyzed) => Json(TestResponse {
            test_status: "success",
            test_conversation: TEST_CONVERSATION,
            result: Some(EventDetailResponse::from(analyzed)),
            error: None,
        }),
        Err(e) => Json(TestResponse {
            test_status: "failed",
            test_conversation: TEST_CONVERSATION,
            result: None,
            error: Some(e.to_string()),
        }),
    }
}
