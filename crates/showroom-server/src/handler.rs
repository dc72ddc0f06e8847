//! HTTP handlers and their error mapping.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use showroom_assistant::OrchestratorError;
use showroom_common::new_correlation_id;
use tracing::{error, info, info_span, warn, Instrument};

use crate::protocol::{ChatRequest, ChatResponse, ErrorResponse};
use crate::AppState;

/// Shown for any failure inside the request path.
pub const SERVER_ERROR: &str = "Критична грешка на сървъра.";

/// Shown when the request body is not a valid chat request.
pub const BAD_REQUEST: &str = "Невалидна заявка.";

pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, BAD_REQUEST),
            ApiError::Orchestrator(_) => (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR),
        };
        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

/// `POST` chat endpoint.
///
/// The body is parsed by hand so a malformed request gets the JSON error
/// shape instead of axum's plain-text rejection.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatResponse>, ApiError> {
    let span = info_span!("chat", cid = %new_correlation_id(), thread_id = tracing::field::Empty);

    async move {
        let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Rejected malformed chat request");
            ApiError::BadRequest(e.to_string())
        })?;

        let thread = request.thread().map_err(|e| {
            warn!(error = %e, "Rejected chat request with invalid thread id");
            ApiError::BadRequest(e.to_string())
        })?;

        info!(new_thread = thread.is_none(), "Chat request");
        match state.orchestrator.chat(thread, &request.message).await {
            Ok(reply) => Ok(Json(ChatResponse::from(reply))),
            Err(e) => {
                error!(error = %e, "Chat request failed");
                Err(e.into())
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(METHOD_NOT_ALLOWED)),
    )
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
