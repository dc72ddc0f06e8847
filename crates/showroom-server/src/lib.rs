//! showroom-server: HTTP front of the showroom chat assistant.
//!
//! Accepts chat messages over `POST`, hands them to the run orchestrator,
//! and serializes the outcome (an answer, a car list, or a localized
//! failure notice) back to the browser widget.

pub mod handler;
pub mod protocol;


use std::sync::Arc;

use axum::routing::{get, post, MethodRouter};
use axum::Router;
use showroom_assistant::{OpenAiAssistant, OpenAiConfig, Orchestrator, PollSettings, ToolDispatcher};
use showroom_catalog::CatalogClient;
use showroom_common::ShowroomError;
use showroom_config::{Credentials, ShowroomConfig};

/// Path the serverless deployment served the chat from; kept for existing widgets.
pub const LEGACY_CHAT_PATH: &str = "/.netlify/functions/chat";

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}

/// Wire the feed client, the Assistants client, and the orchestrator from config.
pub fn build_state(config: &ShowroomConfig, credentials: Credentials) -> Result<AppState, ShowroomError> {
    let catalog = CatalogClient::new(
        config.catalog.feed_url.clone(),
        config.catalog.timeout(),
        config.catalog.max_results,
    )
    .map_err(|e| ShowroomError::Catalog(e.to_string()))?;

    let openai = OpenAiConfig::new(credentials.api_key, credentials.assistant_id)
        .with_api_base(config.assistant.api_base.clone())
        .with_request_timeout(config.assistant.request_timeout());
    let api = OpenAiAssistant::new(openai).map_err(|e| ShowroomError::Assistant(e.to_string()))?;

    let dispatcher =
        ToolDispatcher::new(Arc::new(catalog)).with_acknowledgment(config.assistant.tool_output.clone());
    let settings = PollSettings::new(config.assistant.budget(), config.assistant.poll_interval());

    Ok(AppState::new(Orchestrator::new(Arc::new(api), dispatcher, settings)))
}

/// Chat endpoint at `chat_path` (and the legacy path), plus `/health`.
///
/// Any method other than `POST` on a chat path gets a JSON `405`.
pub fn build_router(state: AppState, chat_path: &str) -> Router {
    let mut router: Router<AppState> = Router::new()
        .route(chat_path, chat_route())
        .route("/health", get(handler::health));
    if chat_path != LEGACY_CHAT_PATH {
        router = router.route(LEGACY_CHAT_PATH, chat_route());
    }
    router.with_state(state)
}

fn chat_route() -> MethodRouter<AppState> {
    post(handler::chat).fallback(handler::method_not_allowed)
}
