//! Assistants API client struct, request plumbing, and response parsing.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::{AssistantError, Run, RunStatus, ToolCall};

use super::config::OpenAiConfig;

const ASSISTANTS_BETA: &str = "assistants=v2";

/// Assistants API client.
pub struct OpenAiAssistant {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiAssistant {
    pub fn new(config: OpenAiConfig) -> Result<Self, AssistantError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.request_timeout)
            .timeout(config.request_timeout)
            .default_headers(Self::auth_headers(&config)?)
            .build()
            .map_err(|e| AssistantError::ApiError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Bearer auth plus the Assistants beta opt-in.
    fn auth_headers(config: &OpenAiConfig) -> Result<HeaderMap, AssistantError> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| AssistantError::ApiError("API key is not a valid header value".into()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("OpenAI-Beta", HeaderValue::from_static(ASSISTANTS_BETA));
        Ok(headers)
    }

    /// Endpoint URL under the API base, one path segment per element.
    ///
    /// Each element is percent-encoded as a single segment, so an id can
    /// never add segments, climb with `..`, or start a query string.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, AssistantError> {
        let mut url = Url::parse(&self.config.api_base)
            .map_err(|e| AssistantError::ApiError(format!("invalid API base: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AssistantError::ApiError("API base cannot take a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) async fn post_json(&self, url: Url, body: &Value) -> Result<Value, AssistantError> {
        debug!(path = url.path(), "Assistants API POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        read_json(response).await
    }

    pub(crate) async fn get_json(&self, url: Url) -> Result<Value, AssistantError> {
        debug!(path = url.path(), "Assistants API GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        read_json(response).await
    }

    /// Parse a run object, including its pending function calls.
    pub(crate) fn parse_run(json: &Value) -> Result<Run, AssistantError> {
        let id = json["id"]
            .as_str()
            .ok_or_else(|| AssistantError::ParseError("run has no 'id'".into()))?
            .to_string();

        let raw_status = json["status"]
            .as_str()
            .ok_or_else(|| AssistantError::ParseError("run has no 'status'".into()))?;
        let status: RunStatus = raw_status.parse().unwrap_or(RunStatus::Unknown);
        if status == RunStatus::Unknown {
            debug!(run_id = %id, status = raw_status, "Unrecognized run status");
        }

        let tool_calls = json["required_action"]["submit_tool_outputs"]["tool_calls"]
            .as_array()
            .map(|calls| {
                calls
                    .iter()
                    .filter(|c| c["type"] == "function")
                    .map(|c| ToolCall {
                        id: c["id"].as_str().unwrap_or("").to_string(),
                        name: c["function"]["name"].as_str().unwrap_or("").to_string(),
                        arguments: c["function"]["arguments"]
                            .as_str()
                            .unwrap_or("")
                            .to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Run {
            id,
            status,
            tool_calls,
        })
    }

    /// Text of the first text part of the newest message in a list response.
    pub(crate) fn parse_latest_message(json: &Value) -> Option<String> {
        let message = json["data"].as_array()?.first()?;
        message["content"].as_array()?.iter().find_map(|part| {
            if part["type"] == "text" {
                part["text"]["value"].as_str().map(String::from)
            } else {
                None
            }
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> AssistantError {
    if e.is_timeout() {
        AssistantError::Timeout
    } else {
        AssistantError::NetworkError(e.to_string())
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, AssistantError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AssistantError::RateLimited);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let text = text.chars().take(200).collect::<String>();
        return Err(AssistantError::ApiError(format!("HTTP {status}: {text}")));
    }

    response
        .json()
        .await
        .map_err(|e| AssistantError::ParseError(e.to_string()))
}
