//! JSON bodies of the chat endpoint.

use serde::{Deserialize, Serialize};
use showroom_assistant::ChatReply;
use showroom_catalog::CarRecord;
use showroom_common::{InvalidThreadId, ThreadId};

/// Body of a chat POST.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub thread_id: Option<String>,
    pub message: String,
}

impl ChatRequest {
    /// Thread to continue; a blank id starts a new conversation.
    pub fn thread(&self) -> Result<Option<ThreadId>, InvalidThreadId> {
        match self.thread_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(id) => ThreadId::parse(id).map(Some),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cars: Option<Vec<CarRecord>>,
    pub thread_id: ThreadId,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.response_text(),
            cars: reply.cars().map(<[CarRecord]>::to_vec),
            thread_id: reply.thread_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
