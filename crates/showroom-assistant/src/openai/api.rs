//! AssistantApi trait implementation for OpenAiAssistant.

use async_trait::async_trait;
use serde_json::json;
use showroom_common::ThreadId;

use crate::{AssistantApi, AssistantError, Run, ToolOutput};

use super::client::OpenAiAssistant;

#[async_trait]
impl AssistantApi for OpenAiAssistant {
    async fn create_thread(&self) -> Result<ThreadId, AssistantError> {
        let url = self.endpoint(&["threads"])?;
        let json = self.post_json(url, &json!({})).await?;
        json["id"]
            .as_str()
            .map(ThreadId::new)
            .ok_or_else(|| AssistantError::ParseError("thread has no 'id'".into()))
    }

    async fn add_user_message(
        &self,
        thread: &ThreadId,
        content: &str,
    ) -> Result<(), AssistantError> {
        let url = self.endpoint(&["threads", thread.as_str(), "messages"])?;
        let body = json!({ "role": "user", "content": content });
        self.post_json(url, &body).await?;
        Ok(())
    }

    async fn create_run(&self, thread: &ThreadId) -> Result<Run, AssistantError> {
        let url = self.endpoint(&["threads", thread.as_str(), "runs"])?;
        let body = json!({ "assistant_id": self.config.assistant_id });
        let json = self.post_json(url, &body).await?;
        Self::parse_run(&json)
    }

    async fn retrieve_run(&self, thread: &ThreadId, run_id: &str) -> Result<Run, AssistantError> {
        let url = self.endpoint(&["threads", thread.as_str(), "runs", run_id])?;
        let json = self.get_json(url).await?;
        Self::parse_run(&json)
    }

    async fn submit_tool_outputs(
        &self,
        thread: &ThreadId,
        run_id: &str,
        outputs: &[ToolOutput],
    ) -> Result<(), AssistantError> {
        let url = self.endpoint(&[
            "threads",
            thread.as_str(),
            "runs",
            run_id,
            "submit_tool_outputs",
        ])?;
        let body = json!({ "tool_outputs": outputs });
        self.post_json(url, &body).await?;
        Ok(())
    }

    async fn latest_message(&self, thread: &ThreadId) -> Result<Option<String>, AssistantError> {
        let mut url = self.endpoint(&["threads", thread.as_str(), "messages"])?;
        url.query_pairs_mut()
            .append_pair("order", "desc")
            .append_pair("limit", "1");
        let json = self.get_json(url).await?;
        Ok(Self::parse_latest_message(&json))
    }
}
