//! OpenAI Assistants API client.
//!
//! Implements the `AssistantApi` trait over the Assistants v2 REST
//! endpoints (https://api.openai.com/v1/threads/...).

mod api;
mod client;
mod config;


pub use client::OpenAiAssistant;
pub use config::OpenAiConfig;
