use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::translate::prompt::PromptPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMessage {
    pub role: Role,
    pub content: String,
}

/// Body of a single, non-streaming completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
}

impl ResponsesRequest {
    pub fn new(model: impl Into<String>, prompt: &PromptPair) -> Self {
        Self {
            model: model.into(),
            input: vec![
                InputMessage {
                    role: Role::System,
                    content: prompt.system_instruction.clone(),
                },
                InputMessage {
                    role: Role::User,
                    content: prompt.user_instruction.clone(),
                },
            ],
        }
    }
}

/// Status and raw body as received from the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Interface for a stateless completion API.
/// Nothing is remembered between calls; every request carries its own prompt and credential.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one request and return whatever the upstream answered.
    /// Transport failures are errors; non-success statuses are not.
    async fn create_response(
        &self,
        api_key: &str,
        request: &ResponsesRequest,
    ) -> Result<UpstreamReply, anyhow::Error>;
}
