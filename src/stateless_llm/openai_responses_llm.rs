use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::stateless_llm_interface::{CompletionClient, ResponsesRequest, UpstreamReply};
use crate::config::LlmConfig;

/// OpenAI Responses API client
#[derive(Debug, Clone)]
pub struct OpenAiResponsesClient {
    client: Client,
    base_url: String,
}

impl OpenAiResponsesClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = base_url.trim_end_matches('/').to_string();
        info!("Initialized OpenAiResponsesClient: base_url={}", base_url);
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenAiResponsesClient {
    async fn create_response(
        &self,
        api_key: &str,
        request: &ResponsesRequest,
    ) -> Result<UpstreamReply, anyhow::Error> {
        let url = self.endpoint();
        debug!("POST {} model={}", url, request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = OpenAiResponsesClient::new("http://localhost:9999/v1/".to_string(), None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/responses");
    }

    #[test]
    fn builds_from_default_config() {
        let client = OpenAiResponsesClient::from_config(&LlmConfig::default()).unwrap();
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/responses");
    }
}
