use std::sync::Arc;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use super::interface::{TranslationRequest, TranslationResponse};
use super::prompt::PromptPair;
use crate::config::LlmConfig;
use crate::error::TranslateError;
use crate::stateless_llm::{CompletionClient, ResponsesBody, ResponsesRequest};

/// Validated request in, translated text out. Holds no per-request state.
pub struct Translator {
    config: LlmConfig,
    client: Arc<dyn CompletionClient>,
}

impl Translator {
    pub fn new(config: LlmConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// The credential, or `Configuration` if none was supplied.
    pub fn ensure_configured(&self) -> Result<&str, TranslateError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(TranslateError::Configuration)
    }

    /// Allow-listed models pass through; anything else gets the default.
    pub fn select_model<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(model) if self.config.allowed_models.iter().any(|m| m == model) => model,
            Some(model) => {
                debug!(
                    "Model {} not in allow-list, using default {}",
                    model, self.config.default_model
                );
                &self.config.default_model
            }
            None => &self.config.default_model,
        }
    }

    pub async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        let api_key = self.ensure_configured()?;
        let model = self.select_model(request.model.as_deref()).to_string();
        let span = tracing::info_span!(
            "translate",
            request_id = %Uuid::new_v4(),
            direction = request.direction.as_str(),
            model = %model,
        );

        async move {
            let prompt = PromptPair::build(&request);
            debug!(
                "Prompt built: {} -> {}, {} chars of input",
                prompt.source,
                prompt.target,
                request.text.chars().count()
            );

            let reply = self
                .client
                .create_response(api_key, &ResponsesRequest::new(model.clone(), &prompt))
                .await?;

            if !reply.is_success() {
                warn!("Upstream returned status {}", reply.status);
                return Err(TranslateError::Upstream {
                    status: reply.status,
                    body: reply.body,
                });
            }

            let parsed = ResponsesBody::parse(&reply.body);
            let extracted = parsed.as_ref().and_then(ResponsesBody::extract_text);
            let translation = match extracted {
                Some((shape, text)) => {
                    debug!("Translation extracted from {:?}", shape);
                    text.to_string()
                }
                None if self.config.strict_response_shape => {
                    warn!("Upstream response shape not recognized");
                    return Err(TranslateError::UnrecognizedResponseShape { body: reply.body });
                }
                None => {
                    warn!("Upstream response shape not recognized, returning empty translation");
                    String::new()
                }
            };

            info!("Translated {} chars", translation.chars().count());
            Ok(TranslationResponse { translation, model })
        }
        .instrument(span)
        .await
    }
}
