use std::sync::Arc;

use crate::config::Config;
use crate::stateless_llm::{CompletionClient, OpenAiResponsesClient};
use crate::translate::Translator;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<Translator>,
}

impl AppState {
    /// Wire the configured OpenAI client into a fresh translator.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Arc::new(OpenAiResponsesClient::from_config(&config.llm_config)?);
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let translator = Arc::new(Translator::new(config.llm_config.clone(), client));
        Self {
            config: Arc::new(config),
            translator,
        }
    }
}
