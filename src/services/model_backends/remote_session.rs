use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    services::{model_service::TextGenerator, prompt_builder::PromptDialect},
};

const MAX_TOKENS: u32 = 500;

#[derive(Debug, Serialize)]
struct SessionRequest<'a> {
    model: &'a str,
    messages: [SessionMessage<'a>; 1],
    max_tokens: u32,
    user: &'a str,
}

#[derive(Debug, Serialize)]
struct SessionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    choices: Vec<SessionChoice>,
}

#[derive(Debug, Deserialize)]
struct SessionChoice {
    message: SessionReply,
}

#[derive(Debug, Deserialize)]
struct SessionReply {
    #[serde(default)]
    content: Option<String>,
}

/// Hosted chat model reached through an OpenAI-compatible endpoint.
///
/// One named session is opened per process and tags every request, so the
/// provider can group the whole run.
pub struct RemoteSessionGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    session_name: String,
}

impl RemoteSessionGenerator {
    pub fn new(base_url: &str, api_key: &SecretString, model: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key(api_key.expose_secret());

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
            session_name: session_name(model, Utc::now()),
        }
    }

    pub fn session_name(&self) -> &str {
        &self.session_name
    }
}

pub(crate) fn session_name(model: &str, opened_at: DateTime<Utc>) -> String {
    format!("{}_{}", model, opened_at.format("%Y%m%d_%H%M%S"))
}

#[async_trait]
impl TextGenerator for RemoteSessionGenerator {
    fn dialect(&self) -> PromptDialect {
        PromptDialect::Instruct
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = SessionRequest {
            model: &self.model,
            messages: [SessionMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            user: &self.session_name,
        };

        let response: SessionResponse = self.client.chat().create_byot(request).await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            AppError::GenerationError(format!(
                "Session '{}' returned no choices",
                self.session_name
            ))
        })?;

        let text = choice.message.content.unwrap_or_default();
        log::debug!(
            "Session '{}' returned {} characters",
            self.session_name,
            text.len()
        );

        Ok(text)
    }
}
