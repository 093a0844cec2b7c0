use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    services::{model_service::TextGenerator, prompt_builder::PromptDialect},
};

/// Sampling settings sent with every completion request.
#[derive(Debug, Clone, Serialize)]
pub struct SamplingParameters {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub min_p: f32,
    pub repeat_penalty: f32,
    pub repeat_last_n: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub n_predict: u32,
    pub mirostat: u8,
    pub mirostat_tau: f32,
    pub mirostat_eta: f32,
    pub tfs_z: f32,
    pub typical_p: f32,
    pub stream: bool,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            min_p: 0.05,
            repeat_penalty: 1.18,
            repeat_last_n: 256,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            n_predict: 400,
            mirostat: 0,
            mirostat_tau: 5.0,
            mirostat_eta: 0.1,
            tfs_z: 1.0,
            typical_p: 1.0,
            stream: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    #[serde(flatten)]
    sampling: &'a SamplingParameters,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
}

/// Stateless completion server running next to the service.
pub struct LocalCompletionGenerator {
    client: reqwest::Client,
    url: String,
    sampling: SamplingParameters,
}

impl LocalCompletionGenerator {
    // No request timeout: a stalled server stalls the caller.
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
            sampling: SamplingParameters::default(),
        }
    }
}

#[async_trait]
impl TextGenerator for LocalCompletionGenerator {
    fn dialect(&self) -> PromptDialect {
        PromptDialect::HeaderTokens
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = CompletionRequest {
            prompt,
            sampling: &self.sampling,
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationError(format!(
                "Completion server HTTP {}: {}",
                status, body
            )));
        }

        let body: CompletionResponse = response.json().await?;
        log::debug!("Completion server returned {} characters", body.content.len());

        Ok(body.content)
    }
}
