use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizQuestion, StorySegment},
    services::{
        model_service::TextGenerator,
        prompt_builder::{build_prompt, PromptRequest},
    },
};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Structural acceptance check applied to parsed output.
pub trait Validated {
    fn is_valid(&self) -> bool;
}

impl Validated for StorySegment {
    fn is_valid(&self) -> bool {
        self.has_options()
    }
}

impl Validated for Vec<QuizQuestion> {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

/// Prompt, generate, parse. Generation runs strictly one call at a time per
/// pipeline invocation.
pub struct GenerationPipeline {
    generator: Arc<dyn TextGenerator>,
    max_attempts: u32,
}

impl GenerationPipeline {
    pub fn new(generator: Arc<dyn TextGenerator>, max_attempts: u32) -> Self {
        Self {
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Single generate-and-parse pass. The parsed value is returned whether
    /// or not it is usable.
    pub async fn generate_once<T, F>(&self, request: &PromptRequest<'_>, parse: F) -> AppResult<T>
    where
        F: Fn(&str) -> T,
    {
        let prompt = build_prompt(self.generator.dialect(), request);
        let raw = self.generator.generate(&prompt).await?;
        Ok(parse(&raw))
    }

    /// Repeats generate-and-parse until the result is valid.
    ///
    /// Returns `GenerationExhausted` after `max_attempts` invalid results. A
    /// transport error ends the loop on the spot.
    pub async fn generate_validated<T, F>(
        &self,
        request: &PromptRequest<'_>,
        parse: F,
    ) -> AppResult<T>
    where
        T: Validated,
        F: Fn(&str) -> T,
    {
        let prompt = build_prompt(self.generator.dialect(), request);

        for attempt in 1..=self.max_attempts {
            let raw = self.generator.generate(&prompt).await?;
            let parsed = parse(&raw);

            if parsed.is_valid() {
                if attempt > 1 {
                    log::info!(
                        "{} generation succeeded on attempt {}",
                        request.kind(),
                        attempt
                    );
                }
                return Ok(parsed);
            }

            log::warn!(
                "{} generation attempt {}/{} produced no usable output ({} characters)",
                request.kind(),
                attempt,
                self.max_attempts,
                raw.len()
            );
        }

        Err(AppError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}
