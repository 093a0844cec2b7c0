use std::sync::Arc;

use crate::{
    errors::AppResult,
    services::{generation_pipeline::GenerationPipeline, prompt_builder::PromptRequest},
};

/// One-sentence explanations of wrong answers.
pub struct ReasoningService {
    pipeline: Arc<GenerationPipeline>,
}

impl ReasoningService {
    pub fn new(pipeline: Arc<GenerationPipeline>) -> Self {
        Self { pipeline }
    }

    /// Single call, no retry. The reply is returned verbatim.
    pub async fn explain(
        &self,
        question: &str,
        correct_answer: &str,
        incorrect_answer: &str,
    ) -> AppResult<String> {
        let request = PromptRequest::Reasoning {
            question,
            correct_answer,
            incorrect_answer,
        };

        self.pipeline
            .generate_once(&request, |raw: &str| raw.to_string())
            .await
    }
}
