use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::domain::{StorySegment, World},
    services::{
        content_parser::parse_story, generation_pipeline::GenerationPipeline,
        prompt_builder::PromptRequest,
    },
};

pub struct StoryService {
    pipeline: Arc<GenerationPipeline>,
}

impl StoryService {
    pub fn new(pipeline: Arc<GenerationPipeline>) -> Self {
        Self { pipeline }
    }

    /// Generates the next segment of an interactive story.
    ///
    /// An empty `story_so_far` starts a new story from the world alone;
    /// otherwise the user's choice continues it. Segments are not stored.
    pub async fn generate_segment(
        &self,
        world: &World,
        story_so_far: &str,
        user_choice: &str,
    ) -> AppResult<StorySegment> {
        world.validate()?;

        let request = if story_so_far.trim().is_empty() {
            PromptRequest::StoryBegin { world }
        } else {
            PromptRequest::StoryContinue {
                world,
                story_so_far,
                user_choice,
            }
        };

        self.pipeline.generate_validated(&request, parse_story).await
    }
}
