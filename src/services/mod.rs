pub mod content_parser;
pub mod generation_pipeline;
pub mod grading_service;
pub mod model_backends;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_scheduler_service;
pub mod quiz_service;
pub mod reasoning_service;
pub mod story_service;
pub mod user_service;
