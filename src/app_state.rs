use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, MongoUserRepository, QuizRepository, UserRepository},
    services::{
        generation_pipeline::GenerationPipeline,
        model_service::{build_generator, TextGenerator},
        quiz_scheduler_service::{QuizScheduler, SchedulerSettings},
        quiz_service::QuizService,
        reasoning_service::ReasoningService,
        story_service::StoryService,
        user_service::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub story_service: Arc<StoryService>,
    pub quiz_scheduler: Arc<QuizScheduler>,
    pub jwt_service: JwtService,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let generator = build_generator(&config)?;

        Ok(Self::from_parts(
            config,
            user_repository,
            quiz_repository,
            generator,
        ))
    }

    /// Wires services over already-built collaborators.
    pub fn from_parts(
        config: Config,
        user_repository: Arc<dyn UserRepository>,
        quiz_repository: Arc<dyn QuizRepository>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let pipeline = Arc::new(GenerationPipeline::new(generator, config.story_max_attempts));

        let reasoning_service = Arc::new(ReasoningService::new(Arc::clone(&pipeline)));
        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let quiz_service = Arc::new(QuizService::new(
            Arc::clone(&quiz_repository),
            reasoning_service,
        ));
        let story_service = Arc::new(StoryService::new(Arc::clone(&pipeline)));
        let quiz_scheduler = Arc::new(QuizScheduler::new(
            user_repository,
            quiz_repository,
            pipeline,
            SchedulerSettings::from_config(&config),
        ));
        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        Self {
            user_service,
            quiz_service,
            story_service,
            quiz_scheduler,
            jwt_service,
            config: Arc::new(config),
        }
    }
}
