use std::{fmt, str::FromStr, sync::Arc, time::Duration};

use mongodb::bson::oid::ObjectId;
use rand::seq::SliceRandom;
use tokio::{
    sync::RwLock,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::Quiz,
    repositories::{QuizRepository, UserRepository},
    services::{
        content_parser::parse_quiz, generation_pipeline::GenerationPipeline,
        prompt_builder::PromptRequest,
    },
};

/// What to do with a generated quiz that parsed to zero questions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyQuizPolicy {
    /// Store it anyway. It occupies a backlog slot until submitted.
    #[default]
    Persist,
    /// Drop it. The attempt still counts toward this tick's top-up.
    Skip,
}

impl FromStr for EmptyQuizPolicy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "persist" => Ok(EmptyQuizPolicy::Persist),
            "skip" => Ok(EmptyQuizPolicy::Skip),
            other => Err(AppError::ValidationError(format!(
                "Unknown empty quiz policy '{}', expected 'persist' or 'skip'",
                other
            ))),
        }
    }
}

impl fmt::Display for EmptyQuizPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyQuizPolicy::Persist => write!(f, "persist"),
            EmptyQuizPolicy::Skip => write!(f, "skip"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SchedulerSettings {
    pub interval: Duration,
    pub backlog_minimum: u64,
    pub empty_quiz_policy: EmptyQuizPolicy,
}

impl SchedulerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            // tokio intervals reject a zero period
            interval: Duration::from_secs(config.quiz_scheduler_interval_secs.max(1)),
            backlog_minimum: config.quiz_backlog_minimum,
            empty_quiz_policy: config.empty_quiz_policy,
        }
    }
}

/// Outcome of one pass over all users.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub users_scanned: u32,
    /// Users without interests.
    pub users_skipped: u32,
    /// Quizzes written to the store, empty ones included.
    pub quizzes_created: u32,
    pub empty_quizzes: u32,
    /// Users whose top-up stopped on an error.
    pub failures: u32,
}

/// Keeps every user with interests at or above the backlog minimum of
/// unfinished quizzes.
///
/// Assumes a single running instance. The unfinished count is read once per
/// user per tick, so quizzes submitted mid-tick are not noticed until the
/// next one.
pub struct QuizScheduler {
    user_repository: Arc<dyn UserRepository>,
    quiz_repository: Arc<dyn QuizRepository>,
    pipeline: Arc<GenerationPipeline>,
    settings: SchedulerSettings,
    worker_handle: Arc<RwLock<Option<JoinHandle<()>>>>,
}

impl QuizScheduler {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        quiz_repository: Arc<dyn QuizRepository>,
        pipeline: Arc<GenerationPipeline>,
        settings: SchedulerSettings,
    ) -> Self {
        Self {
            user_repository,
            quiz_repository,
            pipeline,
            settings,
            worker_handle: Arc::new(RwLock::new(None)),
        }
    }

    /// Runs one top-up pass. Fails only if the user list cannot be read.
    pub async fn run_tick(&self) -> AppResult<TickReport> {
        let users = self.user_repository.find_all().await?;
        let mut report = TickReport::default();

        for user in users {
            report.users_scanned += 1;

            let Some(user_id) = user.id else {
                report.users_skipped += 1;
                continue;
            };
            if !user.has_interests() {
                report.users_skipped += 1;
                continue;
            }

            if let Err(e) = self.top_up(&user_id, &user.interests, &mut report).await {
                report.failures += 1;
                log::error!("Quiz top-up for user {} stopped: {}", user_id, e);
            }
        }

        Ok(report)
    }

    async fn top_up(
        &self,
        user_id: &ObjectId,
        interests: &[String],
        report: &mut TickReport,
    ) -> AppResult<()> {
        let mut unfinished = self.quiz_repository.count_incomplete_by_user(user_id).await?;

        while unfinished < self.settings.backlog_minimum {
            let Some(topic) = pick_topic(interests) else {
                break;
            };

            let questions = self
                .pipeline
                .generate_once(&PromptRequest::Quiz { topic }, parse_quiz)
                .await?;
            unfinished += 1;

            if questions.is_empty() {
                report.empty_quizzes += 1;
                if self.settings.empty_quiz_policy == EmptyQuizPolicy::Skip {
                    log::warn!("Discarded empty '{}' quiz for user {}", topic, user_id);
                    continue;
                }
                log::warn!("Storing empty '{}' quiz for user {}", topic, user_id);
            }

            let question_count = questions.len();
            let quiz_id = self
                .quiz_repository
                .insert(Quiz::new_pending(*user_id, topic, questions))
                .await?;
            report.quizzes_created += 1;

            log::debug!(
                "Created quiz {} on '{}' for user {} ({} questions)",
                quiz_id,
                topic,
                user_id,
                question_count
            );
        }

        Ok(())
    }

    /// Spawns the periodic worker. The first tick runs one interval after
    /// start, and a slow tick delays the next instead of stacking them.
    pub async fn start_worker(self: &Arc<Self>) -> AppResult<()> {
        let mut handle = self.worker_handle.write().await;
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            log::warn!("Quiz scheduler worker is already running");
            return Ok(());
        }

        let scheduler = Arc::clone(self);
        let period = self.settings.interval;

        let worker_handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                match scheduler.run_tick().await {
                    Ok(report) => log::info!(
                        "Quiz scheduler tick: {} users scanned, {} skipped, {} quizzes created ({} empty), {} failures",
                        report.users_scanned,
                        report.users_skipped,
                        report.quizzes_created,
                        report.empty_quizzes,
                        report.failures
                    ),
                    Err(e) => log::error!("Quiz scheduler tick failed: {}", e),
                }
            }
        });

        *handle = Some(worker_handle);
        log::info!(
            "Quiz scheduler started (every {}s, backlog minimum {}, empty quizzes: {})",
            period.as_secs(),
            self.settings.backlog_minimum,
            self.settings.empty_quiz_policy
        );

        Ok(())
    }

    pub async fn stop_worker(&self) -> AppResult<()> {
        let mut handle = self.worker_handle.write().await;
        if let Some(join_handle) = handle.take() {
            join_handle.abort();
            log::info!("Quiz scheduler stopped");
        }
        Ok(())
    }

    pub async fn is_running(&self) -> bool {
        self.worker_handle
            .read()
            .await
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

fn pick_topic(interests: &[String]) -> Option<&str> {
    interests
        .choose(&mut rand::thread_rng())
        .map(String::as_str)
}
