use std::{str::FromStr, sync::Arc};

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::AnswerLetter,
        dto::{
            request::{HistoryFilter, SubmitQuizRequest},
            response::{HistoryEntry, QuizDto, QuizStats, SubmitQuizResponse},
        },
    },
    repositories::QuizRepository,
    services::{grading_service::score_answers, reasoning_service::ReasoningService},
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    reasoning_service: Arc<ReasoningService>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        reasoning_service: Arc<ReasoningService>,
    ) -> Self {
        Self {
            repository,
            reasoning_service,
        }
    }

    pub async fn list_quizzes(&self, user_id: &ObjectId) -> AppResult<Vec<QuizDto>> {
        let quizzes = self.repository.list_by_user(user_id).await?;
        Ok(quizzes.into_iter().map(QuizDto::from).collect())
    }

    /// Grades a submission and stores it. Resubmitting overwrites the
    /// previous answers and score.
    pub async fn submit_quiz(
        &self,
        user_id: &ObjectId,
        request: SubmitQuizRequest,
    ) -> AppResult<SubmitQuizResponse> {
        request.validate()?;

        let quiz_id = ObjectId::from_str(&request.quiz_id)?;
        let quiz = self
            .repository
            .find_by_id_for_user(&quiz_id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz with id '{}' not found", request.quiz_id))
            })?;

        let score = score_answers(&quiz.questions, &request.selected_answers);
        self.repository
            .record_submission(&quiz_id, &request.selected_answers, score)
            .await?;

        log::info!(
            "Quiz {} graded for user {}: {}/{}",
            quiz_id,
            user_id,
            score,
            quiz.questions.len()
        );

        Ok(SubmitQuizResponse { score })
    }

    pub async fn get_stats(&self, user_id: &ObjectId) -> AppResult<QuizStats> {
        let quizzes = self.repository.list_by_user(user_id).await?;

        let stats = quizzes
            .iter()
            .fold(QuizStats::default(), |mut stats, quiz| {
                if quiz.complete {
                    stats.total_questions += quiz.questions.len() as u64;
                    stats.correct_answers += u64::from(quiz.score);
                } else {
                    stats.quizzes_ready += 1;
                }
                stats
            });

        Ok(stats)
    }

    /// Answered questions from completed quizzes, filtered by correctness.
    ///
    /// Each wrong answer that names an option gets a generated explanation,
    /// one generation call per entry.
    pub async fn get_history(
        &self,
        user_id: &ObjectId,
        filter: HistoryFilter,
    ) -> AppResult<Vec<HistoryEntry>> {
        let quizzes = self.repository.list_completed_by_user(user_id).await?;
        let mut entries = Vec::new();

        for quiz in &quizzes {
            for (i, question) in quiz.questions.iter().enumerate() {
                let selected_answer = quiz.selected_answers.get(i).cloned();
                let answered_correctly = selected_answer
                    .as_deref()
                    .is_some_and(|answer| question.is_answered_by(answer));

                if !filter.includes(answered_correctly) {
                    continue;
                }

                let reasoning = match selected_answer.as_deref().and_then(AnswerLetter::parse) {
                    Some(letter) if !answered_correctly => Some(
                        self.reasoning_service
                            .explain(
                                &question.text,
                                question.correct_option_text(),
                                question.option_text(letter),
                            )
                            .await?,
                    ),
                    _ => None,
                };

                entries.push(HistoryEntry {
                    question: question.text.clone(),
                    options: question.options.clone(),
                    correct_answer: question.correct_answer,
                    selected_answer,
                    topic: quiz.topic.clone(),
                    reasoning,
                });
            }
        }

        Ok(entries)
    }
}
