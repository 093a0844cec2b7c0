use serde::Serialize;

use crate::models::domain::{AnswerLetter, Quiz, QuizQuestion};

#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    pub quiz_id: String,
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
    pub selected_answers: Vec<String>,
    pub complete: bool,
    pub score: u32,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            quiz_id: quiz.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            topic: quiz.topic,
            questions: quiz.questions,
            selected_answers: quiz.selected_answers,
            complete: quiz.complete,
            score: quiz.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizzesResponse {
    pub quizzes: Vec<QuizDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitQuizResponse {
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizStats {
    pub total_questions: u64,
    pub correct_answers: u64,
    pub quizzes_ready: u64,
}

/// A past question annotated with how the user answered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: AnswerLetter,
    pub selected_answer: Option<String>,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub questions: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct InterestsResponse {
    pub interests: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
