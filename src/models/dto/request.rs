use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::World;

/// Replaces the user's interests. Labels are free text; only blank labels
/// are rejected.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInterestsRequest {
    #[validate(custom(function = "validate_interest_labels"))]
    pub interests: Vec<String>,
}

fn validate_interest_labels(interests: &[String]) -> Result<(), ValidationError> {
    if interests.iter().any(|label| label.trim().is_empty()) {
        return Err(ValidationError::new("blank_interest"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, message = "quiz_id is required"))]
    pub quiz_id: String,

    #[validate(length(min = 1, message = "selected_answers must not be empty"))]
    pub selected_answers: Vec<String>,
}

/// An empty `story` starts a new story; otherwise the segment continues it
/// from `user_selection`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StoryRequest {
    pub story: String,

    #[validate(nested)]
    pub world: World,

    pub user_selection: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFilter {
    All,
    Correct,
    Incorrect,
}

impl HistoryFilter {
    pub fn includes(self, answered_correctly: bool) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Correct => answered_correctly,
            HistoryFilter::Incorrect => !answered_correctly,
        }
    }
}
