use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>, // Assigned by the store on insert
    pub user_id: ObjectId,
    pub topic: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub selected_answers: Vec<String>, // Raw letters as submitted, may include non-letters
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>, // Listing order
}

impl Quiz {
    /// A freshly generated backlog entry. May hold zero questions when the
    /// generated text did not parse.
    pub fn new_pending(user_id: ObjectId, topic: &str, questions: Vec<QuizQuestion>) -> Self {
        Quiz {
            id: None,
            user_id,
            topic: topic.to_string(),
            questions,
            selected_answers: Vec::new(),
            complete: false,
            score: 0,
            created_at: Some(DateTime::now()),
        }
    }
}
