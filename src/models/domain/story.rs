use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fixed setting for a whole story session, supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct World {
    #[validate(length(min = 1, message = "genre is required"))]
    pub genre: String,
    #[validate(length(min = 1, message = "subgenre is required"))]
    pub subgenre: String,
    #[validate(length(min = 1, message = "premise is required"))]
    pub premise: String,
}

/// One generated step of an interactive story. Never persisted; the caller
/// chains segments by sending the accumulated story text back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorySegment {
    #[serde(rename = "story")]
    pub story_text: String,
    pub options: Vec<String>,
}

impl StorySegment {
    /// An empty option list is how the parser reports unusable output.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}
