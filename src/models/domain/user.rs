use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The slice of an account record the content pipeline reads. Credentials and
/// profile fields live in the same document but are managed elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl User {
    pub fn new(username: &str, interests: &[&str]) -> Self {
        User {
            id: Some(ObjectId::new()),
            username: username.to_string(),
            interests: interests.iter().map(|i| i.to_string()).collect(),
        }
    }

    pub fn has_interests(&self) -> bool {
        !self.interests.is_empty()
    }
}
