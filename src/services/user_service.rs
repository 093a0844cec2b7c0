use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    constants::interests::INTEREST_CATALOG,
    errors::AppResult,
    models::dto::{request::UpdateInterestsRequest, response::MessageResponse},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn list_interests(&self) -> Vec<&'static str> {
        INTEREST_CATALOG.to_vec()
    }

    /// Replaces the stored interest list. An empty list takes the user out
    /// of the quiz backlog.
    pub async fn update_interests(
        &self,
        user_id: &ObjectId,
        request: UpdateInterestsRequest,
    ) -> AppResult<MessageResponse> {
        request.validate()?;

        self.repository
            .update_interests(user_id, &request.interests)
            .await?;

        log::info!(
            "Updated interests for user {} ({} selected)",
            user_id,
            request.interests.len()
        );

        Ok(MessageResponse::new("Interests updated"))
    }
}
