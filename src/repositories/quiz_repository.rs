use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{Database, QUIZZES_COLLECTION},
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn insert(&self, quiz: Quiz) -> AppResult<ObjectId>;
    async fn count_incomplete_by_user(&self, user_id: &ObjectId) -> AppResult<u64>;
    /// Oldest first.
    async fn list_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Quiz>>;
    async fn list_completed_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Quiz>>;
    async fn find_by_id_for_user(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Quiz>>;
    /// Stores answers, score and `complete = true` in one document update.
    async fn record_submission(
        &self,
        id: &ObjectId,
        selected_answers: &[String],
        score: u32,
    ) -> AppResult<()>;
}

fn listing_order() -> Document {
    doc! { "created_at": 1, "_id": 1 }
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(QUIZZES_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let backlog_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "complete": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_backlog".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(backlog_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<ObjectId> {
        let result = self.collection.insert_one(&quiz).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("Inserted quiz id is not an ObjectId".to_string())
        })
    }

    async fn count_incomplete_by_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "user_id": *user_id, "complete": false })
            .await?;
        Ok(count)
    }

    async fn list_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Quiz>> {
        let cursor = self
            .collection
            .find(doc! { "user_id": *user_id })
            .sort(listing_order())
            .await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn list_completed_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Quiz>> {
        let cursor = self
            .collection
            .find(doc! { "user_id": *user_id, "complete": true })
            .sort(listing_order())
            .await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn find_by_id_for_user(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one(doc! { "_id": *id, "user_id": *user_id })
            .await?;
        Ok(quiz)
    }

    async fn record_submission(
        &self,
        id: &ObjectId,
        selected_answers: &[String],
        score: u32,
    ) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": *id },
                doc! {
                    "$set": {
                        "selected_answers": selected_answers.to_vec(),
                        "complete": true,
                        "score": score as i64,
                    }
                },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_sort_by_creation_then_id() {
        let order = listing_order();
        let keys: Vec<&str> = order.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["created_at", "_id"]);
        assert_eq!(order.get_i32("created_at").ok(), Some(1));
    }
}
