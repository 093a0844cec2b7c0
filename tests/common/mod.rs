#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use secrecy::SecretString;
use tokio::sync::RwLock;

use learnforge_server::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
    repositories::{QuizRepository, UserRepository},
    services::{
        model_service::{GenerationBackend, TextGenerator},
        prompt_builder::PromptDialect,
        quiz_scheduler_service::EmptyQuizPolicy,
    },
};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<ObjectId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, user: User) -> ObjectId {
        let id = user.id.unwrap_or_else(ObjectId::new);
        let mut user = user;
        user.id = Some(id);
        self.users.write().await.insert(id, user);
        id
    }

    pub async fn get(&self, id: &ObjectId) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        let mut items: Vec<_> = users.values().cloned().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn update_interests(&self, id: &ObjectId, interests: &[String]) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))?;
        user.interests = interests.to_vec();
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<ObjectId, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all_for_user(&self, user_id: &ObjectId) -> Vec<Quiz> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|q| q.user_id == *user_id)
            .cloned()
            .collect();
        items.sort_by_key(|q| (q.created_at, q.id));
        items
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<ObjectId> {
        let id = ObjectId::new();
        let mut quiz = quiz;
        quiz.id = Some(id);
        self.quizzes.write().await.insert(id, quiz);
        Ok(id)
    }

    async fn count_incomplete_by_user(&self, user_id: &ObjectId) -> AppResult<u64> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes
            .values()
            .filter(|q| q.user_id == *user_id && !q.complete)
            .count() as u64)
    }

    async fn list_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Quiz>> {
        Ok(self.all_for_user(user_id).await)
    }

    async fn list_completed_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Quiz>> {
        let mut items = self.all_for_user(user_id).await;
        items.retain(|q| q.complete);
        Ok(items)
    }

    async fn find_by_id_for_user(&self, id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).filter(|q| q.user_id == *user_id).cloned())
    }

    async fn record_submission(
        &self,
        id: &ObjectId,
        selected_answers: &[String],
        score: u32,
    ) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        let quiz = quizzes
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;
        quiz.selected_answers = selected_answers.to_vec();
        quiz.score = score;
        quiz.complete = true;
        Ok(())
    }
}

/// Answers each prompt by kind: quiz prompts get `quiz_reply`, reasoning
/// prompts get `reasoning_reply`, everything else gets `story_reply`.
pub struct ScriptedGenerator {
    pub quiz_reply: String,
    pub story_reply: String,
    pub reasoning_reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(quiz_reply: &str, story_reply: &str, reasoning_reply: &str) -> Self {
        Self {
            quiz_reply: quiz_reply.to_string(),
            story_reply: story_reply.to_string(),
            reasoning_reply: reasoning_reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn dialect(&self) -> PromptDialect {
        PromptDialect::Instruct
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let reply = if prompt.contains("Generate a quiz") {
            &self.quiz_reply
        } else if prompt.contains("INCORRECT ANSWER:") {
            &self.reasoning_reply
        } else {
            &self.story_reply
        };
        Ok(reply.clone())
    }
}

pub fn quiz_block(question: &str, options: [&str; 4], answer: &str) -> String {
    format!(
        "QUESTION: {}\nOPTION A: {}\nOPTION B: {}\nOPTION C: {}\nOPTION D: {}\nANS: {}\n",
        question, options[0], options[1], options[2], options[3], answer
    )
}

/// Three well-formed questions answered A, B and C.
pub fn three_question_quiz() -> String {
    [
        quiz_block("Which structure is LIFO?", ["Stack", "Queue", "Heap", "Graph"], "A"),
        quiz_block(
            "What is the time complexity of binary search?",
            ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
            "B",
        ),
        quiz_block(
            "Which traversal visits the root between its subtrees?",
            ["Preorder", "Postorder", "Inorder", "Level order"],
            "C",
        ),
    ]
    .concat()
}

pub fn test_config(policy: EmptyQuizPolicy) -> Config {
    let mut config = Config::from_env();
    config.jwt_secret = SecretString::from("integration_test_secret_with_enough_length".to_string());
    config.jwt_expiration_hours = 1;
    config.generation_backend = GenerationBackend::Local;
    config.quiz_backlog_minimum = 3;
    config.empty_quiz_policy = policy;
    config.story_max_attempts = 10;
    config
}
