use std::{env, str::FromStr};

use secrecy::SecretString;

use crate::{
    errors::{AppError, AppResult},
    services::{model_service::GenerationBackend, quiz_scheduler_service::EmptyQuizPolicy},
};

const DEV_JWT_SECRET: &str = "dev_secret_key_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub generation_backend: GenerationBackend,
    pub remote_model_base_url: String,
    pub remote_model_api_key: SecretString,
    pub remote_model_slug: String,
    pub local_model_url: String,
    pub quiz_scheduler_interval_secs: u64,
    pub quiz_backlog_minimum: u64,
    pub empty_quiz_policy: EmptyQuizPolicy,
    pub story_max_attempts: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "learnforge-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parsed_var("WEB_SERVER_PORT", 5000),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: parsed_var("JWT_EXPIRATION_HOURS", 24),
            generation_backend: parsed_var("GENERATION_BACKEND", GenerationBackend::Remote),
            remote_model_base_url: env::var("REMOTE_MODEL_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            remote_model_api_key: SecretString::from(
                env::var("REMOTE_MODEL_API_KEY").unwrap_or_default(),
            ),
            remote_model_slug: env::var("REMOTE_MODEL_SLUG")
                .unwrap_or_else(|_| "llama2-7b-chat".to_string()),
            local_model_url: env::var("LOCAL_MODEL_URL")
                .unwrap_or_else(|_| "http://localhost:8080/completion".to_string()),
            quiz_scheduler_interval_secs: parsed_var("QUIZ_SCHEDULER_INTERVAL_SECS", 60),
            quiz_backlog_minimum: parsed_var("QUIZ_BACKLOG_MINIMUM", 3),
            empty_quiz_policy: parsed_var("EMPTY_QUIZ_POLICY", EmptyQuizPolicy::Persist),
            story_max_attempts: parsed_var("STORY_MAX_ATTEMPTS", 10),
        }
    }

    /// Rejects settings that are only acceptable on a developer machine.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEV_JWT_SECRET {
            return Err(AppError::InternalError(
                "JWT_SECRET is using the default value. Set it to a secure random string."
                    .to_string(),
            ));
        }

        if jwt_secret.len() < 32 {
            return Err(AppError::InternalError(format!(
                "JWT_SECRET is too short ({}). Must be at least 32 characters.",
                jwt_secret.len()
            )));
        }

        if self.generation_backend == GenerationBackend::Remote
            && self.remote_model_api_key.expose_secret().is_empty()
        {
            return Err(AppError::InternalError(
                "REMOTE_MODEL_API_KEY must be set when GENERATION_BACKEND=remote".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "learnforge-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            generation_backend: GenerationBackend::Local,
            remote_model_base_url: "http://127.0.0.1:9/v1".to_string(),
            remote_model_api_key: SecretString::from("test_api_key".to_string()),
            remote_model_slug: "llama2-7b-chat".to_string(),
            local_model_url: "http://127.0.0.1:9/completion".to_string(),
            quiz_scheduler_interval_secs: 60,
            quiz_backlog_minimum: 3,
            empty_quiz_policy: EmptyQuizPolicy::Persist,
            story_max_attempts: 10,
        }
    }
}

/// Reads and parses an env var, keeping the default when unset. A value that
/// is set but unparsable is logged and also falls back to the default.
fn parsed_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}='{}', using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
