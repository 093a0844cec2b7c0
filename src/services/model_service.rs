use std::{fmt, str::FromStr, sync::Arc};

use async_trait::async_trait;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{
        model_backends::{LocalCompletionGenerator, RemoteSessionGenerator},
        prompt_builder::PromptDialect,
    },
};

/// A text-generation backend. Implementations differ only in transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Chat framing the backend's model was tuned on.
    fn dialect(&self) -> PromptDialect;

    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationBackend {
    #[default]
    Remote,
    Local,
}

impl FromStr for GenerationBackend {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(GenerationBackend::Remote),
            "local" => Ok(GenerationBackend::Local),
            other => Err(AppError::ValidationError(format!(
                "Unknown generation backend '{}', expected 'remote' or 'local'",
                other
            ))),
        }
    }
}

impl fmt::Display for GenerationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationBackend::Remote => write!(f, "remote"),
            GenerationBackend::Local => write!(f, "local"),
        }
    }
}

/// Builds the configured backend once at startup. The remote session name is
/// fixed here and reused for every call the process makes.
pub fn build_generator(config: &Config) -> AppResult<Arc<dyn TextGenerator>> {
    let generator: Arc<dyn TextGenerator> = match config.generation_backend {
        GenerationBackend::Remote => {
            let generator = RemoteSessionGenerator::new(
                &config.remote_model_base_url,
                &config.remote_model_api_key,
                &config.remote_model_slug,
            );
            log::info!(
                "Using remote generation session '{}'",
                generator.session_name()
            );
            Arc::new(generator)
        }
        GenerationBackend::Local => {
            log::info!("Using local completion server at {}", config.local_model_url);
            Arc::new(LocalCompletionGenerator::new(&config.local_model_url))
        }
    };

    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parses_case_insensitively() {
        assert_eq!("remote".parse::<GenerationBackend>().unwrap(), GenerationBackend::Remote);
        assert_eq!(" LOCAL ".parse::<GenerationBackend>().unwrap(), GenerationBackend::Local);
        assert!(matches!(
            "gradient".parse::<GenerationBackend>(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn build_generator_reports_backend_dialect() {
        let mut config = Config::test_config();

        config.generation_backend = GenerationBackend::Remote;
        let remote = build_generator(&config).unwrap();
        assert_eq!(remote.dialect(), PromptDialect::Instruct);

        config.generation_backend = GenerationBackend::Local;
        let local = build_generator(&config).unwrap();
        assert_eq!(local.dialect(), PromptDialect::HeaderTokens);
    }
}
