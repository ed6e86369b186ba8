//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{BlogRepository, CompletionClient};
use quill_infra::OpenAiCompletionClient;

use crate::config::AppConfig;

/// Fatal errors while building the application.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("Failed to connect to database: {0}")]
    Database(String),

    #[error("Failed to load templates: {0}")]
    Templates(String),

    #[error("Failed to build completion client: {0}")]
    Completion(String),
}

/// Shared application state.
///
/// Constructed once at startup and injected into handlers; holds no
/// request-scoped mutable data.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogRepository>,
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    /// Build the application state with the configured implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        let posts = Self::blog_repository(config).await?;
        let client = OpenAiCompletionClient::new(config.openai.clone())
            .map_err(|e| StartupError::Completion(e.to_string()))?;
        let completion: Arc<dyn CompletionClient> = Arc::new(client);

        tracing::info!("Application state initialized");

        Ok(Self::from_parts(posts, completion))
    }

    pub fn from_parts(
        posts: Arc<dyn BlogRepository>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        Self { posts, completion }
    }

    #[cfg(feature = "postgres")]
    async fn blog_repository(config: &AppConfig) -> Result<Arc<dyn BlogRepository>, StartupError> {
        use quill_infra::PostgresBlogRepository;

        let db_config = config
            .database
            .as_ref()
            .ok_or(crate::config::ConfigError::Missing("DATABASE_URL"))?;

        let conn = quill_infra::database::connect(db_config)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;

        Ok(Arc::new(PostgresBlogRepository::new(conn)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn blog_repository(_config: &AppConfig) -> Result<Arc<dyn BlogRepository>, StartupError> {
        use quill_infra::InMemoryBlogRepository;

        tracing::info!("Running without postgres feature - using in-memory repository");
        Ok(Arc::new(InMemoryBlogRepository::new()))
    }
}
