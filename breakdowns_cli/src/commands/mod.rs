//! CLI subcommand implementations.

pub mod browse;
pub mod options;
pub mod posts;
pub mod read;

use breakdowns_lib::{CatalogConfig, PostRepository, PostSource, Session};

/// Loads the repository once and starts a session over it. A failed load
/// yields an empty session, never an error.
pub async fn load_session(config: &CatalogConfig) -> Session {
    let source = PostSource::from_location(&config.source, config.timeout());
    let repository = PostRepository::load(&source).await;
    tracing::debug!("{} posts available", repository.len());
    Session::new(repository)
}
