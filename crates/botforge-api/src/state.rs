//! Application state wiring the services together.
//!
//! AppState holds the concrete service instance used by both CLI commands
//! and REST API handlers. The service is generic over the repository trait,
//! but AppState pins it to the SQLite implementation from botforge-infra.

use std::path::PathBuf;
use std::sync::Arc;

use botforge_core::service::bot::GeneratorService;
use botforge_infra::config::load_global_config;
use botforge_infra::filesystem::resolve_data_dir;
use botforge_infra::sqlite::bot::SqliteGeneratedBotRepository;
use botforge_infra::sqlite::pool::DatabasePool;
use botforge_types::config::GlobalConfig;

/// Concrete type alias for the service generic pinned to the SQLite
/// repository.
pub type ConcreteGeneratorService = GeneratorService<SqliteGeneratedBotRepository>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator_service: Arc<ConcreteGeneratorService>,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, load
    /// config.toml, connect to the database, wire the service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        tracing::debug!(path = %data_dir.display(), "using data directory");

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("botforge.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let repo = SqliteGeneratedBotRepository::new(db_pool);
        let generator_service = GeneratorService::new(repo);

        Ok(Self {
            generator_service: Arc::new(generator_service),
            config,
            data_dir,
        })
    }
}
