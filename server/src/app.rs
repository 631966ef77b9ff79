//! Core application

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::ApiServer;
use crate::core::banner::{self, BannerInfo};
use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::{AppConfig, DatabaseBackend};
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::core::shutdown::ShutdownService;
use crate::core::storage::AppStorage;
use crate::data::DatabaseService;
use crate::domain::{CatalogService, ImportMode, import_csv};
use crate::utils::file::display_path;

pub struct CoreApp {
    pub shutdown: ShutdownService,
    pub config: AppConfig,
    pub storage: AppStorage,
    pub database: Arc<DatabaseService>,
    pub catalog: CatalogService,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        let (cli_config, command) = cli::parse();
        Self::init_logging(cli_config.debug);

        tracing::debug!("Application starting");
        tracing::trace!(command = ?command, "Parsed command");

        let app = Self::init(&cli_config).await?;

        match command {
            Some(Commands::Import { csv, append }) => {
                let mode = if append {
                    ImportMode::Append
                } else {
                    ImportMode::Replace
                };
                let result = app.import(&csv, mode).await;
                app.shutdown.shutdown().await;
                result
            }
            Some(Commands::Start) | None => {
                app.seed_if_empty().await?;
                Self::start_server(app).await
            }
        }
    }

    async fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        let storage = AppStorage::init(&config).await?;

        let db_path = storage.database_path(&config);
        let database = DatabaseService::init(config.database.backend, &db_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to initialize {} database",
                    config.database.backend
                )
            })?;
        tracing::debug!(backend = %database.backend(), "Database initialized");

        let database = Arc::new(database);
        let catalog = CatalogService::new(database.repository());
        let shutdown = ShutdownService::new(database.clone());

        Ok(Self {
            shutdown,
            config,
            storage,
            database,
            catalog,
        })
    }

    /// Import a CSV file and print a summary
    async fn import(&self, csv: &Path, mode: ImportMode) -> Result<()> {
        let report = import_csv(csv, self.catalog.repository().as_ref(), mode)
            .await
            .with_context(|| format!("Failed to import {}", csv.display()))?;

        println!(
            "Imported {} cars from {} ({} rows skipped, {} removed)",
            report.imported,
            csv.display(),
            report.skipped,
            report.cleared
        );
        Ok(())
    }

    /// Import the configured seed CSV when the catalog is empty
    async fn seed_if_empty(&self) -> Result<()> {
        let Some(ref seed) = self.config.database.seed_csv else {
            return Ok(());
        };

        let count = self
            .catalog
            .repository()
            .count_cars()
            .await
            .context("Failed to count cars")?;
        if count > 0 {
            tracing::debug!(count, "Catalog not empty, skipping seed import");
            return Ok(());
        }

        let report = import_csv(seed, self.catalog.repository().as_ref(), ImportMode::Append)
            .await
            .with_context(|| format!("Failed to import seed CSV {}", seed.display()))?;
        tracing::info!(
            imported = report.imported,
            skipped = report.skipped,
            "Seeded empty catalog"
        );
        Ok(())
    }

    fn init_logging(debug: bool) {
        let default_filter = if debug {
            format!("info,{}=debug,tower_http=debug", APP_NAME_LOWER)
        } else {
            format!("info,{}=info", APP_NAME_LOWER)
        };

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    async fn start_server(app: Self) -> Result<()> {
        // Install signal handlers before anything can block
        app.shutdown.install_signal_handlers();

        if let Some(handle) = app
            .database
            .start_checkpoint_task(app.shutdown.subscribe())
        {
            app.shutdown.register(handle).await;
        }

        let car_count = app
            .catalog
            .repository()
            .count_cars()
            .await
            .context("Failed to count cars")?;
        let data_location = match app.config.database.backend {
            DatabaseBackend::Sqlite => display_path(&app.storage.database_path(&app.config)),
            DatabaseBackend::Memory => "in-memory (not persisted)".to_string(),
        };
        let backend = app.config.database.backend.to_string();

        banner::print_banner(&BannerInfo {
            host: &app.config.server.host,
            port: app.config.server.port,
            backend: &backend,
            car_count,
            data_location: &data_location,
        });

        let server = ApiServer::new(app);
        let app = server.start().await?;
        app.shutdown.shutdown().await;

        Ok(())
    }
}
