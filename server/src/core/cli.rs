use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::config::DatabaseBackend;
use super::constants::{
    ENV_BACKEND, ENV_CONFIG, ENV_CORS_ORIGINS, ENV_DATABASE_PATH, ENV_DEBUG, ENV_HOST, ENV_PORT,
    ENV_SEED_CSV,
};

#[derive(Parser)]
#[command(name = "evgrid")]
#[command(version, about = "Electric car catalog API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Enable debug mode (verbose logging)
    #[arg(long, global = true, env = ENV_DEBUG)]
    pub debug: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Database backend (sqlite or memory)
    #[arg(long, global = true, env = ENV_BACKEND, value_parser = parse_database_backend)]
    pub backend: Option<DatabaseBackend>,

    /// SQLite database file (defaults to the data directory)
    #[arg(long, global = true, env = ENV_DATABASE_PATH)]
    pub database_path: Option<PathBuf>,

    /// CSV file imported on startup when the database is empty
    #[arg(long, global = true, env = ENV_SEED_CSV)]
    pub seed_csv: Option<PathBuf>,

    /// Allowed CORS origin (repeatable, `*` allows any)
    #[arg(
        long = "cors-origin",
        global = true,
        env = ENV_CORS_ORIGINS,
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,
}

/// Parse database backend from CLI/env string
fn parse_database_backend(s: &str) -> Result<DatabaseBackend, String> {
    match s.to_lowercase().as_str() {
        "sqlite" => Ok(DatabaseBackend::Sqlite),
        "memory" => Ok(DatabaseBackend::Memory),
        _ => Err(format!(
            "Invalid database backend '{}'. Valid options: sqlite, memory",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Start the server (default command)
    Start,
    /// Import cars from a CSV file and exit
    Import {
        /// CSV file with a header row
        csv: PathBuf,
        /// Keep existing cars instead of replacing them
        #[arg(long)]
        append: bool,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
    pub config: Option<PathBuf>,
    pub backend: Option<DatabaseBackend>,
    pub database_path: Option<PathBuf>,
    pub seed_csv: Option<PathBuf>,
    pub cors_origins: Vec<String>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        host: cli.host,
        port: cli.port,
        debug: cli.debug,
        config: cli.config,
        backend: cli.backend,
        database_path: cli.database_path,
        seed_csv: cli.seed_csv,
        cors_origins: cli.cors_origins,
    };
    (config, cli.command)
}
