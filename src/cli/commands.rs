//! CLI command implementations
//!
//! `main.rs` delegates here; configuration loading, store opening, and the
//! serving loop all live behind `run`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Logger;
use crate::repository::FileRepository;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory (required)
    pub data_dir: String,

    /// Host to bind (optional, default "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind (optional, default 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (optional, default empty = permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "./roster-data".to_string(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        Ok(())
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    /// Convert to the HTTP server configuration
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Parse CLI arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Create the data directory structure.
///
/// Writes a default config file when none exists at the given path, so
/// `rosterdb init && rosterdb serve` works from an empty directory.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        let config = Config::default();
        let content = serde_json::to_string_pretty(&config)?;
        fs::write(config_path, content)?;
        config
    };

    let data_subdir = config.data_path().join("data");
    if data_subdir.join("employees.dat").exists() {
        return Err(CliError::already_initialized());
    }

    fs::create_dir_all(&data_subdir)?;

    Logger::info(
        "INIT_COMPLETE",
        &[("data_dir", &config.data_dir)],
    );

    Ok(())
}

/// Load config, open the record store, and serve until the process exits
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let repository = FileRepository::open(config.data_path())
        .map_err(|e| CliError::boot_failed(format!("Failed to open record store: {}", e)))?;

    let server = HttpServer::new(Arc::new(repository), config.server_config());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("Server failed: {}", e)))
}
