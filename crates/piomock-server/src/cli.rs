use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PredictionIO mock servers
#[derive(Parser, Debug)]
#[command(name = "piomock-server")]
#[command(about = "Mock engine and event servers for exercising PredictionIO clients")]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "PIOMOCK_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Bind address for both servers
    #[arg(long, env = "PIOMOCK_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Engine (query) server port
    #[arg(long, env = "PIOMOCK_ENGINE_PORT")]
    pub engine_port: Option<u16>,

    /// Event server port
    #[arg(long, env = "PIOMOCK_EVENT_PORT")]
    pub event_port: Option<u16>,

    /// Access key required on ingestion requests
    #[arg(long, env = "PIOMOCK_ACCESS_KEY")]
    pub access_key: Option<String>,

    /// Log level
    #[arg(long, env = "PIOMOCK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start both mock servers
    Start,
    /// Validate configuration
    Config {
        /// Show resolved configuration
        #[arg(long)]
        show: bool,
    },
    /// Generate default configuration
    Init {
        /// Output file path
        #[arg(short, long, default_value = "piomock.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

impl Args {
    /// Get the effective configuration file path
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }
}
