use clap::Parser;
use piomock_api::MockServer;
use piomock_server::{
    cli::{Args, Commands},
    config::ServerConfig,
    error::{ConfigError, Result},
};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(&args.log_level);

    let command = args.command.clone();

    let result = match command {
        Some(Commands::Start) | None => run_servers(args).await,
        Some(Commands::Config { show }) => handle_config(args, show),
        Some(Commands::Init { output, force }) => init_config(&output, force),
    };

    match result {
        Ok(_) => process::exit(0),
        Err(e) => {
            error!("Command failed: {:?}", e);
            process::exit(1);
        }
    }
}

/// Run both mock servers until interrupted
async fn run_servers(args: Args) -> Result<()> {
    let config = ServerConfig::load(&args)?;
    config.validate()?;

    info!(
        engine_port = config.engine_port,
        event_port = config.event_port,
        "Starting mock servers"
    );

    let server = MockServer::new(config.as_mock_config())?;
    server.serve().await?;

    Ok(())
}

/// Handle configuration commands
fn handle_config(args: Args, show: bool) -> Result<()> {
    let config = ServerConfig::load(&args)?;
    config.validate()?;

    if show {
        let config_str =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::InvalidFile(e.to_string()))?;
        println!("{config_str}");
    } else {
        info!("Configuration is valid");
    }

    Ok(())
}

/// Write a default configuration file
fn init_config(output: &std::path::Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        return Err(ConfigError::InvalidFile(format!(
            "{} already exists (use --force to overwrite)",
            output.display()
        ))
        .into());
    }

    let config = ServerConfig::default();
    let config_str =
        toml::to_string_pretty(&config).map_err(|e| ConfigError::InvalidFile(e.to_string()))?;
    std::fs::write(output, config_str).map_err(ConfigError::Io)?;

    info!("Wrote default configuration to {}", output.display());
    Ok(())
}

/// Initialize logging
fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}
