use thiserror::Error;

/// Errors that can occur in the mock server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] Box<piomock_api::ApiError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<piomock_api::ApiError> for ServerError {
    fn from(error: piomock_api::ApiError) -> Self {
        Self::Api(Box::new(error))
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
