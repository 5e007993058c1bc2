#[derive(Debug, thiserror::Error)]
pub enum ConfigParserError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub type ConfigParserResult<T> = Result<T, ConfigParserError>;
