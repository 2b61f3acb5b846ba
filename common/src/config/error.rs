#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
