use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowseEaseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
