use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum PublisherError {
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

pub type PublisherResult<T> = Result<T, PublisherError>;
