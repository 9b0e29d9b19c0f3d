use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::HttpConfig;

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status} returned by {url}")]
    Status { status: StatusCode, url: String, body: String },
}

impl HttpError {
    /// Response body of a non-2xx reply, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            HttpError::Status { body, .. } => Some(body.as_str()),
            HttpError::Network(_) => None,
        }
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POSTs `form` url-encoded and returns the decoded JSON body of a 2xx reply.
    async fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<Value, HttpError>;
}

#[derive(Clone)]
pub struct HttpService {
    client: Client,
}

impl HttpService {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout).connect_timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for HttpService {
    async fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<Value, HttpError> {
        let response = self.client.post(url).form(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
