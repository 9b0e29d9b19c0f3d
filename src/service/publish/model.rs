use serde::Deserialize;
use serde_json::Value;

use crate::config::ConfigError;

/// One or more pre-hosted image URLs, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls(Vec<String>);

impl ImageUrls {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_carousel(&self) -> bool {
        self.0.len() > 1
    }
}

impl From<&str> for ImageUrls {
    fn from(url: &str) -> Self {
        Self(vec![url.to_string()])
    }
}

impl From<String> for ImageUrls {
    fn from(url: String) -> Self {
        Self(vec![url])
    }
}

impl From<Vec<String>> for ImageUrls {
    fn from(urls: Vec<String>) -> Self {
        Self(urls)
    }
}

impl From<Vec<&str>> for ImageUrls {
    fn from(urls: Vec<&str>) -> Self {
        Self(urls.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ImageUrls {
    fn from(urls: &[&str]) -> Self {
        Self(urls.iter().map(|url| url.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ImageUrls {
    fn from(urls: [&str; N]) -> Self {
        Self(urls.iter().map(|url| url.to_string()).collect())
    }
}

#[derive(Clone)]
pub struct Credentials {
    access_token: String,
    account_id: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, account_id: impl Into<String>) -> Result<Self, ConfigError> {
        let access_token = access_token.into();
        let account_id = account_id.into();

        if access_token.trim().is_empty() {
            return Err(ConfigError::MissingKey("INSTAGRAM_ACCESS_TOKEN".to_string()));
        }
        if account_id.trim().is_empty() {
            return Err(ConfigError::MissingKey("INSTAGRAM_ACCOUNT_ID".to_string()));
        }

        Ok(Self {
            access_token,
            account_id,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// Server-side staging object, known only by its ID until published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaContainer {
    pub id: String,
}

impl MediaContainer {
    pub fn from_response(response: &Value) -> Option<Self> {
        response_id(response).map(|id| Self { id })
    }
}

/// The `id` field of a Graph API reply. Numeric IDs are accepted as well.
pub fn response_id(response: &Value) -> Option<String> {
    match response.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphApiErrorBody {
    pub error: GraphApiError,
}

#[derive(Debug, Deserialize)]
pub struct GraphApiError {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub code: Option<i64>,
}

impl GraphApiErrorBody {
    /// `error.message` from a Graph API error reply.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|body| body.error.message)
            .filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishResult {
    Published { post_id: String, status: String },
    Failed { error: String },
}

impl PublishResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PublishResult::Published { .. })
    }

    pub fn post_id(&self) -> Option<&str> {
        match self {
            PublishResult::Published { post_id, .. } => Some(post_id),
            PublishResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PublishResult::Failed { error } => Some(error),
            PublishResult::Published { .. } => None,
        }
    }
}
