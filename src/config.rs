use std::{collections::HashMap, time::Duration};

use crate::service::language::Language;

const DEFAULT_API_BASE_URL: &str = "https://graph.facebook.com";
const DEFAULT_API_VERSION: &str = "v18.0";
const DEFAULT_CAPTION_SUFFIX: &str = "MQ 글로벌 증권가 뉴스";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing secret: {0}")]
    MissingKey(String),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Anything that can hand out configuration values by key.
pub trait SecretStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Process environment, with a `.env` file in the working directory loaded first if present.
pub struct EnvSecrets;

impl EnvSecrets {
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self
    }
}

impl SecretStore for EnvSecrets {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl SecretStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub instagram: InstagramConfig,
    pub caption: CaptionConfig,
    pub http: HttpConfig,
    pub language: LanguageConfig,
}

#[derive(Clone)]
pub struct InstagramConfig {
    pub access_token: String,
    pub account_id: String,
    pub api_base_url: String,
    pub api_version: String,
}

impl std::fmt::Debug for InstagramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstagramConfig")
            .field("access_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl InstagramConfig {
    /// Config pointing at the public Graph API with default version.
    pub fn new(access_token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            account_id: account_id.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// `{base}/{version}`, without a trailing slash.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

#[derive(Clone, Debug)]
pub struct CaptionConfig {
    pub suffix: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_CAPTION_SUFFIX.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HttpConfig {
    /// `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug, Default)]
pub struct LanguageConfig {
    pub locale: Language,
}

impl AppConfig {
    /// Minimal config with only credentials set, everything else default.
    pub fn with_credentials(access_token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            instagram: InstagramConfig::new(access_token, account_id),
            caption: CaptionConfig::default(),
            http: HttpConfig::default(),
            language: LanguageConfig::default(),
        }
    }
}

pub fn build_config(secret_store: &impl SecretStore) -> Result<AppConfig, ConfigError> {
    info!("Building AppConfig...");

    let config = AppConfig {
        instagram: InstagramConfig {
            access_token: required(secret_store, "INSTAGRAM_ACCESS_TOKEN")?,
            account_id: required(secret_store, "INSTAGRAM_ACCOUNT_ID")?,
            api_base_url: secret_store
                .get("INSTAGRAM_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            api_version: secret_store
                .get("INSTAGRAM_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        },
        caption: CaptionConfig {
            suffix: secret_store
                .get("CAPTION_SUFFIX")
                .unwrap_or_else(|| DEFAULT_CAPTION_SUFFIX.to_string()),
        },
        http: HttpConfig {
            timeout: secret_store
                .get("HTTP_TIMEOUT_SECS")
                .map(|value| {
                    value
                        .trim()
                        .parse::<u64>()
                        .map(Duration::from_secs)
                        .map_err(|_| ConfigError::InvalidValue {
                            key: "HTTP_TIMEOUT_SECS".to_string(),
                            value,
                        })
                })
                .transpose()?,
        },
        language: LanguageConfig {
            locale: match secret_store.get("PUBLISHER_LOCALE") {
                Some(value) => value.parse::<Language>().map_err(|_| ConfigError::InvalidValue {
                    key: "PUBLISHER_LOCALE".to_string(),
                    value,
                })?,
                None => Language::default(),
            },
        },
    };
    info!("AppConfig built");

    Ok(config)
}

fn required(secret_store: &impl SecretStore, key: &str) -> Result<String, ConfigError> {
    secret_store
        .get(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(&store(&[
            ("INSTAGRAM_ACCESS_TOKEN", "token"),
            ("INSTAGRAM_ACCOUNT_ID", "17841400000000000"),
        ]))
        .unwrap();

        assert_eq!(config.instagram.access_token, "token");
        assert_eq!(config.instagram.account_id, "17841400000000000");
        assert_eq!(config.instagram.endpoint(), "https://graph.facebook.com/v18.0");
        assert_eq!(config.caption.suffix, "MQ 글로벌 증권가 뉴스");
        assert!(config.http.timeout.is_none());
        assert_eq!(config.language.locale, Language::Korean);
    }

    #[test]
    fn test_build_config_overrides() {
        let config = build_config(&store(&[
            ("INSTAGRAM_ACCESS_TOKEN", "token"),
            ("INSTAGRAM_ACCOUNT_ID", "42"),
            ("INSTAGRAM_API_BASE_URL", "http://127.0.0.1:8080/"),
            ("INSTAGRAM_API_VERSION", "v21.0"),
            ("CAPTION_SUFFIX", "Daily"),
            ("HTTP_TIMEOUT_SECS", "15"),
            ("PUBLISHER_LOCALE", "en"),
        ]))
        .unwrap();

        assert_eq!(config.instagram.endpoint(), "http://127.0.0.1:8080/v21.0");
        assert_eq!(config.caption.suffix, "Daily");
        assert_eq!(config.http.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.language.locale, Language::English);
    }

    #[test]
    fn test_build_config_missing_credentials() {
        let err = build_config(&store(&[("INSTAGRAM_ACCOUNT_ID", "42")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(ref key) if key == "INSTAGRAM_ACCESS_TOKEN"));

        let err = build_config(&store(&[
            ("INSTAGRAM_ACCESS_TOKEN", "token"),
            ("INSTAGRAM_ACCOUNT_ID", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(ref key) if key == "INSTAGRAM_ACCOUNT_ID"));
    }

    #[test]
    fn test_build_config_invalid_values() {
        let err = build_config(&store(&[
            ("INSTAGRAM_ACCESS_TOKEN", "token"),
            ("INSTAGRAM_ACCOUNT_ID", "42"),
            ("HTTP_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "HTTP_TIMEOUT_SECS"));

        let err = build_config(&store(&[
            ("INSTAGRAM_ACCESS_TOKEN", "token"),
            ("INSTAGRAM_ACCOUNT_ID", "42"),
            ("PUBLISHER_LOCALE", "fr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PUBLISHER_LOCALE"));
    }

    #[test]
    fn test_debug_redacts_access_token() {
        let config = InstagramConfig::new("super-secret", "42");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("42"));
    }
}
