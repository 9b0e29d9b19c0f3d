//! Publishes single-image and carousel posts through the Instagram Graph API.
//!
//! ```rust,no_run
//! use gramstash_publisher::{build_config, EnvSecrets, PostingClient, PublishResult};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = build_config(&EnvSecrets::load())?;
//! let client = PostingClient::new(&config)?;
//!
//! match client.post_image(["https://cdn.example.com/1.jpg", "https://cdn.example.com/2.jpg"], None).await {
//!     PublishResult::Published { post_id, .. } => println!("posted {}", post_id),
//!     PublishResult::Failed { error } => eprintln!("failed: {}", error),
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod config;
pub mod error;
pub mod service;

pub use config::{build_config, AppConfig, ConfigError, EnvSecrets, SecretStore};
pub use error::{PublisherError, PublisherResult};
pub use service::{ImageUrls, Language, PostingClient, PublishResult};
