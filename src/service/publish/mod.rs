mod error;
mod model;

use std::sync::Arc;

use url::Url;

pub use error::PublishError;
pub use model::*;

use crate::{
    config::{AppConfig, ConfigError},
    error::PublisherResult,
    service::{
        caption::default_caption,
        http::{HttpClient, HttpService},
        language::Language,
    },
};

/// Publishes single-image and carousel posts to one Instagram professional account.
pub struct PostingClient {
    http_client: Arc<dyn HttpClient>,
    credentials: Credentials,
    endpoint: String,
    language: Language,
    caption_suffix: String,
}

impl PostingClient {
    pub fn new(config: &AppConfig) -> PublisherResult<Self> {
        let http_service = HttpService::new(&config.http)?;
        Ok(Self::with_http_client(config, Arc::new(http_service))?)
    }

    pub fn with_http_client(config: &AppConfig, http_client: Arc<dyn HttpClient>) -> Result<Self, ConfigError> {
        let credentials = Credentials::new(
            config.instagram.access_token.clone(),
            config.instagram.account_id.clone(),
        )?;

        info!(
            "PostingClient initialized for account {} ({})",
            credentials.account_id(),
            config.instagram.endpoint()
        );

        Ok(Self {
            http_client,
            credentials,
            endpoint: config.instagram.endpoint(),
            language: config.language.locale,
            caption_suffix: config.caption.suffix.clone(),
        })
    }

    /// Posts one image, or several as a carousel in the given order.
    ///
    /// `caption: None` generates a date-based caption; `Some("")` is posted as-is.
    /// Never returns an error: every failure comes back as [`PublishResult::Failed`].
    pub async fn post_image(&self, images: impl Into<ImageUrls>, caption: Option<&str>) -> PublishResult {
        let images = images.into();

        match self.try_post_image(&images, caption).await {
            Ok(post_id) => {
                info!("{}", t!("progress.published", locale = self.language.code()));
                PublishResult::Published {
                    post_id,
                    status: t!("status.published", locale = self.language.code()).to_string(),
                }
            }
            Err(err) => {
                let message = err.message(self.language);
                error!(
                    "{} ({:?})",
                    t!("errors.posting", locale = self.language.code(), message = &message),
                    err
                );
                PublishResult::Failed { error: message }
            }
        }
    }

    async fn try_post_image(&self, images: &ImageUrls, caption: Option<&str>) -> Result<String, PublishError> {
        validate_images(images)?;

        let caption = match caption {
            Some(caption) => caption.to_string(),
            None => default_caption(self.language, &self.caption_suffix),
        };

        let container = if images.is_carousel() {
            self.create_carousel(images, &caption).await?
        } else {
            info!("{}", t!("progress.single", locale = self.language.code()));
            self.create_single_media(&images.as_slice()[0], &caption).await?
        };

        self.publish_media(&container).await
    }

    async fn create_single_media(&self, image_url: &str, caption: &str) -> Result<MediaContainer, PublishError> {
        let response = self
            .http_client
            .post_form(
                &self.media_url(),
                &[
                    ("access_token", self.credentials.access_token().to_string()),
                    ("image_url", image_url.to_string()),
                    ("caption", caption.to_string()),
                ],
            )
            .await?;

        MediaContainer::from_response(&response).ok_or(PublishError::ContainerMissingId)
    }

    async fn create_carousel(&self, images: &ImageUrls, caption: &str) -> Result<MediaContainer, PublishError> {
        let locale = self.language.code();
        let total = images.len();
        info!("{}", t!("progress.carousel_start", locale = locale, total = total));

        let mut children = Vec::with_capacity(total);
        for (index, image_url) in images.as_slice().iter().enumerate() {
            let index = index + 1;
            info!(
                "{}",
                t!("progress.carousel_item", locale = locale, index = index, total = total)
            );

            let item = self
                .create_carousel_item(image_url)
                .await?
                .ok_or(PublishError::CarouselItemMissingId(index))?;
            debug!("Carousel item {} created: {}", index, item.id);
            children.push(item.id);
        }

        info!("{}", t!("progress.carousel_container", locale = locale));
        self.create_carousel_container(&children, caption).await
    }

    async fn create_carousel_item(&self, image_url: &str) -> Result<Option<MediaContainer>, PublishError> {
        let response = self
            .http_client
            .post_form(
                &self.media_url(),
                &[
                    ("access_token", self.credentials.access_token().to_string()),
                    ("image_url", image_url.to_string()),
                    ("is_carousel_item", "true".to_string()),
                ],
            )
            .await?;

        Ok(MediaContainer::from_response(&response))
    }

    async fn create_carousel_container(
        &self,
        children: &[String],
        caption: &str,
    ) -> Result<MediaContainer, PublishError> {
        let response = self
            .http_client
            .post_form(
                &self.media_url(),
                &[
                    ("access_token", self.credentials.access_token().to_string()),
                    ("media_type", "CAROUSEL".to_string()),
                    ("children", children.join(",")),
                    ("caption", caption.to_string()),
                ],
            )
            .await?;

        MediaContainer::from_response(&response).ok_or(PublishError::ContainerMissingId)
    }

    async fn publish_media(&self, container: &MediaContainer) -> Result<String, PublishError> {
        info!("{}", t!("progress.publishing", locale = self.language.code()));

        let response = self
            .http_client
            .post_form(
                &self.media_publish_url(),
                &[
                    ("access_token", self.credentials.access_token().to_string()),
                    ("creation_id", container.id.clone()),
                ],
            )
            .await?;

        response_id(&response).ok_or(PublishError::PostMissingId)
    }

    fn media_url(&self) -> String {
        format!("{}/{}/media", self.endpoint, self.credentials.account_id())
    }

    fn media_publish_url(&self) -> String {
        format!("{}/{}/media_publish", self.endpoint, self.credentials.account_id())
    }
}

fn validate_images(images: &ImageUrls) -> Result<(), PublishError> {
    if images.is_empty() {
        return Err(PublishError::NoImages);
    }

    for image_url in images.as_slice() {
        let parsed = Url::parse(image_url).map_err(|_| PublishError::InvalidImageUrl(image_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PublishError::InvalidImageUrl(image_url.clone()));
        }
    }

    Ok(())
}
