use crate::service::{http::HttpError, language::Language};

use super::model::GraphApiErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("No image URLs provided")]
    NoImages,
    #[error("Invalid image URL: {0}")]
    InvalidImageUrl(String),
    #[error("Carousel item {0} was not created")]
    CarouselItemMissingId(usize),
    #[error("Media container ID missing from response")]
    ContainerMissingId,
    #[error("Post ID missing from publish response")]
    PostMissingId,
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),
}

impl PublishError {
    /// Human-readable message returned to the caller.
    ///
    /// Transport failures prefer the Graph API's own `error.message`, falling back to the
    /// transport error text. Everything else is localized.
    pub fn message(&self, language: Language) -> String {
        let locale = language.code();
        match self {
            PublishError::NoImages => t!("errors.no_images", locale = locale).to_string(),
            PublishError::InvalidImageUrl(url) => t!("errors.invalid_image_url", locale = locale, url = url).to_string(),
            PublishError::CarouselItemMissingId(index) => {
                t!("errors.carousel_item", locale = locale, index = index).to_string()
            }
            PublishError::ContainerMissingId => t!("errors.container_id", locale = locale).to_string(),
            PublishError::PostMissingId => t!("errors.post_id", locale = locale).to_string(),
            PublishError::Transport(err) => err
                .body()
                .and_then(GraphApiErrorBody::message_from)
                .unwrap_or_else(|| err.to_string()),
        }
    }
}
