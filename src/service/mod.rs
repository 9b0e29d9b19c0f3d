pub mod caption;
pub mod http;
pub mod language;
pub mod publish;

pub use language::Language;
pub use publish::{ImageUrls, PostingClient, PublishResult};
