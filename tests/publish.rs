use std::collections::HashMap;

use gramstash_publisher::{AppConfig, Language, PostingClient, PublishResult};
use serde_json::json;
use url::form_urlencoded;
use wiremock::{
    matchers::{body_string_contains, method, path},
    Mock, MockServer, ResponseTemplate,
};

const ACCOUNT_ID: &str = "17841400000000000";

fn config_for(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::with_credentials("test-token", ACCOUNT_ID);
    config.instagram.api_base_url = server.uri();
    config.language.locale = Language::English;
    config
}

fn media_path() -> String {
    format!("/v18.0/{}/media", ACCOUNT_ID)
}

fn publish_path() -> String {
    format!("/v18.0/{}/media_publish", ACCOUNT_ID)
}

async fn received_forms(server: &MockServer) -> Vec<(String, HashMap<String, String>)> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .into_iter()
        .map(|request| {
            let form = form_urlencoded::parse(&request.body).into_owned().collect();
            (request.url.path().to_string(), form)
        })
        .collect()
}

#[tokio::test]
async fn test_single_image_is_published() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(media_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "container-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(publish_path()))
        .and(body_string_contains("creation_id=container-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "post-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = PostingClient::new(&config_for(&server)).unwrap();
    let result = client.post_image("https://cdn.test/a.jpg", Some("hello world")).await;

    assert_eq!(result.post_id(), Some("post-1"));

    let forms = received_forms(&server).await;
    assert_eq!(forms.len(), 2);
    let (_, container) = &forms[0];
    assert_eq!(container["access_token"], "test-token");
    assert_eq!(container["image_url"], "https://cdn.test/a.jpg");
    assert_eq!(container["caption"], "hello world");
}

#[tokio::test]
async fn test_carousel_items_are_created_in_order() {
    let server = MockServer::start().await;

    for (index, id) in ["item-1", "item-2", "item-3"].iter().enumerate() {
        Mock::given(method("POST"))
            .and(path(media_path()))
            .and(body_string_contains(format!(
                "image_url=https%3A%2F%2Fcdn.test%2F{}.jpg",
                index + 1
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": id})))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path(media_path()))
        .and(body_string_contains("media_type=CAROUSEL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "carousel-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(publish_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "post-9"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = PostingClient::new(&config_for(&server)).unwrap();
    let result = client
        .post_image(
            ["https://cdn.test/1.jpg", "https://cdn.test/2.jpg", "https://cdn.test/3.jpg"],
            Some("carousel"),
        )
        .await;

    assert_eq!(result.post_id(), Some("post-9"));

    let forms = received_forms(&server).await;
    assert_eq!(forms.len(), 5);

    let item_urls: Vec<&str> = forms[..3].iter().map(|(_, form)| form["image_url"].as_str()).collect();
    assert_eq!(
        item_urls,
        vec!["https://cdn.test/1.jpg", "https://cdn.test/2.jpg", "https://cdn.test/3.jpg"]
    );
    assert!(forms[..3].iter().all(|(_, form)| form["is_carousel_item"] == "true"));

    let (_, carousel) = &forms[3];
    assert_eq!(carousel["children"], "item-1,item-2,item-3");
    assert_eq!(carousel["caption"], "carousel");

    let (publish, form) = &forms[4];
    assert_eq!(publish, &publish_path());
    assert_eq!(form["creation_id"], "carousel-1");
}

#[tokio::test]
async fn test_graph_api_error_message_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(media_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "Invalid URL", "type": "OAuthException", "code": 100}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(publish_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "never"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = PostingClient::new(&config_for(&server)).unwrap();
    let result = client.post_image("https://cdn.test/a.jpg", None).await;

    assert_eq!(result, PublishResult::Failed { error: "Invalid URL".to_string() });
}

#[tokio::test]
async fn test_error_without_json_body_uses_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(media_path()))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = PostingClient::new(&config_for(&server)).unwrap();
    let result = client.post_image("https://cdn.test/a.jpg", None).await;

    let error = result.error().expect("post should fail");
    assert!(error.starts_with("HTTP 503 Service Unavailable"), "got: {}", error);
}

#[tokio::test]
async fn test_network_failure_is_reported_as_data() {
    let mut config = AppConfig::with_credentials("test-token", ACCOUNT_ID);
    config.instagram.api_base_url = "http://127.0.0.1:1".to_string();

    let client = PostingClient::new(&config).unwrap();
    let result = client.post_image("https://cdn.test/a.jpg", None).await;

    let error = result.error().expect("post should fail");
    assert!(error.starts_with("Network error"), "got: {}", error);
}
