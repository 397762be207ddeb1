use std::sync::Arc;

use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use site_assistant::config::Config;
use site_assistant::gemini_client::GeminiClient;
use site_assistant::prompt::LinkFormat;
use site_assistant::service::AssistantService;

pub const TEST_API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

pub fn create_test_config(api_url: String, link_format: LinkFormat) -> Config {
    Config {
        api_key: Some(TEST_API_KEY.to_string()),
        api_url,
        link_format,
        ..Config::default()
    }
}

pub fn api_url(mock_server: &MockServer) -> String {
    format!("{}/v1beta", mock_server.uri())
}

pub fn create_service(config: Config) -> Arc<AssistantService> {
    let gemini_client = Arc::new(GeminiClient::new(
        reqwest::Client::new(),
        &config.api_url,
        &config.model,
    ));
    Arc::new(AssistantService::new(gemini_client, Arc::new(config)))
}

pub fn service_for(mock_server: &MockServer, link_format: LinkFormat) -> Arc<AssistantService> {
    create_service(create_test_config(api_url(mock_server), link_format))
}

pub async fn setup_generate_content_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

/// A server that fails the test if the upstream endpoint is hit at all.
pub async fn setup_untouched_mock() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    mock_server
}
