use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use site_assistant::config::{Config, ConfigLoader};
use site_assistant::errors::AssistantError;
use site_assistant::gemini_client::GenerativeClient;
use site_assistant::models::gemini::{GenerateContentRequest, GenerateContentResponse};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub request: GenerateContentRequest,
}

/// Replays queued results and records what it was asked for.
pub struct MockGenerativeClient {
    responses: Arc<Mutex<VecDeque<Result<GenerateContentResponse, AssistantError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn add_response(&self, response: Result<GenerateContentResponse, AssistantError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AssistantError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            request: request.clone(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AssistantError::NetworkError("no response queued".to_string())))
    }
}

pub struct InMemoryConfigLoader {
    config: Config,
}

impl InMemoryConfigLoader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for InMemoryConfigLoader {
    fn load_config(&self) -> Result<Config, AssistantError> {
        Ok(self.config.clone())
    }
}
