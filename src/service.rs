use std::sync::Arc;

use crate::config::Config;
use crate::errors::AssistantError;
use crate::gemini_client::GenerativeClient;
use crate::links;
use crate::models::chat::ChatRequest;
use crate::models::gemini::GenerateContentRequest;
use crate::prompt::{self, LinkFormat};

#[derive(Clone)]
pub struct AssistantService {
    client: Arc<dyn GenerativeClient>,
    config: Arc<Config>,
}

impl AssistantService {
    pub fn new(client: Arc<dyn GenerativeClient>, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one chat turn and returns the text to hand back to the caller.
    pub async fn reply(&self, request: &ChatRequest) -> Result<String, AssistantError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) => key,
            None => {
                log::error!("{} environment variable is not set.", crate::config::API_KEY_VAR);
                return Err(AssistantError::ApiKeyMissing);
            }
        };

        let prompt =
            prompt::build_prompt(&request.context, &request.message, self.config.link_format);
        let upstream_request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .generate_content(api_key, &upstream_request)
            .await?;
        let text = response.first_text().inspect_err(|_| {
            log::error!(
                "Unexpected API response structure from Gemini: {}",
                serde_json::to_string_pretty(&response).unwrap_or_default()
            )
        })?;
        log::debug!("raw text from Gemini: {:?}", text);

        Ok(match self.config.link_format {
            LinkFormat::Markdown => links::markdown_links_to_html(text).into_owned(),
            LinkFormat::Html => text.to_string(),
        })
    }
}
