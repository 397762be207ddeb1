use serde::{self, Deserialize, Serialize};
use serde_json::Value;

use crate::consts;
use crate::errors::AssistantError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: consts::TEMPERATURE,
            top_k: consts::TOP_K,
            top_p: consts::TOP_P,
            max_output_tokens: consts::MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Result<&str, AssistantError> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_deref())
            .ok_or(AssistantError::UpstreamShape)
    }
}

/// Decodes an upstream success body.
///
/// Invalid JSON is a `ParseError`; valid JSON whose candidate chain has the
/// wrong shape is an `UpstreamShape`.
pub fn parse_generate_content(body: &str) -> Result<GenerateContentResponse, AssistantError> {
    let value: Value = serde_json::from_str(body)?;
    serde_json::from_value(value.clone()).map_err(|e| {
        log::error!(
            "Unexpected API response structure from Gemini ({}): {}",
            e,
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
        AssistantError::UpstreamShape
    })
}
