use serde::{self, Deserialize, Serialize};

use crate::consts;

/// Inbound body of the chat endpoint.
///
/// Missing fields compose as empty strings; fields of the wrong type fail parsing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: String,
}

impl ChatRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ChatReply {
    Success {
        response: String,
    },
    Failure {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        details: Option<String>,
    },
    Rejected {
        message: String,
    },
}

impl ChatReply {
    pub fn success(text: impl Into<String>) -> Self {
        ChatReply::Success {
            response: text.into(),
        }
    }

    pub fn failure(details: impl Into<String>) -> Self {
        ChatReply::Failure {
            error: consts::ASSISTANT_FAILURE_MESSAGE.to_string(),
            details: Some(details.into()),
        }
    }

    pub fn api_key_missing() -> Self {
        ChatReply::Failure {
            error: consts::API_KEY_MISSING_MESSAGE.to_string(),
            details: None,
        }
    }

    pub fn method_not_allowed() -> Self {
        ChatReply::Rejected {
            message: consts::METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }
    }
}
