use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum AssistantError {
    MethodNotAllowed(String),
    MalformedInput(String),
    PayloadTooLarge(usize),
    ConfigError(String),
    ApiKeyMissing,
    UpstreamRequest { status: u16, body: String },
    UpstreamShape,
    ParseError(String),
    NetworkError(String),
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantError::MethodNotAllowed(method) => {
                write!(f, "Method not allowed: {}", method)
            }
            AssistantError::MalformedInput(msg) => write!(f, "Malformed request body: {}", msg),
            AssistantError::PayloadTooLarge(limit) => {
                write!(f, "Request body exceeds the {} byte limit", limit)
            }
            AssistantError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AssistantError::ApiKeyMissing => write!(f, "Config error: API key missing"),
            AssistantError::UpstreamRequest { status, body } => {
                write!(f, "Gemini API request failed: {} - {}", status, body)
            }
            AssistantError::UpstreamShape => {
                write!(f, "Unexpected API response structure from Gemini.")
            }
            AssistantError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AssistantError::NetworkError(msg) => write!(f, "{}", msg),
        }
    }
}

impl StdError for AssistantError {}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        // The API key travels in the query string, so the URL must not reach the caller.
        let err = err.without_url();
        let mut msg = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = cause.source();
        }
        AssistantError::NetworkError(msg)
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        AssistantError::ParseError(err.to_string())
    }
}
