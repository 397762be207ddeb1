pub const CHAT_PATH: &str = "/api/gemini-chat";

pub(crate) const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub(crate) const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub(crate) const TEMPERATURE: f32 = 0.7;
pub(crate) const TOP_K: u32 = 40;
pub(crate) const TOP_P: f32 = 0.95;
pub(crate) const MAX_OUTPUT_TOKENS: u32 = 1024;

pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_PORT: u16 = 8080;
pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;
pub(crate) const READ_TIMEOUT_SECS: u64 = 60;
pub(crate) const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";
pub const API_KEY_MISSING_MESSAGE: &str = "Server configuration error: API key missing.";
pub const ASSISTANT_FAILURE_MESSAGE: &str = "Failed to process request by AI assistant.";
