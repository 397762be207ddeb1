use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::AssistantError;
use crate::prompt::LinkFormat;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_URL_VAR: &str = "GEMINI_API_URL";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const LINK_FORMAT_VAR: &str = "ASSISTANT_LINK_FORMAT";
pub const HOST_VAR: &str = "ASSISTANT_HOST";
pub const PORT_VAR: &str = "ASSISTANT_PORT";
pub const CONNECT_TIMEOUT_VAR: &str = "ASSISTANT_CONNECT_TIMEOUT_SECS";
pub const READ_TIMEOUT_VAR: &str = "ASSISTANT_READ_TIMEOUT_SECS";
pub const MAX_BODY_BYTES_VAR: &str = "ASSISTANT_MAX_BODY_BYTES";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Checked on every request rather than at startup.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub link_format: LinkFormat,
    pub host: String,
    pub port: u16,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: consts::DEFAULT_API_URL.to_string(),
            model: consts::DEFAULT_MODEL.to_string(),
            link_format: LinkFormat::default(),
            host: consts::DEFAULT_HOST.to_string(),
            port: consts::DEFAULT_PORT,
            connect_timeout_secs: consts::CONNECT_TIMEOUT_SECS,
            read_timeout_secs: consts::READ_TIMEOUT_SECS,
            max_body_bytes: consts::MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// Builds a config from a variable lookup; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, AssistantError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            api_key: lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty()),
            ..Config::default()
        };

        if let Some(api_url) = lookup(API_URL_VAR) {
            config.api_url = api_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup(MODEL_VAR) {
            config.model = model;
        }
        if let Some(link_format) = lookup(LINK_FORMAT_VAR) {
            config.link_format = LinkFormat::parse(&link_format)?;
        }
        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = parse_number(PORT_VAR, &port)?;
        }
        if let Some(secs) = lookup(CONNECT_TIMEOUT_VAR) {
            config.connect_timeout_secs = parse_number(CONNECT_TIMEOUT_VAR, &secs)?;
        }
        if let Some(secs) = lookup(READ_TIMEOUT_VAR) {
            config.read_timeout_secs = parse_number(READ_TIMEOUT_VAR, &secs)?;
        }
        if let Some(bytes) = lookup(MAX_BODY_BYTES_VAR) {
            config.max_body_bytes = parse_number(MAX_BODY_BYTES_VAR, &bytes)?;
        }

        Ok(config)
    }
}

fn parse_number<T: FromStr>(name: &str, value: &str) -> Result<T, AssistantError> {
    value
        .trim()
        .parse()
        .map_err(|_| {
            AssistantError::ConfigError(format!("{} must be a number, got {:?}", name, value))
        })
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, AssistantError>;
}

pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, AssistantError> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }
}

pub fn load_config() -> Result<Config, AssistantError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
