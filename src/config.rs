use crate::api::models::DEFAULT_TOP_K;
use crate::cli::Args;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_USER_ID: &str = "user-1";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

pub struct Config {
    pub api_endpoint: String,
    pub api_key: Option<String>,
    pub user_id: String,
    pub top_k: usize,
    pub request_timeout: u64,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let json_config = JsonConfig::load().unwrap_or_default();

        // Endpoint: CLI args > env var > JSON config > default
        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("REC_API_ENDPOINT").ok())
            .or(json_config.api.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        // API key is optional (the backend may sit behind a gateway); taken
        // from the environment only.
        let api_key = env::var("REC_API_KEY").ok();

        // User id: CLI args > env var > JSON config > default
        let user_id = args
            .user_id
            .clone()
            .or_else(|| env::var("REC_USER_ID").ok())
            .or(json_config.chat.user_id.clone())
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        // Result cap: CLI args > env var > JSON config > default
        let top_k = args
            .top_k
            .or_else(|| {
                env::var("REC_TOP_K")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
            })
            .or(json_config.chat.top_k)
            .unwrap_or(DEFAULT_TOP_K);
        if top_k == 0 {
            return Err("top-k must be a positive integer".to_string());
        }

        // Request timeout: env var > JSON config > default
        let request_timeout = env::var("REC_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(json_config.api.timeout)
            .unwrap_or(30);

        // Verbose flag: env var > JSON config > default
        let verbose = env::var("REC_VERBOSE")
            .ok()
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .or(json_config.session.verbose)
            .unwrap_or(false);

        Ok(Config {
            api_endpoint,
            api_key,
            user_id,
            top_k,
            request_timeout,
            verbose,
        })
    }
}

impl JsonConfig {
    pub fn load() -> anyhow::Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                let config: JsonConfig = serde_json::from_str(&contents).with_context(|| {
                    format!("Failed to parse JSON config file: {}", path.display())
                })?;
                return Ok(config);
            }
        }

        Ok(JsonConfig::default())
    }

    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (local override)
        paths.push(PathBuf::from(".chat2rec.json"));

        // 2. User's config directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join("chat2rec")
                    .join("chat2rec.json"),
            );
        }

        paths
    }
}
