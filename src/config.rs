use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models;

pub const DEFAULT_CONFIG_PATH: &str = "config/agent.json";
/// Endpoint fallback khi không cấu hình gì (backend chạy local).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/api/agent";
/// Biến môi trường ghi đè endpoint (đọc qua dotenvy ở startup).
pub const ENDPOINT_ENV: &str = "AGENT_API";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_topk")]
    pub topk: u32,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    models::DEFAULT_MODEL.to_string()
}

fn default_topk() -> u32 {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_model: default_model(),
            topk: default_topk(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

/// Độ ưu tiên endpoint: cờ `--api` > biến môi trường `AGENT_API` > file
/// config (file tự fallback về localhost). Giá trị rỗng bị bỏ qua.
pub fn resolve_endpoint(
    cli_override: Option<&str>,
    env_override: Option<&str>,
    config: &AppConfig,
) -> String {
    for candidate in [cli_override, env_override] {
        if let Some(endpoint) = candidate {
            if !endpoint.is_empty() {
                return endpoint.to_string();
            }
        }
    }
    config.endpoint.clone()
}
