use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use outreach_core::PromptVariant;
use serde::Deserialize;

/// Secrets and deployment-specific values, read from the environment.
/// Behavior knobs live in the TOML `FileConfig`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub apify_api_token: String,

    // Telemetry credential. Only reported; traces go through `tracing`.
    pub wandb_api_key: Option<String>,

    // Transport overrides
    pub transport: Option<Transport>,
    pub port: Option<u16>,
    pub mcp_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let apify_api_token = std::env::var("APIFY_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
            .context("APIFY_API_TOKEN environment variable is required")?;

        let transport = std::env::var("MCP_TRANSPORT")
            .ok()
            .map(|raw| raw.parse::<Transport>())
            .transpose()
            .map_err(anyhow::Error::msg)?;

        let port = std::env::var("PORT")
            .ok()
            .map(|raw| raw.trim().parse::<u16>())
            .transpose()
            .context("PORT must be a valid port number")?;

        let config = Self {
            apify_api_token,
            wandb_api_key: std::env::var("WANDB_API_KEY").ok(),
            transport,
            port,
            mcp_path: std::env::var("MCP_PATH").ok(),
        };

        config.log_keys();
        Ok(config)
    }

    fn log_keys(&self) {
        fn preview(val: &str) -> String {
            let n = val.char_indices().nth(5).map(|(i, _)| i).unwrap_or(val.len());
            format!("{}...({} chars)", &val[..n], val.len())
        }
        fn preview_opt(val: &Option<String>) -> String {
            match val {
                Some(v) if !v.is_empty() => preview(v),
                _ => "<not set>".to_string(),
            }
        }

        tracing::info!("Config loaded:");
        tracing::info!("  APIFY_API_TOKEN: {}", preview(&self.apify_api_token));
        tracing::info!("  WANDB_API_KEY: {}", preview_opt(&self.wandb_api_key));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Stdio,
    Http,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Transport::Stdio),
            "http" | "streamable-http" => Ok(Transport::Http),
            other => Err(format!("unknown transport '{other}' (expected stdio or http)")),
        }
    }
}

/// TOML-backed configuration. Every section and field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub prompts: PromptsConfig,
    pub defaults: DefaultsConfig,
    pub backend: BackendConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptsConfig {
    pub variant: PromptVariant,
}

/// Values used when a tool call leaves an optional argument out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub twitter_max_items: u32,
    pub linkedin_limit: u32,
    pub raw_max_items: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            twitter_max_items: 3,
            linkedin_limit: 5,
            raw_max_items: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendConfig {
    pub job_timeout_secs: Option<u64>,
    pub dataset_page_size: usize,
    pub base_url: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            job_timeout_secs: None,
            dataset_page_size: apify_client::DEFAULT_PAGE_SIZE,
            base_url: None,
        }
    }
}

impl BackendConfig {
    pub fn job_timeout(&self) -> Option<Duration> {
        self.job_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub transport: Transport,
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::Stdio,
            host: "0.0.0.0".to_string(),
            port: 8000,
            path: "/mcp".to_string(),
        }
    }
}

impl FileConfig {
    /// Apply environment and CLI overrides. CLI wins over env, env over file.
    pub fn with_overrides(mut self, env: &AppConfig, cli_transport: Option<Transport>) -> Self {
        if let Some(transport) = cli_transport.or(env.transport) {
            self.server.transport = transport;
        }
        if let Some(port) = env.port {
            self.server.port = port;
        }
        if let Some(path) = &env.mcp_path {
            self.server.path = path.clone();
        }
        if !self.server.path.starts_with('/') {
            self.server.path = format!("/{}", self.server.path);
        }
        self
    }
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
