use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Config file read when no other path is given; it may be absent
pub const DEFAULT_CONFIG_PATH: &str = "config/time-blocks";

/// Environment variable prefix, e.g. `TIME_BLOCKS__SERVER__TIME_BLOCK_URL`
pub const ENV_PREFIX: &str = "TIME_BLOCKS";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "time-blocks".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Absolute URL the time blocks are POSTed to
    pub time_block_url: String,

    /// Upper bound for a single submission attempt
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Values a rendered page would normally embed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageConfig {
    pub csrf_token: Option<String>,
}

impl Config {
    /// Load from `path` (extension optional), then apply `TIME_BLOCKS__*`
    /// environment overrides.
    ///
    /// Only `DEFAULT_CONFIG_PATH` may be missing; any other path must exist.
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_url(path, None)
    }

    /// Like `load`, with `url` taking precedence over every other source
    /// for `server.time_block_url`
    pub fn load_with_url(path: &str, url: Option<&str>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(path != DEFAULT_CONFIG_PATH))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("server.time_block_url", url)
            .context("Invalid time block url override")?
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?;

        let cfg: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        cfg.validate()?;

        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.server.time_block_url.trim().is_empty() {
            anyhow::bail!("server.time_block_url must not be empty");
        }
        Ok(())
    }
}
