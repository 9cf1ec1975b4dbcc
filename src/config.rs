use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `api.base_url` at deploy time
pub const API_ENDPOINT_ENV: &str = "WEBSITE_API_ENDPOINT";

/// Global configuration for the dashboard
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Website API settings
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// API prefix, absolute or relative to `origin` (default: /api/v1)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Server that a relative `base_url` is resolved against
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Request timeout in seconds. Unset means the HTTP client's own defaults.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            origin: default_origin(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Effective API prefix without a trailing slash
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim();
        if is_absolute_url(base) {
            return base.trim_end_matches('/').to_string();
        }
        format!(
            "{}/{}",
            self.origin.trim().trim_end_matches('/'),
            base.trim_start_matches('/')
        )
        .trim_end_matches('/')
        .to_string()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.base_url.trim().is_empty() {
            errors.push("api.base_url must not be empty".to_string());
        }
        if !is_absolute_url(self.base_url.trim()) && !is_absolute_url(self.origin.trim()) {
            errors.push(format!(
                "api.origin must be an http:// or https:// URL (got '{}')",
                self.origin
            ));
        }
        if self.request_timeout_secs == Some(0) {
            errors.push("api.request_timeout_secs must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_absolute_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn default_base_url() -> String {
    "/api/v1".to_string()
}

fn default_origin() -> String {
    "http://127.0.0.1:8080".to_string()
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, else the per-user config file if it
    /// exists, else defaults. The environment override is applied last.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::load(path)?,
                None => Config::default(),
            },
        };

        config.apply_env_override(std::env::var(API_ENDPOINT_ENV).ok().as_deref());
        config.validate()?;
        Ok(config)
    }

    /// Replace `api.base_url` with a non-empty override value
    pub fn apply_env_override(&mut self, value: Option<&str>) {
        if let Some(endpoint) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.api.base_url = endpoint.to_string();
        }
    }

    /// Validate all configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Err(errors) = self.api.validate() {
            anyhow::bail!("Configuration errors:\n  - {}", errors.join("\n  - "));
        }
        Ok(())
    }
}

/// ~/.config/website-dashboard/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("website-dashboard").join("config.toml"))
}
