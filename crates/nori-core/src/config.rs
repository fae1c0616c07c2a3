//! Configuration management for Nori.
//!
//! Loads configuration from ${NORI_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured backend URL.
pub const BACKEND_URL_ENV: &str = "NORI_BACKEND_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Nori configuration and data directories.
    //!
    //! NORI_HOME resolution order:
    //! 1. NORI_HOME environment variable (if set)
    //! 2. ~/.config/nori (default)
    //! 3. ./.nori when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Nori home directory.
    pub fn nori_home() -> PathBuf {
        if let Ok(home) = std::env::var("NORI_HOME")
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".nori"),
            |h| h.join(".config").join("nori"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        nori_home().join("config.toml")
    }

    /// Returns the directory that holds log files.
    pub fn logs_dir() -> PathBuf {
        nori_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the playground backend.
    pub backend_url: String,

    /// Timeout for backend calls in seconds (0 disables)
    pub request_timeout_secs: u64,

    /// Delay before the category greeting is shown.
    pub greeting_delay_ms: u64,

    /// Lifetime of transient system notices.
    pub notice_dismiss_ms: u64,

    /// Delay between choosing a recommended question and sending it.
    pub recommended_send_delay_ms: u64,

    /// Exchanges listed in the history tab.
    pub history_limit: usize,

    /// Remote recommendations requested per load.
    pub recommend_limit: u32,

    /// Default tracing filter when RUST_LOG is unset.
    pub log_filter: String,
}

impl Config {
    pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_GREETING_DELAY_MS: u64 = 500;
    const DEFAULT_NOTICE_DISMISS_MS: u64 = 3000;
    const DEFAULT_RECOMMENDED_SEND_DELAY_MS: u64 = 800;
    const DEFAULT_HISTORY_LIMIT: usize = 10;
    const DEFAULT_RECOMMEND_LIMIT: u32 = 5;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the backend URL with precedence: flag > env > config > default.
    ///
    /// # Errors
    /// Returns an error if the winning value is not a valid URL.
    pub fn resolve_backend_url(&self, flag: Option<&str>) -> Result<String> {
        let env_value = std::env::var(BACKEND_URL_ENV).ok();
        let candidates = [flag, env_value.as_deref(), Some(self.backend_url.as_str())];

        let chosen = candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(Self::DEFAULT_BACKEND_URL);

        validate_url(chosen)?;
        Ok(chosen.trim_end_matches('/').to_string())
    }

    /// Request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn greeting_delay(&self) -> Duration {
        Duration::from_millis(self.greeting_delay_ms)
    }

    pub fn notice_dismiss(&self) -> Duration {
        Duration::from_millis(self.notice_dismiss_ms)
    }

    pub fn recommended_send_delay(&self) -> Duration {
        Duration::from_millis(self.recommended_send_delay_ms)
    }

    /// Writes the default template to `path`.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        Self::write_config(path, default_config_template())
    }

    /// Saves only the backend_url field to a specific config file path.
    ///
    /// Creates the file from the default template if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the file cannot be rewritten.
    pub fn save_backend_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        validate_url(url)?;

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["backend_url"] = value(url.trim());

        Self::write_config(path, &doc.to_string())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: Self::DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            greeting_delay_ms: Self::DEFAULT_GREETING_DELAY_MS,
            notice_dismiss_ms: Self::DEFAULT_NOTICE_DISMISS_MS,
            recommended_send_delay_ms: Self::DEFAULT_RECOMMENDED_SEND_DELAY_MS,
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
            recommend_limit: Self::DEFAULT_RECOMMEND_LIMIT,
            log_filter: "info".to_string(),
        }
    }
}

/// Validates that a URL is well-formed and uses http(s).
fn validate_url(url: &str) -> Result<()> {
    let parsed =
        url::Url::parse(url.trim()).with_context(|| format!("Invalid backend URL: {url}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("Invalid backend URL: {url} (expected http or https)");
    }
    Ok(())
}
