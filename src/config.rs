use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub endpoints: EndpointSettings,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub catalogue: CatalogueSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSettings {
    pub matching_url: String,
    pub search_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpSettings {
    /// Request timeout; unset keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl HttpSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogueMode {
    #[default]
    Live,
    Static,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogueSettings {
    #[serde(default)]
    pub source: CatalogueMode,
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Configuration file (config/default.toml)
    /// 2. Local overrides (config/local.toml)
    /// 3. Environment variables (prefixed with OPEN_MATCH__)
    /// 4. ISSUES_API_URL / ISSUES_SEARCH_API_URL for the two endpoints
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., OPEN_MATCH__ENDPOINTS__MATCHING_URL -> endpoints.matching_url
            .add_source(
                Environment::with_prefix("OPEN_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_endpoint_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("OPEN_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_endpoint_overrides(settings)?.try_deserialize()
    }
}

/// Apply the plain endpoint variables the deployment supplies at run time
fn apply_endpoint_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("ISSUES_API_URL") {
        builder = builder.set_override("endpoints.matching_url", url)?;
    }
    if let Ok(url) = env::var("ISSUES_SEARCH_API_URL") {
        builder = builder.set_override("endpoints.search_url", url)?;
    }

    builder.build()
}
