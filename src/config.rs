//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calculator::{EmissionScheduleParams, FarmingParams, PresaleEarningsParams};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub defaults: DashboardDefaults,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_horizon")]
    pub max_horizon: u32,

    #[serde(default = "default_enable_export")]
    pub enable_export: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_horizon() -> u32 {
    1_000
}

fn default_enable_export() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8501".to_string(),
                "http://127.0.0.1:8501".to_string(),
            ],
            request_timeout_secs: default_request_timeout(),
            max_horizon: default_max_horizon(),
            enable_export: default_enable_export(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Default values shown in the dashboard input widgets
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardDefaults {
    #[serde(default)]
    pub schedule: EmissionScheduleParams,

    #[serde(default)]
    pub presale: PresaleEarningsParams,

    #[serde(default)]
    pub emissions: EmissionsDefaults,

    #[serde(default)]
    pub farming: FarmingParams,
}

/// Inputs of the emissions page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EmissionsDefaults {
    #[serde(default = "default_token_price")]
    pub token_price: f64,

    /// Service fee deducted from dollar emissions
    #[serde(default)]
    pub redemption_rate: f64,
}

fn default_token_price() -> f64 {
    0.17
}

impl Default for EmissionsDefaults {
    fn default() -> Self {
        Self {
            token_price: default_token_price(),
            redemption_rate: 0.0,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether logs should be emitted as JSON lines
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
    pub fn init_tracing(&self) {
        self.init_tracing_with(std::io::stdout);
    }

    /// Same as [`init_tracing`](Self::init_tracing), logging to `writer`
    pub fn init_tracing_with<W>(&self, writer: W)
    where
        W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("solve3={},tower_http=info", self.level).into());
        let registry = tracing_subscriber::registry().with(filter);

        if self.is_json() {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
                .init();
        } else {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(writer))
                .init();
        }
    }
}

/// Config file locations, in search order
pub fn search_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("solve3").join("config.toml")),
        Some(PathBuf::from("/etc/solve3/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load an explicit file, or search the default locations when `path` is `None`
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        Self::load_first(&search_paths())
    }

    /// First readable file among `paths`, else defaults with environment overrides
    fn load_first(paths: &[PathBuf]) -> Self {
        for path_opt in paths {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = lookup("SOLVE3_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("SOLVE3_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Dashboard default overrides
        if let Some(price) = lookup("SOLVE3_TOKEN_PRICE") {
            if let Ok(p) = price.parse() {
                self.defaults.emissions.token_price = p;
                self.defaults.presale.token_price = p;
            }
        }
        if let Some(horizon) = lookup("SOLVE3_HORIZON") {
            if let Ok(h) = horizon.parse() {
                self.defaults.schedule.horizon = h;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("SOLVE3_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SOLVE3_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Solve3 Calculator Configuration
#
# Environment variables override these settings:
# - SOLVE3_API_HOST
# - SOLVE3_API_PORT
# - SOLVE3_TOKEN_PRICE
# - SOLVE3_HORIZON
# - SOLVE3_LOG_LEVEL
# - SOLVE3_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty = any origin)
cors_origins = ["http://localhost:8501", "http://127.0.0.1:8501"]

# Request timeout in seconds
request_timeout_secs = 30

# Largest horizon a request may ask for
max_horizon = 1000

# Enable the export endpoint
enable_export = true

[defaults.schedule]
# Emission basis; epoch 1 emits base_emission * decay_rate
base_emission = 2000000.0
decay_rate = 0.99
horizon = 50

[defaults.presale]
investment = 10000.0
token_price = 0.17
fees_and_bribes = 200000.0
locking_rate = 0.75
base_supply_offset = 25000000.0

[defaults.emissions]
token_price = 0.17
# Service fee deducted from dollar emissions
redemption_rate = 0.0

[defaults.farming]
total_tvl = 25000000.0
my_farm = 1000000.0
my_fees = 15000.0
emissions_per_epoch = 300000.0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
