//! Configuration management for the breeding API

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub middleware: MiddlewareConfig,
    #[serde(default)]
    pub validation: breeding_validator::ValidatorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
    /// Maximum request body size in bytes.
    /// Default: 2 MB
    #[serde(default = "default_max_request_body_size")]
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            max_request_body_size: default_max_request_body_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Page size when a search request does not specify `size`.
    /// Default: 20
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Largest accepted `size`. Larger requests are rejected with 400.
    /// Default: 1000
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MiddlewareConfig {
    /// JSON fixture loaded into the in-memory middleware at startup.
    /// Environment variable: `BMS__MIDDLEWARE__SEED_FILE`
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON formatting for logs (recommended for production)
    #[serde(default)]
    pub json: bool,

    /// Enable file logging in addition to console
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files (default: ./logs)
    #[serde(default = "default_log_directory")]
    pub file_directory: String,

    /// Log file prefix (default: bms-api)
    #[serde(default = "default_log_file_prefix")]
    pub file_prefix: String,

    /// Log rotation: daily, hourly, minutely, never (default: daily)
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file_enabled: false,
            file_directory: default_log_directory(),
            file_prefix: default_log_file_prefix(),
            file_rotation: default_log_rotation(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            api: ApiConfig::default(),
            middleware: MiddlewareConfig::default(),
            validation: breeding_validator::ValidatorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    Vec::new()
}

fn default_max_request_body_size() -> usize {
    2 * 1024 * 1024
}

fn default_page_size() -> usize {
    20
}

fn default_max_page_size() -> usize {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "./logs".to_string()
}

fn default_log_file_prefix() -> String {
    "bms-api".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Config {
    /// Load configuration from environment and config files
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default(
                "server.max_request_body_size",
                default_max_request_body_size() as i64,
            )?
            .set_default("api.default_page_size", default_page_size() as i64)?
            .set_default("api.max_page_size", default_max_page_size() as i64)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            .set_default("logging.file_enabled", false)?
            .set_default("logging.file_directory", default_log_directory())?
            .set_default("logging.file_prefix", default_log_file_prefix())?
            .set_default("logging.file_rotation", default_log_rotation())?
            .add_source(config::File::with_name("config").required(false))
            // BMS__SERVER__PORT=9090 → config.server.port
            // Arrays use comma separator: BMS__SERVER__CORS_ORIGINS=https://a.org,https://b.org
            .add_source(
                config::Environment::with_prefix("BMS")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        Ok(addr.parse()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api.default_page_size == 0 {
            return Err("api.default_page_size must be > 0".to_string());
        }
        if self.api.max_page_size < self.api.default_page_size {
            return Err("api.max_page_size must be >= api.default_page_size".to_string());
        }
        if self.validation.max_character_length == 0 {
            return Err("validation.max_character_length must be > 0".to_string());
        }
        if !matches!(
            self.logging.file_rotation.as_str(),
            "daily" | "hourly" | "minutely" | "never"
        ) {
            return Err(format!(
                "logging.file_rotation must be one of daily, hourly, minutely, never (got '{}')",
                self.logging.file_rotation
            ));
        }
        Ok(())
    }
}
