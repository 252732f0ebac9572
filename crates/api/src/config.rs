use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub event: EventConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Event-specific configuration: everything that personalizes the
/// invitation site for one celebration.
#[derive(Debug, Clone, Deserialize)]
pub struct EventConfig {
    /// Name of the celebrated quinceañera.
    #[serde(default = "default_celebrant_name")]
    pub celebrant_name: String,

    /// Event title interpolated into share messages ("15 años de Eury").
    #[serde(default = "default_event_title")]
    pub event_title: String,

    /// Event date and time, RFC 3339.
    #[serde(default = "default_event_date")]
    pub event_date: String,

    /// Human-readable confirmation deadline shown to guests.
    #[serde(default = "default_rsvp_deadline_label")]
    pub rsvp_deadline_label: String,

    /// Host WhatsApp phone (country code plus digits, no `+`). Confirmation
    /// deep links are addressed here.
    #[serde(default = "default_host_phone")]
    pub host_phone: String,

    /// Public base URL of the invitation site. Used by the panel link
    /// generator when the request carries no page URL of its own.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Administrative-panel path segment stripped from generated links.
    #[serde(default = "default_panel_segment")]
    pub panel_segment: String,
}

impl EventConfig {
    /// Parses the configured event date.
    pub fn event_date_utc(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.event_date).map(|dt| dt.with_timezone(&Utc))
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_celebrant_name() -> String {
    "Eury".to_string()
}
fn default_event_title() -> String {
    "15 años de Eury".to_string()
}
fn default_event_date() -> String {
    "2026-05-15T18:00:00-06:00".to_string()
}
fn default_rsvp_deadline_label() -> String {
    "15 de Mayo".to_string()
}
fn default_host_phone() -> String {
    "525522678650".to_string()
}
fn default_public_base_url() -> String {
    "https://example.com".to_string()
}
fn default_panel_segment() -> String {
    "panel-nancy".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with QS__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("QS").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Validate cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.event.host_phone.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "event.host_phone".to_string(),
            ));
        }
        if !self.event.host_phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigValidationError::InvalidValue(
                "event.host_phone must contain digits only".to_string(),
            ));
        }
        if self.event.event_date_utc().is_err() {
            return Err(ConfigValidationError::InvalidValue(
                "event.event_date must be RFC 3339".to_string(),
            ));
        }
        if !self.event.public_base_url.contains("://") {
            return Err(ConfigValidationError::InvalidValue(
                "event.public_base_url must be an absolute URL".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .server
            .host
            .parse()
            .unwrap_or_else(|_| "0.0.0.0".parse().expect("fallback bind address"));
        SocketAddr::new(ip, self.server.port)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// This method creates a config entirely from defaults and overrides,
    /// without relying on config files (which may not be accessible during tests).
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        // Embed defaults directly to avoid file system dependency in tests
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 0
            request_timeout_secs = 30

            [logging]
            level = "info"
            format = "pretty"

            [security]
            cors_origins = []

            [event]
            celebrant_name = "Eury"
            event_title = "15 años de Eury"
            event_date = "2026-05-15T18:00:00-06:00"
            rsvp_deadline_label = "15 de Mayo"
            host_phone = "525522678650"
            public_base_url = "https://example.com"
            panel_segment = "panel-nancy"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }
}
