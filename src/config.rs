use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::SuggestionLimits;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub discovery: DiscoverySettings,
    #[serde(default)]
    pub sessions: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// Base URL of the remote marketplace API, e.g. `https://host/api`
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverySettings {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "default_min_radius_km")]
    pub min_radius_km: f64,
    #[serde(default = "default_max_radius_km")]
    pub max_radius_km: f64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_top_matches")]
    pub top_matches: usize,
    #[serde(default = "default_suggestions_per_group")]
    pub suggestions_per_group: usize,
    #[serde(default = "default_suggestions_total")]
    pub suggestions_total: usize,
    #[serde(default = "default_allowed_categories")]
    pub allowed_categories: Vec<String>,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
            min_radius_km: default_min_radius_km(),
            max_radius_km: default_max_radius_km(),
            page_size: default_page_size(),
            top_matches: default_top_matches(),
            suggestions_per_group: default_suggestions_per_group(),
            suggestions_total: default_suggestions_total(),
            allowed_categories: default_allowed_categories(),
        }
    }
}

impl DiscoverySettings {
    /// Radius bounds must be finite and ordered, the default inside them
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max, default) = (self.min_radius_km, self.max_radius_km, self.default_radius_km);

        if !(min.is_finite() && max.is_finite() && default.is_finite()) {
            return Err(ConfigError::Message("discovery radius settings must be finite".to_string()));
        }
        if min < 0.0 || min > max {
            return Err(ConfigError::Message(format!(
                "discovery.min_radius_km ({}) must be between 0 and discovery.max_radius_km ({})",
                min, max
            )));
        }
        if default < min || default > max {
            return Err(ConfigError::Message(format!(
                "discovery.default_radius_km ({}) must lie within [{}, {}]",
                default, min, max
            )));
        }
        Ok(())
    }

    /// Requested radius clamped into the configured slider range
    ///
    /// Never panics; with bounds that fail [`validate`](Self::validate) the
    /// maximum wins.
    pub fn clamp_radius(&self, requested: Option<f64>) -> f64 {
        match requested {
            Some(r) if r.is_finite() => r.max(self.min_radius_km).min(self.max_radius_km),
            _ => self.default_radius_km,
        }
    }

    pub fn suggestion_limits(&self) -> SuggestionLimits {
        SuggestionLimits {
            per_group: self.suggestions_per_group,
            total: self.suggestions_total,
        }
    }
}

fn default_radius_km() -> f64 { 5.0 }
fn default_min_radius_km() -> f64 { 0.5 }
fn default_max_radius_km() -> f64 { 10.0 }
fn default_page_size() -> usize { 9 }
fn default_top_matches() -> usize { 3 }
fn default_suggestions_per_group() -> usize { 10 }
fn default_suggestions_total() -> usize { 12 }

fn default_allowed_categories() -> Vec<String> {
    [
        "Makanan & Minuman",
        "Fashion & Pakaian",
        "Kerajinan Tangan",
        "Elektronik",
        "Jasa & Layanan",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_session_capacity")]
    pub capacity: u64,
    #[serde(default = "default_session_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            capacity: default_session_capacity(),
            ttl_secs: default_session_ttl_secs(),
        }
    }
}

fn default_session_capacity() -> u64 { 10_000 }
fn default_session_ttl_secs() -> u64 { 1800 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with UMKM_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., UMKM__CATALOG__BASE_URL -> catalog.base_url
            .add_source(env_source())
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.discovery.validate()?;
        Ok(self)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("UMKM")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
