use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub cache: CacheSettings,
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub redis_url: String,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SuggestionSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Scoring policy knobs; defaults are the production point values
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_required_codes_weight")]
    pub required_codes: u32,
    #[serde(default = "default_primary_condition_weight")]
    pub primary_condition: u32,
    #[serde(default = "default_pathology_tag_weight")]
    pub pathology_tag: u32,
    #[serde(default = "default_pathology_cap")]
    pub pathology_cap: u32,
    #[serde(default = "default_description_weight")]
    pub description: u32,
    #[serde(default = "default_capacity_weight")]
    pub capacity: u32,
    #[serde(default = "default_max_score")]
    pub max_score: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            required_codes: default_required_codes_weight(),
            primary_condition: default_primary_condition_weight(),
            pathology_tag: default_pathology_tag_weight(),
            pathology_cap: default_pathology_cap(),
            description: default_description_weight(),
            capacity: default_capacity_weight(),
            max_score: default_max_score(),
        }
    }
}

fn default_required_codes_weight() -> u32 { 50 }
fn default_primary_condition_weight() -> u32 { 40 }
fn default_pathology_tag_weight() -> u32 { 10 }
fn default_pathology_cap() -> u32 { 30 }
fn default_description_weight() -> u32 { 20 }
fn default_capacity_weight() -> u32 { 10 }
fn default_max_score() -> u32 { 100 }

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
    /// 3. Environment variables (prefixed with TRIALMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with TRIALMATCH_)
            // e.g., TRIALMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TRIALMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TRIALMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Honor the conventional DATABASE_URL variable over the prefixed form
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let database_url = env::var("DATABASE_URL")
        .or_else(|_| env::var("TRIALMATCH_DATABASE__URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }

    builder.build()
}
