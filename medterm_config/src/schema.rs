use medterm_cache::CacheConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Level, debug, warn};

const CONFIG_DIR: &str = "medterm";
const CONFIG_FILE: &str = "config.json";

/// Settings read from `~/medterm/config.json`.
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CacheSection {
    #[serde(default)]
    pub annotation: AnnotationCacheConfig,
    #[serde(default)]
    pub schema: SchemaCacheConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnnotationCacheConfig {
    #[serde(default = "AnnotationCacheConfig::default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "AnnotationCacheConfig::default_max_entries")]
    pub max_entries: usize,
}

impl Default for AnnotationCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: Self::default_ttl_secs(),
            max_entries: Self::default_max_entries(),
        }
    }
}

impl AnnotationCacheConfig {
    const fn default_ttl_secs() -> u64 {
        CacheConfig::annotation_defaults().ttl.as_secs()
    }

    const fn default_max_entries() -> usize {
        CacheConfig::annotation_defaults().max_entries
    }

    #[must_use]
    pub const fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(Duration::from_secs(self.ttl_secs), self.max_entries)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SchemaCacheConfig {
    #[serde(default = "SchemaCacheConfig::default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "SchemaCacheConfig::default_max_entries")]
    pub max_entries: usize,
}

impl Default for SchemaCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: Self::default_ttl_secs(),
            max_entries: Self::default_max_entries(),
        }
    }
}

impl SchemaCacheConfig {
    const fn default_ttl_secs() -> u64 {
        CacheConfig::schema_defaults().ttl.as_secs()
    }

    const fn default_max_entries() -> usize {
        CacheConfig::schema_defaults().max_entries
    }

    #[must_use]
    pub const fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(Duration::from_secs(self.ttl_secs), self.max_entries)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }

    /// Parsed level; an unrecognized value falls back to `INFO`.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using info", self.level);
            Level::INFO
        })
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load the user's config file, or defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", config_path.display(), e))?;

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write a template config into `~/medterm/`.
    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        Self::create_config_in(&config_dir)
    }

    /// Write a template holding every default value. Refuses to overwrite.
    pub fn create_config_in(config_dir: &Path) -> anyhow::Result<PathBuf> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(&config_path, template)?;

        Ok(config_path)
    }
}
