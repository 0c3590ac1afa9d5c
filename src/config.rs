use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{KKPHIM_BASE_URL, categories, limits};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub catalog: CatalogConfig,

    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// 0 means tokio's default.
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            worker_threads: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,

    /// Per-request timeout. A timed-out page counts as a failed page.
    pub request_timeout_secs: u64,

    /// Items requested per upstream page.
    pub page_size: u32,

    /// Upper bound on pages fetched per category aggregation.
    pub max_pages: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: KKPHIM_BASE_URL.to_string(),
            request_timeout_secs: 30,
            page_size: limits::DEFAULT_PAGE_SIZE,
            max_pages: limits::DEFAULT_MAX_PAGES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Category slugs the "for you" pool samples from.
    pub pool: Vec<String>,

    pub draws: u32,

    pub page_size: u32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            pool: categories::TYPE_LISTS
                .iter()
                .map(ToString::to_string)
                .collect(),
            draws: limits::DEFAULT_DISCOVERY_DRAWS,
            page_size: limits::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("phimdex").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".phimdex").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.base_url.is_empty() {
            anyhow::bail!("Catalog base URL cannot be empty");
        }

        if self.catalog.page_size == 0 || self.catalog.max_pages == 0 {
            anyhow::bail!("Catalog page_size and max_pages must be > 0");
        }

        if self.discovery.pool.is_empty() {
            anyhow::bail!("Discovery pool must name at least one category");
        }

        if self.discovery.draws == 0 || self.discovery.page_size == 0 {
            anyhow::bail!("Discovery draws and page_size must be > 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog.base_url, KKPHIM_BASE_URL);
        assert_eq!(config.catalog.max_pages, 5);
        assert_eq!(config.discovery.draws, 5);
        assert!(config.discovery.pool.contains(&"phim-le".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("[discovery]"));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [catalog]
            max_pages = 8
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.catalog.max_pages, 8);
        assert_eq!(config.catalog.base_url, KKPHIM_BASE_URL);
        assert_eq!(config.discovery.draws, 5);
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let mut config = Config::default();
        config.discovery.pool.clear();
        assert!(config.validate().is_err());
    }
}
