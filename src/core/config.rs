use crate::core::format::DEFAULT_CURRENCY_SYMBOL;
use crate::core::insights::InsightThresholds;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Display labels for the client whose portfolio is shown.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub name: String,
    pub id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            name: "Client".to_string(),
            id: "N/A".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DataConfig {
    pub portfolio: PathBuf,
    pub prices: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            portfolio: PathBuf::from("data").join("client_portfolio.csv"),
            prices: PathBuf::from("data").join("market_prices.csv"),
        }
    }
}

impl DataConfig {
    /// Makes relative paths relative to `base` instead of the working directory.
    fn resolve_against(&mut self, base: &Path) {
        for path in [&mut self.portfolio, &mut self.prices] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_animate() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_animate")]
    pub animate: bool,
    #[serde(default)]
    pub insights: InsightThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            client: ClientConfig::default(),
            data: DataConfig::default(),
            currency_symbol: default_currency_symbol(),
            animate: default_animate(),
            insights: InsightThresholds::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or falls back to built-in
    /// defaults when no config file has been set up.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "portdash")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.data.resolve_against(base);
        }
        debug!("Successfully loaded config");
        Ok(config)
    }
}
