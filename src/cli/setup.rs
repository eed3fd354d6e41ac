use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

// Include the example config as a string literal in the binary
const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");

const PORTFOLIO_FILE: &str = "client_portfolio.csv";
const PRICES_FILE: &str = "market_prices.csv";

/// Creates a default configuration file at the default location, pointing at
/// the `data/` directory under the current working directory.
pub fn setup() -> Result<()> {
    let data_dir = std::env::current_dir()
        .context("Failed to determine the working directory")?
        .join("data");
    setup_at_path(AppConfig::default_config_path()?, &data_dir)
}

/// Creates a default configuration file with example content at the specified
/// path. Data paths are written as absolute paths under `data_dir`.
pub fn setup_at_path<P: AsRef<Path>>(path: P, data_dir: &Path) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = render_config(data_dir)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

/// The example config with its `data:` entries replaced by quoted absolute paths.
fn render_config(data_dir: &Path) -> Result<String> {
    let data_dir = if data_dir.is_relative() {
        std::env::current_dir()
            .context("Failed to determine the working directory")?
            .join(data_dir)
    } else {
        data_dir.to_path_buf()
    };

    let mut content = EXAMPLE_CONFIG.to_string();
    for file in [PORTFOLIO_FILE, PRICES_FILE] {
        // JSON strings are valid YAML double-quoted scalars
        let quoted = serde_json::to_string(&data_dir.join(file).to_string_lossy())
            .context("Failed to encode data path")?;
        content = content.replace(&format!("\"data/{file}\""), &quoted);
    }
    Ok(content)
}
