use crate::core::DashboardView;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Writes the dashboard view as pretty JSON to `output`, or stdout.
pub fn run(view: &DashboardView, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(view).context("Failed to serialize dashboard")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            info!("Exported dashboard to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
