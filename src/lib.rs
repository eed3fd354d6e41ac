pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::{DashboardView, Formatter, loader};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Dashboard,
    Summary,
    Alloc,
    Performance,
    Holdings,
    Insights,
    Export { output: Option<PathBuf> },
}

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub portfolio_path: Option<PathBuf>,
    pub prices_path: Option<PathBuf>,
    pub no_animate: bool,
}

impl RunOptions {
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config_path {
            Some(path) => AppConfig::load_from_path(path)?,
            None => AppConfig::load()?,
        };
        if let Some(path) = &self.portfolio_path {
            config.data.portfolio = path.clone();
        }
        if let Some(path) = &self.prices_path {
            config.data.prices = path.clone();
        }
        if self.no_animate {
            config.animate = false;
        }
        Ok(config)
    }
}

pub fn run_command(command: AppCommand, options: &RunOptions) -> Result<()> {
    info!("Portfolio dashboard starting...");

    let config = options.load_config()?;
    debug!("Loaded config: {config:#?}");

    let snapshot = loader::load_snapshot(&config.data.portfolio, &config.data.prices)
        .context("Failed to load portfolio data")?;
    let view = DashboardView::build(&snapshot, &config.client, Local::now(), &config.insights);
    let fmt = Formatter::new(&config.currency_symbol);

    match command {
        AppCommand::Dashboard => cli::dashboard::run(&view, &fmt, config.animate),
        AppCommand::Summary => cli::summary::run(&view, &fmt, config.animate),
        AppCommand::Alloc => cli::alloc::run(&view, &fmt),
        AppCommand::Performance => cli::performance::run(&view),
        AppCommand::Holdings => cli::holdings::run(&view, &fmt),
        AppCommand::Insights => cli::insights::run(&view),
        AppCommand::Export { output } => cli::export::run(&view, output.as_deref())?,
    }
    Ok(())
}
