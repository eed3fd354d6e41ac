use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use portdash::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<PathBuf>,

    /// Holdings CSV, overrides the configured path
    #[arg(long, global = true)]
    portfolio: Option<PathBuf>,

    /// Market prices CSV, overrides the configured path
    #[arg(long, global = true)]
    prices: Option<PathBuf>,

    /// Skip the count-up animation of the invested total
    #[arg(long, global = true)]
    no_animate: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for portdash::AppCommand {
    fn from(cmd: Commands) -> portdash::AppCommand {
        match cmd {
            Commands::Dashboard => portdash::AppCommand::Dashboard,
            Commands::Summary => portdash::AppCommand::Summary,
            Commands::Alloc => portdash::AppCommand::Alloc,
            Commands::Performance => portdash::AppCommand::Performance,
            Commands::Holdings => portdash::AppCommand::Holdings,
            Commands::Insights => portdash::AppCommand::Insights,
            Commands::Export { output } => portdash::AppCommand::Export { output },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the full dashboard
    Dashboard,
    /// Display invested, current value and P&L tiles
    Summary,
    /// Display allocation by asset class
    Alloc,
    /// Display profit and loss per asset
    Performance,
    /// Display the portfolio details table
    Holdings,
    /// Display rebalancing insights
    Insights,
    /// Export the dashboard data as JSON
    Export {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = portdash::RunOptions {
        config_path: cli.config_path,
        portfolio_path: cli.portfolio,
        prices_path: cli.prices,
        no_animate: cli.no_animate,
    };

    let result = match cli.command {
        Some(Commands::Setup) => portdash::cli::setup::setup(),
        Some(cmd) => portdash::run_command(cmd.into(), &options),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
