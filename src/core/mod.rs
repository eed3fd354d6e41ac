//! Core dashboard logic: loading, valuation, formatting and insights

pub mod allocation;
pub mod animation;
pub mod config;
pub mod format;
pub mod holding;
pub mod insights;
pub mod loader;
pub mod log;
pub mod metrics;
pub mod view;

// Re-export main types for cleaner imports
pub use format::{FormatKind, Formatter};
pub use holding::{
    AllocationBucket, EnrichedHolding, Holding, MarketPrice, PortfolioTotals, Snapshot,
};
pub use loader::LoadError;
pub use view::DashboardView;
