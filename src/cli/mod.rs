//! Terminal rendering of the dashboard sections

pub mod alloc;
pub mod dashboard;
pub mod export;
pub mod holdings;
pub mod insights;
pub mod performance;
pub mod setup;
pub mod summary;
pub mod ui;
