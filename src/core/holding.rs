//! Holdings, prices and the views derived from them.

use serde::Serialize;

/// A client's recorded position in one asset, with its cost basis.
///
/// The same `asset_name` may appear more than once when the client holds
/// separate lots of one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub asset_name: String,
    pub asset_class: String,
    pub risk_category: String,
    pub units: f64,
    pub investment_amount: f64,
}

/// Current per-unit price of an asset.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketPrice {
    pub asset_name: String,
    pub current_price: f64,
}

/// A holding joined with its market price and valued.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedHolding {
    pub asset_name: String,
    pub asset_class: String,
    pub risk_category: String,
    pub units: f64,
    pub investment_amount: f64,
    pub current_price: f64,
    pub current_value: f64,
    pub pnl: f64,
    /// `None` when the holding has no cost basis.
    pub return_pct: Option<f64>,
}

/// Investment amount summed over one asset class.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationBucket {
    pub asset_class: String,
    pub total_investment: f64,
}

/// Headline figures shown as KPI tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PortfolioTotals {
    pub total_invested: f64,
    pub current_value: f64,
    pub total_pnl: f64,
}

impl PortfolioTotals {
    /// Overall return on the invested amount, `None` if nothing is invested.
    pub fn return_pct(&self) -> Option<f64> {
        (self.total_invested != 0.0).then(|| self.total_pnl / self.total_invested * 100.0)
    }
}

/// Both input tables of one dashboard invocation.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub holdings: Vec<Holding>,
    pub prices: Vec<MarketPrice>,
}
