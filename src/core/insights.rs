//! Rebalancing hints derived from the allocation and overall result.

use crate::core::allocation::AssetCategory;
use crate::core::holding::{AllocationBucket, PortfolioTotals};
use crate::core::metrics::allocation_shares;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Equity share (percent) at or above which exposure counts as high.
    #[serde(default = "default_equity_high_pct")]
    pub equity_high_pct: f64,
    /// Debt share (percent) below which protection counts as low.
    #[serde(default = "default_debt_low_pct")]
    pub debt_low_pct: f64,
}

fn default_equity_high_pct() -> f64 {
    60.0
}

fn default_debt_low_pct() -> f64 {
    25.0
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            equity_high_pct: default_equity_high_pct(),
            debt_low_pct: default_debt_low_pct(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Performance,
    Risk,
    Protection,
    Rebalance,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn category_share(shares: &[(AllocationBucket, f64)], category: AssetCategory) -> f64 {
    shares
        .iter()
        .filter(|(bucket, _)| AssetCategory::from(bucket.asset_class.as_str()) == category)
        .map(|(_, share)| share)
        .sum()
}

pub fn derive_insights(
    totals: &PortfolioTotals,
    buckets: &[AllocationBucket],
    thresholds: &InsightThresholds,
) -> Vec<Insight> {
    if buckets.is_empty() {
        return vec![Insight::new(
            InsightKind::Performance,
            "No priced holdings, nothing to analyse",
        )];
    }

    let mut insights = Vec::new();
    let performance = if totals.total_pnl > 0.0 {
        "Portfolio has strong performance with positive overall returns"
    } else if totals.total_pnl < 0.0 {
        "Portfolio is below its cost basis with negative overall returns"
    } else {
        "Portfolio is flat against its cost basis"
    };
    insights.push(Insight::new(InsightKind::Performance, performance));

    let shares = allocation_shares(buckets);
    let equity = category_share(&shares, AssetCategory::Equity);
    let debt = category_share(&shares, AssetCategory::Debt);
    debug!("Equity share {equity:.2}%, debt share {debt:.2}%");

    let equity_high = equity >= thresholds.equity_high_pct;
    let debt_low = debt < thresholds.debt_low_pct;

    if equity_high {
        insights.push(Insight::new(
            InsightKind::Risk,
            format!("Equity exposure is high ({equity:.1}%), increasing volatility risk"),
        ));
    }
    if debt_low {
        insights.push(Insight::new(
            InsightKind::Protection,
            format!("Debt allocation is low ({debt:.1}%), reducing downside protection"),
        ));
    }
    if equity_high && debt_low {
        insights.push(Insight::new(
            InsightKind::Rebalance,
            "Rebalancing toward debt can improve risk-adjusted returns",
        ));
    }
    if !equity_high && !debt_low {
        insights.push(Insight::new(
            InsightKind::Balanced,
            "Equity and debt allocation are within the configured bands",
        ));
    }

    insights
}
