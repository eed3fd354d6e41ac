//! The complete dashboard as plain data, ready for rendering or export.

use crate::core::config::ClientConfig;
use crate::core::holding::{EnrichedHolding, PortfolioTotals, Snapshot};
use crate::core::insights::{Insight, InsightThresholds, derive_insights};
use crate::core::metrics;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSlice {
    pub asset_class: String,
    pub total_investment: f64,
    pub share_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub client: ClientConfig,
    pub as_of: DateTime<Local>,
    pub totals: PortfolioTotals,
    /// Largest class first.
    pub allocation: Vec<AllocationSlice>,
    pub holdings: Vec<EnrichedHolding>,
    /// Holdings left out for lack of a market price.
    pub unmatched: Vec<String>,
    pub insights: Vec<Insight>,
}

impl DashboardView {
    pub fn build(
        snapshot: &Snapshot,
        client: &ClientConfig,
        as_of: DateTime<Local>,
        thresholds: &InsightThresholds,
    ) -> Self {
        let holdings = metrics::enrich(&snapshot.holdings, &snapshot.prices);
        let totals = metrics::totals(&holdings);

        let mut buckets = metrics::aggregate_by_class(&holdings);
        metrics::sort_for_display(&mut buckets);
        let insights = derive_insights(&totals, &buckets, thresholds);

        let allocation = metrics::allocation_shares(&buckets)
            .into_iter()
            .map(|(bucket, share_pct)| AllocationSlice {
                asset_class: bucket.asset_class,
                total_investment: bucket.total_investment,
                share_pct,
            })
            .collect();

        let unmatched = metrics::unmatched_holdings(&snapshot.holdings, &snapshot.prices)
            .into_iter()
            .map(|h| h.asset_name.clone())
            .collect();

        DashboardView {
            client: client.clone(),
            as_of,
            totals,
            allocation,
            holdings,
            unmatched,
            insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::holding::{Holding, MarketPrice};

    fn snapshot() -> Snapshot {
        let holding = |name: &str, class: &str, units: f64, invested: f64| Holding {
            asset_name: name.to_string(),
            asset_class: class.to_string(),
            risk_category: "High".to_string(),
            units,
            investment_amount: invested,
        };
        Snapshot {
            holdings: vec![
                holding("Gilt Fund", "Debt", 100.0, 1_000.0),
                holding("Nifty ETF", "Equity", 10.0, 3_000.0),
                holding("Old Stock", "Equity", 5.0, 500.0),
            ],
            prices: vec![
                MarketPrice {
                    asset_name: "Gilt Fund".to_string(),
                    current_price: 10.5,
                },
                MarketPrice {
                    asset_name: "Nifty ETF".to_string(),
                    current_price: 330.0,
                },
            ],
        }
    }

    #[test]
    fn test_build_view() {
        let client = ClientConfig::default();
        let view = DashboardView::build(
            &snapshot(),
            &client,
            Local::now(),
            &InsightThresholds::default(),
        );

        assert_eq!(view.holdings.len(), 2);
        assert_eq!(view.unmatched, vec!["Old Stock".to_string()]);
        assert_eq!(view.totals.total_invested, 4_000.0);
        assert_eq!(view.totals.current_value, 4_350.0);
        assert_eq!(view.totals.total_pnl, 350.0);

        assert_eq!(view.allocation[0].asset_class, "Equity");
        assert_eq!(view.allocation[0].share_pct, 75.0);
        assert_eq!(view.allocation[1].asset_class, "Debt");
        assert!(!view.insights.is_empty());
    }

    #[test]
    fn test_view_serializes() {
        let view = DashboardView::build(
            &snapshot(),
            &ClientConfig::default(),
            Local::now(),
            &InsightThresholds::default(),
        );

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["totals"]["total_pnl"], 350.0);
        assert_eq!(json["holdings"][0]["asset_name"], "Gilt Fund");
        assert_eq!(json["holdings"][0]["return_pct"], 5.0);
        assert_eq!(json["insights"][0]["kind"], "performance");
    }
}
