//! Valuation of holdings against market prices.
//!
//! Every function here is pure: the same inputs always give the same output
//! and nothing is cached between calls.
use crate::core::holding::{
    AllocationBucket, EnrichedHolding, Holding, MarketPrice, PortfolioTotals,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

fn price_index(prices: &[MarketPrice]) -> HashMap<&str, f64> {
    prices
        .iter()
        .map(|p| (p.asset_name.as_str(), p.current_price))
        .collect()
}

/// Joins holdings to prices on `asset_name` and values each match.
///
/// This is an inner join. Holdings without a price are left out, see
/// [`unmatched_holdings`]. Output follows the order of `holdings`.
///
/// A holding with a zero cost basis gets `return_pct: None` rather than an
/// infinite or NaN percentage.
pub fn enrich(holdings: &[Holding], prices: &[MarketPrice]) -> Vec<EnrichedHolding> {
    let index = price_index(prices);

    let enriched: Vec<EnrichedHolding> = holdings
        .iter()
        .filter_map(|holding| {
            let current_price = *index.get(holding.asset_name.as_str())?;
            let current_value = holding.units * current_price;
            let pnl = current_value - holding.investment_amount;
            let return_pct = (holding.investment_amount != 0.0)
                .then(|| pnl / holding.investment_amount * 100.0);

            Some(EnrichedHolding {
                asset_name: holding.asset_name.clone(),
                asset_class: holding.asset_class.clone(),
                risk_category: holding.risk_category.clone(),
                units: holding.units,
                investment_amount: holding.investment_amount,
                current_price,
                current_value,
                pnl,
                return_pct,
            })
        })
        .collect();

    if enriched.len() < holdings.len() {
        warn!(
            "{} of {} holdings have no market price and were left out",
            holdings.len() - enriched.len(),
            holdings.len()
        );
    }
    debug!("Enriched {} holdings", enriched.len());
    enriched
}

/// Holdings that [`enrich`] drops because no price row matches them.
pub fn unmatched_holdings<'a>(
    holdings: &'a [Holding],
    prices: &[MarketPrice],
) -> Vec<&'a Holding> {
    let index = price_index(prices);
    holdings
        .iter()
        .filter(|h| !index.contains_key(h.asset_name.as_str()))
        .collect()
}

/// Sums investment amount per asset class, one bucket per class, sorted by
/// class name.
pub fn aggregate_by_class(enriched: &[EnrichedHolding]) -> Vec<AllocationBucket> {
    let mut by_class: BTreeMap<&str, f64> = BTreeMap::new();
    for holding in enriched {
        *by_class.entry(holding.asset_class.as_str()).or_default() += holding.investment_amount;
    }

    by_class
        .into_iter()
        .map(|(asset_class, total_investment)| AllocationBucket {
            asset_class: asset_class.to_string(),
            total_investment,
        })
        .collect()
}

/// Orders buckets for the allocation chart: largest first, ties by name.
pub fn sort_for_display(buckets: &mut [AllocationBucket]) {
    buckets.sort_by(|a, b| {
        b.total_investment
            .total_cmp(&a.total_investment)
            .then_with(|| a.asset_class.cmp(&b.asset_class))
    });
}

/// Pairs each bucket with its percentage of the total investment.
pub fn allocation_shares(buckets: &[AllocationBucket]) -> Vec<(AllocationBucket, f64)> {
    let total: f64 = buckets.iter().map(|b| b.total_investment).sum();
    buckets
        .iter()
        .map(|bucket| {
            let share = if total > 0.0 {
                bucket.total_investment / total * 100.0
            } else {
                0.0
            };
            (bucket.clone(), share)
        })
        .collect()
}

pub fn totals(enriched: &[EnrichedHolding]) -> PortfolioTotals {
    enriched
        .iter()
        .fold(PortfolioTotals::default(), |acc, h| PortfolioTotals {
            total_invested: acc.total_invested + h.investment_amount,
            current_value: acc.current_value + h.current_value,
            total_pnl: acc.total_pnl + h.pnl,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn holding(name: &str, class: &str, units: f64, invested: f64) -> Holding {
        Holding {
            asset_name: name.to_string(),
            asset_class: class.to_string(),
            risk_category: "Medium".to_string(),
            units,
            investment_amount: invested,
        }
    }

    fn price(name: &str, current_price: f64) -> MarketPrice {
        MarketPrice {
            asset_name: name.to_string(),
            current_price,
        }
    }

    fn sample() -> (Vec<Holding>, Vec<MarketPrice>) {
        let holdings = vec![
            holding("Nifty ETF", "Equity", 120.0, 24_000.0),
            holding("Gilt Fund", "Debt", 310.5, 15_000.0),
            holding("Gold ETF", "Commodity", 40.0, 2_000.0),
            holding("Bank Stock", "Equity", 15.0, 21_500.0),
        ];
        let prices = vec![
            price("Bank Stock", 1_612.35),
            price("Gold ETF", 61.2),
            price("Gilt Fund", 50.1),
            price("Nifty ETF", 231.75),
        ];
        (holdings, prices)
    }

    #[test]
    fn test_single_holding_scenario() {
        let holdings = vec![holding("AssetA", "Equity", 10.0, 1000.0)];
        let prices = vec![price("AssetA", 120.0)];

        let enriched = enrich(&holdings, &prices);

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].current_price, 120.0);
        assert_eq!(enriched[0].current_value, 1200.0);
        assert_eq!(enriched[0].pnl, 200.0);
        assert_eq!(enriched[0].return_pct, Some(20.0));
    }

    #[test]
    fn test_enrich_keeps_holdings_order() {
        let (holdings, prices) = sample();
        let names: Vec<_> = enrich(&holdings, &prices)
            .into_iter()
            .map(|h| h.asset_name)
            .collect();
        assert_eq!(names, ["Nifty ETF", "Gilt Fund", "Gold ETF", "Bank Stock"]);
    }

    #[test]
    fn test_current_value_sum_matches_raw_product() {
        let (holdings, prices) = sample();
        let enriched = enrich(&holdings, &prices);

        let expected: f64 = holdings
            .iter()
            .map(|h| {
                let p = prices.iter().find(|p| p.asset_name == h.asset_name).unwrap();
                h.units * p.current_price
            })
            .sum();
        let actual: f64 = enriched.iter().map(|h| h.current_value).sum();

        assert!((actual - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_investment_has_no_return() {
        let holdings = vec![holding("Bonus Shares", "Equity", 5.0, 0.0)];
        let prices = vec![price("Bonus Shares", 80.0)];

        let enriched = enrich(&holdings, &prices);

        assert_eq!(enriched[0].current_value, 400.0);
        assert_eq!(enriched[0].pnl, 400.0);
        assert_eq!(enriched[0].return_pct, None);
    }

    #[test]
    fn test_unmatched_holding_excluded() {
        let holdings = vec![
            holding("A", "Equity", 1.0, 10.0),
            holding("Delisted", "Equity", 1.0, 10.0),
            holding("C", "Debt", 1.0, 10.0),
        ];
        let prices = vec![price("A", 12.0), price("C", 9.0)];

        let enriched = enrich(&holdings, &prices);
        let unmatched = unmatched_holdings(&holdings, &prices);

        assert_eq!(enriched.len(), 2);
        assert!(enriched.iter().all(|h| h.asset_name != "Delisted"));
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].asset_name, "Delisted");
    }

    #[test]
    fn test_duplicate_lots_each_enriched() {
        let holdings = vec![
            holding("Gold ETF", "Commodity", 1.0, 50.0),
            holding("Gold ETF", "Commodity", 2.0, 130.0),
        ];
        let prices = vec![price("Gold ETF", 60.0)];

        let enriched = enrich(&holdings, &prices);

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].pnl, 10.0);
        assert_eq!(enriched[1].pnl, -10.0);
    }

    #[test]
    fn test_enrich_is_idempotent() {
        let (holdings, prices) = sample();
        assert_eq!(enrich(&holdings, &prices), enrich(&holdings, &prices));
    }

    #[test]
    fn test_aggregate_same_class() {
        let holdings = vec![
            holding("Gilt Fund", "Debt", 1.0, 500.0),
            holding("Corporate Bond", "Debt", 1.0, 1500.0),
        ];
        let prices = vec![price("Gilt Fund", 1.0), price("Corporate Bond", 1.0)];

        let buckets = aggregate_by_class(&enrich(&holdings, &prices));

        assert_eq!(
            buckets,
            vec![AllocationBucket {
                asset_class: "Debt".to_string(),
                total_investment: 2000.0,
            }]
        );
    }

    #[test]
    fn test_bucket_sums_match_total_invested() {
        let (holdings, prices) = sample();
        let enriched = enrich(&holdings, &prices);

        let buckets = aggregate_by_class(&enriched);
        let bucket_sum: f64 = buckets.iter().map(|b| b.total_investment).sum();

        assert_eq!(buckets.len(), 3);
        assert!((bucket_sum - totals(&enriched).total_invested).abs() < TOLERANCE);
    }

    #[test]
    fn test_totals_pnl_identity() {
        let (holdings, prices) = sample();
        let totals = totals(&enrich(&holdings, &prices));

        assert_eq!(totals.total_invested, 62_500.0);
        let identity = totals.current_value - totals.total_invested;
        assert!((totals.total_pnl - identity).abs() < TOLERANCE);
    }

    #[test]
    fn test_totals_of_empty_input() {
        let totals = totals(&[]);
        assert_eq!(totals, PortfolioTotals::default());
        assert_eq!(totals.return_pct(), None);
    }

    #[test]
    fn test_sort_for_display_and_shares() {
        let mut buckets = vec![
            AllocationBucket {
                asset_class: "Commodity".to_string(),
                total_investment: 1000.0,
            },
            AllocationBucket {
                asset_class: "Equity".to_string(),
                total_investment: 6000.0,
            },
            AllocationBucket {
                asset_class: "Cash".to_string(),
                total_investment: 1000.0,
            },
            AllocationBucket {
                asset_class: "Debt".to_string(),
                total_investment: 2000.0,
            },
        ];

        sort_for_display(&mut buckets);
        let shares = allocation_shares(&buckets);

        let order: Vec<_> = shares.iter().map(|(b, _)| b.asset_class.as_str()).collect();
        assert_eq!(order, ["Equity", "Debt", "Cash", "Commodity"]);
        assert_eq!(shares[0].1, 60.0);
        assert_eq!(shares[1].1, 20.0);
    }

    #[test]
    fn test_shares_of_zero_total() {
        let buckets = vec![AllocationBucket {
            asset_class: "Equity".to_string(),
            total_investment: 0.0,
        }];
        assert_eq!(allocation_shares(&buckets)[0].1, 0.0);
    }
}
