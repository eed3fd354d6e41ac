//! Broad asset families behind free-text class labels.

/// Broad family an `asset_class` label belongs to, for allocation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Equity,
    Debt,
    Hybrid,
    Other,
}

impl From<&str> for AssetCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "equity" | "stock" | "stocks" => AssetCategory::Equity,
            "debt" | "bond" | "bonds" | "income" | "fixed income" => AssetCategory::Debt,
            "hybrid" | "balanced" => AssetCategory::Hybrid,
            _ => AssetCategory::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(AssetCategory::from("Equity"), AssetCategory::Equity);
        assert_eq!(AssetCategory::from(" DEBT "), AssetCategory::Debt);
        assert_eq!(AssetCategory::from("Fixed Income"), AssetCategory::Debt);
        assert_eq!(AssetCategory::from("Balanced"), AssetCategory::Hybrid);
        assert_eq!(AssetCategory::from("Commodity"), AssetCategory::Other);
    }
}
