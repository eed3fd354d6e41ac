use super::ui;
use crate::core::format::whole_units;
use crate::core::{DashboardView, Formatter};
use comfy_table::Cell;

/// The portfolio details table, one row per priced holding.
pub fn render(view: &DashboardView, fmt: &Formatter) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Asset"),
        ui::header_cell("Class"),
        ui::header_cell("Risk"),
        ui::header_cell("Invested"),
        ui::header_cell("Current Value"),
        ui::header_cell("P&L"),
        ui::header_cell("Return"),
    ]);

    for holding in &view.holdings {
        table.add_row(vec![
            Cell::new(&holding.asset_name),
            Cell::new(&holding.asset_class),
            Cell::new(&holding.risk_category),
            ui::amount_cell(fmt.currency(holding.investment_amount)),
            ui::amount_cell(fmt.currency(holding.current_value)),
            ui::change_cell(whole_units(holding.pnl), fmt.currency(holding.pnl)),
            ui::format_optional_cell(holding.return_pct, |pct| fmt.percent(pct)),
        ]);
    }

    let mut output = format!(
        "{}\n\n{table}",
        ui::style_text("📋 Portfolio Details", ui::StyleType::Heading)
    );

    if !view.unmatched.is_empty() {
        output.push_str(&format!(
            "\n\n{} {}",
            ui::style_text("⚠️ No market price for:", ui::StyleType::Error),
            view.unmatched.join(", ")
        ));
    }
    output
}

pub fn run(view: &DashboardView, fmt: &Formatter) {
    println!("{}", render(view, fmt));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::sample_view;

    #[test]
    fn test_holdings_table_formats_rows() {
        let view = sample_view();
        let out = console::strip_ansi_codes(&render(&view, &Formatter::default())).to_string();

        assert!(out.contains("Gilt Fund"));
        assert!(out.contains("₹1,050"));
        assert!(out.contains("5.00%"));
        assert!(out.contains("₹3,300"));
        assert!(out.contains("10.00%"));
    }

    #[test]
    fn test_zero_cost_holding_shows_na() {
        let mut view = sample_view();
        view.holdings[0].investment_amount = 0.0;
        view.holdings[0].return_pct = None;

        let out = console::strip_ansi_codes(&render(&view, &Formatter::default())).to_string();
        assert!(out.contains("N/A"));
    }

    #[test]
    fn test_unmatched_holdings_listed() {
        let view = sample_view();
        let out = console::strip_ansi_codes(&render(&view, &Formatter::default())).to_string();

        assert!(out.contains("No market price for: Old Stock"));
    }
}
