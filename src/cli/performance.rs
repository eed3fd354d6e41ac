use super::ui;
use crate::core::{DashboardView, format::si};
use comfy_table::Cell;

const BAR_WIDTH: usize = 30;

/// Profit or loss per holding as horizontal bars, scaled to the largest
/// absolute figure.
pub fn render(view: &DashboardView) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("📊 Asset-wise Performance", ui::StyleType::Heading)
    );

    if view.holdings.is_empty() {
        output.push_str(&ui::style_text(
            "No priced holdings to chart.",
            ui::StyleType::Subtle,
        ));
        return output;
    }

    let max = view
        .holdings
        .iter()
        .map(|h| h.pnl.abs())
        .fold(0.0_f64, f64::max);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Asset"),
        ui::header_cell("Class"),
        ui::header_cell("P&L"),
        ui::header_cell("Profit / Loss"),
    ]);

    for holding in &view.holdings {
        let bar = ui::bar(holding.pnl, max, BAR_WIDTH);
        table.add_row(vec![
            Cell::new(&holding.asset_name),
            Cell::new(&holding.asset_class),
            ui::change_cell(holding.pnl, si(holding.pnl)),
            Cell::new(ui::style_signed(&bar, holding.pnl)),
        ]);
    }

    output.push_str(&table.to_string());
    output
}

pub fn run(view: &DashboardView) {
    println!("{}", render(view));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::sample_view;

    #[test]
    fn test_performance_labels() {
        let view = sample_view();
        let out = console::strip_ansi_codes(&render(&view)).to_string();

        assert!(out.contains("Nifty ETF"));
        assert!(out.contains("300"));
        assert!(out.contains("50"));
        assert!(out.contains(&"█".repeat(BAR_WIDTH)));
    }
}
