use super::ui;
use crate::core::{DashboardView, Formatter};
use comfy_table::Cell;

const BAR_WIDTH: usize = 30;

/// Asset allocation by class, largest first, with a proportional bar per
/// class standing in for the pie chart.
pub fn render(view: &DashboardView, fmt: &Formatter) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("📌 Asset Allocation", ui::StyleType::Heading)
    );

    if view.allocation.is_empty() {
        output.push_str(&ui::style_text(
            "No priced holdings to allocate.",
            ui::StyleType::Subtle,
        ));
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Asset Class"),
        ui::header_cell("Investment"),
        ui::header_cell("Share"),
        ui::header_cell(""),
    ]);

    for slice in &view.allocation {
        table.add_row(vec![
            Cell::new(&slice.asset_class),
            ui::amount_cell(fmt.currency(slice.total_investment)),
            ui::amount_cell(fmt.percent(slice.share_pct)),
            Cell::new(ui::bar(slice.share_pct, 100.0, BAR_WIDTH)),
        ]);
    }

    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{} {}",
        ui::style_text("Total Invested:", ui::StyleType::TotalLabel),
        ui::style_text(
            &fmt.currency(view.totals.total_invested),
            ui::StyleType::TotalValue
        )
    ));
    output
}

pub fn run(view: &DashboardView, fmt: &Formatter) {
    println!("{}", render(view, fmt));
}
