use super::ui;
use crate::core::animation::{COUNTER_STEPS, FRAME_INTERVAL, counter_frames};
use crate::core::format::whole_units;
use crate::core::{DashboardView, Formatter};
use comfy_table::Cell;
use std::thread;

const INVESTED_LABEL: &str = "💰 Total Invested";
const VALUE_LABEL: &str = "📈 Current Value";
const PNL_LABEL: &str = "📊 Total P&L";

/// Client banner shown above every dashboard section.
pub fn render_header(view: &DashboardView) -> String {
    format!(
        "{}\n\n{} {}   |   {} {}\n{}",
        ui::style_text(
            "📊 Client Portfolio Analysis & Optimization Dashboard",
            ui::StyleType::Title
        ),
        ui::style_text("Client Name:", ui::StyleType::TotalLabel),
        view.client.name,
        ui::style_text("Client ID:", ui::StyleType::TotalLabel),
        view.client.id,
        ui::style_text(
            &format!("As of {}", view.as_of.format("%Y-%m-%d %H:%M")),
            ui::StyleType::Subtle
        ),
    )
}

/// The three KPI tiles as a single-row table.
pub fn render_kpis(view: &DashboardView, fmt: &Formatter) -> String {
    let totals = &view.totals;
    let pnl_text = match totals.return_pct() {
        Some(pct) => format!("{} ({})", fmt.currency(totals.total_pnl), fmt.percent(pct)),
        None => fmt.currency(totals.total_pnl),
    };

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(INVESTED_LABEL),
        ui::header_cell(VALUE_LABEL),
        ui::header_cell(PNL_LABEL),
    ]);
    table.add_row(vec![
        Cell::new(fmt.currency(totals.total_invested)),
        Cell::new(fmt.currency(totals.current_value)),
        ui::change_cell(whole_units(totals.total_pnl), pnl_text),
    ]);
    table.to_string()
}

/// Counts the invested total up from zero before the tiles are printed.
fn animate_invested(view: &DashboardView, fmt: &Formatter) {
    let frames = counter_frames(view.totals.total_invested, COUNTER_STEPS);
    let pb = ui::new_counter_bar(frames.len() as u64);
    pb.set_prefix(INVESTED_LABEL);
    for frame in frames {
        pb.set_message(fmt.currency(frame));
        pb.inc(1);
        thread::sleep(FRAME_INTERVAL);
    }
    pb.finish_and_clear();
}

pub fn run(view: &DashboardView, fmt: &Formatter, animate: bool) {
    println!("{}\n", render_header(view));
    if animate && console::Term::stdout().is_term() {
        animate_invested(view, fmt);
    }
    println!("{}", render_kpis(view, fmt));
}
