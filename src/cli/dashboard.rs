use super::{alloc, holdings, insights, performance, summary, ui};
use crate::core::{DashboardView, Formatter};

/// Prints every dashboard section in page order.
pub fn run(view: &DashboardView, fmt: &Formatter, animate: bool) {
    summary::run(view, fmt, animate);
    ui::print_separator();
    alloc::run(view, fmt);
    ui::print_separator();
    performance::run(view);
    ui::print_separator();
    holdings::run(view, fmt);
    ui::print_separator();
    insights::run(view);
}
