use super::ui;
use crate::core::DashboardView;
use crate::core::insights::InsightKind;

fn icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Performance => "📈",
        InsightKind::Risk => "⚠️",
        InsightKind::Protection => "🛡️",
        InsightKind::Rebalance => "🔄",
        InsightKind::Balanced => "✅",
    }
}

pub fn render(view: &DashboardView) -> String {
    let mut output = ui::style_text("🧠 Rebalancing Insights", ui::StyleType::Heading);
    output.push('\n');
    for insight in &view.insights {
        output.push_str(&format!("\n  {} {}", icon(insight.kind), insight.message));
    }
    output
}

pub fn run(view: &DashboardView) {
    println!("{}", render(view));
}
