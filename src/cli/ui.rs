use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Heading,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Heading => style(text).cyan().bold(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Styles a signed amount green when positive, red when negative.
pub fn style_signed(text: &str, value: f64) -> String {
    if value > 0.0 {
        style(text).green().to_string()
    } else if value < 0.0 {
        style(text).red().to_string()
    } else {
        text.to_string()
    }
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// A right-aligned cell for a formatted number.
pub fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Formats an `Option<T>` into a `Cell`. `None` is displayed as "N/A".
pub fn format_optional_cell<T>(value: Option<T>, format_fn: impl Fn(T) -> String) -> Cell {
    value.map_or(
        Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
        |v| Cell::new(format_fn(v)).set_alignment(CellAlignment::Right),
    )
}

/// Creates a cell for a profit or loss figure with color coding.
pub fn change_cell(value: f64, text: String) -> Cell {
    let cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if value >= 0.0 {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}

/// Horizontal bar of `width` cells scaled by `value / max`.
///
/// Any non-zero value gets at least one cell so small slices stay visible.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value == 0.0 {
        return String::new();
    }
    let ratio = (value.abs() / max).min(1.0);
    let cells = ((ratio * width as f64).round() as usize).max(1);
    "█".repeat(cells)
}

/// A message-only progress bar used to redraw a changing value in place.
pub fn new_counter_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

/// Current terminal width, or 80 columns when stdout is not a terminal.
pub fn term_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80)
}

/// Returns a separator line matching the terminal width.
pub fn separator() -> String {
    "─".repeat(term_width())
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    println!("\n{}", separator());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(bar(100.0, 100.0, 10).chars().count(), 10);
        assert_eq!(bar(-100.0, 100.0, 10).chars().count(), 10);
    }

    #[test]
    fn test_bar_small_and_empty() {
        assert_eq!(bar(0.1, 1000.0, 20).chars().count(), 1);
        assert_eq!(bar(0.0, 1000.0, 20), "");
        assert_eq!(bar(10.0, 0.0, 20), "");
    }
}
