//! Terminal output helpers shared by the CLI commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Text roles used across the command output.
pub enum StyleType {
    Title,
    RowLabel,
    Amount,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::RowLabel => style(text).bold(),
        StyleType::Amount => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
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

/// Rate column cell: the numeric rate, or a red "Error" when the fetch for
/// that currency failed.
pub fn rate_cell(rate: Option<f64>) -> Cell {
    match rate {
        Some(r) => Cell::new(format!("{r:.2}")).set_alignment(CellAlignment::Right),
        None => Cell::new("Error")
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right),
    }
}

/// Updated column cell: the quote's fetch time, dimmed "N/A" otherwise.
pub fn updated_cell(updated: Option<&str>) -> Cell {
    match updated {
        Some(ts) => Cell::new(ts),
        None => Cell::new("N/A").fg(Color::DarkGrey),
    }
}

/// Creates a progress bar for the rate fetches.
pub fn new_fetch_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}
