//! Table output formatting for CLI commands
//!
//! Renders categories with comfy-table, colouring the swatch column when
//! the terminal allows it.

use crate::domain::models::Category;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Formatter that colours output when the terminal supports it.
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Formatter with explicit settings.
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format a list of categories as a table
    pub fn format_categories(&self, categories: &[Category]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Color").add_attribute(Attribute::Bold),
            Cell::new("Created").add_attribute(Attribute::Bold),
        ]);

        for category in categories {
            let color_text = category.color.clone().unwrap_or_else(|| "-".to_string());
            let color_cell = match category.color.as_deref().and_then(parse_hex_color) {
                Some(color) if self.use_colors => Cell::new(format!("■ {color_text}")).fg(color),
                _ => Cell::new(color_text),
            };

            table.add_row(vec![
                Cell::new(category.id),
                Cell::new(&category.name),
                color_cell,
                Cell::new(category.created_at.format("%Y-%m-%d").to_string()),
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// `#rrggbb` to an RGB terminal color
fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_categories_lists_names() {
        let formatter = TableFormatter::with_config(false, Some(80));
        let categories = vec![Category::new(1, "Groceries"), Category::new(2, "Rent")];
        let output = formatter.format_categories(&categories);
        assert!(output.contains("Groceries"));
        assert!(output.contains("Rent"));
        assert!(output.contains("Name"));
    }

    #[test]
    fn test_parse_hex_color() {
        assert!(matches!(
            parse_hex_color("#ff8000"),
            Some(Color::Rgb { r: 255, g: 128, b: 0 })
        ));
        assert!(parse_hex_color("ff8000").is_none());
        assert!(parse_hex_color("#fff").is_none());
        assert!(parse_hex_color("#zzzzzz").is_none());
    }
}
