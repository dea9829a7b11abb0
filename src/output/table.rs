//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::display::PropertyDisplay;
    use crate::schema::catalog;

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<PropertyDisplay> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_format_table_properties() {
        let rows: Vec<PropertyDisplay> = catalog::DATABASE_TABLE
            .properties()
            .map(PropertyDisplay::from)
            .collect();

        let result = format_table(&rows);

        assert!(result.contains("PROPERTY"));
        assert!(result.contains("KIND"));
        assert!(result.contains("database_columns"));
        assert!(result.contains("reference list"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let rows: Vec<PropertyDisplay> = catalog::LABEL
            .properties()
            .map(PropertyDisplay::from)
            .collect();

        let result = format_table(&rows);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
