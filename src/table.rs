use comfy_table::{presets::ASCII_FULL, Table};

use crate::report::SummaryRow;

/// Lays out `rows` as a grid table, or returns `None` if there are no rows.
///
/// The columns are the keys of the first row, in order. A row missing one of
/// those keys gets an empty cell.
#[must_use]
pub fn render(rows: &[SummaryRow]) -> Option<Table> {
    let headers: Vec<&str> = rows.first()?.keys().collect();
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(headers.clone());
    for row in rows {
        table.add_row(
            headers
                .iter()
                .map(|key| row.get(key).map(ToString::to_string).unwrap_or_default()),
        );
    }
    Some(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fn_returns_none_for_no_rows() {
        assert!(render(&[]).is_none());
    }

    #[test]
    fn render_fn_uses_first_row_keys_as_headers_and_keeps_row_order() {
        let rows = vec![
            SummaryRow::new()
                .with("position", "Backend Developer")
                .with("avg_performance", 4.85),
            SummaryRow::new()
                .with("position", "QA Engineer")
                .with("avg_performance", 4.2),
        ];
        let text = render(&rows).unwrap().to_string();
        let header = text.find("position").unwrap();
        assert!(header < text.find("avg_performance").unwrap());
        let backend = text.find("Backend Developer").unwrap();
        let qa = text.find("QA Engineer").unwrap();
        assert!(header < backend && backend < qa);
        assert!(text.contains("4.85"));
        assert!(text.contains("4.20"));
    }

    #[test]
    fn render_fn_leaves_missing_values_blank() {
        let rows = vec![
            SummaryRow::new().with("a", "first").with("b", "second"),
            SummaryRow::new().with("a", "only"),
        ];
        let text = render(&rows).unwrap().to_string();
        let only = text.lines().find(|line| line.contains("only")).unwrap();
        assert!(!only.contains("second"));
    }
}
