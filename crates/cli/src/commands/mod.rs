//! View commands and shared table rendering.

pub mod booking;
pub mod dashboard;

/// Render rows as a fixed-width text table.
///
/// Column widths are sized to the widest cell (header included).
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.len());
            }
        }
    }

    let render_row = |cells: &[String]| -> String {
        let line = cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        line.trim_end().to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");

    let mut out = String::new();
    out.push_str(&render_row(&header_cells));
    out.push('\n');
    out.push_str(&separator);
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(row));
    }
    out
}

/// Yes/no rendering for boolean flags.
fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes_columns_to_widest_cell() {
        let rendered = table(
            &["ID", "Name"],
            &[
                vec!["1".to_string(), "Jane Doe".to_string()],
                vec!["42".to_string(), "Al".to_string()],
            ],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "--  --------");
        assert_eq!(lines[2], "1   Jane Doe");
        assert_eq!(lines[3], "42  Al");
    }

    #[test]
    fn test_table_with_no_rows() {
        let rendered = table(&["ID"], &[]);
        assert_eq!(rendered, "ID\n--");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
