/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(6)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(
        &headers.iter().map(ToString::to_string).collect::<Vec<_>>(),
        &widths,
    ));

    let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    lines.push("-".repeat(total_width));

    for row in rows {
        lines.push(format_row(row, &widths));
    }

    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::render_entity_table;

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "code", "name"];
        let rows = vec![
            vec!["1".to_string(), "A".to_string(), "short".to_string()],
            vec![
                "200".to_string(),
                "COMP0010".to_string(),
                "a much longer name".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("code"));
        assert!(lines[0].contains("name"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with('1'));
    }

    #[test]
    fn headers_only_table_has_no_data_rows() {
        let table = render_entity_table(&["value"], &[]);
        assert_eq!(table.lines().count(), 2);
    }
}
