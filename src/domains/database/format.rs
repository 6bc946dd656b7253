//! Plain-text rendering of query results.

/// Rows shown before the listing is truncated.
pub const MAX_DISPLAY_ROWS: usize = 25;

/// Render rows as an aligned text table.
///
/// Column widths account for every row, including those that end up
/// truncated from the output.
pub fn format_rows(headers: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "Query executed successfully (no rows returned).".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, value) in row.iter().enumerate() {
            let len = value.chars().count();
            match widths.get_mut(idx) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }

    let render = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| format!("{:<width$}", cell, width = widths[idx]))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let mut lines = Vec::with_capacity(rows.len().min(MAX_DISPLAY_ROWS) + 3);
    lines.push(render(headers));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows.iter().take(MAX_DISPLAY_ROWS) {
        lines.push(render(row));
    }
    if rows.len() > MAX_DISPLAY_ROWS {
        lines.push(format!(
            "... {} more rows truncated ...",
            rows.len() - MAX_DISPLAY_ROWS
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(
            format_rows(&strings(&["id"]), &[]),
            "Query executed successfully (no rows returned)."
        );
    }

    #[test]
    fn test_alignment() {
        let headers = strings(&["ArtistId", "Name"]);
        let rows = vec![strings(&["1", "AC/DC"]), strings(&["22", "Led Zeppelin"])];

        let table = format_rows(&headers, &rows);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines[0], "ArtistId | Name        ");
        assert_eq!(lines[1], "---------+-------------");
        assert_eq!(lines[2], "1        | AC/DC       ");
        assert_eq!(lines[3], "22       | Led Zeppelin");
    }

    #[test]
    fn test_truncation() {
        let headers = strings(&["n"]);
        let rows: Vec<Vec<String>> = (0..30).map(|n| vec![n.to_string()]).collect();

        let table = format_rows(&headers, &rows);
        let lines: Vec<_> = table.lines().collect();

        // header + separator + shown rows + truncation notice
        assert_eq!(lines.len(), 2 + MAX_DISPLAY_ROWS + 1);
        assert_eq!(lines.last().copied(), Some("... 5 more rows truncated ..."));
    }
}
