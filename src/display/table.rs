//! Plain-text table rendering

/// Render `headers` and `rows` as a left-justified, `|`-separated table.
///
/// Each column is as wide as its widest cell (header included). With no
/// rows only the header line is produced.
pub fn render_table<H, R>(headers: &[H], rows: &[R]) -> String
where
    H: AsRef<str>,
    R: AsRef<[String]>,
{
    let mut widths: Vec<usize> = headers.iter().map(|h| cell_width(h.as_ref())).collect();
    for row in rows {
        for (idx, cell) in row.as_ref().iter().enumerate() {
            let width = cell_width(cell);
            match widths.get_mut(idx) {
                Some(w) => *w = (*w).max(width),
                None => widths.push(width),
            }
        }
    }

    let header_line = format_row(headers.iter().map(|h| h.as_ref()), &widths);
    if rows.is_empty() {
        return header_line;
    }

    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![header_line, separator];
    lines.extend(
        rows.iter()
            .map(|row| format_row(row.as_ref().iter().map(String::as_str), &widths)),
    );
    lines.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
}

// Character count, so "Δ" is one column wide
fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}
