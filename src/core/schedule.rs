use crate::core::{DateWindow, Diagnostic, Directory, Extraction, Row};

/// Scan one weekday column of the calendar sheet and collect the duty lines
/// for dates inside the window, preserving sheet row order.
pub fn extract_duty_lines(
    rows: &[Row],
    date_col: usize,
    window: DateWindow,
    directors: &Directory,
) -> Extraction {
    let mut extraction = Extraction::default();
    // 縮寫欄固定在日期欄的右側
    let initials_col = date_col + 1;

    for row in rows {
        let Some(date) = row.get(date_col).and_then(|cell| cell.as_date()) else {
            continue;
        };
        if !window.contains(date) {
            continue;
        }

        let initials = match row.get(initials_col) {
            Some(cell) if !cell.is_empty() => cell.to_text(),
            _ => {
                extraction
                    .diagnostics
                    .push(Diagnostic::MissingDirector { date });
                continue;
            }
        };

        match directors.get(&initials) {
            Some(director) => extraction
                .lines
                .push(format!("{}, {}", date.format("%d/%m/%y"), director.name)),
            None => extraction
                .diagnostics
                .push(Diagnostic::UnknownInitials { initials, date }),
        }
    }

    extraction
}
