use crate::core::{CellValue, Director, Directory, DirectoryColumns, Row};

/// Marker found in the initials column of the sheet's header row.
const HEADER_MARKER: &str = "Initials";

/// Build the directory of directors keyed on initials.
///
/// Rows without an initials cell (and the header row itself) are skipped.
/// Missing fields load as empty values, and a later row with the same
/// initials overwrites the earlier one.
pub fn load_directors(rows: &[Row], columns: DirectoryColumns) -> Directory {
    let mut directors = Directory::new();

    for row in rows {
        let initials_cell = cell(row, columns.initials);
        if initials_cell.is_empty() {
            continue;
        }
        let initials = initials_cell.to_text();
        if initials == HEADER_MARKER {
            continue;
        }

        let director = Director {
            initials: initials.clone(),
            name: cell(row, columns.name).to_text(),
            email: cell(row, columns.email).to_text(),
            username: cell(row, columns.username).to_text(),
            active: cell(row, columns.active).truthy(),
        };
        directors.insert(initials, director);
    }

    directors
}

fn cell(row: &Row, index: usize) -> &CellValue {
    row.get(index).unwrap_or(&CellValue::Empty)
}
