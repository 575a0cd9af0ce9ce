use async_trait::async_trait;
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::model::{CellValue, Row};
use crate::domain::ports::WorkbookSource;
use crate::utils::error::{Result, RotaError};

/// Calamine-backed workbook, opened read-only for one generation run.
pub struct XlsxWorkbook {
    workbook: Xlsx<BufReader<File>>,
}

impl XlsxWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RotaError::WorkbookMissing {
                path: path.to_path_buf(),
            });
        }
        let workbook: Xlsx<_> = open_workbook(path)?;
        Ok(Self { workbook })
    }
}

#[async_trait]
impl WorkbookSource for XlsxWorkbook {
    async fn sheet_rows(&mut self, name: &str) -> Result<Vec<Row>> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|err| match err {
                XlsxError::WorksheetNotFound(name) => RotaError::SheetMissing { name },
                other => RotaError::SpreadsheetError(other),
            })?;

        Ok(range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect())
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Text(format!("#ERR({:?})", e)),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|dt| CellValue::Date(dt.date()))
            .unwrap_or(CellValue::Empty),
        Data::DateTimeIso(s) => parse_iso_date(s),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn parse_iso_date(s: &str) -> CellValue {
    let date_part = s.get(..10).unwrap_or(s);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => CellValue::Date(date),
        Err(_) => CellValue::Text(s.to_string()),
    }
}
