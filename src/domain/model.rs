use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::RotaError;

/// Raw cell value as read from a worksheet row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl CellValue {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendition of the cell, empty string for an empty cell.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Truthiness of the cell, for the active flag column.
    pub fn truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.trim().is_empty(),
            CellValue::Number(n) => *n != 0.0,
            CellValue::Date(_) => true,
            CellValue::Bool(b) => *b,
        }
    }
}

pub type Row = Vec<CellValue>;

/// A roster-eligible person, keyed by initials in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Director {
    pub initials: String,
    pub name: String,
    pub email: String,
    pub username: String,
    pub active: bool,
}

impl fmt::Display for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.initials, self.name)
    }
}

pub type Directory = HashMap<String, Director>;

/// Zero-based column positions of the directors sheet, populated once from
/// configuration and passed into the loader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DirectoryColumns {
    pub initials: usize,
    pub name: usize,
    pub email: usize,
    pub username: usize,
    pub active: usize,
}

/// The caller-supplied target month for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotaMonth {
    pub year: i32,
    pub month: u32,
}

impl RotaMonth {
    pub fn window(&self) -> Result<DateWindow, RotaError> {
        DateWindow::for_month(self.year, self.month).ok_or_else(|| RotaError::InvalidMonth {
            value: self.to_string(),
        })
    }
}

impl fmt::Display for RotaMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for RotaMonth {
    type Err = RotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RotaError::InvalidMonth {
            value: s.to_string(),
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(RotaMonth { year, month })
    }
}

/// Half-open interval [start of month, start of next month).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start.checked_add_months(Months::new(1))?;
        Some(DateWindow { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Month label for the email, e.g. "Mar 2024".
    pub fn month_label(&self) -> String {
        self.start.format("%b %Y").to_string()
    }
}

/// Row-level problem found during extraction. Logged, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingDirector { date: NaiveDate },
    UnknownInitials { initials: String, date: NaiveDate },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingDirector { date } => {
                write!(f, "No director assigned on {}", date.format("%d %b %Y"))
            }
            Diagnostic::UnknownInitials { initials, date } => {
                write!(
                    f,
                    "No director with initials {} on {}",
                    initials,
                    date.format("%d %b %Y")
                )
            }
        }
    }
}

/// Result of scanning one weekday column of the calendar sheet.
#[derive(Debug, Default)]
pub struct Extraction {
    pub lines: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// One rota section: a weekday header and its duty lines.
#[derive(Debug)]
pub struct DutySection {
    pub header: &'static str,
    pub lines: Vec<String>,
}

/// The return value of one generation run.
#[derive(Debug)]
pub struct RotaOutcome {
    pub email_text: String,
    pub directors: Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}
