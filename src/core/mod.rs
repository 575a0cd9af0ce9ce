pub mod directory;
pub mod emails;
pub mod generator;
pub mod rota;
pub mod schedule;

pub use crate::domain::model::{
    CellValue, DateWindow, Diagnostic, Director, Directory, DirectoryColumns, DutySection,
    EmailMessage, Extraction, RotaMonth, RotaOutcome, Row,
};
pub use crate::domain::ports::{ConfigProvider, Outbox, WorkbookSource};
pub use crate::utils::error::Result;
