use crate::domain::model::{DirectoryColumns, EmailMessage, Row};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait ConfigProvider: Send + Sync {
    fn workbook_path(&self) -> PathBuf;
    fn main_sheet(&self) -> &str;
    fn directors_sheet(&self) -> &str;
    fn directory_columns(&self) -> DirectoryColumns;
    fn mon_date_col(&self) -> usize;
    fn wed_date_col(&self) -> usize;
    fn email_template(&self) -> PathBuf;
    fn email_subject(&self) -> &str;
}

#[async_trait]
pub trait WorkbookSource: Send + Sync {
    /// All rows of the named sheet, in sheet order.
    /// Fails with `SheetMissing` when the sheet is absent.
    async fn sheet_rows(&mut self, name: &str) -> Result<Vec<Row>>;
}

#[async_trait]
pub trait Outbox: Send + Sync {
    async fn deliver(&self, message: &EmailMessage) -> Result<()>;
}
