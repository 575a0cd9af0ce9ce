use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("Workbook not found: {}", path.display())]
    WorkbookMissing { path: PathBuf },

    #[error("Sheet not found: {name}")]
    SheetMissing { name: String },

    #[error("Email template not found: {}", path.display())]
    TemplateMissing { path: PathBuf },

    #[error("Invalid month: {value}")]
    InvalidMonth { value: String },

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RotaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RotaError::WorkbookMissing { path } => {
                format!("The rota workbook was not found at {}", path.display())
            }
            RotaError::SheetMissing { name } => {
                format!("The workbook has no sheet named '{}'", name)
            }
            RotaError::TemplateMissing { path } => {
                format!("The email template was not found at {}", path.display())
            }
            RotaError::InvalidMonth { value } => {
                format!("'{}' is not a valid rota month", value)
            }
            RotaError::SpreadsheetError(e) => format!("The workbook could not be read: {}", e),
            RotaError::IoError(e) => format!("File operation failed: {}", e),
            RotaError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            RotaError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!(
                    "Configuration value '{}' for '{}' is invalid: {}",
                    value, field, reason
                )
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RotaError::WorkbookMissing { .. } => {
                "Download the rota workbook or point [workbook] dir/file_name at it".to_string()
            }
            RotaError::SheetMissing { .. } => {
                "Check the main_sheet and directors_sheet names in the configuration".to_string()
            }
            RotaError::TemplateMissing { .. } => {
                "Create the template file or update [email] template in the configuration"
                    .to_string()
            }
            RotaError::InvalidMonth { .. } => "Use the YYYY-MM format, e.g. 2024-03".to_string(),
            RotaError::SpreadsheetError(_) => {
                "Make sure the file is a valid .xlsx workbook and not open elsewhere".to_string()
            }
            RotaError::IoError(_) => "Check file permissions and available disk space".to_string(),
            RotaError::ConfigValidationError { .. } | RotaError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RotaError>;
