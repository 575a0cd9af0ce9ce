use crate::utils::error::{RotaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Widest column the roster workbook is expected to use.
pub const COL_MAXIMUM: usize = 26;

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RotaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RotaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RotaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_column_index(field_name: &str, value: usize) -> Result<()> {
    if value > COL_MAXIMUM {
        return Err(RotaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Column index must be at most {}", COL_MAXIMUM),
        });
    }
    Ok(())
}

/// A date column needs room for the paired initials column to its right.
pub fn validate_date_column(field_name: &str, value: usize) -> Result<()> {
    if value + 1 > COL_MAXIMUM {
        return Err(RotaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!(
                "Date column must leave room for the initials column (at most {})",
                COL_MAXIMUM - 1
            ),
        });
    }
    Ok(())
}
