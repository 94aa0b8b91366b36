use crate::utils::error::{MatrixError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A GitHub output key must fit on one `key=value` line.
pub fn validate_output_key(field_name: &str, key: &str) -> Result<()> {
    validate_non_empty_string(field_name, key)?;

    if let Some(bad) = key.chars().find(|c| matches!(c, '=' | '\n' | '\r')) {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: format!("Output key cannot contain {:?}", bad),
        });
    }

    Ok(())
}
