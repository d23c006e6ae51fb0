use crate::utils::error::{Result, StudyError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StudyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StudyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 解析單一整數 token，對應主控台輸入的欄位名稱
pub fn parse_integer(field_name: &str, token: &str) -> Result<i32> {
    token
        .trim()
        .parse::<i32>()
        .map_err(|e| StudyError::InputError {
            field: field_name.to_string(),
            message: format!("'{}' is not a whole number ({})", token, e),
        })
}
