use crate::utils::error::{ModelError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension) => {}
            Some(extension) => {
                return Err(ModelError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(ModelError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ModelError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ModelError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "./record.json").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["summary.json".to_string()];
        assert!(validate_file_extensions("input", &files, &["json"]).is_ok());

        let invalid_files = vec!["summary.yaml".to_string()];
        assert!(validate_file_extensions("input", &invalid_files, &["json"]).is_err());

        let no_extension = vec!["summary".to_string()];
        assert!(validate_file_extensions("input", &no_extension, &["json"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("ListPhoneNumbersSummary".to_string());
        assert!(validate_required_field("record_type", &present).is_ok());

        let missing: Option<String> = None;
        let err = validate_required_field("record_type", &missing).unwrap_err();
        assert!(matches!(err, ModelError::MissingConfigError { .. }));
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["display", "json"]).is_ok());
        assert!(validate_one_of("output.format", "yaml", &["display", "json"]).is_err());
    }
}
