use crate::core::lint::LintPolicy;
use crate::utils::error::{ModelError, Result};
use crate::utils::logger;
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{Name: value,...}` rendering.
    #[default]
    Display,
    /// Normalized wire JSON.
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["display", "json"];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "display" => Ok(OutputFormat::Display),
            "json" => Ok(OutputFormat::Json),
            other => Err(ModelError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Settings for the inspection tool, read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectSettings {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub lint: LintConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    pub strict: Option<bool>,
    pub ignored_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    pub level: Option<String>,
}

impl InspectSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ModelError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ModelError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The command line wins over the file for anything it sets.
    pub fn apply_cli_overrides(&mut self, format: Option<&str>, strict: bool) -> Result<()> {
        if let Some(format) = format {
            self.output.format = OutputFormat::parse(format)?;
        }
        if strict {
            self.lint.strict = Some(true);
        }
        Ok(())
    }

    pub fn lint_policy(&self) -> LintPolicy {
        LintPolicy::new(self.lint.strict.unwrap_or(false))
            .with_ignored_types(self.lint.ignored_types.clone().unwrap_or_default())
    }

    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(true)
    }
}

impl Validate for InspectSettings {
    fn validate(&self) -> Result<()> {
        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, logger::LEVELS)?;
        }
        if let Some(ignored) = &self.lint.ignored_types {
            for name in ignored {
                if name.trim().is_empty() {
                    return Err(ModelError::InvalidConfigValueError {
                        field: "lint.ignored_types".to_string(),
                        value: name.clone(),
                        reason: "Type name cannot be empty".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let settings = InspectSettings::from_toml_str("").unwrap();
        assert_eq!(settings.output.format, OutputFormat::Display);
        assert_eq!(settings.logging.format, LogFormat::Compact);
        assert!(!settings.lint_policy().strict);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_full_file() {
        let settings = InspectSettings::from_toml_str(
            r#"
[output]
format = "json"
pretty = false

[lint]
strict = true
ignored_types = ["PhoneNumberCountryCode"]

[logging]
format = "json"
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(!settings.pretty());
        assert_eq!(settings.logging.format, LogFormat::Json);
        let policy = settings.lint_policy();
        assert!(policy.strict);
        assert_eq!(policy.ignored_types, vec!["PhoneNumberCountryCode".to_string()]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_unset_env_var_is_kept_verbatim() {
        let settings = InspectSettings::from_toml_str(
            r#"
[logging]
level = "${CONNECT_MODEL_TEST_SURELY_UNSET_LEVEL}"
"#,
        )
        .unwrap();
        assert_eq!(
            settings.logging.level.as_deref(),
            Some("${CONNECT_MODEL_TEST_SURELY_UNSET_LEVEL}")
        );
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = InspectSettings::default();
        settings.apply_cli_overrides(Some("json"), true).unwrap();
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.lint_policy().strict);

        assert!(settings.apply_cli_overrides(Some("yaml"), false).is_err());
    }

    #[test]
    fn test_bad_format_is_a_config_error() {
        let err = InspectSettings::from_toml_str("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ModelError::ConfigError { .. }));
    }
}
