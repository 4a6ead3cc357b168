use anyhow::Result;
use connect_model::config::{InspectSettings, OutputFormat};
use connect_model::core::catalog;
use connect_model::ModelError;
use serde_json::json;
use tempfile::TempDir;

/// Settings load from disk and drive the lint policy applied to a decoded record.
#[test]
fn test_settings_file_drives_lint() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_path = temp_dir.path().join("inspect.toml");
    std::fs::write(
        &settings_path,
        r#"
[output]
format = "json"

[lint]
strict = true
ignored_types = ["PhoneNumberCountryCode"]
"#,
    )?;

    let settings = InspectSettings::from_file(&settings_path)?;
    assert_eq!(settings.output.format, OutputFormat::Json);

    let decoded = catalog::decode(
        "ClaimedPhoneNumberSummary",
        json!({
            "PhoneNumberId": "pn-1",
            "PhoneNumberCountryCode": "XK",
            "PhoneNumberStatus": {"Status": "CLAIMED"}
        }),
    )?;
    assert_eq!(decoded.unknown_values.len(), 1);
    assert_eq!(decoded.unknown_values[0].path, "PhoneNumberCountryCode");

    // ignored type, so strict mode passes
    let reported = settings.lint_policy().check(&decoded.unknown_values)?;
    assert!(reported.is_empty());
    Ok(())
}

#[test]
fn test_strict_settings_reject_unknown_nested_value() -> Result<()> {
    let settings = InspectSettings::from_toml_str("[lint]\nstrict = true\n")?;

    let decoded = catalog::decode(
        "ClaimedPhoneNumberSummary",
        json!({"PhoneNumberStatus": {"Status": "RELEASED"}}),
    )?;
    let err = settings
        .lint_policy()
        .check(&decoded.unknown_values)
        .unwrap_err();

    match err {
        ModelError::UnknownEnumValues { count, details } => {
            assert_eq!(count, 1);
            assert!(details.contains("PhoneNumberStatus.Status"));
            assert!(details.contains("RELEASED"));
        }
        other => panic!("expected unknown enum values, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_settings_file() {
    let err = InspectSettings::from_file("/nonexistent/connect-model/inspect.toml").unwrap_err();
    assert!(matches!(err, ModelError::IoError(_)));
}

/// The normalized JSON keeps values and drops members the record does not declare.
#[test]
fn test_normalized_output() -> Result<()> {
    let decoded = catalog::decode(
        "View",
        json!({
            "Name": "Case summary",
            "Type": "CUSTOMER_MANAGED",
            "Version": 3,
            "LegacyField": "dropped"
        }),
    )?;

    assert_eq!(
        decoded.normalized,
        json!({"Name": "Case summary", "Type": "CUSTOMER_MANAGED", "Version": 3})
    );
    assert_eq!(decoded.rendered, "{Name: Case summary,Type: CUSTOMER_MANAGED,Version: 3}");
    Ok(())
}
