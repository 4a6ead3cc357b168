//! Local report of enumeration values outside their documented sets.
//!
//! The service stays the authority on what it accepts. This only lets tooling
//! flag values early; records are never rejected at construction time.

use crate::domain::record::{Record, UnknownEnumValue};
use crate::utils::error::{ModelError, Result};

/// Every unknown enumeration value in `record`, with its field path.
pub fn unknown_values<R: Record>(record: &R) -> Vec<UnknownEnumValue> {
    let mut out = Vec::new();
    record.collect_unknown("", &mut out);
    out
}

#[derive(Debug, Clone, Default)]
pub struct LintPolicy {
    /// Fail instead of warn when unknown values are found.
    pub strict: bool,
    /// Enumeration type names whose unknown values are tolerated.
    pub ignored_types: Vec<String>,
}

impl LintPolicy {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            ignored_types: Vec::new(),
        }
    }

    pub fn with_ignored_types(mut self, ignored_types: Vec<String>) -> Self {
        self.ignored_types = ignored_types;
        self
    }

    /// Filters out ignored findings, logs the rest, and errors on any in strict mode.
    pub fn check(&self, findings: &[UnknownEnumValue]) -> Result<Vec<UnknownEnumValue>> {
        let reported: Vec<UnknownEnumValue> = findings
            .iter()
            .filter(|finding| !self.ignored_types.iter().any(|t| t == finding.type_name))
            .cloned()
            .collect();

        for finding in &reported {
            tracing::warn!("⚠️ Undocumented enumeration value: {}", finding);
        }

        if self.strict && !reported.is_empty() {
            let details = reported
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ModelError::UnknownEnumValues {
                count: reported.len(),
                details,
            });
        }

        Ok(reported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ListPhoneNumbersV2Request, MediaConcurrency, PhoneNumberType, RoutingProfile,
    };

    #[test]
    fn test_paths_reach_nested_lists() {
        let profile = RoutingProfile::default()
            .push_media_concurrencies(MediaConcurrency::default().with_channel("VOICE"))
            .push_media_concurrencies(MediaConcurrency::default().with_channel("SMS"));

        let findings = unknown_values(&profile);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].path, "MediaConcurrencies[1].Channel");
        assert_eq!(findings[0].type_name, "Channel");
        assert_eq!(findings[0].value, "SMS");
    }

    #[test]
    fn test_policy() {
        let request = ListPhoneNumbersV2Request::default()
            .push_phone_number_types(PhoneNumberType::Did)
            .push_phone_number_types("MOBILE")
            .push_phone_number_country_codes("ZZ");
        let findings = unknown_values(&request);
        assert_eq!(findings.len(), 2);

        let lenient = LintPolicy::new(false).check(&findings).unwrap();
        assert_eq!(lenient.len(), 2);

        let strict = LintPolicy::new(true).check(&findings).unwrap_err();
        assert!(matches!(strict, ModelError::UnknownEnumValues { count: 2, .. }));

        let ignoring = LintPolicy::new(true)
            .with_ignored_types(vec![
                "PhoneNumberType".to_string(),
                "PhoneNumberCountryCode".to_string(),
            ])
            .check(&findings)
            .unwrap();
        assert!(ignoring.is_empty());
    }
}
