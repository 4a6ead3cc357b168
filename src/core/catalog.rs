//! Lookup of record types by name, for tooling that only knows a type at runtime.

use crate::core::{codec, lint};
use crate::domain::record::{Record, UnknownEnumValue};
use crate::model::*;
use crate::utils::error::{ModelError, Result};

/// A record decoded through the catalog, with everything tooling needs to report on it.
#[derive(Debug, Clone)]
pub struct DecodedRecord {
    pub type_name: &'static str,
    pub rendered: String,
    pub normalized: serde_json::Value,
    pub populated_fields: Vec<&'static str>,
    pub unknown_values: Vec<UnknownEnumValue>,
}

pub struct CatalogEntry {
    pub name: &'static str,
    decode: fn(serde_json::Value) -> Result<DecodedRecord>,
}

impl CatalogEntry {
    pub fn decode(&self, value: serde_json::Value) -> Result<DecodedRecord> {
        (self.decode)(value)
    }
}

fn decode_as<R: Record>(value: serde_json::Value) -> Result<DecodedRecord> {
    let record: R = codec::from_value(value)?;
    Ok(DecodedRecord {
        type_name: R::TYPE_NAME,
        rendered: record.to_string(),
        normalized: codec::to_value(&record)?,
        populated_fields: record.populated_fields(),
        unknown_values: lint::unknown_values(&record),
    })
}

macro_rules! catalog {
    ($($ty:ident),+ $(,)?) => {
        &[
            $(
                CatalogEntry {
                    name: <$ty as Record>::TYPE_NAME,
                    decode: decode_as::<$ty>,
                },
            )+
        ]
    };
}

static ENTRIES: &[CatalogEntry] = catalog![
    // phone numbers
    ListPhoneNumbersSummary,
    PhoneNumberStatus,
    ClaimedPhoneNumberSummary,
    ClaimPhoneNumberRequest,
    ClaimPhoneNumberResult,
    ListPhoneNumbersV2Request,
    ListPhoneNumbersV2Result,
    DescribePhoneNumberRequest,
    DescribePhoneNumberResult,
    // users
    UserIdentityInfo,
    UserPhoneConfig,
    CreateUserRequest,
    CreateUserResult,
    // routing profiles
    CrossChannelBehavior,
    MediaConcurrency,
    RoutingProfile,
    // rules
    Reference,
    TaskActionDefinition,
    EventBridgeActionDefinition,
    AssignContactCategoryActionDefinition,
    EndAssociatedTasksActionDefinition,
    NotificationRecipientType,
    SendNotificationActionDefinition,
    RuleAction,
    // views
    ViewContent,
    ViewInputContent,
    View,
    CreateViewRequest,
    CreateViewResult,
    // traffic distribution groups
    TrafficDistributionGroupSummary,
    ListTrafficDistributionGroupsRequest,
    ListTrafficDistributionGroupsResult,
    // contact search
    ContactSearchSummaryQueueInfo,
    ContactSearchSummaryAgentInfo,
    ContactSearchSummary,
    // evaluation forms
    EvaluationFormSummary,
    EvaluationFormVersionSummary,
    // metrics
    Filters,
    Threshold,
    HistoricalMetric,
    GetMetricDataRequest,
    IntervalDetails,
    FilterV2,
    ThresholdV2,
    MetricFilterV2,
    MetricV2,
    GetMetricDataV2Request,
    // persistent chat
    CreatePersistentContactAssociationRequest,
    CreatePersistentContactAssociationResult,
    // attached files
    CreatedByInfo,
    AttachedFile,
];

pub fn entries() -> &'static [CatalogEntry] {
    ENTRIES
}

pub fn find(name: &str) -> Result<&'static CatalogEntry> {
    ENTRIES
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| ModelError::UnknownRecordType {
            name: name.to_string(),
        })
}

pub fn decode(name: &str, value: serde_json::Value) -> Result<DecodedRecord> {
    find(name)?.decode(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = entries().iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), entries().len());
    }

    #[test]
    fn test_decode_by_name() {
        let decoded = decode(
            "ListPhoneNumbersSummary",
            json!({"PhoneNumberType": "DID", "PhoneNumberId": "pn-123"}),
        )
        .unwrap();

        assert_eq!(decoded.type_name, "ListPhoneNumbersSummary");
        assert_eq!(decoded.rendered, "{PhoneNumberId: pn-123,PhoneNumberType: DID}");
        assert_eq!(decoded.populated_fields, vec!["PhoneNumberId", "PhoneNumberType"]);
        assert!(decoded.unknown_values.is_empty());
    }

    #[test]
    fn test_unknown_type() {
        let err = decode("NoSuchRecord", json!({})).unwrap_err();
        assert!(matches!(err, ModelError::UnknownRecordType { ref name } if name == "NoSuchRecord"));
    }
}
