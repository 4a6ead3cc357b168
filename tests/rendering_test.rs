use anyhow::Result;
use chrono::DateTime;
use connect_model::model::{
    ActionType, GetMetricDataV2Request, IntervalDetails, IntervalPeriod, ListPhoneNumbersSummary,
    MetricV2, NotificationRecipientType, PhoneNumberCountryCode, RuleAction,
    SendNotificationActionDefinition, TrafficDistributionGroupSummary,
};
use connect_model::Record;

/// Only the populated fields appear, in declaration order, with no dangling separator.
#[test]
fn test_two_of_nine_fields() {
    let summary = ListPhoneNumbersSummary::default()
        .with_phone_number_type("DID")
        .with_phone_number_id("pn-123");

    assert_eq!(summary.to_string(), "{PhoneNumberId: pn-123,PhoneNumberType: DID}");
    assert_eq!(summary.populated_fields(), vec!["PhoneNumberId", "PhoneNumberType"]);
}

#[test]
fn test_last_field_only() {
    let summary = ListPhoneNumbersSummary::default()
        .with_source_phone_number_arn("arn:aws:sms-voice:us-east-1:123456789012:phone-number/x");
    assert_eq!(
        summary.to_string(),
        "{SourcePhoneNumberArn: arn:aws:sms-voice:us-east-1:123456789012:phone-number/x}"
    );
}

#[test]
fn test_all_fields() {
    let summary = ListPhoneNumbersSummary::default()
        .with_phone_number_id("pn-1")
        .with_phone_number_arn("arn:pn-1")
        .with_phone_number("+4930555")
        .with_phone_number_country_code(PhoneNumberCountryCode::De)
        .with_phone_number_type("DID")
        .with_target_arn("arn:instance")
        .with_instance_id("i-1")
        .with_phone_number_description("Berlin")
        .with_source_phone_number_arn("arn:source");

    assert_eq!(
        summary.to_string(),
        "{PhoneNumberId: pn-1,PhoneNumberArn: arn:pn-1,PhoneNumber: +4930555,\
PhoneNumberCountryCode: DE,PhoneNumberType: DID,TargetArn: arn:instance,InstanceId: i-1,\
PhoneNumberDescription: Berlin,SourcePhoneNumberArn: arn:source}"
    );
    assert!(!summary.is_empty());
    assert!(ListPhoneNumbersSummary::default().is_empty());
}

#[test]
fn test_booleans_and_wire_names() {
    let group = TrafficDistributionGroupSummary::default()
        .with_id("tdg-1")
        .with_is_default(true);
    assert_eq!(group.to_string(), "{Id: tdg-1,IsDefault: true}");
}

/// Nested records, lists and maps render recursively.
#[test]
fn test_nested_rendering() -> Result<()> {
    let action = RuleAction::default()
        .with_action_type(ActionType::SendNotification)
        .with_send_notification_action(
            SendNotificationActionDefinition::default()
                .with_delivery_method("EMAIL")
                .with_subject("Escalation")
                .with_recipient(
                    NotificationRecipientType::default()
                        .add_user_tags_entry("role", "supervisor")?
                        .with_user_ids(["u-1", "u-2"]),
                ),
        );

    assert_eq!(
        action.to_string(),
        "{ActionType: SEND_NOTIFICATION,SendNotificationAction: {DeliveryMethod: EMAIL,\
Subject: Escalation,Recipient: {UserTags: {role=supervisor},UserIds: [u-1, u-2]}}}"
    );
    Ok(())
}

#[test]
fn test_timestamps_render_as_rfc3339() {
    let start = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
    let request = GetMetricDataV2Request::default()
        .with_start_time(start)
        .with_interval(
            IntervalDetails::default()
                .with_time_zone("Europe/Berlin")
                .with_interval_period(IntervalPeriod::FifteenMin),
        )
        .push_metrics(MetricV2::default().with_name("AGENT_OCCUPANCY"));

    assert_eq!(
        request.to_string(),
        "{StartTime: 2023-11-14T22:13:20Z,Interval: {TimeZone: Europe/Berlin,\
IntervalPeriod: FIFTEEN_MIN},Metrics: [{Name: AGENT_OCCUPANCY}]}"
    );
}
