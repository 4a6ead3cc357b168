use anyhow::Result;
use chrono::DateTime;
use connect_model::model::{
    ClaimedPhoneNumberSummary, ContactInitiationMethod, ContactSearchSummary,
    ContactSearchSummaryAgentInfo, ContactSearchSummaryQueueInfo, PhoneNumberCountryCode,
    PhoneNumberStatus, PhoneNumberType,
};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_summary() -> Result<ClaimedPhoneNumberSummary> {
    Ok(ClaimedPhoneNumberSummary::default()
        .with_phone_number_id("pn-123")
        .with_phone_number_arn("arn:aws:connect:us-east-1:123456789012:phone-number/pn-123")
        .with_phone_number("+18005550100")
        .with_phone_number_country_code(PhoneNumberCountryCode::Us)
        .with_phone_number_type(PhoneNumberType::TollFree)
        .with_phone_number_description("Support line")
        .with_target_arn("arn:aws:connect:us-east-1:123456789012:instance/i-1")
        .with_instance_id("i-1")
        .add_tags_entry("team", "support")?
        .with_phone_number_status(PhoneNumberStatus::default().with_status("CLAIMED"))
        .with_source_phone_number_arn("arn:aws:sms-voice:us-east-1:123456789012:phone-number/x"))
}

/// Copying every field through the setters yields an equal record with an equal hash.
#[test]
fn test_field_by_field_copy_is_equal() -> Result<()> {
    let original = sample_summary()?;

    let mut copy = ClaimedPhoneNumberSummary::default();
    copy.set_phone_number_id(original.phone_number_id().map(str::to_string));
    copy.set_phone_number_arn(original.phone_number_arn().map(str::to_string));
    copy.set_phone_number(original.phone_number().map(str::to_string));
    copy.set_phone_number_country_code(original.phone_number_country_code().cloned());
    copy.set_phone_number_type(original.phone_number_type().cloned());
    copy.set_phone_number_description(original.phone_number_description().map(str::to_string));
    copy.set_target_arn(original.target_arn().map(str::to_string));
    copy.set_instance_id(original.instance_id().map(str::to_string));
    copy.set_tags(original.tags().cloned());
    copy.set_phone_number_status(original.phone_number_status().cloned());
    copy.set_source_phone_number_arn(original.source_phone_number_arn().map(str::to_string));

    assert_eq!(original, copy);
    assert_eq!(hash_of(&original), hash_of(&copy));
    Ok(())
}

/// Setting a field to `None` clears it back to the all-unset record.
#[test]
fn test_setter_accepts_absence() -> Result<()> {
    let mut summary = ClaimedPhoneNumberSummary::default().with_phone_number_id("pn-1");
    summary.set_phone_number_id(None);

    assert_eq!(summary, ClaimedPhoneNumberSummary::default());
    assert_eq!(summary.phone_number_id(), None);
    Ok(())
}

/// An unset map and an empty map are different values.
#[test]
fn test_unset_map_differs_from_empty_map() -> Result<()> {
    let unset = ClaimedPhoneNumberSummary::default().with_phone_number_id("pn-1");
    let empty = unset.clone().with_tags(BTreeMap::new());

    assert_ne!(unset, empty);
    assert!(unset.tags().is_none());
    assert_eq!(empty.tags().map(|t| t.len()), Some(0));
    Ok(())
}

/// An empty string is a value, not absence.
#[test]
fn test_unset_string_differs_from_empty_string() -> Result<()> {
    let unset = ClaimedPhoneNumberSummary::default();
    let empty = ClaimedPhoneNumberSummary::default().with_phone_number_description("");

    assert_ne!(unset, empty);
    assert_eq!(empty.phone_number_description(), Some(""));
    Ok(())
}

/// A difference deep inside a nested record makes the outer records unequal.
#[test]
fn test_nested_difference_propagates() -> Result<()> {
    let queued = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
    let base = ContactSearchSummary::default()
        .with_id("c-1")
        .with_initiation_method(ContactInitiationMethod::Inbound)
        .with_agent_info(ContactSearchSummaryAgentInfo::default().with_id("agent-1"));

    let first = base.clone().with_queue_info(
        ContactSearchSummaryQueueInfo::default()
            .with_id("queue-a")
            .with_enqueue_timestamp(queued),
    );
    let second = base.clone().with_queue_info(
        ContactSearchSummaryQueueInfo::default()
            .with_id("queue-b")
            .with_enqueue_timestamp(queued),
    );
    let same_as_first = base.with_queue_info(
        ContactSearchSummaryQueueInfo::default()
            .with_id("queue-a")
            .with_enqueue_timestamp(queued),
    );

    assert_ne!(first, second);
    assert_eq!(first, same_as_first);
    assert_eq!(hash_of(&first), hash_of(&same_as_first));
    Ok(())
}

/// Records of the same type with every field unset are equal.
#[test]
fn test_default_records_are_equal() {
    assert_eq!(ContactSearchSummary::default(), ContactSearchSummary::default());
    assert_eq!(
        hash_of(&ContactSearchSummary::default()),
        hash_of(&ContactSearchSummary::default())
    );
}
