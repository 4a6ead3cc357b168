use connect_model::model::{
    ListPhoneNumbersSummary, PhoneNumberType, TrafficDistributionGroupStatus,
    TrafficDistributionGroupSummary, View, ViewStatus, ViewType,
};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// The raw literal and the typed variant build indistinguishable records.
#[test]
fn test_raw_and_typed_inputs_are_equal() {
    let raw = ListPhoneNumbersSummary::default().with_phone_number_type("TOLL_FREE");
    let typed = ListPhoneNumbersSummary::default().with_phone_number_type(PhoneNumberType::TollFree);

    assert_eq!(raw, typed);
    assert_eq!(hash_of(&raw), hash_of(&typed));
    assert_eq!(raw.phone_number_type(), typed.phone_number_type());
    assert_eq!(raw.to_string(), typed.to_string());
    assert_eq!(
        serde_json::to_string(&raw).unwrap(),
        serde_json::to_string(&typed).unwrap()
    );
}

/// Setters normalize the same way as builders.
#[test]
fn test_setter_normalizes_raw_string() {
    let mut view = View::default();
    view.set_status(Some("PUBLISHED".into()));
    view.set_view_type(Some(ViewType::from("AWS_MANAGED".to_string())));

    assert_eq!(view.status(), Some(&ViewStatus::Published));
    assert_eq!(view.view_type(), Some(&ViewType::AwsManaged));
    assert_eq!(view.to_string(), "{Status: PUBLISHED,Type: AWS_MANAGED}");
}

/// Literals are case sensitive; near misses are preserved but never mapped onto a variant.
#[test]
fn test_near_miss_stays_unknown() {
    let summary = TrafficDistributionGroupSummary::default().with_status("active");
    let status = summary.status().expect("status is set");

    assert!(!status.is_known());
    assert_ne!(status, &TrafficDistributionGroupStatus::Active);
    assert_eq!(status.as_str(), "active");
}

proptest! {
    /// Every documented literal converts to a known variant that renders back to the literal.
    #[test]
    fn prop_documented_literals_round_trip(index in 0..PhoneNumberType::values().len()) {
        let literal = PhoneNumberType::values()[index];
        let parsed = PhoneNumberType::from(literal);
        prop_assert!(parsed.is_known());
        prop_assert_eq!(parsed.as_str(), literal);
    }

    /// Any string converts losslessly, and equality follows the text exactly.
    #[test]
    fn prop_any_text_is_preserved(a in "[A-Z_]{1,20}", b in "[A-Z_]{1,20}") {
        let left = ListPhoneNumbersSummary::default().with_phone_number_type(a.as_str());
        let right = ListPhoneNumbersSummary::default().with_phone_number_type(PhoneNumberType::from(b.clone()));

        prop_assert_eq!(left.phone_number_type().map(|t| t.as_str()), Some(a.as_str()));
        prop_assert_eq!(left == right, a == b);
        if a == b {
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }
    }
}
