use crate::domain::record::Record;
use crate::utils::error::Result;
use chrono::{DateTime, SubsecRound, Utc};

/// Encodes a record as compact JSON; unset fields are omitted.
pub fn to_json<R: Record>(record: &R) -> Result<String> {
    let json = serde_json::to_string(record)?;
    tracing::debug!("Encoded {} ({} bytes)", R::TYPE_NAME, json.len());
    Ok(json)
}

pub fn to_value<R: Record>(record: &R) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(record)?)
}

/// Decodes a record; absent members stay unset and unrecognized members are ignored.
pub fn from_json<R: Record>(json: &str) -> Result<R> {
    let record: R = serde_json::from_str(json)?;
    tracing::debug!(
        "Decoded {} with fields {:?}",
        R::TYPE_NAME,
        record.populated_fields()
    );
    Ok(record)
}

pub fn from_value<R: Record>(value: serde_json::Value) -> Result<R> {
    Ok(serde_json::from_value(value)?)
}

/// Drops precision below one millisecond, the finest the wire carries.
///
/// Timestamp setters and builders apply this, so a record always equals itself after
/// an encode and decode.
pub fn truncate_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.trunc_subsecs(3)
}

/// Timestamps travel as epoch seconds, fractional when they carry milliseconds.
///
/// Encoding truncates to the millisecond like [`truncate_to_millis`]. Decoding rounds to
/// the nearest millisecond, which absorbs the float error of values such as `0.123`.
pub mod epoch_seconds {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(timestamp) => {
                let millis = timestamp.timestamp_millis();
                if millis % 1000 == 0 {
                    serializer.serialize_i64(millis / 1000)
                } else {
                    serializer.serialize_f64(millis as f64 / 1000.0)
                }
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if !seconds.is_finite() {
            return Err(D::Error::custom(format!("invalid timestamp: {}", seconds)));
        }
        let millis = (seconds * 1000.0).round() as i64;
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", seconds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ClaimedPhoneNumberSummary, ContactSearchSummary, ContactSearchSummaryQueueInfo,
        PhoneNumberType,
    };
    use chrono::DateTime;

    #[test]
    fn test_unset_fields_are_omitted() {
        let summary = ClaimedPhoneNumberSummary::default()
            .with_phone_number_id("pn-1")
            .with_phone_number_type(PhoneNumberType::TollFree);

        assert_eq!(
            to_json(&summary).unwrap(),
            r#"{"PhoneNumberId":"pn-1","PhoneNumberType":"TOLL_FREE"}"#
        );
    }

    #[test]
    fn test_empty_map_is_kept() {
        let summary = ClaimedPhoneNumberSummary::default()
            .with_tags(Default::default());
        assert_eq!(to_json(&summary).unwrap(), r#"{"Tags":{}}"#);

        let decoded: ClaimedPhoneNumberSummary = from_json(r#"{"Tags":{}}"#).unwrap();
        assert_eq!(decoded, summary);
        assert_ne!(decoded, ClaimedPhoneNumberSummary::default());
    }

    #[test]
    fn test_timestamps_as_epoch_seconds() {
        let queued = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let contact = ContactSearchSummary::default().with_queue_info(
            ContactSearchSummaryQueueInfo::default()
                .with_id("q-1")
                .with_enqueue_timestamp(queued),
        );

        let json = to_json(&contact).unwrap();
        assert_eq!(
            json,
            r#"{"QueueInfo":{"Id":"q-1","EnqueueTimestamp":1700000000}}"#
        );

        let fractional: ContactSearchSummary =
            from_json(r#"{"InitiationTimestamp":1700000000.25}"#).unwrap();
        assert_eq!(
            fractional.initiation_timestamp().map(|t| t.timestamp_millis()),
            Some(1_700_000_000_250)
        );
        assert_eq!(
            to_json(&fractional).unwrap(),
            r#"{"InitiationTimestamp":1700000000.25}"#
        );
    }

    #[test]
    fn test_sub_millisecond_timestamps_survive_round_trip() {
        let started = DateTime::from_timestamp(1_700_000_000, 999_600_000).unwrap();
        let contact = ContactSearchSummary::default().with_initiation_timestamp(started);
        assert_eq!(
            contact.initiation_timestamp().map(|t| t.timestamp_subsec_nanos()),
            Some(999_000_000)
        );

        let mut set = ContactSearchSummary::default();
        set.set_initiation_timestamp(Some(started));
        assert_eq!(set, contact);

        let json = to_json(&contact).unwrap();
        assert_eq!(json, r#"{"InitiationTimestamp":1700000000.999}"#);
        let back: ContactSearchSummary = from_json(&json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_null_and_unknown_members() {
        let decoded: ContactSearchSummary =
            from_json(r#"{"Id":"c-1","DisconnectTimestamp":null,"NotAField":true}"#).unwrap();
        assert_eq!(decoded.id(), Some("c-1"));
        assert!(decoded.disconnect_timestamp().is_none());
    }
}
