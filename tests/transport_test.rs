use anyhow::Result;
use async_trait::async_trait;
use connect_model::model::{
    ClaimPhoneNumberRequest, ClaimPhoneNumberResult, CreatePersistentContactAssociationRequest,
    ListTrafficDistributionGroupsRequest, RehydrationType, TrafficDistributionGroupStatus,
};
use connect_model::{send, ModelError, Operation, Transport};
use serde_json::{json, Value};
use std::sync::Mutex;

/// Records every call and answers with a canned response.
struct ScriptedTransport {
    response: Value,
    calls: Mutex<Vec<(&'static str, Value)>>,
}

impl ScriptedTransport {
    fn new(response: Value) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(&'static str, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn invoke(&self, operation: &'static str, payload: Value) -> connect_model::Result<Value> {
        self.calls.lock().unwrap().push((operation, payload));
        Ok(self.response.clone())
    }
}

struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn invoke(&self, operation: &'static str, _payload: Value) -> connect_model::Result<Value> {
        Err(ModelError::TransportError {
            operation: operation.to_string(),
            message: "InvalidParameterException".to_string(),
        })
    }
}

#[tokio::test]
async fn test_claim_phone_number_round_trip() -> Result<()> {
    let transport = ScriptedTransport::new(json!({
        "PhoneNumberId": "pn-123",
        "PhoneNumberArn": "arn:aws:connect:us-east-1:123456789012:phone-number/pn-123"
    }));

    let request = ClaimPhoneNumberRequest::default()
        .with_target_arn("arn:aws:connect:us-east-1:123456789012:instance/i-1")
        .with_phone_number("+18005550100")
        .add_tags_entry("team", "support")?;

    let result: ClaimPhoneNumberResult = send(&transport, &request).await?;
    assert_eq!(result.phone_number_id(), Some("pn-123"));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "ClaimPhoneNumber");
    assert_eq!(
        calls[0].1,
        json!({
            "TargetArn": "arn:aws:connect:us-east-1:123456789012:instance/i-1",
            "PhoneNumber": "+18005550100",
            "Tags": {"team": "support"}
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_result_enums_keep_unknown_values() -> Result<()> {
    let transport = ScriptedTransport::new(json!({
        "TrafficDistributionGroupSummaryList": [
            {"Id": "tdg-1", "Status": "ACTIVE", "IsDefault": true},
            {"Id": "tdg-2", "Status": "MIGRATING"}
        ]
    }));

    let request = ListTrafficDistributionGroupsRequest::default().with_max_results(10);
    let result = send(&transport, &request).await?;

    let groups = result
        .traffic_distribution_group_summary_list()
        .expect("list is set");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].status(), Some(&TrafficDistributionGroupStatus::Active));
    assert_eq!(groups[0].is_default(), Some(true));
    assert_eq!(groups[1].status().map(|s| s.as_str()), Some("MIGRATING"));
    assert_eq!(groups[1].is_default(), None);
    assert!(result.next_token().is_none());
    Ok(())
}

#[tokio::test]
async fn test_transport_errors_surface_unchanged() -> Result<()> {
    let request = CreatePersistentContactAssociationRequest::default()
        .with_instance_id("i-1")
        .with_initial_contact_id("c-3")
        .with_rehydration_type(RehydrationType::FromSegment)
        .with_source_contact_id("c-2");

    let err = send(&FailingTransport, &request).await.unwrap_err();
    match err {
        ModelError::TransportError { operation, .. } => {
            assert_eq!(operation, CreatePersistentContactAssociationRequest::OPERATION_NAME);
        }
        other => panic!("expected a transport error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_malformed_response_is_a_serialization_error() -> Result<()> {
    let transport = ScriptedTransport::new(json!({"PhoneNumberId": 42}));
    let request = ClaimPhoneNumberRequest::default().with_phone_number("+18005550100");

    let err = send(&transport, &request).await.unwrap_err();
    assert!(matches!(err, ModelError::SerializationError(_)));
    Ok(())
}
