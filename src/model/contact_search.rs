//! Contact search results.

use chrono::{DateTime, Utc};
use crate::core::codec::truncate_to_millis;
use crate::domain::record::{record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use crate::model::routing_profile::Channel;
use serde::{Deserialize, Serialize};

string_enum! {
    /// How a contact came into being.
    ContactInitiationMethod {
        Inbound => "INBOUND",
        Outbound => "OUTBOUND",
        Transfer => "TRANSFER",
        QueueTransfer => "QUEUE_TRANSFER",
        Callback => "CALLBACK",
        Api => "API",
        Disconnect => "DISCONNECT",
        Monitor => "MONITOR",
        ExternalOutbound => "EXTERNAL_OUTBOUND",
        WebRtcApi => "WEBRTC_API",
        AgentReply => "AGENT_REPLY",
        Flow => "FLOW",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactSearchSummaryQueueInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    enqueue_timestamp: Option<DateTime<Utc>>,
}

impl ContactSearchSummaryQueueInfo {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn enqueue_timestamp(&self) -> Option<DateTime<Utc>> {
        self.enqueue_timestamp
    }

    pub fn set_enqueue_timestamp(&mut self, enqueue_timestamp: Option<DateTime<Utc>>) {
        self.enqueue_timestamp = enqueue_timestamp.map(truncate_to_millis);
    }

    pub fn with_enqueue_timestamp(mut self, enqueue_timestamp: DateTime<Utc>) -> Self {
        self.enqueue_timestamp = Some(truncate_to_millis(enqueue_timestamp));
        self
    }
}

impl Record for ContactSearchSummaryQueueInfo {
    const TYPE_NAME: &'static str = "ContactSearchSummaryQueueInfo";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Id", self.id.as_ref());
        visitor.field("EnqueueTimestamp", self.enqueue_timestamp.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactSearchSummaryAgentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    connected_to_agent_timestamp: Option<DateTime<Utc>>,
}

impl ContactSearchSummaryAgentInfo {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn connected_to_agent_timestamp(&self) -> Option<DateTime<Utc>> {
        self.connected_to_agent_timestamp
    }

    pub fn set_connected_to_agent_timestamp(
        &mut self,
        connected_to_agent_timestamp: Option<DateTime<Utc>>,
    ) {
        self.connected_to_agent_timestamp = connected_to_agent_timestamp.map(truncate_to_millis);
    }

    pub fn with_connected_to_agent_timestamp(
        mut self,
        connected_to_agent_timestamp: DateTime<Utc>,
    ) -> Self {
        self.connected_to_agent_timestamp = Some(truncate_to_millis(connected_to_agent_timestamp));
        self
    }
}

impl Record for ContactSearchSummaryAgentInfo {
    const TYPE_NAME: &'static str = "ContactSearchSummaryAgentInfo";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Id", self.id.as_ref());
        visitor.field("ConnectedToAgentTimestamp", self.connected_to_agent_timestamp.as_ref());
    }
}

/// Summary of one contact matched by a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactSearchSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initiation_method: Option<ContactInitiationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    queue_info: Option<ContactSearchSummaryQueueInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agent_info: Option<ContactSearchSummaryAgentInfo>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    initiation_timestamp: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    disconnect_timestamp: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    scheduled_timestamp: Option<DateTime<Utc>>,
}

impl ContactSearchSummary {
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    pub fn set_arn(&mut self, arn: Option<String>) {
        self.arn = arn;
    }

    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// First contact of the chain this contact belongs to.
    pub fn initial_contact_id(&self) -> Option<&str> {
        self.initial_contact_id.as_deref()
    }

    pub fn set_initial_contact_id(&mut self, initial_contact_id: Option<String>) {
        self.initial_contact_id = initial_contact_id;
    }

    pub fn with_initial_contact_id(mut self, initial_contact_id: impl Into<String>) -> Self {
        self.initial_contact_id = Some(initial_contact_id.into());
        self
    }

    pub fn previous_contact_id(&self) -> Option<&str> {
        self.previous_contact_id.as_deref()
    }

    pub fn set_previous_contact_id(&mut self, previous_contact_id: Option<String>) {
        self.previous_contact_id = previous_contact_id;
    }

    pub fn with_previous_contact_id(mut self, previous_contact_id: impl Into<String>) -> Self {
        self.previous_contact_id = Some(previous_contact_id.into());
        self
    }

    pub fn initiation_method(&self) -> Option<&ContactInitiationMethod> {
        self.initiation_method.as_ref()
    }

    pub fn set_initiation_method(&mut self, initiation_method: Option<ContactInitiationMethod>) {
        self.initiation_method = initiation_method;
    }

    pub fn with_initiation_method(
        mut self,
        initiation_method: impl Into<ContactInitiationMethod>,
    ) -> Self {
        self.initiation_method = Some(initiation_method.into());
        self
    }

    pub fn channel(&self) -> Option<&Channel> {
        self.channel.as_ref()
    }

    pub fn set_channel(&mut self, channel: Option<Channel>) {
        self.channel = channel;
    }

    pub fn with_channel(mut self, channel: impl Into<Channel>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn queue_info(&self) -> Option<&ContactSearchSummaryQueueInfo> {
        self.queue_info.as_ref()
    }

    pub fn set_queue_info(&mut self, queue_info: Option<ContactSearchSummaryQueueInfo>) {
        self.queue_info = queue_info;
    }

    pub fn with_queue_info(mut self, queue_info: ContactSearchSummaryQueueInfo) -> Self {
        self.queue_info = Some(queue_info);
        self
    }

    pub fn agent_info(&self) -> Option<&ContactSearchSummaryAgentInfo> {
        self.agent_info.as_ref()
    }

    pub fn set_agent_info(&mut self, agent_info: Option<ContactSearchSummaryAgentInfo>) {
        self.agent_info = agent_info;
    }

    pub fn with_agent_info(mut self, agent_info: ContactSearchSummaryAgentInfo) -> Self {
        self.agent_info = Some(agent_info);
        self
    }

    pub fn initiation_timestamp(&self) -> Option<DateTime<Utc>> {
        self.initiation_timestamp
    }

    pub fn set_initiation_timestamp(&mut self, initiation_timestamp: Option<DateTime<Utc>>) {
        self.initiation_timestamp = initiation_timestamp.map(truncate_to_millis);
    }

    pub fn with_initiation_timestamp(mut self, initiation_timestamp: DateTime<Utc>) -> Self {
        self.initiation_timestamp = Some(truncate_to_millis(initiation_timestamp));
        self
    }

    pub fn disconnect_timestamp(&self) -> Option<DateTime<Utc>> {
        self.disconnect_timestamp
    }

    pub fn set_disconnect_timestamp(&mut self, disconnect_timestamp: Option<DateTime<Utc>>) {
        self.disconnect_timestamp = disconnect_timestamp.map(truncate_to_millis);
    }

    pub fn with_disconnect_timestamp(mut self, disconnect_timestamp: DateTime<Utc>) -> Self {
        self.disconnect_timestamp = Some(truncate_to_millis(disconnect_timestamp));
        self
    }

    /// Only set for scheduled tasks.
    pub fn scheduled_timestamp(&self) -> Option<DateTime<Utc>> {
        self.scheduled_timestamp
    }

    pub fn set_scheduled_timestamp(&mut self, scheduled_timestamp: Option<DateTime<Utc>>) {
        self.scheduled_timestamp = scheduled_timestamp.map(truncate_to_millis);
    }

    pub fn with_scheduled_timestamp(mut self, scheduled_timestamp: DateTime<Utc>) -> Self {
        self.scheduled_timestamp = Some(truncate_to_millis(scheduled_timestamp));
        self
    }
}

impl Record for ContactSearchSummary {
    const TYPE_NAME: &'static str = "ContactSearchSummary";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Arn", self.arn.as_ref());
        visitor.field("Id", self.id.as_ref());
        visitor.field("InitialContactId", self.initial_contact_id.as_ref());
        visitor.field("PreviousContactId", self.previous_contact_id.as_ref());
        visitor.field("InitiationMethod", self.initiation_method.as_ref());
        visitor.field("Channel", self.channel.as_ref());
        visitor.field("QueueInfo", self.queue_info.as_ref());
        visitor.field("AgentInfo", self.agent_info.as_ref());
        visitor.field("InitiationTimestamp", self.initiation_timestamp.as_ref());
        visitor.field("DisconnectTimestamp", self.disconnect_timestamp.as_ref());
        visitor.field("ScheduledTimestamp", self.scheduled_timestamp.as_ref());
    }
}

record_impls!(ContactSearchSummaryQueueInfo, ContactSearchSummaryAgentInfo, ContactSearchSummary);
