//! Routing profiles and the per-channel concurrency they allow.

use chrono::{DateTime, Utc};
use crate::core::codec::truncate_to_millis;
use crate::domain::record::{insert_unique, record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_enum! {
    Channel {
        Voice => "VOICE",
        Chat => "CHAT",
        Task => "TASK",
        Email => "EMAIL",
    }
}

string_enum! {
    /// Whether an agent busy on one channel may be offered contacts on other channels.
    BehaviorType {
        RouteCurrentChannelOnly => "ROUTE_CURRENT_CHANNEL_ONLY",
        RouteAnyChannel => "ROUTE_ANY_CHANNEL",
    }
}

string_enum! {
    AgentAvailabilityTimer {
        TimeSinceLastActivity => "TIME_SINCE_LAST_ACTIVITY",
        TimeSinceLastInbound => "TIME_SINCE_LAST_INBOUND",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CrossChannelBehavior {
    #[serde(skip_serializing_if = "Option::is_none")]
    behavior_type: Option<BehaviorType>,
}

impl CrossChannelBehavior {
    pub fn behavior_type(&self) -> Option<&BehaviorType> {
        self.behavior_type.as_ref()
    }

    pub fn set_behavior_type(&mut self, behavior_type: Option<BehaviorType>) {
        self.behavior_type = behavior_type;
    }

    pub fn with_behavior_type(mut self, behavior_type: impl Into<BehaviorType>) -> Self {
        self.behavior_type = Some(behavior_type.into());
        self
    }
}

impl Record for CrossChannelBehavior {
    const TYPE_NAME: &'static str = "CrossChannelBehavior";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("BehaviorType", self.behavior_type.as_ref());
    }
}

/// How many contacts of one channel an agent can handle at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaConcurrency {
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    concurrency: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cross_channel_behavior: Option<CrossChannelBehavior>,
}

impl MediaConcurrency {
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

    /// 1 for voice, up to 10 for chat and tasks.
    pub fn concurrency(&self) -> Option<i32> {
        self.concurrency
    }

    pub fn set_concurrency(&mut self, concurrency: Option<i32>) {
        self.concurrency = concurrency;
    }

    pub fn with_concurrency(mut self, concurrency: i32) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    pub fn cross_channel_behavior(&self) -> Option<&CrossChannelBehavior> {
        self.cross_channel_behavior.as_ref()
    }

    pub fn set_cross_channel_behavior(
        &mut self,
        cross_channel_behavior: Option<CrossChannelBehavior>,
    ) {
        self.cross_channel_behavior = cross_channel_behavior;
    }

    pub fn with_cross_channel_behavior(
        mut self,
        cross_channel_behavior: CrossChannelBehavior,
    ) -> Self {
        self.cross_channel_behavior = Some(cross_channel_behavior);
        self
    }
}

impl Record for MediaConcurrency {
    const TYPE_NAME: &'static str = "MediaConcurrency";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Channel", self.channel.as_ref());
        visitor.field("Concurrency", self.concurrency.as_ref());
        visitor.field("CrossChannelBehavior", self.cross_channel_behavior.as_ref());
    }
}

/// A routing profile as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    routing_profile_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    routing_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_concurrencies: Option<Vec<MediaConcurrency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_outbound_queue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number_of_associated_queues: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number_of_associated_users: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agent_availability_timer: Option<AgentAvailabilityTimer>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    associated_queue_ids: Option<Vec<String>>,
}

impl RoutingProfile {
    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    pub fn set_instance_id(&mut self, instance_id: Option<String>) {
        self.instance_id = instance_id;
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn routing_profile_arn(&self) -> Option<&str> {
        self.routing_profile_arn.as_deref()
    }

    pub fn set_routing_profile_arn(&mut self, routing_profile_arn: Option<String>) {
        self.routing_profile_arn = routing_profile_arn;
    }

    pub fn with_routing_profile_arn(mut self, routing_profile_arn: impl Into<String>) -> Self {
        self.routing_profile_arn = Some(routing_profile_arn.into());
        self
    }

    pub fn routing_profile_id(&self) -> Option<&str> {
        self.routing_profile_id.as_deref()
    }

    pub fn set_routing_profile_id(&mut self, routing_profile_id: Option<String>) {
        self.routing_profile_id = routing_profile_id;
    }

    pub fn with_routing_profile_id(mut self, routing_profile_id: impl Into<String>) -> Self {
        self.routing_profile_id = Some(routing_profile_id.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn media_concurrencies(&self) -> Option<&[MediaConcurrency]> {
        self.media_concurrencies.as_deref()
    }

    pub fn set_media_concurrencies(&mut self, media_concurrencies: Option<Vec<MediaConcurrency>>) {
        self.media_concurrencies = media_concurrencies;
    }

    pub fn with_media_concurrencies(
        mut self,
        media_concurrencies: impl IntoIterator<Item = impl Into<MediaConcurrency>>,
    ) -> Self {
        self.media_concurrencies = Some(media_concurrencies.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_media_concurrencies(mut self, item: impl Into<MediaConcurrency>) -> Self {
        self.media_concurrencies.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_media_concurrencies(
        mut self,
        media_concurrencies: impl IntoIterator<Item = impl Into<MediaConcurrency>>,
    ) -> Self {
        self.media_concurrencies
            .get_or_insert_with(Vec::new)
            .extend(media_concurrencies.into_iter().map(Into::into));
        self
    }

    pub fn default_outbound_queue_id(&self) -> Option<&str> {
        self.default_outbound_queue_id.as_deref()
    }

    pub fn set_default_outbound_queue_id(&mut self, default_outbound_queue_id: Option<String>) {
        self.default_outbound_queue_id = default_outbound_queue_id;
    }

    pub fn with_default_outbound_queue_id(
        mut self,
        default_outbound_queue_id: impl Into<String>,
    ) -> Self {
        self.default_outbound_queue_id = Some(default_outbound_queue_id.into());
        self
    }

    pub fn tags(&self) -> Option<&BTreeMap<String, String>> {
        self.tags.as_ref()
    }

    pub fn set_tags(&mut self, tags: Option<BTreeMap<String, String>>) {
        self.tags = tags;
    }

    pub fn with_tags(mut self, tags: BTreeMap<String, String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn add_tags_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        insert_unique(&mut self.tags, "Tags", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_tags_entries(mut self) -> Self {
        self.tags = None;
        self
    }

    pub fn number_of_associated_queues(&self) -> Option<i64> {
        self.number_of_associated_queues
    }

    pub fn set_number_of_associated_queues(&mut self, number_of_associated_queues: Option<i64>) {
        self.number_of_associated_queues = number_of_associated_queues;
    }

    pub fn with_number_of_associated_queues(mut self, number_of_associated_queues: i64) -> Self {
        self.number_of_associated_queues = Some(number_of_associated_queues);
        self
    }

    pub fn number_of_associated_users(&self) -> Option<i64> {
        self.number_of_associated_users
    }

    pub fn set_number_of_associated_users(&mut self, number_of_associated_users: Option<i64>) {
        self.number_of_associated_users = number_of_associated_users;
    }

    pub fn with_number_of_associated_users(mut self, number_of_associated_users: i64) -> Self {
        self.number_of_associated_users = Some(number_of_associated_users);
        self
    }

    pub fn agent_availability_timer(&self) -> Option<&AgentAvailabilityTimer> {
        self.agent_availability_timer.as_ref()
    }

    pub fn set_agent_availability_timer(
        &mut self,
        agent_availability_timer: Option<AgentAvailabilityTimer>,
    ) {
        self.agent_availability_timer = agent_availability_timer;
    }

    pub fn with_agent_availability_timer(
        mut self,
        agent_availability_timer: impl Into<AgentAvailabilityTimer>,
    ) -> Self {
        self.agent_availability_timer = Some(agent_availability_timer.into());
        self
    }

    pub fn last_modified_time(&self) -> Option<DateTime<Utc>> {
        self.last_modified_time
    }

    pub fn set_last_modified_time(&mut self, last_modified_time: Option<DateTime<Utc>>) {
        self.last_modified_time = last_modified_time.map(truncate_to_millis);
    }

    pub fn with_last_modified_time(mut self, last_modified_time: DateTime<Utc>) -> Self {
        self.last_modified_time = Some(truncate_to_millis(last_modified_time));
        self
    }

    pub fn last_modified_region(&self) -> Option<&str> {
        self.last_modified_region.as_deref()
    }

    pub fn set_last_modified_region(&mut self, last_modified_region: Option<String>) {
        self.last_modified_region = last_modified_region;
    }

    pub fn with_last_modified_region(mut self, last_modified_region: impl Into<String>) -> Self {
        self.last_modified_region = Some(last_modified_region.into());
        self
    }

    /// Whether this is the instance's default routing profile.
    pub fn is_default(&self) -> Option<bool> {
        self.is_default
    }

    pub fn set_is_default(&mut self, is_default: Option<bool>) {
        self.is_default = is_default;
    }

    pub fn with_is_default(mut self, is_default: bool) -> Self {
        self.is_default = Some(is_default);
        self
    }

    pub fn associated_queue_ids(&self) -> Option<&[String]> {
        self.associated_queue_ids.as_deref()
    }

    pub fn set_associated_queue_ids(&mut self, associated_queue_ids: Option<Vec<String>>) {
        self.associated_queue_ids = associated_queue_ids;
    }

    pub fn with_associated_queue_ids(
        mut self,
        associated_queue_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.associated_queue_ids = Some(associated_queue_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_associated_queue_ids(mut self, item: impl Into<String>) -> Self {
        self.associated_queue_ids.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_associated_queue_ids(
        mut self,
        associated_queue_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.associated_queue_ids
            .get_or_insert_with(Vec::new)
            .extend(associated_queue_ids.into_iter().map(Into::into));
        self
    }
}

impl Record for RoutingProfile {
    const TYPE_NAME: &'static str = "RoutingProfile";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("Name", self.name.as_ref());
        visitor.field("RoutingProfileArn", self.routing_profile_arn.as_ref());
        visitor.field("RoutingProfileId", self.routing_profile_id.as_ref());
        visitor.field("Description", self.description.as_ref());
        visitor.field("MediaConcurrencies", self.media_concurrencies.as_ref());
        visitor.field("DefaultOutboundQueueId", self.default_outbound_queue_id.as_ref());
        visitor.field("Tags", self.tags.as_ref());
        visitor.field("NumberOfAssociatedQueues", self.number_of_associated_queues.as_ref());
        visitor.field("NumberOfAssociatedUsers", self.number_of_associated_users.as_ref());
        visitor.field("AgentAvailabilityTimer", self.agent_availability_timer.as_ref());
        visitor.field("LastModifiedTime", self.last_modified_time.as_ref());
        visitor.field("LastModifiedRegion", self.last_modified_region.as_ref());
        visitor.field("IsDefault", self.is_default.as_ref());
        visitor.field("AssociatedQueueIds", self.associated_queue_ids.as_ref());
    }
}

record_impls!(CrossChannelBehavior, MediaConcurrency, RoutingProfile);
