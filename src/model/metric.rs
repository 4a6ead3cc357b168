//! Historical metric queries.
//!
//! `GetMetricDataRequest` is the older queue-scoped API with a closed set of
//! metric names; `GetMetricDataV2Request` takes free-form metric and filter keys.

use chrono::{DateTime, Utc};
use crate::core::codec::truncate_to_millis;
use crate::domain::record::{record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use crate::model::routing_profile::Channel;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

string_enum! {
    Grouping {
        Queue => "QUEUE",
        Channel => "CHANNEL",
        RoutingProfile => "ROUTING_PROFILE",
        RoutingStepExpression => "ROUTING_STEP_EXPRESSION",
    }
}

string_enum! {
    HistoricalMetricName {
        ContactsQueued => "CONTACTS_QUEUED",
        ContactsHandled => "CONTACTS_HANDLED",
        ContactsAbandoned => "CONTACTS_ABANDONED",
        ContactsConsulted => "CONTACTS_CONSULTED",
        ContactsAgentHungUpFirst => "CONTACTS_AGENT_HUNG_UP_FIRST",
        ContactsHandledIncoming => "CONTACTS_HANDLED_INCOMING",
        ContactsHandledOutbound => "CONTACTS_HANDLED_OUTBOUND",
        ContactsHoldAbandons => "CONTACTS_HOLD_ABANDONS",
        ContactsTransferredIn => "CONTACTS_TRANSFERRED_IN",
        ContactsTransferredOut => "CONTACTS_TRANSFERRED_OUT",
        ContactsTransferredInFromQueue => "CONTACTS_TRANSFERRED_IN_FROM_QUEUE",
        ContactsTransferredOutFromQueue => "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        ContactsMissed => "CONTACTS_MISSED",
        CallbackContactsHandled => "CALLBACK_CONTACTS_HANDLED",
        ApiContactsHandled => "API_CONTACTS_HANDLED",
        Occupancy => "OCCUPANCY",
        HandleTime => "HANDLE_TIME",
        AfterContactWorkTime => "AFTER_CONTACT_WORK_TIME",
        QueuedTime => "QUEUED_TIME",
        AbandonTime => "ABANDON_TIME",
        QueueAnswerTime => "QUEUE_ANSWER_TIME",
        HoldTime => "HOLD_TIME",
        InteractionTime => "INTERACTION_TIME",
        InteractionAndHoldTime => "INTERACTION_AND_HOLD_TIME",
        ServiceLevel => "SERVICE_LEVEL",
    }
}

string_enum! {
    Statistic {
        Sum => "SUM",
        Max => "MAX",
        Avg => "AVG",
    }
}

string_enum! {
    Unit {
        Seconds => "SECONDS",
        Count => "COUNT",
        Percent => "PERCENT",
    }
}

string_enum! {
    Comparison {
        Lt => "LT",
    }
}

string_enum! {
    IntervalPeriod {
        FifteenMin => "FIFTEEN_MIN",
        ThirtyMin => "THIRTY_MIN",
        Hour => "HOUR",
        Day => "DAY",
        Week => "WEEK",
        Total => "TOTAL",
    }
}

/// Resources to restrict a historical query to. IDs and ARNs may be mixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filters {
    #[serde(skip_serializing_if = "Option::is_none")]
    queues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    routing_profiles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    routing_step_expressions: Option<Vec<String>>,
}

impl Filters {
    pub fn queues(&self) -> Option<&[String]> {
        self.queues.as_deref()
    }

    pub fn set_queues(&mut self, queues: Option<Vec<String>>) {
        self.queues = queues;
    }

    pub fn with_queues(mut self, queues: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.queues = Some(queues.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_queues(mut self, item: impl Into<String>) -> Self {
        self.queues.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_queues(mut self, queues: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.queues
            .get_or_insert_with(Vec::new)
            .extend(queues.into_iter().map(Into::into));
        self
    }

    pub fn channels(&self) -> Option<&[Channel]> {
        self.channels.as_deref()
    }

    pub fn set_channels(&mut self, channels: Option<Vec<Channel>>) {
        self.channels = channels;
    }

    pub fn with_channels(mut self, channels: impl IntoIterator<Item = impl Into<Channel>>) -> Self {
        self.channels = Some(channels.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_channels(mut self, item: impl Into<Channel>) -> Self {
        self.channels.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_channels(
        mut self,
        channels: impl IntoIterator<Item = impl Into<Channel>>,
    ) -> Self {
        self.channels
            .get_or_insert_with(Vec::new)
            .extend(channels.into_iter().map(Into::into));
        self
    }

    pub fn routing_profiles(&self) -> Option<&[String]> {
        self.routing_profiles.as_deref()
    }

    pub fn set_routing_profiles(&mut self, routing_profiles: Option<Vec<String>>) {
        self.routing_profiles = routing_profiles;
    }

    pub fn with_routing_profiles(
        mut self,
        routing_profiles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.routing_profiles = Some(routing_profiles.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_routing_profiles(mut self, item: impl Into<String>) -> Self {
        self.routing_profiles.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_routing_profiles(
        mut self,
        routing_profiles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.routing_profiles
            .get_or_insert_with(Vec::new)
            .extend(routing_profiles.into_iter().map(Into::into));
        self
    }

    pub fn routing_step_expressions(&self) -> Option<&[String]> {
        self.routing_step_expressions.as_deref()
    }

    pub fn set_routing_step_expressions(&mut self, routing_step_expressions: Option<Vec<String>>) {
        self.routing_step_expressions = routing_step_expressions;
    }

    pub fn with_routing_step_expressions(
        mut self,
        routing_step_expressions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.routing_step_expressions = Some(routing_step_expressions.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_routing_step_expressions(mut self, item: impl Into<String>) -> Self {
        self.routing_step_expressions.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_routing_step_expressions(
        mut self,
        routing_step_expressions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.routing_step_expressions
            .get_or_insert_with(Vec::new)
            .extend(routing_step_expressions.into_iter().map(Into::into));
        self
    }
}

impl Record for Filters {
    const TYPE_NAME: &'static str = "Filters";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Queues", self.queues.as_ref());
        visitor.field("Channels", self.channels.as_ref());
        visitor.field("RoutingProfiles", self.routing_profiles.as_ref());
        visitor.field("RoutingStepExpressions", self.routing_step_expressions.as_ref());
    }
}

/// Threshold attached to a service level metric.
///
/// Doubles compare by bit pattern, so `NaN` equals itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Threshold {
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold_value: Option<f64>,
}

impl Threshold {
    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    pub fn set_comparison(&mut self, comparison: Option<Comparison>) {
        self.comparison = comparison;
    }

    pub fn with_comparison(mut self, comparison: impl Into<Comparison>) -> Self {
        self.comparison = Some(comparison.into());
        self
    }

    pub fn threshold_value(&self) -> Option<f64> {
        self.threshold_value
    }

    pub fn set_threshold_value(&mut self, threshold_value: Option<f64>) {
        self.threshold_value = threshold_value;
    }

    pub fn with_threshold_value(mut self, threshold_value: f64) -> Self {
        self.threshold_value = Some(threshold_value);
        self
    }
}

impl PartialEq for Threshold {
    fn eq(&self, other: &Self) -> bool {
        self.comparison == other.comparison
            && self.threshold_value.map(f64::to_bits) == other.threshold_value.map(f64::to_bits)
    }
}

impl Eq for Threshold {}

impl Hash for Threshold {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison.hash(state);
        self.threshold_value.map(f64::to_bits).hash(state);
    }
}

impl Record for Threshold {
    const TYPE_NAME: &'static str = "Threshold";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Comparison", self.comparison.as_ref());
        visitor.field("ThresholdValue", self.threshold_value.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<HistoricalMetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<Threshold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistic: Option<Statistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
}

impl HistoricalMetric {
    pub fn name(&self) -> Option<&HistoricalMetricName> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, name: Option<HistoricalMetricName>) {
        self.name = name;
    }

    pub fn with_name(mut self, name: impl Into<HistoricalMetricName>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn threshold(&self) -> Option<&Threshold> {
        self.threshold.as_ref()
    }

    pub fn set_threshold(&mut self, threshold: Option<Threshold>) {
        self.threshold = threshold;
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn statistic(&self) -> Option<&Statistic> {
        self.statistic.as_ref()
    }

    pub fn set_statistic(&mut self, statistic: Option<Statistic>) {
        self.statistic = statistic;
    }

    pub fn with_statistic(mut self, statistic: impl Into<Statistic>) -> Self {
        self.statistic = Some(statistic.into());
        self
    }

    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    pub fn set_unit(&mut self, unit: Option<Unit>) {
        self.unit = unit;
    }

    pub fn with_unit(mut self, unit: impl Into<Unit>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

impl Record for HistoricalMetric {
    const TYPE_NAME: &'static str = "HistoricalMetric";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Name", self.name.as_ref());
        visitor.field("Threshold", self.threshold.as_ref());
        visitor.field("Statistic", self.statistic.as_ref());
        visitor.field("Unit", self.unit.as_ref());
    }
}

/// Historical metrics for queues over the last 24 hours.
///
/// Start and end times must fall on five minute boundaries and be less than 24 hours apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<Filters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groupings: Option<Vec<Grouping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    historical_metrics: Option<Vec<HistoricalMetric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl GetMetricDataRequest {
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

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time.map(truncate_to_millis);
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(truncate_to_millis(start_time));
        self
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time.map(truncate_to_millis);
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(truncate_to_millis(end_time));
        self
    }

    pub fn filters(&self) -> Option<&Filters> {
        self.filters.as_ref()
    }

    pub fn set_filters(&mut self, filters: Option<Filters>) {
        self.filters = filters;
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Without groupings a single summary across all queues is returned.
    pub fn groupings(&self) -> Option<&[Grouping]> {
        self.groupings.as_deref()
    }

    pub fn set_groupings(&mut self, groupings: Option<Vec<Grouping>>) {
        self.groupings = groupings;
    }

    pub fn with_groupings(
        mut self,
        groupings: impl IntoIterator<Item = impl Into<Grouping>>,
    ) -> Self {
        self.groupings = Some(groupings.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_groupings(mut self, item: impl Into<Grouping>) -> Self {
        self.groupings.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_groupings(
        mut self,
        groupings: impl IntoIterator<Item = impl Into<Grouping>>,
    ) -> Self {
        self.groupings
            .get_or_insert_with(Vec::new)
            .extend(groupings.into_iter().map(Into::into));
        self
    }

    pub fn historical_metrics(&self) -> Option<&[HistoricalMetric]> {
        self.historical_metrics.as_deref()
    }

    pub fn set_historical_metrics(&mut self, historical_metrics: Option<Vec<HistoricalMetric>>) {
        self.historical_metrics = historical_metrics;
    }

    pub fn with_historical_metrics(
        mut self,
        historical_metrics: impl IntoIterator<Item = impl Into<HistoricalMetric>>,
    ) -> Self {
        self.historical_metrics = Some(historical_metrics.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_historical_metrics(mut self, item: impl Into<HistoricalMetric>) -> Self {
        self.historical_metrics.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_historical_metrics(
        mut self,
        historical_metrics: impl IntoIterator<Item = impl Into<HistoricalMetric>>,
    ) -> Self {
        self.historical_metrics
            .get_or_insert_with(Vec::new)
            .extend(historical_metrics.into_iter().map(Into::into));
        self
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    pub fn set_max_results(&mut self, max_results: Option<i32>) {
        self.max_results = max_results;
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Record for GetMetricDataRequest {
    const TYPE_NAME: &'static str = "GetMetricDataRequest";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("StartTime", self.start_time.as_ref());
        visitor.field("EndTime", self.end_time.as_ref());
        visitor.field("Filters", self.filters.as_ref());
        visitor.field("Groupings", self.groupings.as_ref());
        visitor.field("HistoricalMetrics", self.historical_metrics.as_ref());
        visitor.field("NextToken", self.next_token.as_ref());
        visitor.field("MaxResults", self.max_results.as_ref());
    }
}

/// Splits the queried time range into fixed intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntervalDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval_period: Option<IntervalPeriod>,
}

impl IntervalDetails {
    /// IANA time zone name, e.g. `America/New_York`.
    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }

    pub fn set_time_zone(&mut self, time_zone: Option<String>) {
        self.time_zone = time_zone;
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn interval_period(&self) -> Option<&IntervalPeriod> {
        self.interval_period.as_ref()
    }

    pub fn set_interval_period(&mut self, interval_period: Option<IntervalPeriod>) {
        self.interval_period = interval_period;
    }

    pub fn with_interval_period(mut self, interval_period: impl Into<IntervalPeriod>) -> Self {
        self.interval_period = Some(interval_period.into());
        self
    }
}

impl Record for IntervalDetails {
    const TYPE_NAME: &'static str = "IntervalDetails";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("TimeZone", self.time_zone.as_ref());
        visitor.field("IntervalPeriod", self.interval_period.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_values: Option<Vec<String>>,
}

impl FilterV2 {
    pub fn filter_key(&self) -> Option<&str> {
        self.filter_key.as_deref()
    }

    pub fn set_filter_key(&mut self, filter_key: Option<String>) {
        self.filter_key = filter_key;
    }

    pub fn with_filter_key(mut self, filter_key: impl Into<String>) -> Self {
        self.filter_key = Some(filter_key.into());
        self
    }

    pub fn filter_values(&self) -> Option<&[String]> {
        self.filter_values.as_deref()
    }

    pub fn set_filter_values(&mut self, filter_values: Option<Vec<String>>) {
        self.filter_values = filter_values;
    }

    pub fn with_filter_values(
        mut self,
        filter_values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.filter_values = Some(filter_values.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_filter_values(mut self, item: impl Into<String>) -> Self {
        self.filter_values.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_filter_values(
        mut self,
        filter_values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.filter_values
            .get_or_insert_with(Vec::new)
            .extend(filter_values.into_iter().map(Into::into));
        self
    }
}

impl Record for FilterV2 {
    const TYPE_NAME: &'static str = "FilterV2";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("FilterKey", self.filter_key.as_ref());
        visitor.field("FilterValues", self.filter_values.as_ref());
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThresholdV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold_value: Option<f64>,
}

impl ThresholdV2 {
    pub fn comparison(&self) -> Option<&str> {
        self.comparison.as_deref()
    }

    pub fn set_comparison(&mut self, comparison: Option<String>) {
        self.comparison = comparison;
    }

    pub fn with_comparison(mut self, comparison: impl Into<String>) -> Self {
        self.comparison = Some(comparison.into());
        self
    }

    pub fn threshold_value(&self) -> Option<f64> {
        self.threshold_value
    }

    pub fn set_threshold_value(&mut self, threshold_value: Option<f64>) {
        self.threshold_value = threshold_value;
    }

    pub fn with_threshold_value(mut self, threshold_value: f64) -> Self {
        self.threshold_value = Some(threshold_value);
        self
    }
}

impl PartialEq for ThresholdV2 {
    fn eq(&self, other: &Self) -> bool {
        self.comparison == other.comparison
            && self.threshold_value.map(f64::to_bits) == other.threshold_value.map(f64::to_bits)
    }
}

impl Eq for ThresholdV2 {}

impl Hash for ThresholdV2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison.hash(state);
        self.threshold_value.map(f64::to_bits).hash(state);
    }
}

impl Record for ThresholdV2 {
    const TYPE_NAME: &'static str = "ThresholdV2";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Comparison", self.comparison.as_ref());
        visitor.field("ThresholdValue", self.threshold_value.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricFilterV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_filter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_filter_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    negate: Option<bool>,
}

impl MetricFilterV2 {
    pub fn metric_filter_key(&self) -> Option<&str> {
        self.metric_filter_key.as_deref()
    }

    pub fn set_metric_filter_key(&mut self, metric_filter_key: Option<String>) {
        self.metric_filter_key = metric_filter_key;
    }

    pub fn with_metric_filter_key(mut self, metric_filter_key: impl Into<String>) -> Self {
        self.metric_filter_key = Some(metric_filter_key.into());
        self
    }

    pub fn metric_filter_values(&self) -> Option<&[String]> {
        self.metric_filter_values.as_deref()
    }

    pub fn set_metric_filter_values(&mut self, metric_filter_values: Option<Vec<String>>) {
        self.metric_filter_values = metric_filter_values;
    }

    pub fn with_metric_filter_values(
        mut self,
        metric_filter_values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.metric_filter_values = Some(metric_filter_values.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_metric_filter_values(mut self, item: impl Into<String>) -> Self {
        self.metric_filter_values.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_metric_filter_values(
        mut self,
        metric_filter_values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.metric_filter_values
            .get_or_insert_with(Vec::new)
            .extend(metric_filter_values.into_iter().map(Into::into));
        self
    }

    pub fn negate(&self) -> Option<bool> {
        self.negate
    }

    pub fn set_negate(&mut self, negate: Option<bool>) {
        self.negate = negate;
    }

    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = Some(negate);
        self
    }
}

impl Record for MetricFilterV2 {
    const TYPE_NAME: &'static str = "MetricFilterV2";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("MetricFilterKey", self.metric_filter_key.as_ref());
        visitor.field("MetricFilterValues", self.metric_filter_values.as_ref());
        visitor.field("Negate", self.negate.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<Vec<ThresholdV2>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_filters: Option<Vec<MetricFilterV2>>,
}

impl MetricV2 {
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

    pub fn threshold(&self) -> Option<&[ThresholdV2]> {
        self.threshold.as_deref()
    }

    pub fn set_threshold(&mut self, threshold: Option<Vec<ThresholdV2>>) {
        self.threshold = threshold;
    }

    pub fn with_threshold(
        mut self,
        threshold: impl IntoIterator<Item = impl Into<ThresholdV2>>,
    ) -> Self {
        self.threshold = Some(threshold.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_threshold(mut self, item: impl Into<ThresholdV2>) -> Self {
        self.threshold.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_threshold(
        mut self,
        threshold: impl IntoIterator<Item = impl Into<ThresholdV2>>,
    ) -> Self {
        self.threshold
            .get_or_insert_with(Vec::new)
            .extend(threshold.into_iter().map(Into::into));
        self
    }

    pub fn metric_filters(&self) -> Option<&[MetricFilterV2]> {
        self.metric_filters.as_deref()
    }

    pub fn set_metric_filters(&mut self, metric_filters: Option<Vec<MetricFilterV2>>) {
        self.metric_filters = metric_filters;
    }

    pub fn with_metric_filters(
        mut self,
        metric_filters: impl IntoIterator<Item = impl Into<MetricFilterV2>>,
    ) -> Self {
        self.metric_filters = Some(metric_filters.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_metric_filters(mut self, item: impl Into<MetricFilterV2>) -> Self {
        self.metric_filters.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_metric_filters(
        mut self,
        metric_filters: impl IntoIterator<Item = impl Into<MetricFilterV2>>,
    ) -> Self {
        self.metric_filters
            .get_or_insert_with(Vec::new)
            .extend(metric_filters.into_iter().map(Into::into));
        self
    }
}

impl Record for MetricV2 {
    const TYPE_NAME: &'static str = "MetricV2";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Name", self.name.as_ref());
        visitor.field("Threshold", self.threshold.as_ref());
        visitor.field("MetricFilters", self.metric_filters.as_ref());
    }
}

/// Historical metrics for any resource of an instance, up to three months back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataV2Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_arn: Option<String>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<IntervalDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<Vec<FilterV2>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groupings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<Vec<MetricV2>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl GetMetricDataV2Request {
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }

    pub fn set_resource_arn(&mut self, resource_arn: Option<String>) {
        self.resource_arn = resource_arn;
    }

    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time.map(truncate_to_millis);
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(truncate_to_millis(start_time));
        self
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time.map(truncate_to_millis);
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(truncate_to_millis(end_time));
        self
    }

    pub fn interval(&self) -> Option<&IntervalDetails> {
        self.interval.as_ref()
    }

    pub fn set_interval(&mut self, interval: Option<IntervalDetails>) {
        self.interval = interval;
    }

    pub fn with_interval(mut self, interval: IntervalDetails) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn filters(&self) -> Option<&[FilterV2]> {
        self.filters.as_deref()
    }

    pub fn set_filters(&mut self, filters: Option<Vec<FilterV2>>) {
        self.filters = filters;
    }

    pub fn with_filters(mut self, filters: impl IntoIterator<Item = impl Into<FilterV2>>) -> Self {
        self.filters = Some(filters.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_filters(mut self, item: impl Into<FilterV2>) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_filters(
        mut self,
        filters: impl IntoIterator<Item = impl Into<FilterV2>>,
    ) -> Self {
        self.filters
            .get_or_insert_with(Vec::new)
            .extend(filters.into_iter().map(Into::into));
        self
    }

    pub fn groupings(&self) -> Option<&[String]> {
        self.groupings.as_deref()
    }

    pub fn set_groupings(&mut self, groupings: Option<Vec<String>>) {
        self.groupings = groupings;
    }

    pub fn with_groupings(
        mut self,
        groupings: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.groupings = Some(groupings.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_groupings(mut self, item: impl Into<String>) -> Self {
        self.groupings.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_groupings(
        mut self,
        groupings: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.groupings
            .get_or_insert_with(Vec::new)
            .extend(groupings.into_iter().map(Into::into));
        self
    }

    pub fn metrics(&self) -> Option<&[MetricV2]> {
        self.metrics.as_deref()
    }

    pub fn set_metrics(&mut self, metrics: Option<Vec<MetricV2>>) {
        self.metrics = metrics;
    }

    pub fn with_metrics(mut self, metrics: impl IntoIterator<Item = impl Into<MetricV2>>) -> Self {
        self.metrics = Some(metrics.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_metrics(mut self, item: impl Into<MetricV2>) -> Self {
        self.metrics.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_metrics(
        mut self,
        metrics: impl IntoIterator<Item = impl Into<MetricV2>>,
    ) -> Self {
        self.metrics
            .get_or_insert_with(Vec::new)
            .extend(metrics.into_iter().map(Into::into));
        self
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    pub fn set_max_results(&mut self, max_results: Option<i32>) {
        self.max_results = max_results;
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Record for GetMetricDataV2Request {
    const TYPE_NAME: &'static str = "GetMetricDataV2Request";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("ResourceArn", self.resource_arn.as_ref());
        visitor.field("StartTime", self.start_time.as_ref());
        visitor.field("EndTime", self.end_time.as_ref());
        visitor.field("Interval", self.interval.as_ref());
        visitor.field("Filters", self.filters.as_ref());
        visitor.field("Groupings", self.groupings.as_ref());
        visitor.field("Metrics", self.metrics.as_ref());
        visitor.field("NextToken", self.next_token.as_ref());
        visitor.field("MaxResults", self.max_results.as_ref());
    }
}

record_impls!(
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
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_threshold_compares_bitwise() {
        let nan = Threshold::default().with_threshold_value(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_eq!(hash_of(&nan), hash_of(&nan.clone()));

        let positive = ThresholdV2::default().with_threshold_value(0.0);
        let negative = ThresholdV2::default().with_threshold_value(-0.0);
        assert_ne!(positive, negative);
    }

    #[test]
    fn test_threshold_renders_whole_values_with_fraction() {
        let threshold = Threshold::default()
            .with_comparison(Comparison::Lt)
            .with_threshold_value(80.0);
        assert_eq!(threshold.to_string(), "{Comparison: LT,ThresholdValue: 80.0}");
    }

    #[test]
    fn test_groupings_append_lazily() {
        let request = GetMetricDataRequest::default()
            .push_groupings(Grouping::Queue)
            .extend_groupings(["CHANNEL"]);
        assert_eq!(
            request.groupings(),
            Some(&[Grouping::Queue, Grouping::Channel][..])
        );

        let replaced = request.with_groupings([Grouping::RoutingProfile]);
        assert_eq!(replaced.groupings().map(|g| g.len()), Some(1));
    }
}
