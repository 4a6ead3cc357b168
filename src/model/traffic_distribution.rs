//! Traffic distribution groups spread telephony traffic across replicated instances.

use crate::domain::ports::Operation;
use crate::domain::record::{record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use serde::{Deserialize, Serialize};

string_enum! {
    TrafficDistributionGroupStatus {
        CreationInProgress => "CREATION_IN_PROGRESS",
        Active => "ACTIVE",
        CreationFailed => "CREATION_FAILED",
        PendingDeletion => "PENDING_DELETION",
        DeletionFailed => "DELETION_FAILED",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrafficDistributionGroupSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TrafficDistributionGroupStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_default: Option<bool>,
}

impl TrafficDistributionGroupSummary {
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

    pub fn instance_arn(&self) -> Option<&str> {
        self.instance_arn.as_deref()
    }

    pub fn set_instance_arn(&mut self, instance_arn: Option<String>) {
        self.instance_arn = instance_arn;
    }

    pub fn with_instance_arn(mut self, instance_arn: impl Into<String>) -> Self {
        self.instance_arn = Some(instance_arn.into());
        self
    }

    pub fn status(&self) -> Option<&TrafficDistributionGroupStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Option<TrafficDistributionGroupStatus>) {
        self.status = status;
    }

    pub fn with_status(mut self, status: impl Into<TrafficDistributionGroupStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// The default group is created with the instance replica and cannot be deleted.
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
}

impl Record for TrafficDistributionGroupSummary {
    const TYPE_NAME: &'static str = "TrafficDistributionGroupSummary";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Id", self.id.as_ref());
        visitor.field("Arn", self.arn.as_ref());
        visitor.field("Name", self.name.as_ref());
        visitor.field("InstanceArn", self.instance_arn.as_ref());
        visitor.field("Status", self.status.as_ref());
        visitor.field("IsDefault", self.is_default.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrafficDistributionGroupsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
}

impl ListTrafficDistributionGroupsRequest {
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
}

impl Record for ListTrafficDistributionGroupsRequest {
    const TYPE_NAME: &'static str = "ListTrafficDistributionGroupsRequest";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("MaxResults", self.max_results.as_ref());
        visitor.field("NextToken", self.next_token.as_ref());
        visitor.field("InstanceId", self.instance_id.as_ref());
    }
}

impl Operation for ListTrafficDistributionGroupsRequest {
    const OPERATION_NAME: &'static str = "ListTrafficDistributionGroups";

    type Output = ListTrafficDistributionGroupsResult;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrafficDistributionGroupsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    traffic_distribution_group_summary_list: Option<Vec<TrafficDistributionGroupSummary>>,
}

impl ListTrafficDistributionGroupsResult {
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

    pub fn traffic_distribution_group_summary_list(&self) -> Option<&[TrafficDistributionGroupSummary]> {
        self.traffic_distribution_group_summary_list.as_deref()
    }

    pub fn set_traffic_distribution_group_summary_list(
        &mut self,
        traffic_distribution_group_summary_list: Option<Vec<TrafficDistributionGroupSummary>>,
    ) {
        self.traffic_distribution_group_summary_list = traffic_distribution_group_summary_list;
    }

    pub fn with_traffic_distribution_group_summary_list(
        mut self,
        traffic_distribution_group_summary_list: impl IntoIterator<Item = impl Into<TrafficDistributionGroupSummary>>,
    ) -> Self {
        self.traffic_distribution_group_summary_list = Some(traffic_distribution_group_summary_list.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_traffic_distribution_group_summary_list(
        mut self,
        item: impl Into<TrafficDistributionGroupSummary>,
    ) -> Self {
        self.traffic_distribution_group_summary_list.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_traffic_distribution_group_summary_list(
        mut self,
        traffic_distribution_group_summary_list: impl IntoIterator<Item = impl Into<TrafficDistributionGroupSummary>>,
    ) -> Self {
        self.traffic_distribution_group_summary_list
            .get_or_insert_with(Vec::new)
            .extend(traffic_distribution_group_summary_list.into_iter().map(Into::into));
        self
    }
}

impl Record for ListTrafficDistributionGroupsResult {
    const TYPE_NAME: &'static str = "ListTrafficDistributionGroupsResult";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("NextToken", self.next_token.as_ref());
        visitor.field("TrafficDistributionGroupSummaryList", self.traffic_distribution_group_summary_list.as_ref());
    }
}

record_impls!(
    TrafficDistributionGroupSummary,
    ListTrafficDistributionGroupsRequest,
    ListTrafficDistributionGroupsResult,
);
