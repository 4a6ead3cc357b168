//! Agent workspace views.

use chrono::{DateTime, Utc};
use crate::core::codec::truncate_to_millis;
use crate::domain::ports::Operation;
use crate::domain::record::{insert_unique, record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_enum! {
    ViewStatus {
        Published => "PUBLISHED",
        Saved => "SAVED",
    }
}

string_enum! {
    /// Who owns a view: the customer, or the service for its managed views.
    ViewType {
        CustomerManaged => "CUSTOMER_MANAGED",
        AwsManaged => "AWS_MANAGED",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    input_schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<String>>,
}

impl ViewContent {
    /// JSON schema of the data the template expects.
    pub fn input_schema(&self) -> Option<&str> {
        self.input_schema.as_deref()
    }

    pub fn set_input_schema(&mut self, input_schema: Option<String>) {
        self.input_schema = input_schema;
    }

    pub fn with_input_schema(mut self, input_schema: impl Into<String>) -> Self {
        self.input_schema = Some(input_schema.into());
        self
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn set_template(&mut self, template: Option<String>) {
        self.template = template;
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn actions(&self) -> Option<&[String]> {
        self.actions.as_deref()
    }

    pub fn set_actions(&mut self, actions: Option<Vec<String>>) {
        self.actions = actions;
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.actions = Some(actions.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_actions(mut self, item: impl Into<String>) -> Self {
        self.actions.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_actions(mut self, actions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.actions
            .get_or_insert_with(Vec::new)
            .extend(actions.into_iter().map(Into::into));
        self
    }
}

impl Record for ViewContent {
    const TYPE_NAME: &'static str = "ViewContent";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("InputSchema", self.input_schema.as_ref());
        visitor.field("Template", self.template.as_ref());
        visitor.field("Actions", self.actions.as_ref());
    }
}

/// Content supplied when creating or updating a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewInputContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<String>>,
}

impl ViewInputContent {
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn set_template(&mut self, template: Option<String>) {
        self.template = template;
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn actions(&self) -> Option<&[String]> {
        self.actions.as_deref()
    }

    pub fn set_actions(&mut self, actions: Option<Vec<String>>) {
        self.actions = actions;
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.actions = Some(actions.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_actions(mut self, item: impl Into<String>) -> Self {
        self.actions.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_actions(mut self, actions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.actions
            .get_or_insert_with(Vec::new)
            .extend(actions.into_iter().map(Into::into));
        self
    }
}

impl Record for ViewInputContent {
    const TYPE_NAME: &'static str = "ViewInputContent";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Template", self.template.as_ref());
        visitor.field("Actions", self.actions.as_ref());
    }
}

/// A view, either a draft (`SAVED`) or a published version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct View {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ViewStatus>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    view_type: Option<ViewType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<ViewContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view_content_sha256: Option<String>,
}

impl View {
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

    pub fn status(&self) -> Option<&ViewStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Option<ViewStatus>) {
        self.status = status;
    }

    pub fn with_status(mut self, status: impl Into<ViewStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn view_type(&self) -> Option<&ViewType> {
        self.view_type.as_ref()
    }

    pub fn set_view_type(&mut self, view_type: Option<ViewType>) {
        self.view_type = view_type;
    }

    pub fn with_view_type(mut self, view_type: impl Into<ViewType>) -> Self {
        self.view_type = Some(view_type.into());
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

    /// Published version number; absent for drafts.
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn set_version(&mut self, version: Option<i32>) {
        self.version = version;
    }

    pub fn with_version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn version_description(&self) -> Option<&str> {
        self.version_description.as_deref()
    }

    pub fn set_version_description(&mut self, version_description: Option<String>) {
        self.version_description = version_description;
    }

    pub fn with_version_description(mut self, version_description: impl Into<String>) -> Self {
        self.version_description = Some(version_description.into());
        self
    }

    pub fn content(&self) -> Option<&ViewContent> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, content: Option<ViewContent>) {
        self.content = content;
    }

    pub fn with_content(mut self, content: ViewContent) -> Self {
        self.content = Some(content);
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

    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_time
    }

    pub fn set_created_time(&mut self, created_time: Option<DateTime<Utc>>) {
        self.created_time = created_time.map(truncate_to_millis);
    }

    pub fn with_created_time(mut self, created_time: DateTime<Utc>) -> Self {
        self.created_time = Some(truncate_to_millis(created_time));
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

    /// Hash of the content, used for optimistic locking on update.
    pub fn view_content_sha256(&self) -> Option<&str> {
        self.view_content_sha256.as_deref()
    }

    pub fn set_view_content_sha256(&mut self, view_content_sha256: Option<String>) {
        self.view_content_sha256 = view_content_sha256;
    }

    pub fn with_view_content_sha256(mut self, view_content_sha256: impl Into<String>) -> Self {
        self.view_content_sha256 = Some(view_content_sha256.into());
        self
    }
}

impl Record for View {
    const TYPE_NAME: &'static str = "View";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Id", self.id.as_ref());
        visitor.field("Arn", self.arn.as_ref());
        visitor.field("Name", self.name.as_ref());
        visitor.field("Status", self.status.as_ref());
        visitor.field("Type", self.view_type.as_ref());
        visitor.field("Description", self.description.as_ref());
        visitor.field("Version", self.version.as_ref());
        visitor.field("VersionDescription", self.version_description.as_ref());
        visitor.field("Content", self.content.as_ref());
        visitor.field("Tags", self.tags.as_ref());
        visitor.field("CreatedTime", self.created_time.as_ref());
        visitor.field("LastModifiedTime", self.last_modified_time.as_ref());
        visitor.field("ViewContentSha256", self.view_content_sha256.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateViewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ViewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<ViewInputContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
}

impl CreateViewRequest {
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

    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref()
    }

    pub fn set_client_token(&mut self, client_token: Option<String>) {
        self.client_token = client_token;
    }

    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
        self
    }

    pub fn status(&self) -> Option<&ViewStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Option<ViewStatus>) {
        self.status = status;
    }

    pub fn with_status(mut self, status: impl Into<ViewStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn content(&self) -> Option<&ViewInputContent> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, content: Option<ViewInputContent>) {
        self.content = content;
    }

    pub fn with_content(mut self, content: ViewInputContent) -> Self {
        self.content = Some(content);
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
}

impl Record for CreateViewRequest {
    const TYPE_NAME: &'static str = "CreateViewRequest";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("ClientToken", self.client_token.as_ref());
        visitor.field("Status", self.status.as_ref());
        visitor.field("Content", self.content.as_ref());
        visitor.field("Description", self.description.as_ref());
        visitor.field("Name", self.name.as_ref());
        visitor.field("Tags", self.tags.as_ref());
    }
}

impl Operation for CreateViewRequest {
    const OPERATION_NAME: &'static str = "CreateView";

    type Output = CreateViewResult;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateViewResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<View>,
}

impl CreateViewResult {
    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn set_view(&mut self, view: Option<View>) {
        self.view = view;
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }
}

impl Record for CreateViewResult {
    const TYPE_NAME: &'static str = "CreateViewResult";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("View", self.view.as_ref());
    }
}

record_impls!(ViewContent, ViewInputContent, View, CreateViewRequest, CreateViewResult);
