//! Actions a rule runs when its conditions match.
//!
//! Exactly one action definition is expected per `RuleAction`, matching its
//! `action_type`. That pairing is checked by the service, not here.

use crate::domain::record::{insert_unique, record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use crate::model::routing_profile::Channel;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_enum! {
    ActionType {
        CreateTask => "CREATE_TASK",
        AssignContactCategory => "ASSIGN_CONTACT_CATEGORY",
        GenerateEventBridgeEvent => "GENERATE_EVENTBRIDGE_EVENT",
        SendNotification => "SEND_NOTIFICATION",
        CreateCase => "CREATE_CASE",
        UpdateCase => "UPDATE_CASE",
        EndAssociatedTasks => "END_ASSOCIATED_TASKS",
        SubmitAutoEvaluation => "SUBMIT_AUTO_EVALUATION",
    }
}

string_enum! {
    ReferenceType {
        Url => "URL",
        Attachment => "ATTACHMENT",
        ContactAnalysis => "CONTACT_ANALYSIS",
        Number => "NUMBER",
        String => "STRING",
        Date => "DATE",
        Email => "EMAIL",
        EmailMessage => "EMAIL_MESSAGE",
    }
}

string_enum! {
    NotificationDeliveryType {
        Email => "EMAIL",
    }
}

string_enum! {
    NotificationContentType {
        PlainText => "PLAIN_TEXT",
    }
}

/// A value attached to a task, such as a link or a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    reference_type: Option<ReferenceType>,
}

impl Reference {
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn reference_type(&self) -> Option<&ReferenceType> {
        self.reference_type.as_ref()
    }

    pub fn set_reference_type(&mut self, reference_type: Option<ReferenceType>) {
        self.reference_type = reference_type;
    }

    pub fn with_reference_type(mut self, reference_type: impl Into<ReferenceType>) -> Self {
        self.reference_type = Some(reference_type.into());
        self
    }
}

impl Record for Reference {
    const TYPE_NAME: &'static str = "Reference";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Value", self.value.as_ref());
        visitor.field("Type", self.reference_type.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskActionDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_flow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    references: Option<BTreeMap<String, Reference>>,
}

impl TaskActionDefinition {
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

    pub fn contact_flow_id(&self) -> Option<&str> {
        self.contact_flow_id.as_deref()
    }

    pub fn set_contact_flow_id(&mut self, contact_flow_id: Option<String>) {
        self.contact_flow_id = contact_flow_id;
    }

    pub fn with_contact_flow_id(mut self, contact_flow_id: impl Into<String>) -> Self {
        self.contact_flow_id = Some(contact_flow_id.into());
        self
    }

    pub fn references(&self) -> Option<&BTreeMap<String, Reference>> {
        self.references.as_ref()
    }

    pub fn set_references(&mut self, references: Option<BTreeMap<String, Reference>>) {
        self.references = references;
    }

    pub fn with_references(mut self, references: BTreeMap<String, Reference>) -> Self {
        self.references = Some(references);
        self
    }

    pub fn add_references_entry(
        mut self,
        key: impl Into<String>,
        value: Reference,
    ) -> Result<Self> {
        insert_unique(&mut self.references, "References", key.into(), value)?;
        Ok(self)
    }

    pub fn clear_references_entries(mut self) -> Self {
        self.references = None;
        self
    }
}

impl Record for TaskActionDefinition {
    const TYPE_NAME: &'static str = "TaskActionDefinition";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Name", self.name.as_ref());
        visitor.field("Description", self.description.as_ref());
        visitor.field("ContactFlowId", self.contact_flow_id.as_ref());
        visitor.field("References", self.references.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventBridgeActionDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl EventBridgeActionDefinition {
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
}

impl Record for EventBridgeActionDefinition {
    const TYPE_NAME: &'static str = "EventBridgeActionDefinition";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Name", self.name.as_ref());
    }
}

/// Carries no settings; its presence selects the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignContactCategoryActionDefinition {}

impl Record for AssignContactCategoryActionDefinition {
    const TYPE_NAME: &'static str = "AssignContactCategoryActionDefinition";

    fn visit_fields<V: FieldVisitor>(&self, _visitor: &mut V) {
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndAssociatedTasksActionDefinition {}

impl Record for EndAssociatedTasksActionDefinition {
    const TYPE_NAME: &'static str = "EndAssociatedTasksActionDefinition";

    fn visit_fields<V: FieldVisitor>(&self, _visitor: &mut V) {
    }
}

/// Users notified by a rule, selected by tag or by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationRecipientType {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_ids: Option<Vec<String>>,
}

impl NotificationRecipientType {
    /// Users carrying all of these tags are notified.
    pub fn user_tags(&self) -> Option<&BTreeMap<String, String>> {
        self.user_tags.as_ref()
    }

    pub fn set_user_tags(&mut self, user_tags: Option<BTreeMap<String, String>>) {
        self.user_tags = user_tags;
    }

    pub fn with_user_tags(mut self, user_tags: BTreeMap<String, String>) -> Self {
        self.user_tags = Some(user_tags);
        self
    }

    pub fn add_user_tags_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        insert_unique(&mut self.user_tags, "UserTags", key.into(), value.into())?;
        Ok(self)
    }

    pub fn clear_user_tags_entries(mut self) -> Self {
        self.user_tags = None;
        self
    }

    pub fn user_ids(&self) -> Option<&[String]> {
        self.user_ids.as_deref()
    }

    pub fn set_user_ids(&mut self, user_ids: Option<Vec<String>>) {
        self.user_ids = user_ids;
    }

    pub fn with_user_ids(mut self, user_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.user_ids = Some(user_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_user_ids(mut self, item: impl Into<String>) -> Self {
        self.user_ids.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_user_ids(
        mut self,
        user_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.user_ids
            .get_or_insert_with(Vec::new)
            .extend(user_ids.into_iter().map(Into::into));
        self
    }
}

impl Record for NotificationRecipientType {
    const TYPE_NAME: &'static str = "NotificationRecipientType";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("UserTags", self.user_tags.as_ref());
        visitor.field("UserIds", self.user_ids.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendNotificationActionDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_method: Option<NotificationDeliveryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<NotificationContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipient: Option<NotificationRecipientType>,
}

impl SendNotificationActionDefinition {
    pub fn delivery_method(&self) -> Option<&NotificationDeliveryType> {
        self.delivery_method.as_ref()
    }

    pub fn set_delivery_method(&mut self, delivery_method: Option<NotificationDeliveryType>) {
        self.delivery_method = delivery_method;
    }

    pub fn with_delivery_method(
        mut self,
        delivery_method: impl Into<NotificationDeliveryType>,
    ) -> Self {
        self.delivery_method = Some(delivery_method.into());
        self
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn set_subject(&mut self, subject: Option<String>) {
        self.subject = subject;
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn content_type(&self) -> Option<&NotificationContentType> {
        self.content_type.as_ref()
    }

    pub fn set_content_type(&mut self, content_type: Option<NotificationContentType>) {
        self.content_type = content_type;
    }

    pub fn with_content_type(mut self, content_type: impl Into<NotificationContentType>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn recipient(&self) -> Option<&NotificationRecipientType> {
        self.recipient.as_ref()
    }

    pub fn set_recipient(&mut self, recipient: Option<NotificationRecipientType>) {
        self.recipient = recipient;
    }

    pub fn with_recipient(mut self, recipient: NotificationRecipientType) -> Self {
        self.recipient = Some(recipient);
        self
    }
}

impl Record for SendNotificationActionDefinition {
    const TYPE_NAME: &'static str = "SendNotificationActionDefinition";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("DeliveryMethod", self.delivery_method.as_ref());
        visitor.field("Subject", self.subject.as_ref());
        visitor.field("Content", self.content.as_ref());
        visitor.field("ContentType", self.content_type.as_ref());
        visitor.field("Recipient", self.recipient.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    action_type: Option<ActionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task_action: Option<TaskActionDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_bridge_action: Option<EventBridgeActionDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assign_contact_category_action: Option<AssignContactCategoryActionDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_notification_action: Option<SendNotificationActionDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_associated_tasks_action: Option<EndAssociatedTasksActionDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channels: Option<Vec<Channel>>,
}

impl RuleAction {
    pub fn action_type(&self) -> Option<&ActionType> {
        self.action_type.as_ref()
    }

    pub fn set_action_type(&mut self, action_type: Option<ActionType>) {
        self.action_type = action_type;
    }

    pub fn with_action_type(mut self, action_type: impl Into<ActionType>) -> Self {
        self.action_type = Some(action_type.into());
        self
    }

    pub fn task_action(&self) -> Option<&TaskActionDefinition> {
        self.task_action.as_ref()
    }

    pub fn set_task_action(&mut self, task_action: Option<TaskActionDefinition>) {
        self.task_action = task_action;
    }

    pub fn with_task_action(mut self, task_action: TaskActionDefinition) -> Self {
        self.task_action = Some(task_action);
        self
    }

    pub fn event_bridge_action(&self) -> Option<&EventBridgeActionDefinition> {
        self.event_bridge_action.as_ref()
    }

    pub fn set_event_bridge_action(
        &mut self,
        event_bridge_action: Option<EventBridgeActionDefinition>,
    ) {
        self.event_bridge_action = event_bridge_action;
    }

    pub fn with_event_bridge_action(
        mut self,
        event_bridge_action: EventBridgeActionDefinition,
    ) -> Self {
        self.event_bridge_action = Some(event_bridge_action);
        self
    }

    pub fn assign_contact_category_action(&self) -> Option<&AssignContactCategoryActionDefinition> {
        self.assign_contact_category_action.as_ref()
    }

    pub fn set_assign_contact_category_action(
        &mut self,
        assign_contact_category_action: Option<AssignContactCategoryActionDefinition>,
    ) {
        self.assign_contact_category_action = assign_contact_category_action;
    }

    pub fn with_assign_contact_category_action(
        mut self,
        assign_contact_category_action: AssignContactCategoryActionDefinition,
    ) -> Self {
        self.assign_contact_category_action = Some(assign_contact_category_action);
        self
    }

    pub fn send_notification_action(&self) -> Option<&SendNotificationActionDefinition> {
        self.send_notification_action.as_ref()
    }

    pub fn set_send_notification_action(
        &mut self,
        send_notification_action: Option<SendNotificationActionDefinition>,
    ) {
        self.send_notification_action = send_notification_action;
    }

    pub fn with_send_notification_action(
        mut self,
        send_notification_action: SendNotificationActionDefinition,
    ) -> Self {
        self.send_notification_action = Some(send_notification_action);
        self
    }

    pub fn end_associated_tasks_action(&self) -> Option<&EndAssociatedTasksActionDefinition> {
        self.end_associated_tasks_action.as_ref()
    }

    pub fn set_end_associated_tasks_action(
        &mut self,
        end_associated_tasks_action: Option<EndAssociatedTasksActionDefinition>,
    ) {
        self.end_associated_tasks_action = end_associated_tasks_action;
    }

    pub fn with_end_associated_tasks_action(
        mut self,
        end_associated_tasks_action: EndAssociatedTasksActionDefinition,
    ) -> Self {
        self.end_associated_tasks_action = Some(end_associated_tasks_action);
        self
    }

    /// Channels the action applies to, for rules that can fire on several.
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
}

impl Record for RuleAction {
    const TYPE_NAME: &'static str = "RuleAction";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("ActionType", self.action_type.as_ref());
        visitor.field("TaskAction", self.task_action.as_ref());
        visitor.field("EventBridgeAction", self.event_bridge_action.as_ref());
        visitor.field("AssignContactCategoryAction", self.assign_contact_category_action.as_ref());
        visitor.field("SendNotificationAction", self.send_notification_action.as_ref());
        visitor.field("EndAssociatedTasksAction", self.end_associated_tasks_action.as_ref());
        visitor.field("Channels", self.channels.as_ref());
    }
}

record_impls!(
    Reference,
    TaskActionDefinition,
    EventBridgeActionDefinition,
    AssignContactCategoryActionDefinition,
    EndAssociatedTasksActionDefinition,
    NotificationRecipientType,
    SendNotificationActionDefinition,
    RuleAction,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_definition_is_distinct_from_unset() {
        let unset = RuleAction::default().with_action_type(ActionType::AssignContactCategory);
        let set = unset
            .clone()
            .with_assign_contact_category_action(AssignContactCategoryActionDefinition::default());

        assert_ne!(unset, set);
        assert_eq!(
            set.to_string(),
            "{ActionType: ASSIGN_CONTACT_CATEGORY,AssignContactCategoryAction: {}}"
        );
    }

    #[test]
    fn test_task_references() {
        let task = TaskActionDefinition::default()
            .with_name("Follow up")
            .add_references_entry(
                "ticket",
                Reference::default()
                    .with_value("https://tickets.example.com/42")
                    .with_reference_type("URL"),
            )
            .unwrap();

        let reference = task.references().and_then(|r| r.get("ticket")).unwrap();
        assert_eq!(reference.reference_type(), Some(&ReferenceType::Url));
        assert_eq!(
            task.to_string(),
            "{Name: Follow up,References: {ticket={Value: https://tickets.example.com/42,Type: URL}}}"
        );
    }
}
