//! Evaluation form listings.

use chrono::{DateTime, Utc};
use crate::core::codec::truncate_to_millis;
use crate::domain::record::{record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use serde::{Deserialize, Serialize};

string_enum! {
    EvaluationFormVersionStatus {
        Draft => "DRAFT",
        Active => "ACTIVE",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluationFormSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_form_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_form_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_by: Option<String>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified_by: Option<String>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    last_activated_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_activated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_version: Option<i32>,
}

impl EvaluationFormSummary {
    pub fn evaluation_form_id(&self) -> Option<&str> {
        self.evaluation_form_id.as_deref()
    }

    pub fn set_evaluation_form_id(&mut self, evaluation_form_id: Option<String>) {
        self.evaluation_form_id = evaluation_form_id;
    }

    pub fn with_evaluation_form_id(mut self, evaluation_form_id: impl Into<String>) -> Self {
        self.evaluation_form_id = Some(evaluation_form_id.into());
        self
    }

    pub fn evaluation_form_arn(&self) -> Option<&str> {
        self.evaluation_form_arn.as_deref()
    }

    pub fn set_evaluation_form_arn(&mut self, evaluation_form_arn: Option<String>) {
        self.evaluation_form_arn = evaluation_form_arn;
    }

    pub fn with_evaluation_form_arn(mut self, evaluation_form_arn: impl Into<String>) -> Self {
        self.evaluation_form_arn = Some(evaluation_form_arn.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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

    /// ARN of the user who created the form.
    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn set_created_by(&mut self, created_by: Option<String>) {
        self.created_by = created_by;
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
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

    pub fn last_modified_by(&self) -> Option<&str> {
        self.last_modified_by.as_deref()
    }

    pub fn set_last_modified_by(&mut self, last_modified_by: Option<String>) {
        self.last_modified_by = last_modified_by;
    }

    pub fn with_last_modified_by(mut self, last_modified_by: impl Into<String>) -> Self {
        self.last_modified_by = Some(last_modified_by.into());
        self
    }

    pub fn last_activated_time(&self) -> Option<DateTime<Utc>> {
        self.last_activated_time
    }

    pub fn set_last_activated_time(&mut self, last_activated_time: Option<DateTime<Utc>>) {
        self.last_activated_time = last_activated_time.map(truncate_to_millis);
    }

    pub fn with_last_activated_time(mut self, last_activated_time: DateTime<Utc>) -> Self {
        self.last_activated_time = Some(truncate_to_millis(last_activated_time));
        self
    }

    pub fn last_activated_by(&self) -> Option<&str> {
        self.last_activated_by.as_deref()
    }

    pub fn set_last_activated_by(&mut self, last_activated_by: Option<String>) {
        self.last_activated_by = last_activated_by;
    }

    pub fn with_last_activated_by(mut self, last_activated_by: impl Into<String>) -> Self {
        self.last_activated_by = Some(last_activated_by.into());
        self
    }

    pub fn latest_version(&self) -> Option<i32> {
        self.latest_version
    }

    pub fn set_latest_version(&mut self, latest_version: Option<i32>) {
        self.latest_version = latest_version;
    }

    pub fn with_latest_version(mut self, latest_version: i32) -> Self {
        self.latest_version = Some(latest_version);
        self
    }

    /// Absent while no version has been activated.
    pub fn active_version(&self) -> Option<i32> {
        self.active_version
    }

    pub fn set_active_version(&mut self, active_version: Option<i32>) {
        self.active_version = active_version;
    }

    pub fn with_active_version(mut self, active_version: i32) -> Self {
        self.active_version = Some(active_version);
        self
    }
}

impl Record for EvaluationFormSummary {
    const TYPE_NAME: &'static str = "EvaluationFormSummary";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("EvaluationFormId", self.evaluation_form_id.as_ref());
        visitor.field("EvaluationFormArn", self.evaluation_form_arn.as_ref());
        visitor.field("Title", self.title.as_ref());
        visitor.field("CreatedTime", self.created_time.as_ref());
        visitor.field("CreatedBy", self.created_by.as_ref());
        visitor.field("LastModifiedTime", self.last_modified_time.as_ref());
        visitor.field("LastModifiedBy", self.last_modified_by.as_ref());
        visitor.field("LastActivatedTime", self.last_activated_time.as_ref());
        visitor.field("LastActivatedBy", self.last_activated_by.as_ref());
        visitor.field("LatestVersion", self.latest_version.as_ref());
        visitor.field("ActiveVersion", self.active_version.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluationFormVersionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_form_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_form_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_form_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<EvaluationFormVersionStatus>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_by: Option<String>,
    #[serde(default, with = "crate::core::codec::epoch_seconds", skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified_by: Option<String>,
}

impl EvaluationFormVersionSummary {
    pub fn evaluation_form_arn(&self) -> Option<&str> {
        self.evaluation_form_arn.as_deref()
    }

    pub fn set_evaluation_form_arn(&mut self, evaluation_form_arn: Option<String>) {
        self.evaluation_form_arn = evaluation_form_arn;
    }

    pub fn with_evaluation_form_arn(mut self, evaluation_form_arn: impl Into<String>) -> Self {
        self.evaluation_form_arn = Some(evaluation_form_arn.into());
        self
    }

    pub fn evaluation_form_id(&self) -> Option<&str> {
        self.evaluation_form_id.as_deref()
    }

    pub fn set_evaluation_form_id(&mut self, evaluation_form_id: Option<String>) {
        self.evaluation_form_id = evaluation_form_id;
    }

    pub fn with_evaluation_form_id(mut self, evaluation_form_id: impl Into<String>) -> Self {
        self.evaluation_form_id = Some(evaluation_form_id.into());
        self
    }

    pub fn evaluation_form_version(&self) -> Option<i32> {
        self.evaluation_form_version
    }

    pub fn set_evaluation_form_version(&mut self, evaluation_form_version: Option<i32>) {
        self.evaluation_form_version = evaluation_form_version;
    }

    pub fn with_evaluation_form_version(mut self, evaluation_form_version: i32) -> Self {
        self.evaluation_form_version = Some(evaluation_form_version);
        self
    }

    /// A locked version can no longer be edited.
    pub fn locked(&self) -> Option<bool> {
        self.locked
    }

    pub fn set_locked(&mut self, locked: Option<bool>) {
        self.locked = locked;
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn status(&self) -> Option<&EvaluationFormVersionStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Option<EvaluationFormVersionStatus>) {
        self.status = status;
    }

    pub fn with_status(mut self, status: impl Into<EvaluationFormVersionStatus>) -> Self {
        self.status = Some(status.into());
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

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn set_created_by(&mut self, created_by: Option<String>) {
        self.created_by = created_by;
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
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

    pub fn last_modified_by(&self) -> Option<&str> {
        self.last_modified_by.as_deref()
    }

    pub fn set_last_modified_by(&mut self, last_modified_by: Option<String>) {
        self.last_modified_by = last_modified_by;
    }

    pub fn with_last_modified_by(mut self, last_modified_by: impl Into<String>) -> Self {
        self.last_modified_by = Some(last_modified_by.into());
        self
    }
}

impl Record for EvaluationFormVersionSummary {
    const TYPE_NAME: &'static str = "EvaluationFormVersionSummary";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("EvaluationFormArn", self.evaluation_form_arn.as_ref());
        visitor.field("EvaluationFormId", self.evaluation_form_id.as_ref());
        visitor.field("EvaluationFormVersion", self.evaluation_form_version.as_ref());
        visitor.field("Locked", self.locked.as_ref());
        visitor.field("Status", self.status.as_ref());
        visitor.field("CreatedTime", self.created_time.as_ref());
        visitor.field("CreatedBy", self.created_by.as_ref());
        visitor.field("LastModifiedTime", self.last_modified_time.as_ref());
        visitor.field("LastModifiedBy", self.last_modified_by.as_ref());
    }
}

record_impls!(EvaluationFormSummary, EvaluationFormVersionSummary);
