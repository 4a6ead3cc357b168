//! Files attached to contacts and cases, and who uploaded them.

use crate::domain::record::{insert_unique, record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_enum! {
    FileStatusType {
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Processing => "PROCESSING",
        Failed => "FAILED",
    }
}

string_enum! {
    FileUseCaseType {
        Attachment => "ATTACHMENT",
    }
}

/// The principal that created a resource: a contact-center user or an IAM identity.
///
/// The service sets exactly one of the two; this record does not enforce that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedByInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    connect_user_arn: Option<String>,
    #[serde(rename = "AWSIdentityArn", skip_serializing_if = "Option::is_none")]
    aws_identity_arn: Option<String>,
}

impl CreatedByInfo {
    pub fn connect_user_arn(&self) -> Option<&str> {
        self.connect_user_arn.as_deref()
    }

    pub fn set_connect_user_arn(&mut self, connect_user_arn: Option<String>) {
        self.connect_user_arn = connect_user_arn;
    }

    pub fn with_connect_user_arn(mut self, connect_user_arn: impl Into<String>) -> Self {
        self.connect_user_arn = Some(connect_user_arn.into());
        self
    }

    pub fn aws_identity_arn(&self) -> Option<&str> {
        self.aws_identity_arn.as_deref()
    }

    pub fn set_aws_identity_arn(&mut self, aws_identity_arn: Option<String>) {
        self.aws_identity_arn = aws_identity_arn;
    }

    pub fn with_aws_identity_arn(mut self, aws_identity_arn: impl Into<String>) -> Self {
        self.aws_identity_arn = Some(aws_identity_arn.into());
        self
    }
}

impl Record for CreatedByInfo {
    const TYPE_NAME: &'static str = "CreatedByInfo";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("ConnectUserArn", self.connect_user_arn.as_ref());
        visitor.field("AWSIdentityArn", self.aws_identity_arn.as_ref());
    }
}

/// Metadata of one attached file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachedFile {
    /// ISO 8601 text, kept as the service sends it.
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_size_in_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_status: Option<FileStatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_by: Option<CreatedByInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_use_case_type: Option<FileUseCaseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    associated_resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
}

impl AttachedFile {
    pub fn creation_time(&self) -> Option<&str> {
        self.creation_time.as_deref()
    }

    pub fn set_creation_time(&mut self, creation_time: Option<String>) {
        self.creation_time = creation_time;
    }

    pub fn with_creation_time(mut self, creation_time: impl Into<String>) -> Self {
        self.creation_time = Some(creation_time.into());
        self
    }

    pub fn file_arn(&self) -> Option<&str> {
        self.file_arn.as_deref()
    }

    pub fn set_file_arn(&mut self, file_arn: Option<String>) {
        self.file_arn = file_arn;
    }

    pub fn with_file_arn(mut self, file_arn: impl Into<String>) -> Self {
        self.file_arn = Some(file_arn.into());
        self
    }

    pub fn file_id(&self) -> Option<&str> {
        self.file_id.as_deref()
    }

    pub fn set_file_id(&mut self, file_id: Option<String>) {
        self.file_id = file_id;
    }

    pub fn with_file_id(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = Some(file_id.into());
        self
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, file_name: Option<String>) {
        self.file_name = file_name;
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn file_size_in_bytes(&self) -> Option<i64> {
        self.file_size_in_bytes
    }

    pub fn set_file_size_in_bytes(&mut self, file_size_in_bytes: Option<i64>) {
        self.file_size_in_bytes = file_size_in_bytes;
    }

    pub fn with_file_size_in_bytes(mut self, file_size_in_bytes: i64) -> Self {
        self.file_size_in_bytes = Some(file_size_in_bytes);
        self
    }

    pub fn file_status(&self) -> Option<&FileStatusType> {
        self.file_status.as_ref()
    }

    pub fn set_file_status(&mut self, file_status: Option<FileStatusType>) {
        self.file_status = file_status;
    }

    pub fn with_file_status(mut self, file_status: impl Into<FileStatusType>) -> Self {
        self.file_status = Some(file_status.into());
        self
    }

    pub fn created_by(&self) -> Option<&CreatedByInfo> {
        self.created_by.as_ref()
    }

    pub fn set_created_by(&mut self, created_by: Option<CreatedByInfo>) {
        self.created_by = created_by;
    }

    pub fn with_created_by(mut self, created_by: CreatedByInfo) -> Self {
        self.created_by = Some(created_by);
        self
    }

    pub fn file_use_case_type(&self) -> Option<&FileUseCaseType> {
        self.file_use_case_type.as_ref()
    }

    pub fn set_file_use_case_type(&mut self, file_use_case_type: Option<FileUseCaseType>) {
        self.file_use_case_type = file_use_case_type;
    }

    pub fn with_file_use_case_type(
        mut self,
        file_use_case_type: impl Into<FileUseCaseType>,
    ) -> Self {
        self.file_use_case_type = Some(file_use_case_type.into());
        self
    }

    pub fn associated_resource_arn(&self) -> Option<&str> {
        self.associated_resource_arn.as_deref()
    }

    pub fn set_associated_resource_arn(&mut self, associated_resource_arn: Option<String>) {
        self.associated_resource_arn = associated_resource_arn;
    }

    pub fn with_associated_resource_arn(
        mut self,
        associated_resource_arn: impl Into<String>,
    ) -> Self {
        self.associated_resource_arn = Some(associated_resource_arn.into());
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

impl Record for AttachedFile {
    const TYPE_NAME: &'static str = "AttachedFile";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("CreationTime", self.creation_time.as_ref());
        visitor.field("FileArn", self.file_arn.as_ref());
        visitor.field("FileId", self.file_id.as_ref());
        visitor.field("FileName", self.file_name.as_ref());
        visitor.field("FileSizeInBytes", self.file_size_in_bytes.as_ref());
        visitor.field("FileStatus", self.file_status.as_ref());
        visitor.field("CreatedBy", self.created_by.as_ref());
        visitor.field("FileUseCaseType", self.file_use_case_type.as_ref());
        visitor.field("AssociatedResourceArn", self.associated_resource_arn.as_ref());
        visitor.field("Tags", self.tags.as_ref());
    }
}

record_impls!(CreatedByInfo, AttachedFile);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{from_json, to_json};
    use crate::core::lint::unknown_values;

    #[test]
    fn test_created_by_wire_names() {
        let created_by = CreatedByInfo::default()
            .with_aws_identity_arn("arn:aws:iam::123456789012:role/uploader");

        assert_eq!(
            to_json(&created_by).unwrap(),
            r#"{"AWSIdentityArn":"arn:aws:iam::123456789012:role/uploader"}"#
        );
        assert_eq!(
            created_by.to_string(),
            "{AWSIdentityArn: arn:aws:iam::123456789012:role/uploader}"
        );
    }

    #[test]
    fn test_attached_file_carries_creator() {
        let file: AttachedFile = from_json(
            r#"{"FileId":"f-1","FileStatus":"QUARANTINED","FileSizeInBytes":2048,
                "CreatedBy":{"ConnectUserArn":"arn:aws:connect:us-east-1:123456789012:instance/i-1/agent/u-1"}}"#,
        )
        .unwrap();

        assert_eq!(
            file.created_by().and_then(|c| c.connect_user_arn()),
            Some("arn:aws:connect:us-east-1:123456789012:instance/i-1/agent/u-1")
        );
        assert!(file.created_by().and_then(|c| c.aws_identity_arn()).is_none());
        assert_eq!(file.file_size_in_bytes(), Some(2048));

        let findings = unknown_values(&file);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].path, "FileStatus");
        assert_eq!(findings[0].type_name, "FileStatusType");
    }

    #[test]
    fn test_nested_creator_difference_breaks_equality() {
        let by_user = AttachedFile::default()
            .with_file_id("f-1")
            .with_created_by(CreatedByInfo::default().with_connect_user_arn("arn:user"));
        let by_role = AttachedFile::default()
            .with_file_id("f-1")
            .with_created_by(CreatedByInfo::default().with_aws_identity_arn("arn:user"));

        assert_ne!(by_user, by_role);
        assert_eq!(
            by_user.to_string(),
            "{FileId: f-1,CreatedBy: {ConnectUserArn: arn:user}}"
        );
    }
}
