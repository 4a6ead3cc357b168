//! User creation.

use crate::domain::ports::Operation;
use crate::domain::record::{insert_unique, record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_enum! {
    PhoneType {
        SoftPhone => "SOFT_PHONE",
        DeskPhone => "DESK_PHONE",
    }
}

/// Personal details of a user. Only required when the instance manages identities itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserIdentityInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mobile: Option<String>,
}

impl UserIdentityInfo {
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: Option<String>) {
        self.first_name = first_name;
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: Option<String>) {
        self.last_name = last_name;
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Address used for notifications when the primary one is an alias.
    pub fn secondary_email(&self) -> Option<&str> {
        self.secondary_email.as_deref()
    }

    pub fn set_secondary_email(&mut self, secondary_email: Option<String>) {
        self.secondary_email = secondary_email;
    }

    pub fn with_secondary_email(mut self, secondary_email: impl Into<String>) -> Self {
        self.secondary_email = Some(secondary_email.into());
        self
    }

    /// Mobile number in E.164 format.
    pub fn mobile(&self) -> Option<&str> {
        self.mobile.as_deref()
    }

    pub fn set_mobile(&mut self, mobile: Option<String>) {
        self.mobile = mobile;
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }
}

impl Record for UserIdentityInfo {
    const TYPE_NAME: &'static str = "UserIdentityInfo";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("FirstName", self.first_name.as_ref());
        visitor.field("LastName", self.last_name.as_ref());
        visitor.field("Email", self.email.as_ref());
        visitor.field("SecondaryEmail", self.secondary_email.as_ref());
        visitor.field("Mobile", self.mobile.as_ref());
    }
}

/// Phone settings of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPhoneConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_type: Option<PhoneType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_accept: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    after_contact_work_time_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desk_phone_number: Option<String>,
}

impl UserPhoneConfig {
    pub fn phone_type(&self) -> Option<&PhoneType> {
        self.phone_type.as_ref()
    }

    pub fn set_phone_type(&mut self, phone_type: Option<PhoneType>) {
        self.phone_type = phone_type;
    }

    pub fn with_phone_type(mut self, phone_type: impl Into<PhoneType>) -> Self {
        self.phone_type = Some(phone_type.into());
        self
    }

    /// Whether incoming contacts are accepted without agent action.
    pub fn auto_accept(&self) -> Option<bool> {
        self.auto_accept
    }

    pub fn set_auto_accept(&mut self, auto_accept: Option<bool>) {
        self.auto_accept = auto_accept;
    }

    pub fn with_auto_accept(mut self, auto_accept: bool) -> Self {
        self.auto_accept = Some(auto_accept);
        self
    }

    /// Seconds of after contact work allowed; `0` means unlimited.
    pub fn after_contact_work_time_limit(&self) -> Option<i32> {
        self.after_contact_work_time_limit
    }

    pub fn set_after_contact_work_time_limit(
        &mut self,
        after_contact_work_time_limit: Option<i32>,
    ) {
        self.after_contact_work_time_limit = after_contact_work_time_limit;
    }

    pub fn with_after_contact_work_time_limit(
        mut self,
        after_contact_work_time_limit: i32,
    ) -> Self {
        self.after_contact_work_time_limit = Some(after_contact_work_time_limit);
        self
    }

    pub fn desk_phone_number(&self) -> Option<&str> {
        self.desk_phone_number.as_deref()
    }

    pub fn set_desk_phone_number(&mut self, desk_phone_number: Option<String>) {
        self.desk_phone_number = desk_phone_number;
    }

    pub fn with_desk_phone_number(mut self, desk_phone_number: impl Into<String>) -> Self {
        self.desk_phone_number = Some(desk_phone_number.into());
        self
    }
}

impl Record for UserPhoneConfig {
    const TYPE_NAME: &'static str = "UserPhoneConfig";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("PhoneType", self.phone_type.as_ref());
        visitor.field("AutoAccept", self.auto_accept.as_ref());
        visitor.field("AfterContactWorkTimeLimit", self.after_contact_work_time_limit.as_ref());
        visitor.field("DeskPhoneNumber", self.desk_phone_number.as_ref());
    }
}

/// Creates a user account in an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identity_info: Option<UserIdentityInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_config: Option<UserPhoneConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    directory_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    security_profile_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    routing_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hierarchy_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
}

impl CreateUserRequest {
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password;
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn identity_info(&self) -> Option<&UserIdentityInfo> {
        self.identity_info.as_ref()
    }

    pub fn set_identity_info(&mut self, identity_info: Option<UserIdentityInfo>) {
        self.identity_info = identity_info;
    }

    pub fn with_identity_info(mut self, identity_info: UserIdentityInfo) -> Self {
        self.identity_info = Some(identity_info);
        self
    }

    pub fn phone_config(&self) -> Option<&UserPhoneConfig> {
        self.phone_config.as_ref()
    }

    pub fn set_phone_config(&mut self, phone_config: Option<UserPhoneConfig>) {
        self.phone_config = phone_config;
    }

    pub fn with_phone_config(mut self, phone_config: UserPhoneConfig) -> Self {
        self.phone_config = Some(phone_config);
        self
    }

    /// Identifier of the user account in an existing directory, for directory-backed
    /// instances.
    pub fn directory_user_id(&self) -> Option<&str> {
        self.directory_user_id.as_deref()
    }

    pub fn set_directory_user_id(&mut self, directory_user_id: Option<String>) {
        self.directory_user_id = directory_user_id;
    }

    pub fn with_directory_user_id(mut self, directory_user_id: impl Into<String>) -> Self {
        self.directory_user_id = Some(directory_user_id.into());
        self
    }

    pub fn security_profile_ids(&self) -> Option<&[String]> {
        self.security_profile_ids.as_deref()
    }

    pub fn set_security_profile_ids(&mut self, security_profile_ids: Option<Vec<String>>) {
        self.security_profile_ids = security_profile_ids;
    }

    pub fn with_security_profile_ids(
        mut self,
        security_profile_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.security_profile_ids = Some(security_profile_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_security_profile_ids(mut self, item: impl Into<String>) -> Self {
        self.security_profile_ids.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_security_profile_ids(
        mut self,
        security_profile_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.security_profile_ids
            .get_or_insert_with(Vec::new)
            .extend(security_profile_ids.into_iter().map(Into::into));
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

    pub fn hierarchy_group_id(&self) -> Option<&str> {
        self.hierarchy_group_id.as_deref()
    }

    pub fn set_hierarchy_group_id(&mut self, hierarchy_group_id: Option<String>) {
        self.hierarchy_group_id = hierarchy_group_id;
    }

    pub fn with_hierarchy_group_id(mut self, hierarchy_group_id: impl Into<String>) -> Self {
        self.hierarchy_group_id = Some(hierarchy_group_id.into());
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

impl Record for CreateUserRequest {
    const TYPE_NAME: &'static str = "CreateUserRequest";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Username", self.username.as_ref());
        visitor.field("Password", self.password.as_ref());
        visitor.field("IdentityInfo", self.identity_info.as_ref());
        visitor.field("PhoneConfig", self.phone_config.as_ref());
        visitor.field("DirectoryUserId", self.directory_user_id.as_ref());
        visitor.field("SecurityProfileIds", self.security_profile_ids.as_ref());
        visitor.field("RoutingProfileId", self.routing_profile_id.as_ref());
        visitor.field("HierarchyGroupId", self.hierarchy_group_id.as_ref());
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("Tags", self.tags.as_ref());
    }
}

impl Operation for CreateUserRequest {
    const OPERATION_NAME: &'static str = "CreateUser";

    type Output = CreateUserResult;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_arn: Option<String>,
}

impl CreateUserResult {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn set_user_id(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn user_arn(&self) -> Option<&str> {
        self.user_arn.as_deref()
    }

    pub fn set_user_arn(&mut self, user_arn: Option<String>) {
        self.user_arn = user_arn;
    }

    pub fn with_user_arn(mut self, user_arn: impl Into<String>) -> Self {
        self.user_arn = Some(user_arn.into());
        self
    }
}

impl Record for CreateUserResult {
    const TYPE_NAME: &'static str = "CreateUserResult";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("UserId", self.user_id.as_ref());
        visitor.field("UserArn", self.user_arn.as_ref());
    }
}

record_impls!(UserIdentityInfo, UserPhoneConfig, CreateUserRequest, CreateUserResult);
