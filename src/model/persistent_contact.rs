//! Persistent chat: continuing a past chat session in a new contact.

use crate::domain::ports::Operation;
use crate::domain::record::{record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use serde::{Deserialize, Serialize};

string_enum! {
    /// Which past contact a persistent chat resumes from.
    ///
    /// `EntirePastSession` resumes from the most recently ended contact of the past session
    /// named by its initial contact id. `FromSegment` resumes from exactly the contact
    /// given.
    RehydrationType {
        EntirePastSession => "ENTIRE_PAST_SESSION",
        FromSegment => "FROM_SEGMENT",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersistentContactAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rehydration_type: Option<RehydrationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
}

impl CreatePersistentContactAssociationRequest {
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

    /// The contact the association is made from.
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

    pub fn rehydration_type(&self) -> Option<&RehydrationType> {
        self.rehydration_type.as_ref()
    }

    pub fn set_rehydration_type(&mut self, rehydration_type: Option<RehydrationType>) {
        self.rehydration_type = rehydration_type;
    }

    pub fn with_rehydration_type(mut self, rehydration_type: impl Into<RehydrationType>) -> Self {
        self.rehydration_type = Some(rehydration_type.into());
        self
    }

    pub fn source_contact_id(&self) -> Option<&str> {
        self.source_contact_id.as_deref()
    }

    pub fn set_source_contact_id(&mut self, source_contact_id: Option<String>) {
        self.source_contact_id = source_contact_id;
    }

    pub fn with_source_contact_id(mut self, source_contact_id: impl Into<String>) -> Self {
        self.source_contact_id = Some(source_contact_id.into());
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
}

impl Record for CreatePersistentContactAssociationRequest {
    const TYPE_NAME: &'static str = "CreatePersistentContactAssociationRequest";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("InitialContactId", self.initial_contact_id.as_ref());
        visitor.field("RehydrationType", self.rehydration_type.as_ref());
        visitor.field("SourceContactId", self.source_contact_id.as_ref());
        visitor.field("ClientToken", self.client_token.as_ref());
    }
}

impl Operation for CreatePersistentContactAssociationRequest {
    const OPERATION_NAME: &'static str = "CreatePersistentContactAssociation";

    type Output = CreatePersistentContactAssociationResult;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersistentContactAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    continued_from_contact_id: Option<String>,
}

impl CreatePersistentContactAssociationResult {
    /// The past contact actually used for rehydration.
    pub fn continued_from_contact_id(&self) -> Option<&str> {
        self.continued_from_contact_id.as_deref()
    }

    pub fn set_continued_from_contact_id(&mut self, continued_from_contact_id: Option<String>) {
        self.continued_from_contact_id = continued_from_contact_id;
    }

    pub fn with_continued_from_contact_id(
        mut self,
        continued_from_contact_id: impl Into<String>,
    ) -> Self {
        self.continued_from_contact_id = Some(continued_from_contact_id.into());
        self
    }
}

impl Record for CreatePersistentContactAssociationResult {
    const TYPE_NAME: &'static str = "CreatePersistentContactAssociationResult";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("ContinuedFromContactId", self.continued_from_contact_id.as_ref());
    }
}

record_impls!(CreatePersistentContactAssociationRequest, CreatePersistentContactAssociationResult);
