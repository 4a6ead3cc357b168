//! Claimed phone numbers: summaries, claim and describe calls, and number listing.

use crate::domain::ports::Operation;
use crate::domain::record::{insert_unique, record_impls, FieldVisitor, Record};
use crate::domain::string_enum::string_enum;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_enum! {
    /// ISO 3166-1 alpha-2 country code of a phone number.
    PhoneNumberCountryCode {
        Af => "AF",
        Al => "AL",
        Dz => "DZ",
        As => "AS",
        Ad => "AD",
        Ao => "AO",
        Ai => "AI",
        Aq => "AQ",
        Ag => "AG",
        Ar => "AR",
        Am => "AM",
        Aw => "AW",
        Au => "AU",
        At => "AT",
        Az => "AZ",
        Bs => "BS",
        Bh => "BH",
        Bd => "BD",
        Bb => "BB",
        By => "BY",
        Be => "BE",
        Bz => "BZ",
        Bj => "BJ",
        Bm => "BM",
        Bt => "BT",
        Bo => "BO",
        Ba => "BA",
        Bw => "BW",
        Br => "BR",
        Io => "IO",
        Vg => "VG",
        Bn => "BN",
        Bg => "BG",
        Bf => "BF",
        Bi => "BI",
        Kh => "KH",
        Cm => "CM",
        Ca => "CA",
        Cv => "CV",
        Ky => "KY",
        Cf => "CF",
        Td => "TD",
        Cl => "CL",
        Cn => "CN",
        Cx => "CX",
        Cc => "CC",
        Co => "CO",
        Km => "KM",
        Ck => "CK",
        Cr => "CR",
        Hr => "HR",
        Cu => "CU",
        Cw => "CW",
        Cy => "CY",
        Cz => "CZ",
        Cd => "CD",
        Dk => "DK",
        Dj => "DJ",
        Dm => "DM",
        Do => "DO",
        Tl => "TL",
        Ec => "EC",
        Eg => "EG",
        Sv => "SV",
        Gq => "GQ",
        Er => "ER",
        Ee => "EE",
        Et => "ET",
        Fk => "FK",
        Fo => "FO",
        Fj => "FJ",
        Fi => "FI",
        Fr => "FR",
        Pf => "PF",
        Ga => "GA",
        Gm => "GM",
        Ge => "GE",
        De => "DE",
        Gh => "GH",
        Gi => "GI",
        Gr => "GR",
        Gl => "GL",
        Gd => "GD",
        Gu => "GU",
        Gt => "GT",
        Gg => "GG",
        Gn => "GN",
        Gw => "GW",
        Gy => "GY",
        Ht => "HT",
        Hn => "HN",
        Hk => "HK",
        Hu => "HU",
        Is => "IS",
        In => "IN",
        Id => "ID",
        Ir => "IR",
        Iq => "IQ",
        Ie => "IE",
        Im => "IM",
        Il => "IL",
        It => "IT",
        Ci => "CI",
        Jm => "JM",
        Jp => "JP",
        Je => "JE",
        Jo => "JO",
        Kz => "KZ",
        Ke => "KE",
        Ki => "KI",
        Kw => "KW",
        Kg => "KG",
        La => "LA",
        Lv => "LV",
        Lb => "LB",
        Ls => "LS",
        Lr => "LR",
        Ly => "LY",
        Li => "LI",
        Lt => "LT",
        Lu => "LU",
        Mo => "MO",
        Mk => "MK",
        Mg => "MG",
        Mw => "MW",
        My => "MY",
        Mv => "MV",
        Ml => "ML",
        Mt => "MT",
        Mh => "MH",
        Mr => "MR",
        Mu => "MU",
        Yt => "YT",
        Mx => "MX",
        Fm => "FM",
        Md => "MD",
        Mc => "MC",
        Mn => "MN",
        Me => "ME",
        Ms => "MS",
        Ma => "MA",
        Mz => "MZ",
        Mm => "MM",
        Na => "NA",
        Nr => "NR",
        Np => "NP",
        Nl => "NL",
        An => "AN",
        Nc => "NC",
        Nz => "NZ",
        Ni => "NI",
        Ne => "NE",
        Ng => "NG",
        Nu => "NU",
        Kp => "KP",
        Mp => "MP",
        No => "NO",
        Om => "OM",
        Pk => "PK",
        Pw => "PW",
        Pa => "PA",
        Pg => "PG",
        Py => "PY",
        Pe => "PE",
        Ph => "PH",
        Pn => "PN",
        Pl => "PL",
        Pt => "PT",
        Pr => "PR",
        Qa => "QA",
        Cg => "CG",
        Re => "RE",
        Ro => "RO",
        Ru => "RU",
        Rw => "RW",
        Bl => "BL",
        Sh => "SH",
        Kn => "KN",
        Lc => "LC",
        Mf => "MF",
        Pm => "PM",
        Vc => "VC",
        Ws => "WS",
        Sm => "SM",
        St => "ST",
        Sa => "SA",
        Sn => "SN",
        Rs => "RS",
        Sc => "SC",
        Sl => "SL",
        Sg => "SG",
        Sx => "SX",
        Sk => "SK",
        Si => "SI",
        Sb => "SB",
        So => "SO",
        Za => "ZA",
        Kr => "KR",
        Es => "ES",
        Lk => "LK",
        Sd => "SD",
        Sr => "SR",
        Sj => "SJ",
        Sz => "SZ",
        Se => "SE",
        Ch => "CH",
        Sy => "SY",
        Tw => "TW",
        Tj => "TJ",
        Tz => "TZ",
        Th => "TH",
        Tg => "TG",
        Tk => "TK",
        To => "TO",
        Tt => "TT",
        Tn => "TN",
        Tr => "TR",
        Tm => "TM",
        Tc => "TC",
        Tv => "TV",
        Vi => "VI",
        Ug => "UG",
        Ua => "UA",
        Ae => "AE",
        Gb => "GB",
        Us => "US",
        Uy => "UY",
        Uz => "UZ",
        Vu => "VU",
        Va => "VA",
        Ve => "VE",
        Vn => "VN",
        Wf => "WF",
        Eh => "EH",
        Ye => "YE",
        Zm => "ZM",
        Zw => "ZW",
    }
}

string_enum! {
    PhoneNumberType {
        TollFree => "TOLL_FREE",
        Did => "DID",
        Uifn => "UIFN",
        Shared => "SHARED",
        ThirdPartyTf => "THIRD_PARTY_TF",
        ThirdPartyDid => "THIRD_PARTY_DID",
        ShortCode => "SHORT_CODE",
    }
}

string_enum! {
    /// Where a claim, update or release of a number currently stands.
    PhoneNumberWorkflowStatus {
        Claimed => "CLAIMED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
    }
}

/// One entry of a phone number listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPhoneNumbersSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_country_code: Option<PhoneNumberCountryCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_type: Option<PhoneNumberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_phone_number_arn: Option<String>,
}

impl ListPhoneNumbersSummary {
    pub fn phone_number_id(&self) -> Option<&str> {
        self.phone_number_id.as_deref()
    }

    pub fn set_phone_number_id(&mut self, phone_number_id: Option<String>) {
        self.phone_number_id = phone_number_id;
    }

    pub fn with_phone_number_id(mut self, phone_number_id: impl Into<String>) -> Self {
        self.phone_number_id = Some(phone_number_id.into());
        self
    }

    pub fn phone_number_arn(&self) -> Option<&str> {
        self.phone_number_arn.as_deref()
    }

    pub fn set_phone_number_arn(&mut self, phone_number_arn: Option<String>) {
        self.phone_number_arn = phone_number_arn;
    }

    pub fn with_phone_number_arn(mut self, phone_number_arn: impl Into<String>) -> Self {
        self.phone_number_arn = Some(phone_number_arn.into());
        self
    }

    /// The number in E.164 format.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn phone_number_country_code(&self) -> Option<&PhoneNumberCountryCode> {
        self.phone_number_country_code.as_ref()
    }

    pub fn set_phone_number_country_code(
        &mut self,
        phone_number_country_code: Option<PhoneNumberCountryCode>,
    ) {
        self.phone_number_country_code = phone_number_country_code;
    }

    pub fn with_phone_number_country_code(
        mut self,
        phone_number_country_code: impl Into<PhoneNumberCountryCode>,
    ) -> Self {
        self.phone_number_country_code = Some(phone_number_country_code.into());
        self
    }

    pub fn phone_number_type(&self) -> Option<&PhoneNumberType> {
        self.phone_number_type.as_ref()
    }

    pub fn set_phone_number_type(&mut self, phone_number_type: Option<PhoneNumberType>) {
        self.phone_number_type = phone_number_type;
    }

    pub fn with_phone_number_type(mut self, phone_number_type: impl Into<PhoneNumberType>) -> Self {
        self.phone_number_type = Some(phone_number_type.into());
        self
    }

    /// ARN of the instance or traffic distribution group the number is claimed to.
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }

    pub fn set_target_arn(&mut self, target_arn: Option<String>) {
        self.target_arn = target_arn;
    }

    pub fn with_target_arn(mut self, target_arn: impl Into<String>) -> Self {
        self.target_arn = Some(target_arn.into());
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

    pub fn phone_number_description(&self) -> Option<&str> {
        self.phone_number_description.as_deref()
    }

    pub fn set_phone_number_description(&mut self, phone_number_description: Option<String>) {
        self.phone_number_description = phone_number_description;
    }

    pub fn with_phone_number_description(
        mut self,
        phone_number_description: impl Into<String>,
    ) -> Self {
        self.phone_number_description = Some(phone_number_description.into());
        self
    }

    /// Set when the number was imported from another messaging service.
    pub fn source_phone_number_arn(&self) -> Option<&str> {
        self.source_phone_number_arn.as_deref()
    }

    pub fn set_source_phone_number_arn(&mut self, source_phone_number_arn: Option<String>) {
        self.source_phone_number_arn = source_phone_number_arn;
    }

    pub fn with_source_phone_number_arn(
        mut self,
        source_phone_number_arn: impl Into<String>,
    ) -> Self {
        self.source_phone_number_arn = Some(source_phone_number_arn.into());
        self
    }
}

impl Record for ListPhoneNumbersSummary {
    const TYPE_NAME: &'static str = "ListPhoneNumbersSummary";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("PhoneNumberId", self.phone_number_id.as_ref());
        visitor.field("PhoneNumberArn", self.phone_number_arn.as_ref());
        visitor.field("PhoneNumber", self.phone_number.as_ref());
        visitor.field("PhoneNumberCountryCode", self.phone_number_country_code.as_ref());
        visitor.field("PhoneNumberType", self.phone_number_type.as_ref());
        visitor.field("TargetArn", self.target_arn.as_ref());
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("PhoneNumberDescription", self.phone_number_description.as_ref());
        visitor.field("SourcePhoneNumberArn", self.source_phone_number_arn.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumberStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<PhoneNumberWorkflowStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl PhoneNumberStatus {
    pub fn status(&self) -> Option<&PhoneNumberWorkflowStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Option<PhoneNumberWorkflowStatus>) {
        self.status = status;
    }

    pub fn with_status(mut self, status: impl Into<PhoneNumberWorkflowStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Human readable detail, populated when the status is `FAILED`.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Record for PhoneNumberStatus {
    const TYPE_NAME: &'static str = "PhoneNumberStatus";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("Status", self.status.as_ref());
        visitor.field("Message", self.message.as_ref());
    }
}

/// Full description of a number claimed into an instance or traffic distribution group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimedPhoneNumberSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_country_code: Option<PhoneNumberCountryCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_type: Option<PhoneNumberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_status: Option<PhoneNumberStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_phone_number_arn: Option<String>,
}

impl ClaimedPhoneNumberSummary {
    pub fn phone_number_id(&self) -> Option<&str> {
        self.phone_number_id.as_deref()
    }

    pub fn set_phone_number_id(&mut self, phone_number_id: Option<String>) {
        self.phone_number_id = phone_number_id;
    }

    pub fn with_phone_number_id(mut self, phone_number_id: impl Into<String>) -> Self {
        self.phone_number_id = Some(phone_number_id.into());
        self
    }

    pub fn phone_number_arn(&self) -> Option<&str> {
        self.phone_number_arn.as_deref()
    }

    pub fn set_phone_number_arn(&mut self, phone_number_arn: Option<String>) {
        self.phone_number_arn = phone_number_arn;
    }

    pub fn with_phone_number_arn(mut self, phone_number_arn: impl Into<String>) -> Self {
        self.phone_number_arn = Some(phone_number_arn.into());
        self
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn phone_number_country_code(&self) -> Option<&PhoneNumberCountryCode> {
        self.phone_number_country_code.as_ref()
    }

    pub fn set_phone_number_country_code(
        &mut self,
        phone_number_country_code: Option<PhoneNumberCountryCode>,
    ) {
        self.phone_number_country_code = phone_number_country_code;
    }

    pub fn with_phone_number_country_code(
        mut self,
        phone_number_country_code: impl Into<PhoneNumberCountryCode>,
    ) -> Self {
        self.phone_number_country_code = Some(phone_number_country_code.into());
        self
    }

    pub fn phone_number_type(&self) -> Option<&PhoneNumberType> {
        self.phone_number_type.as_ref()
    }

    pub fn set_phone_number_type(&mut self, phone_number_type: Option<PhoneNumberType>) {
        self.phone_number_type = phone_number_type;
    }

    pub fn with_phone_number_type(mut self, phone_number_type: impl Into<PhoneNumberType>) -> Self {
        self.phone_number_type = Some(phone_number_type.into());
        self
    }

    pub fn phone_number_description(&self) -> Option<&str> {
        self.phone_number_description.as_deref()
    }

    pub fn set_phone_number_description(&mut self, phone_number_description: Option<String>) {
        self.phone_number_description = phone_number_description;
    }

    pub fn with_phone_number_description(
        mut self,
        phone_number_description: impl Into<String>,
    ) -> Self {
        self.phone_number_description = Some(phone_number_description.into());
        self
    }

    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }

    pub fn set_target_arn(&mut self, target_arn: Option<String>) {
        self.target_arn = target_arn;
    }

    pub fn with_target_arn(mut self, target_arn: impl Into<String>) -> Self {
        self.target_arn = Some(target_arn.into());
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

    /// Progress of the most recent claim or update of the number.
    pub fn phone_number_status(&self) -> Option<&PhoneNumberStatus> {
        self.phone_number_status.as_ref()
    }

    pub fn set_phone_number_status(&mut self, phone_number_status: Option<PhoneNumberStatus>) {
        self.phone_number_status = phone_number_status;
    }

    pub fn with_phone_number_status(mut self, phone_number_status: PhoneNumberStatus) -> Self {
        self.phone_number_status = Some(phone_number_status);
        self
    }

    pub fn source_phone_number_arn(&self) -> Option<&str> {
        self.source_phone_number_arn.as_deref()
    }

    pub fn set_source_phone_number_arn(&mut self, source_phone_number_arn: Option<String>) {
        self.source_phone_number_arn = source_phone_number_arn;
    }

    pub fn with_source_phone_number_arn(
        mut self,
        source_phone_number_arn: impl Into<String>,
    ) -> Self {
        self.source_phone_number_arn = Some(source_phone_number_arn.into());
        self
    }
}

impl Record for ClaimedPhoneNumberSummary {
    const TYPE_NAME: &'static str = "ClaimedPhoneNumberSummary";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("PhoneNumberId", self.phone_number_id.as_ref());
        visitor.field("PhoneNumberArn", self.phone_number_arn.as_ref());
        visitor.field("PhoneNumber", self.phone_number.as_ref());
        visitor.field("PhoneNumberCountryCode", self.phone_number_country_code.as_ref());
        visitor.field("PhoneNumberType", self.phone_number_type.as_ref());
        visitor.field("PhoneNumberDescription", self.phone_number_description.as_ref());
        visitor.field("TargetArn", self.target_arn.as_ref());
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("Tags", self.tags.as_ref());
        visitor.field("PhoneNumberStatus", self.phone_number_status.as_ref());
        visitor.field("SourcePhoneNumberArn", self.source_phone_number_arn.as_ref());
    }
}

/// Claims an available number into an instance or traffic distribution group.
///
/// Exactly one of `target_arn` and `instance_id` is expected by the service; the record
/// itself does not check this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimPhoneNumberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    target_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
}

impl ClaimPhoneNumberRequest {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }

    pub fn set_target_arn(&mut self, target_arn: Option<String>) {
        self.target_arn = target_arn;
    }

    pub fn with_target_arn(mut self, target_arn: impl Into<String>) -> Self {
        self.target_arn = Some(target_arn.into());
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

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn phone_number_description(&self) -> Option<&str> {
        self.phone_number_description.as_deref()
    }

    pub fn set_phone_number_description(&mut self, phone_number_description: Option<String>) {
        self.phone_number_description = phone_number_description;
    }

    pub fn with_phone_number_description(
        mut self,
        phone_number_description: impl Into<String>,
    ) -> Self {
        self.phone_number_description = Some(phone_number_description.into());
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

    /// Idempotency token, up to 500 characters.
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

impl Record for ClaimPhoneNumberRequest {
    const TYPE_NAME: &'static str = "ClaimPhoneNumberRequest";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("TargetArn", self.target_arn.as_ref());
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("PhoneNumber", self.phone_number.as_ref());
        visitor.field("PhoneNumberDescription", self.phone_number_description.as_ref());
        visitor.field("Tags", self.tags.as_ref());
        visitor.field("ClientToken", self.client_token.as_ref());
    }
}

impl Operation for ClaimPhoneNumberRequest {
    const OPERATION_NAME: &'static str = "ClaimPhoneNumber";

    type Output = ClaimPhoneNumberResult;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimPhoneNumberResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_arn: Option<String>,
}

impl ClaimPhoneNumberResult {
    pub fn phone_number_id(&self) -> Option<&str> {
        self.phone_number_id.as_deref()
    }

    pub fn set_phone_number_id(&mut self, phone_number_id: Option<String>) {
        self.phone_number_id = phone_number_id;
    }

    pub fn with_phone_number_id(mut self, phone_number_id: impl Into<String>) -> Self {
        self.phone_number_id = Some(phone_number_id.into());
        self
    }

    pub fn phone_number_arn(&self) -> Option<&str> {
        self.phone_number_arn.as_deref()
    }

    pub fn set_phone_number_arn(&mut self, phone_number_arn: Option<String>) {
        self.phone_number_arn = phone_number_arn;
    }

    pub fn with_phone_number_arn(mut self, phone_number_arn: impl Into<String>) -> Self {
        self.phone_number_arn = Some(phone_number_arn.into());
        self
    }
}

impl Record for ClaimPhoneNumberResult {
    const TYPE_NAME: &'static str = "ClaimPhoneNumberResult";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("PhoneNumberId", self.phone_number_id.as_ref());
        visitor.field("PhoneNumberArn", self.phone_number_arn.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPhoneNumbersV2Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    target_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_country_codes: Option<Vec<PhoneNumberCountryCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_types: Option<Vec<PhoneNumberType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_prefix: Option<String>,
}

impl ListPhoneNumbersV2Request {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }

    pub fn set_target_arn(&mut self, target_arn: Option<String>) {
        self.target_arn = target_arn;
    }

    pub fn with_target_arn(mut self, target_arn: impl Into<String>) -> Self {
        self.target_arn = Some(target_arn.into());
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

    pub fn phone_number_country_codes(&self) -> Option<&[PhoneNumberCountryCode]> {
        self.phone_number_country_codes.as_deref()
    }

    pub fn set_phone_number_country_codes(
        &mut self,
        phone_number_country_codes: Option<Vec<PhoneNumberCountryCode>>,
    ) {
        self.phone_number_country_codes = phone_number_country_codes;
    }

    pub fn with_phone_number_country_codes(
        mut self,
        phone_number_country_codes: impl IntoIterator<Item = impl Into<PhoneNumberCountryCode>>,
    ) -> Self {
        self.phone_number_country_codes = Some(phone_number_country_codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_phone_number_country_codes(
        mut self,
        item: impl Into<PhoneNumberCountryCode>,
    ) -> Self {
        self.phone_number_country_codes.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_phone_number_country_codes(
        mut self,
        phone_number_country_codes: impl IntoIterator<Item = impl Into<PhoneNumberCountryCode>>,
    ) -> Self {
        self.phone_number_country_codes
            .get_or_insert_with(Vec::new)
            .extend(phone_number_country_codes.into_iter().map(Into::into));
        self
    }

    pub fn phone_number_types(&self) -> Option<&[PhoneNumberType]> {
        self.phone_number_types.as_deref()
    }

    pub fn set_phone_number_types(&mut self, phone_number_types: Option<Vec<PhoneNumberType>>) {
        self.phone_number_types = phone_number_types;
    }

    pub fn with_phone_number_types(
        mut self,
        phone_number_types: impl IntoIterator<Item = impl Into<PhoneNumberType>>,
    ) -> Self {
        self.phone_number_types = Some(phone_number_types.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_phone_number_types(mut self, item: impl Into<PhoneNumberType>) -> Self {
        self.phone_number_types.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_phone_number_types(
        mut self,
        phone_number_types: impl IntoIterator<Item = impl Into<PhoneNumberType>>,
    ) -> Self {
        self.phone_number_types
            .get_or_insert_with(Vec::new)
            .extend(phone_number_types.into_iter().map(Into::into));
        self
    }

    /// Prefix match on the E.164 number, including the `+`.
    pub fn phone_number_prefix(&self) -> Option<&str> {
        self.phone_number_prefix.as_deref()
    }

    pub fn set_phone_number_prefix(&mut self, phone_number_prefix: Option<String>) {
        self.phone_number_prefix = phone_number_prefix;
    }

    pub fn with_phone_number_prefix(mut self, phone_number_prefix: impl Into<String>) -> Self {
        self.phone_number_prefix = Some(phone_number_prefix.into());
        self
    }
}

impl Record for ListPhoneNumbersV2Request {
    const TYPE_NAME: &'static str = "ListPhoneNumbersV2Request";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("TargetArn", self.target_arn.as_ref());
        visitor.field("InstanceId", self.instance_id.as_ref());
        visitor.field("MaxResults", self.max_results.as_ref());
        visitor.field("NextToken", self.next_token.as_ref());
        visitor.field("PhoneNumberCountryCodes", self.phone_number_country_codes.as_ref());
        visitor.field("PhoneNumberTypes", self.phone_number_types.as_ref());
        visitor.field("PhoneNumberPrefix", self.phone_number_prefix.as_ref());
    }
}

impl Operation for ListPhoneNumbersV2Request {
    const OPERATION_NAME: &'static str = "ListPhoneNumbersV2";

    type Output = ListPhoneNumbersV2Result;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPhoneNumbersV2Result {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_phone_numbers_summary_list: Option<Vec<ListPhoneNumbersSummary>>,
}

impl ListPhoneNumbersV2Result {
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

    pub fn list_phone_numbers_summary_list(&self) -> Option<&[ListPhoneNumbersSummary]> {
        self.list_phone_numbers_summary_list.as_deref()
    }

    pub fn set_list_phone_numbers_summary_list(
        &mut self,
        list_phone_numbers_summary_list: Option<Vec<ListPhoneNumbersSummary>>,
    ) {
        self.list_phone_numbers_summary_list = list_phone_numbers_summary_list;
    }

    pub fn with_list_phone_numbers_summary_list(
        mut self,
        list_phone_numbers_summary_list: impl IntoIterator<Item = impl Into<ListPhoneNumbersSummary>>,
    ) -> Self {
        self.list_phone_numbers_summary_list = Some(list_phone_numbers_summary_list.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_list_phone_numbers_summary_list(
        mut self,
        item: impl Into<ListPhoneNumbersSummary>,
    ) -> Self {
        self.list_phone_numbers_summary_list.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn extend_list_phone_numbers_summary_list(
        mut self,
        list_phone_numbers_summary_list: impl IntoIterator<Item = impl Into<ListPhoneNumbersSummary>>,
    ) -> Self {
        self.list_phone_numbers_summary_list
            .get_or_insert_with(Vec::new)
            .extend(list_phone_numbers_summary_list.into_iter().map(Into::into));
        self
    }
}

impl Record for ListPhoneNumbersV2Result {
    const TYPE_NAME: &'static str = "ListPhoneNumbersV2Result";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("NextToken", self.next_token.as_ref());
        visitor.field("ListPhoneNumbersSummaryList", self.list_phone_numbers_summary_list.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePhoneNumberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number_id: Option<String>,
}

impl DescribePhoneNumberRequest {
    pub fn phone_number_id(&self) -> Option<&str> {
        self.phone_number_id.as_deref()
    }

    pub fn set_phone_number_id(&mut self, phone_number_id: Option<String>) {
        self.phone_number_id = phone_number_id;
    }

    pub fn with_phone_number_id(mut self, phone_number_id: impl Into<String>) -> Self {
        self.phone_number_id = Some(phone_number_id.into());
        self
    }
}

impl Record for DescribePhoneNumberRequest {
    const TYPE_NAME: &'static str = "DescribePhoneNumberRequest";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("PhoneNumberId", self.phone_number_id.as_ref());
    }
}

impl Operation for DescribePhoneNumberRequest {
    const OPERATION_NAME: &'static str = "DescribePhoneNumber";

    type Output = DescribePhoneNumberResult;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePhoneNumberResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    claimed_phone_number_summary: Option<ClaimedPhoneNumberSummary>,
}

impl DescribePhoneNumberResult {
    pub fn claimed_phone_number_summary(&self) -> Option<&ClaimedPhoneNumberSummary> {
        self.claimed_phone_number_summary.as_ref()
    }

    pub fn set_claimed_phone_number_summary(
        &mut self,
        claimed_phone_number_summary: Option<ClaimedPhoneNumberSummary>,
    ) {
        self.claimed_phone_number_summary = claimed_phone_number_summary;
    }

    pub fn with_claimed_phone_number_summary(
        mut self,
        claimed_phone_number_summary: ClaimedPhoneNumberSummary,
    ) -> Self {
        self.claimed_phone_number_summary = Some(claimed_phone_number_summary);
        self
    }
}

impl Record for DescribePhoneNumberResult {
    const TYPE_NAME: &'static str = "DescribePhoneNumberResult";

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) {
        visitor.field("ClaimedPhoneNumberSummary", self.claimed_phone_number_summary.as_ref());
    }
}

record_impls!(
    ListPhoneNumbersSummary,
    PhoneNumberStatus,
    ClaimedPhoneNumberSummary,
    ClaimPhoneNumberRequest,
    ClaimPhoneNumberResult,
    ListPhoneNumbersV2Request,
    ListPhoneNumbersV2Result,
    DescribePhoneNumberRequest,
    DescribePhoneNumberResult,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_set() {
        assert_eq!(PhoneNumberCountryCode::values().len(), 237);
        assert_eq!(PhoneNumberCountryCode::from("US"), PhoneNumberCountryCode::Us);
        assert_eq!(PhoneNumberCountryCode::In.as_str(), "IN");
        assert!(!PhoneNumberCountryCode::from("XX").is_known());
    }

    #[test]
    fn test_summary_renders_populated_fields_only() {
        let summary = ListPhoneNumbersSummary::default()
            .with_phone_number_id("pn-123")
            .with_phone_number_type(PhoneNumberType::Did);
        assert_eq!(
            summary.to_string(),
            "{PhoneNumberId: pn-123,PhoneNumberType: DID}"
        );
        assert_eq!(ListPhoneNumbersSummary::default().to_string(), "{}");
    }

    #[test]
    fn test_claimed_summary_nested_status() {
        let summary = ClaimedPhoneNumberSummary::default()
            .with_phone_number("+15555550100")
            .with_phone_number_status(
                PhoneNumberStatus::default()
                    .with_status("FAILED")
                    .with_message("number unavailable"),
            );
        assert_eq!(
            summary.phone_number_status().and_then(|s| s.status()),
            Some(&PhoneNumberWorkflowStatus::Failed)
        );
        assert_eq!(
            summary.to_string(),
            "{PhoneNumber: +15555550100,PhoneNumberStatus: {Status: FAILED,Message: number unavailable}}"
        );
    }
}
