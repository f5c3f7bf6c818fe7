// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Code generated by the awsclient generator. DO NOT EDIT.

#![allow(rustdoc::bare_urls)]
#![allow(rustdoc::broken_intra_doc_links)]

use gax::enumeration::{EnumVisitor, Enumeration, UnknownEnumValue};
use gax::options::RequestOptions;

mod debug;
mod payload;

/// Get information about a single parameter by specifying the parameter name.
#[derive(Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetParameterRequest {
    name: Option<String>,
    with_decryption: Option<bool>,
    #[serde(flatten)]
    options: RequestOptions,
}

impl GetParameterRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// The name or Amazon Resource Name (ARN) of the parameter that you want
    /// to query.
    ///
    /// To query by parameter label, use `"Name": "name:label"`. To query by
    /// parameter version, use `"Name": "name:version"`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Return decrypted values for secure string parameters. This flag is
    /// ignored for `String` and `StringList` parameter types.
    pub fn with_decryption(&self) -> Option<bool> {
        self.with_decryption
    }

    /// Sets the value of [name][GetParameterRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][GetParameterRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(Into::into);
        self
    }

    /// Sets the value of [with_decryption][GetParameterRequest::with_decryption].
    pub fn set_with_decryption<T: Into<bool>>(mut self, v: T) -> Self {
        self.with_decryption = Some(v.into());
        self
    }

    /// Sets or clears the value of [with_decryption][GetParameterRequest::with_decryption].
    pub fn set_or_clear_with_decryption<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.with_decryption = v.map(Into::into);
        self
    }

    /// The region override for this request, if any.
    pub fn region(&self) -> Option<&str> {
        self.options.region()
    }

    /// Sends this request to `region` instead of the client default.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.options = self.options.set_region(v);
        self
    }

    /// Sets or clears the region override.
    pub fn set_or_clear_region<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.options = self.options.set_or_clear_region(v);
        self
    }

    /// Validates the required fields and creates the request to send.
    pub fn to_request(&self) -> gax::Result<gax::request::WireRequest> {
        gax::request::to_request(self)
    }
}

/// Add a parameter to the system.
#[derive(Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PutParameterRequest {
    name: Option<String>,
    description: Option<String>,
    value: Option<String>,
    #[serde(rename = "Type")]
    r#type: Option<ParameterType>,
    key_id: Option<String>,
    overwrite: Option<bool>,
    allowed_pattern: Option<String>,
    tags: Option<Vec<Tag>>,
    tier: Option<ParameterTier>,
    policies: Option<String>,
    data_type: Option<String>,
    #[serde(flatten)]
    options: RequestOptions,
}

impl PutParameterRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// The fully qualified name of the parameter that you want to create or
    /// update.
    ///
    /// The fully qualified name includes the complete hierarchy of the
    /// parameter path and name, e.g. `/Dev/DBServer/MySQL/db-string13`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Information about the parameter that you want to add to the system.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The parameter value that you want to add to the system.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The type of parameter that you want to create.
    pub fn r#type(&self) -> Option<&ParameterType> {
        self.r#type.as_ref()
    }

    /// The Key Management Service (KMS) ID that you want to use to encrypt a
    /// parameter. Use with `SecureString` parameters only.
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Overwrite an existing parameter. The default value is `false`.
    pub fn overwrite(&self) -> Option<bool> {
        self.overwrite
    }

    /// A regular expression used to validate the parameter value.
    pub fn allowed_pattern(&self) -> Option<&str> {
        self.allowed_pattern.as_deref()
    }

    /// Optional metadata that you assign to a resource.
    ///
    /// Tags can't be added to an existing parameter, the service rejects
    /// `Tags` together with `Overwrite`.
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    /// The parameter tier to assign to a parameter.
    pub fn tier(&self) -> Option<&ParameterTier> {
        self.tier.as_ref()
    }

    /// One or more policies to apply to a parameter, as a JSON array.
    pub fn policies(&self) -> Option<&str> {
        self.policies.as_deref()
    }

    /// The data type for a `String` parameter, e.g. `text` or
    /// `aws:ec2:image`.
    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    /// Sets the value of [name][PutParameterRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][PutParameterRequest::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(Into::into);
        self
    }

    /// Sets the value of [description][PutParameterRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][PutParameterRequest::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.description = v.map(Into::into);
        self
    }

    /// Sets the value of [value][PutParameterRequest::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][PutParameterRequest::value].
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }

    /// Sets the value of [type][PutParameterRequest::r#type].
    pub fn set_type<T: Into<ParameterType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][PutParameterRequest::r#type].
    pub fn set_or_clear_type<T: Into<ParameterType>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(Into::into);
        self
    }

    /// Sets the value of [key_id][PutParameterRequest::key_id].
    pub fn set_key_id<T: Into<String>>(mut self, v: T) -> Self {
        self.key_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [key_id][PutParameterRequest::key_id].
    pub fn set_or_clear_key_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.key_id = v.map(Into::into);
        self
    }

    /// Sets the value of [overwrite][PutParameterRequest::overwrite].
    pub fn set_overwrite<T: Into<bool>>(mut self, v: T) -> Self {
        self.overwrite = Some(v.into());
        self
    }

    /// Sets or clears the value of [overwrite][PutParameterRequest::overwrite].
    pub fn set_or_clear_overwrite<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.overwrite = v.map(Into::into);
        self
    }

    /// Sets the value of [allowed_pattern][PutParameterRequest::allowed_pattern].
    pub fn set_allowed_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.allowed_pattern = Some(v.into());
        self
    }

    /// Sets or clears the value of [allowed_pattern][PutParameterRequest::allowed_pattern].
    pub fn set_or_clear_allowed_pattern<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.allowed_pattern = v.map(Into::into);
        self
    }

    /// Sets the value of [tags][PutParameterRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Tag>,
    {
        self.tags = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of [tags][PutParameterRequest::tags].
    pub fn set_or_clear_tags<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Tag>,
    {
        self.tags = v.map(|x| x.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [tier][PutParameterRequest::tier].
    pub fn set_tier<T: Into<ParameterTier>>(mut self, v: T) -> Self {
        self.tier = Some(v.into());
        self
    }

    /// Sets or clears the value of [tier][PutParameterRequest::tier].
    pub fn set_or_clear_tier<T: Into<ParameterTier>>(mut self, v: Option<T>) -> Self {
        self.tier = v.map(Into::into);
        self
    }

    /// Sets the value of [policies][PutParameterRequest::policies].
    pub fn set_policies<T: Into<String>>(mut self, v: T) -> Self {
        self.policies = Some(v.into());
        self
    }

    /// Sets or clears the value of [policies][PutParameterRequest::policies].
    pub fn set_or_clear_policies<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.policies = v.map(Into::into);
        self
    }

    /// Sets the value of [data_type][PutParameterRequest::data_type].
    pub fn set_data_type<T: Into<String>>(mut self, v: T) -> Self {
        self.data_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [data_type][PutParameterRequest::data_type].
    pub fn set_or_clear_data_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.data_type = v.map(Into::into);
        self
    }

    /// The region override for this request, if any.
    pub fn region(&self) -> Option<&str> {
        self.options.region()
    }

    /// Sends this request to `region` instead of the client default.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.options = self.options.set_region(v);
        self
    }

    /// Sets or clears the region override.
    pub fn set_or_clear_region<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.options = self.options.set_or_clear_region(v);
        self
    }

    /// Validates the required fields and creates the request to send.
    pub fn to_request(&self) -> gax::Result<gax::request::WireRequest> {
        gax::request::to_request(self)
    }
}

/// Metadata that you assign to your Amazon Web Services resources.
#[derive(Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Tag {
    key: Option<String>,
    value: Option<String>,
}

impl Tag {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// The name of the tag.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The value of the tag.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the value of [key][Tag::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets or clears the value of [key][Tag::key].
    pub fn set_or_clear_key<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.key = v.map(Into::into);
        self
    }

    /// Sets the value of [value][Tag::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][Tag::value].
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }
}

impl<K: Into<String>, V: Into<String>> std::convert::From<(K, V)> for Tag {
    fn from(value: (K, V)) -> Self {
        Self::new().set_key(value.0).set_value(value.1)
    }
}

/// The type of an SSM parameter.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is generated. Unknown values are preserved in
/// the `UnknownValue` variant, and sent back unchanged.
///
/// # Example
/// ```
/// # use awsclient_ssm::model::ParameterType;
/// assert!(ParameterType::exists("String"));
/// assert!(!ParameterType::exists("string"));
/// assert!(!ParameterType::exists("Other"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParameterType {
    String,
    StringList,
    SecureString,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownEnumValue),
}

impl ParameterType {
    /// Gets the value as sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "String",
            Self::StringList => "StringList",
            Self::SecureString => "SecureString",
            Self::UnknownValue(u) => u.name(),
        }
    }

    /// Returns true if `value` is a known `ParameterType`.
    pub fn exists(value: &str) -> bool {
        <Self as Enumeration>::exists(value)
    }
}

impl Enumeration for ParameterType {
    const VALUES: &'static [&'static str] = &["SecureString", "String", "StringList"];
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::convert::From<&str> for ParameterType {
    fn from(value: &str) -> Self {
        match value {
            "String" => Self::String,
            "StringList" => Self::StringList,
            "SecureString" => Self::SecureString,
            _ => Self::UnknownValue(UnknownEnumValue::new(value)),
        }
    }
}

impl serde::ser::Serialize for ParameterType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for ParameterType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(EnumVisitor::<Self>::new(".ssm.ParameterType"))
    }
}

/// The storage tier of an SSM parameter.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is generated. Unknown values are preserved in
/// the `UnknownValue` variant, and sent back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParameterTier {
    Standard,
    Advanced,
    IntelligentTiering,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownEnumValue),
}

impl ParameterTier {
    /// Gets the value as sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "Standard",
            Self::Advanced => "Advanced",
            Self::IntelligentTiering => "Intelligent-Tiering",
            Self::UnknownValue(u) => u.name(),
        }
    }

    /// Returns true if `value` is a known `ParameterTier`.
    pub fn exists(value: &str) -> bool {
        <Self as Enumeration>::exists(value)
    }
}

impl Enumeration for ParameterTier {
    const VALUES: &'static [&'static str] = &["Advanced", "Intelligent-Tiering", "Standard"];
}

impl std::fmt::Display for ParameterTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::convert::From<&str> for ParameterTier {
    fn from(value: &str) -> Self {
        match value {
            "Standard" => Self::Standard,
            "Advanced" => Self::Advanced,
            "Intelligent-Tiering" => Self::IntelligentTiering,
            _ => Self::UnknownValue(UnknownEnumValue::new(value)),
        }
    }
}

impl serde::ser::Serialize for ParameterTier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for ParameterTier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(EnumVisitor::<Self>::new(".ssm.ParameterTier"))
    }
}
