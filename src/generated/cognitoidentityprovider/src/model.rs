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
#![allow(rustdoc::redundant_explicit_links)]

use gax::enumeration::{EnumVisitor, Enumeration, UnknownEnumValue};
use gax::options::RequestOptions;
use std::collections::HashMap;

mod debug;
mod payload;

/// Sets the specified user's password in a user pool as an administrator.
///
/// Works on any user. The password can be temporary or permanent. If it is
/// temporary, the user status enters the `FORCE_CHANGE_PASSWORD` state.
#[derive(Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AdminSetUserPasswordRequest {
    user_pool_id: Option<String>,
    username: Option<String>,
    password: Option<String>,
    permanent: Option<bool>,
    #[serde(flatten)]
    options: RequestOptions,
}

impl AdminSetUserPasswordRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// The user pool ID for the user pool where you want to set the user's
    /// password.
    pub fn user_pool_id(&self) -> Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// The user name of the user whose password you wish to set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The password for the user.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// `true` if the password is permanent, `false` if it is temporary.
    pub fn permanent(&self) -> Option<bool> {
        self.permanent
    }

    /// Sets the value of [user_pool_id][AdminSetUserPasswordRequest::user_pool_id].
    pub fn set_user_pool_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_pool_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_pool_id][AdminSetUserPasswordRequest::user_pool_id].
    pub fn set_or_clear_user_pool_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_pool_id = v.map(Into::into);
        self
    }

    /// Sets the value of [username][AdminSetUserPasswordRequest::username].
    pub fn set_username<T: Into<String>>(mut self, v: T) -> Self {
        self.username = Some(v.into());
        self
    }

    /// Sets or clears the value of [username][AdminSetUserPasswordRequest::username].
    pub fn set_or_clear_username<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.username = v.map(Into::into);
        self
    }

    /// Sets the value of [password][AdminSetUserPasswordRequest::password].
    pub fn set_password<T: Into<String>>(mut self, v: T) -> Self {
        self.password = Some(v.into());
        self
    }

    /// Sets or clears the value of [password][AdminSetUserPasswordRequest::password].
    pub fn set_or_clear_password<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.password = v.map(Into::into);
        self
    }

    /// Sets the value of [permanent][AdminSetUserPasswordRequest::permanent].
    pub fn set_permanent<T: Into<bool>>(mut self, v: T) -> Self {
        self.permanent = Some(v.into());
        self
    }

    /// Sets or clears the value of [permanent][AdminSetUserPasswordRequest::permanent].
    pub fn set_or_clear_permanent<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.permanent = v.map(Into::into);
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

/// Gets the specified user by user name in a user pool as an administrator.
#[derive(Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AdminGetUserRequest {
    user_pool_id: Option<String>,
    username: Option<String>,
    #[serde(flatten)]
    options: RequestOptions,
}

impl AdminGetUserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// The user pool ID for the user pool where you want to get information
    /// about the user.
    pub fn user_pool_id(&self) -> Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// The user name of the user you want to retrieve.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Sets the value of [user_pool_id][AdminGetUserRequest::user_pool_id].
    pub fn set_user_pool_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_pool_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_pool_id][AdminGetUserRequest::user_pool_id].
    pub fn set_or_clear_user_pool_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_pool_id = v.map(Into::into);
        self
    }

    /// Sets the value of [username][AdminGetUserRequest::username].
    pub fn set_username<T: Into<String>>(mut self, v: T) -> Self {
        self.username = Some(v.into());
        self
    }

    /// Sets or clears the value of [username][AdminGetUserRequest::username].
    pub fn set_or_clear_username<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.username = v.map(Into::into);
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

/// Creates a new user in the specified user pool.
///
/// If `MessageAction` isn't set, the default is to send a welcome message via
/// email or phone (SMS).
#[derive(Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AdminCreateUserRequest {
    user_pool_id: Option<String>,
    username: Option<String>,
    user_attributes: Option<Vec<AttributeType>>,
    validation_data: Option<Vec<AttributeType>>,
    temporary_password: Option<String>,
    force_alias_creation: Option<bool>,
    message_action: Option<MessageActionType>,
    desired_delivery_mediums: Option<Vec<DeliveryMediumType>>,
    client_metadata: Option<HashMap<String, String>>,
    #[serde(flatten)]
    options: RequestOptions,
}

impl AdminCreateUserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// The ID of the user pool where the user will be created.
    pub fn user_pool_id(&self) -> Option<&str> {
        self.user_pool_id.as_deref()
    }

    /// The value that you want to set as the username sign-in attribute.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// An array of name-value pairs that contain user attributes and attribute
    /// values to be set for the user to be created.
    pub fn user_attributes(&self) -> Option<&[AttributeType]> {
        self.user_attributes.as_deref()
    }

    /// Temporary user attributes that contribute to the outcomes of your pre
    /// sign-up Lambda trigger.
    pub fn validation_data(&self) -> Option<&[AttributeType]> {
        self.validation_data.as_deref()
    }

    /// The user's temporary password.
    pub fn temporary_password(&self) -> Option<&str> {
        self.temporary_password.as_deref()
    }

    /// This parameter is used only if the `phone_number_verified` or
    /// `email_verified` attribute is set to `True`.
    pub fn force_alias_creation(&self) -> Option<bool> {
        self.force_alias_creation
    }

    /// Set to `RESEND` to resend the invitation message to a user that already
    /// exists, and to `SUPPRESS` to suppress sending the message.
    pub fn message_action(&self) -> Option<&MessageActionType> {
        self.message_action.as_ref()
    }

    /// Specify `EMAIL` if email will be used to send the welcome message.
    /// Specify `SMS` if the phone number will be used.
    pub fn desired_delivery_mediums(&self) -> Option<&[DeliveryMediumType]> {
        self.desired_delivery_mediums.as_deref()
    }

    /// A map of custom key-value pairs for any custom workflows that this
    /// action triggers.
    pub fn client_metadata(&self) -> Option<&HashMap<String, String>> {
        self.client_metadata.as_ref()
    }

    /// Sets the value of [user_pool_id][AdminCreateUserRequest::user_pool_id].
    pub fn set_user_pool_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_pool_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_pool_id][AdminCreateUserRequest::user_pool_id].
    pub fn set_or_clear_user_pool_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_pool_id = v.map(Into::into);
        self
    }

    /// Sets the value of [username][AdminCreateUserRequest::username].
    pub fn set_username<T: Into<String>>(mut self, v: T) -> Self {
        self.username = Some(v.into());
        self
    }

    /// Sets or clears the value of [username][AdminCreateUserRequest::username].
    pub fn set_or_clear_username<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.username = v.map(Into::into);
        self
    }

    /// Sets the value of [user_attributes][AdminCreateUserRequest::user_attributes].
    pub fn set_user_attributes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeType>,
    {
        self.user_attributes = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of [user_attributes][AdminCreateUserRequest::user_attributes].
    pub fn set_or_clear_user_attributes<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeType>,
    {
        self.user_attributes = v.map(|x| x.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [validation_data][AdminCreateUserRequest::validation_data].
    pub fn set_validation_data<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeType>,
    {
        self.validation_data = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of [validation_data][AdminCreateUserRequest::validation_data].
    pub fn set_or_clear_validation_data<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeType>,
    {
        self.validation_data = v.map(|x| x.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [temporary_password][AdminCreateUserRequest::temporary_password].
    pub fn set_temporary_password<T: Into<String>>(mut self, v: T) -> Self {
        self.temporary_password = Some(v.into());
        self
    }

    /// Sets or clears the value of [temporary_password][AdminCreateUserRequest::temporary_password].
    pub fn set_or_clear_temporary_password<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.temporary_password = v.map(Into::into);
        self
    }

    /// Sets the value of [force_alias_creation][AdminCreateUserRequest::force_alias_creation].
    pub fn set_force_alias_creation<T: Into<bool>>(mut self, v: T) -> Self {
        self.force_alias_creation = Some(v.into());
        self
    }

    /// Sets or clears the value of [force_alias_creation][AdminCreateUserRequest::force_alias_creation].
    pub fn set_or_clear_force_alias_creation<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.force_alias_creation = v.map(Into::into);
        self
    }

    /// Sets the value of [message_action][AdminCreateUserRequest::message_action].
    pub fn set_message_action<T: Into<MessageActionType>>(mut self, v: T) -> Self {
        self.message_action = Some(v.into());
        self
    }

    /// Sets or clears the value of [message_action][AdminCreateUserRequest::message_action].
    pub fn set_or_clear_message_action<T: Into<MessageActionType>>(mut self, v: Option<T>) -> Self {
        self.message_action = v.map(Into::into);
        self
    }

    /// Sets the value of [desired_delivery_mediums][AdminCreateUserRequest::desired_delivery_mediums].
    pub fn set_desired_delivery_mediums<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DeliveryMediumType>,
    {
        self.desired_delivery_mediums = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of [desired_delivery_mediums][AdminCreateUserRequest::desired_delivery_mediums].
    pub fn set_or_clear_desired_delivery_mediums<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DeliveryMediumType>,
    {
        self.desired_delivery_mediums = v.map(|x| x.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [client_metadata][AdminCreateUserRequest::client_metadata].
    pub fn set_client_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.client_metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets or clears the value of [client_metadata][AdminCreateUserRequest::client_metadata].
    pub fn set_or_clear_client_metadata<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.client_metadata =
            v.map(|x| x.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
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

/// Specifies whether the attribute is standard or custom.
#[derive(Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AttributeType {
    name: Option<String>,
    value: Option<String>,
}

impl AttributeType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// The name of the attribute.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The value of the attribute.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the value of [name][AttributeType::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][AttributeType::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(Into::into);
        self
    }

    /// Sets the value of [value][AttributeType::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][AttributeType::value].
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }
}

/// Controls the welcome message sent to a new user.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is generated. Unknown values are preserved in
/// the `UnknownValue` variant, and sent back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MessageActionType {
    Resend,
    Suppress,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownEnumValue),
}

impl MessageActionType {
    /// Gets the value as sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Resend => "RESEND",
            Self::Suppress => "SUPPRESS",
            Self::UnknownValue(u) => u.name(),
        }
    }

    /// Returns true if `value` is a known `MessageActionType`.
    pub fn exists(value: &str) -> bool {
        <Self as Enumeration>::exists(value)
    }
}

impl Enumeration for MessageActionType {
    const VALUES: &'static [&'static str] = &["RESEND", "SUPPRESS"];
}

impl std::fmt::Display for MessageActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::convert::From<&str> for MessageActionType {
    fn from(value: &str) -> Self {
        match value {
            "RESEND" => Self::Resend,
            "SUPPRESS" => Self::Suppress,
            _ => Self::UnknownValue(UnknownEnumValue::new(value)),
        }
    }
}

impl serde::ser::Serialize for MessageActionType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for MessageActionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(EnumVisitor::<Self>::new(
            ".cognitoidentityprovider.MessageActionType",
        ))
    }
}

/// The delivery medium for a welcome or verification message.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is generated. Unknown values are preserved in
/// the `UnknownValue` variant, and sent back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DeliveryMediumType {
    Sms,
    Email,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownEnumValue),
}

impl DeliveryMediumType {
    /// Gets the value as sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sms => "SMS",
            Self::Email => "EMAIL",
            Self::UnknownValue(u) => u.name(),
        }
    }

    /// Returns true if `value` is a known `DeliveryMediumType`.
    pub fn exists(value: &str) -> bool {
        <Self as Enumeration>::exists(value)
    }
}

impl Enumeration for DeliveryMediumType {
    const VALUES: &'static [&'static str] = &["SMS", "EMAIL"];
}

impl std::fmt::Display for DeliveryMediumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::convert::From<&str> for DeliveryMediumType {
    fn from(value: &str) -> Self {
        match value {
            "SMS" => Self::Sms,
            "EMAIL" => Self::Email,
            _ => Self::UnknownValue(UnknownEnumValue::new(value)),
        }
    }
}

impl serde::ser::Serialize for DeliveryMediumType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for DeliveryMediumType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(EnumVisitor::<Self>::new(
            ".cognitoidentityprovider.DeliveryMediumType",
        ))
    }
}
