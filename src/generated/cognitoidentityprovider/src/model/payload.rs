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

use gax::options::RequestOptions;
use gax::request::{Operation, Protocol, RequestShape};
use gax::shape::{Field, Shape, ToPayload, to_value, value};
use serde_json::Value;

impl Shape for super::AdminSetUserPasswordRequest {
    const NAME: &'static str = "AdminSetUserPasswordRequest";
    const FIELDS: &'static [Field<Self>] = &[
        Field::required("UserPoolId", |s: &Self| value(&s.user_pool_id)),
        Field::required("Username", |s: &Self| value(&s.username)),
        Field::required("Password", |s: &Self| value(&s.password)),
        Field::optional("Permanent", |s: &Self| value(&s.permanent)),
    ];
}

impl RequestShape for super::AdminSetUserPasswordRequest {
    const OPERATION: Operation = Operation::post(
        "AWSCognitoIdentityProviderService.AdminSetUserPassword",
        Protocol::AwsJson1_1,
    );
    fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl Shape for super::AdminGetUserRequest {
    const NAME: &'static str = "AdminGetUserRequest";
    const FIELDS: &'static [Field<Self>] = &[
        Field::required("UserPoolId", |s: &Self| value(&s.user_pool_id)),
        Field::required("Username", |s: &Self| value(&s.username)),
    ];
}

impl RequestShape for super::AdminGetUserRequest {
    const OPERATION: Operation = Operation::post(
        "AWSCognitoIdentityProviderService.AdminGetUser",
        Protocol::AwsJson1_1,
    );
    fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl Shape for super::AdminCreateUserRequest {
    const NAME: &'static str = "AdminCreateUserRequest";
    const FIELDS: &'static [Field<Self>] = &[
        Field::required("UserPoolId", |s: &Self| value(&s.user_pool_id)),
        Field::required("Username", |s: &Self| value(&s.username)),
        Field::optional("UserAttributes", |s: &Self| value(&s.user_attributes)),
        Field::optional("ValidationData", |s: &Self| value(&s.validation_data)),
        Field::optional("TemporaryPassword", |s: &Self| {
            value(&s.temporary_password)
        }),
        Field::optional("ForceAliasCreation", |s: &Self| {
            value(&s.force_alias_creation)
        }),
        Field::optional("MessageAction", |s: &Self| value(&s.message_action)),
        Field::optional("DesiredDeliveryMediums", |s: &Self| {
            value(&s.desired_delivery_mediums)
        }),
        Field::optional("ClientMetadata", |s: &Self| value(&s.client_metadata)),
    ];
}

impl RequestShape for super::AdminCreateUserRequest {
    const OPERATION: Operation = Operation::post(
        "AWSCognitoIdentityProviderService.AdminCreateUser",
        Protocol::AwsJson1_1,
    );
    fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl Shape for super::AttributeType {
    const NAME: &'static str = "AttributeType";
    const FIELDS: &'static [Field<Self>] = &[
        Field::required("Name", |s: &Self| value(&s.name)),
        Field::optional("Value", |s: &Self| value(&s.value)),
    ];
}

impl ToPayload for super::AttributeType {
    fn to_payload(&self) -> gax::Result<Value> {
        to_value(self)
    }
}

impl ToPayload for super::MessageActionType {
    fn to_payload(&self) -> gax::Result<Value> {
        Ok(Value::String(self.as_str().to_string()))
    }
}

impl ToPayload for super::DeliveryMediumType {
    fn to_payload(&self) -> gax::Result<Value> {
        Ok(Value::String(self.as_str().to_string()))
    }
}
