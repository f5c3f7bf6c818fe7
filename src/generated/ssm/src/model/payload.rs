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

impl Shape for super::GetParameterRequest {
    const NAME: &'static str = "GetParameterRequest";
    const FIELDS: &'static [Field<Self>] = &[
        Field::required("Name", |s: &Self| value(&s.name)),
        Field::optional("WithDecryption", |s: &Self| value(&s.with_decryption)),
    ];
}

impl RequestShape for super::GetParameterRequest {
    const OPERATION: Operation = Operation::post("AmazonSSM.GetParameter", Protocol::AwsJson1_1);
    fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl Shape for super::PutParameterRequest {
    const NAME: &'static str = "PutParameterRequest";
    const FIELDS: &'static [Field<Self>] = &[
        Field::required("Name", |s: &Self| value(&s.name)),
        Field::optional("Description", |s: &Self| value(&s.description)),
        Field::required("Value", |s: &Self| value(&s.value)),
        Field::optional("Type", |s: &Self| value(&s.r#type)),
        Field::optional("KeyId", |s: &Self| value(&s.key_id)),
        Field::optional("Overwrite", |s: &Self| value(&s.overwrite)),
        Field::optional("AllowedPattern", |s: &Self| value(&s.allowed_pattern)),
        Field::optional("Tags", |s: &Self| value(&s.tags)),
        Field::optional("Tier", |s: &Self| value(&s.tier)),
        Field::optional("Policies", |s: &Self| value(&s.policies)),
        Field::optional("DataType", |s: &Self| value(&s.data_type)),
    ];
}

impl RequestShape for super::PutParameterRequest {
    const OPERATION: Operation = Operation::post("AmazonSSM.PutParameter", Protocol::AwsJson1_1);
    fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl Shape for super::Tag {
    const NAME: &'static str = "Tag";
    const FIELDS: &'static [Field<Self>] = &[
        Field::required("Key", |s: &Self| value(&s.key)),
        Field::required("Value", |s: &Self| value(&s.value)),
    ];
}

impl ToPayload for super::Tag {
    fn to_payload(&self) -> gax::Result<Value> {
        to_value(self)
    }
}

impl ToPayload for super::ParameterType {
    fn to_payload(&self) -> gax::Result<Value> {
        Ok(Value::String(self.as_str().to_string()))
    }
}

impl ToPayload for super::ParameterTier {
    fn to_payload(&self) -> gax::Result<Value> {
        Ok(Value::String(self.as_str().to_string()))
    }
}
