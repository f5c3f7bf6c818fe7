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

use crate::Result;
use crate::options::RequestOptions;
use crate::shape::{Shape, to_payload};
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use std::collections::BTreeMap;

/// The header naming the service and operation, e.g.
/// `AmazonSSM.GetParameter`.
pub const TARGET_HEADER: HeaderName = HeaderName::from_static("x-amz-target");

/// The body sent when the payload has no fields.
const EMPTY_BODY: &[u8] = b"{}";

/// The JSON protocol variant used by a service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// `awsJson1_0`, used by services such as DynamoDB.
    AwsJson1_0,
    /// `awsJson1_1`, used by services such as Cognito and SSM.
    AwsJson1_1,
}

impl Protocol {
    /// The `Content-Type` header value for this protocol.
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::AwsJson1_0 => "application/x-amz-json-1.0",
            Self::AwsJson1_1 => "application/x-amz-json-1.1",
        }
    }
}

/// The schema-declared binding of one operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    method: Method,
    path: &'static str,
    target: &'static str,
    protocol: Protocol,
}

impl Operation {
    /// An operation sent as `POST /`, the binding of all AWS JSON operations.
    ///
    /// The `target` is `"{ServiceTarget}.{OperationName}"`.
    pub const fn post(target: &'static str, protocol: Protocol) -> Self {
        Self {
            method: Method::POST,
            path: "/",
            target,
            protocol,
        }
    }

    /// The HTTP method, always `POST` for AWS JSON operations.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, always `/` for AWS JSON operations.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// The value of the `X-Amz-Target` header.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// The operation name, without the service prefix.
    pub fn name(&self) -> &'static str {
        self.target
            .rsplit_once('.')
            .map(|(_, name)| name)
            .unwrap_or(self.target)
    }

    /// The JSON protocol variant of the service.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
}

/// A shape that can be sent as a request.
///
/// Generated request shapes implement this trait, and expose an inherent
/// `to_request()` method calling [to_request].
pub trait RequestShape: Shape {
    /// The operation binding for this shape.
    const OPERATION: Operation;

    /// The per-request options, such as the region override.
    fn options(&self) -> &RequestOptions;
}

/// A request ready to be signed and sent by a transport.
#[derive(Clone, PartialEq)]
#[non_exhaustive]
pub struct WireRequest {
    pub method: Method,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub headers: HeaderMap,
    /// The UTF-8 JSON payload, never empty.
    pub body: Bytes,
    /// The region override of the request, if any. The transport uses this
    /// value to select the endpoint.
    pub region: Option<String>,
}

impl std::fmt::Debug for WireRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The body may contain passwords.
        f.debug_struct("WireRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("body", &format_args!("[censored; {} bytes]", self.body.len()))
            .field("region", &self.region)
            .finish()
    }
}

/// Validates `shape` and creates the request to send it.
///
/// Fails with a [binding][crate::error::Error::is_binding] error if a required
/// field is not set. Calling this function does not modify the shape, calling
/// it again produces the same request.
pub fn to_request<S: RequestShape>(shape: &S) -> Result<WireRequest> {
    let operation = S::OPERATION;
    let payload = to_payload(shape)?;
    tracing::debug!(
        operation = operation.target(),
        fields = payload.len(),
        "serialized request shape"
    );
    let body = if payload.is_empty() {
        Bytes::from_static(EMPTY_BODY)
    } else {
        Bytes::from(serde_json::Value::Object(payload).to_string())
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(operation.protocol().content_type()),
    );
    headers.insert(TARGET_HEADER, HeaderValue::from_static(operation.target()));

    Ok(WireRequest {
        method: operation.method().clone(),
        path: operation.path().to_string(),
        query: BTreeMap::new(),
        headers,
        body,
        region: shape.options().region().map(str::to_string),
    })
}
