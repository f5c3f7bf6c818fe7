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

//! Request shapes for the Amazon Cognito Identity Provider API.
//!
//! **WARNING:** this crate does not send requests. Each request shape produces
//! a [gax::request::WireRequest], applications sign and send it with their
//! transport of choice.
//!
//! # Example
//! ```
//! use awsclient_cognitoidentityprovider::model::AdminSetUserPasswordRequest;
//! let request = AdminSetUserPasswordRequest::new()
//!     .set_user_pool_id("us-east-1_abc")
//!     .set_username("alice")
//!     .set_password("correct-horse-battery-staple")
//!     .set_permanent(true)
//!     .to_request()?;
//! assert_eq!(request.path, "/");
//! # Ok::<(), gax::error::Error>(())
//! ```

/// The messages and enums used by this service.
pub mod model;

/// The service target, the prefix of the `X-Amz-Target` header.
pub const SERVICE_TARGET: &str = "AWSCognitoIdentityProviderService";

/// The prefix of the service endpoint host, see
/// [gax::client_config::ClientConfig::endpoint].
pub const ENDPOINT_PREFIX: &str = "cognito-idp";
