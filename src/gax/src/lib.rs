// Copyright 2024 Google LLC
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

//! AWS JSON APIs helpers.
//!
//! This crate contains the types and functions used in the implementation of
//! the generated request shapes. Each generated shape declares its fields in a
//! [shape::Field] table, and the helpers here walk that table to validate the
//! required fields and produce a [request::WireRequest].
//!
//! Sending the request (signing, HTTP transport, retries) and parsing the
//! response are the responsibility of the application's transport.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions that validate or serialize
/// request shapes.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated shapes.
pub mod error;

/// Declarative field tables and the payload walker.
pub mod shape;

/// The transport-ready request produced by each shape.
pub mod request;

/// Common code for string enumerations.
pub mod enumeration;

/// Client configuration, including region and endpoint resolution.
pub mod client_config;

pub mod options;
