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

//! Per request options.
//!
//! Request shapes carry a small set of options that are not part of the
//! payload. The transport uses them to decide where and how to send the
//! request. Currently the only option is the region override.

/// A set of options configuring a single request.
///
/// Each request shape contains a `RequestOptions`. When a shape is created
/// from a loosely-typed input mapping, the `@region` key is stored here rather
/// than in a business field of the shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[non_exhaustive]
pub struct RequestOptions {
    #[serde(rename = "@region", default)]
    region: Option<String>,
}

impl RequestOptions {
    /// Gets the region override.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Send this request to `region` instead of the client default.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets or clears the region override.
    pub fn set_or_clear_region<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.region = v.map(Into::into);
        self
    }
}
