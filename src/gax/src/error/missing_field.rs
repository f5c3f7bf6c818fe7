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

//! Handling of missing required fields.
//!
//! Required fields are declared by the service schema, but all shape fields
//! are `Option<T>` so applications can build a shape incrementally. The
//! check happens when the shape is serialized.

/// A required field was not set when the shape was serialized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(r#"missing parameter "{field}" for "{shape}", the value cannot be null"#)]
pub struct MissingRequiredField {
    field: &'static str,
    shape: &'static str,
}

impl MissingRequiredField {
    pub fn new(field: &'static str, shape: &'static str) -> Self {
        Self { field, shape }
    }

    /// The wire name of the missing field, e.g. `Password`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The name of the shape type that declares the field.
    pub fn shape(&self) -> &'static str {
        self.shape
    }
}

/// Returns the error reported when `field` is not set in `shape`.
pub fn missing(field: &'static str, shape: &'static str) -> crate::error::Error {
    crate::error::Error::binding(MissingRequiredField::new(field, shape))
}
