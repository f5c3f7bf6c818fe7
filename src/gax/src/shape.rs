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

//! Request shapes are described by a static table of [Field] descriptors.
//!
//! Each generated shape implements [Shape], listing its fields in the order
//! declared by the service schema. Serializing a shape walks that table once:
//! required fields that are not set produce an error, optional fields that are
//! not set are omitted, and every other value is converted to JSON at that
//! point.
//!
//! Fields are always `Option<T>`, so shapes can be built incrementally and
//! are only validated when serialized.

use crate::Result;
use crate::error::{Error, missing};
use serde_json::{Map, Value};

/// Whether the service schema requires a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// The field must be set when the shape is serialized.
    Required,
    /// The field is omitted from the payload when not set.
    Optional,
}

/// Returns the value of a field, if set.
pub type Accessor<S> = fn(&S) -> Option<&dyn ToPayload>;

/// Describes one field of a shape.
pub struct Field<S> {
    name: &'static str,
    presence: Presence,
    get: Accessor<S>,
}

impl<S> Field<S> {
    /// A field the service requires, sent as `name`.
    pub const fn required(name: &'static str, get: Accessor<S>) -> Self {
        Self {
            name,
            presence: Presence::Required,
            get,
        }
    }

    /// An optional field, sent as `name` when it is set.
    pub const fn optional(name: &'static str, get: Accessor<S>) -> Self {
        Self {
            name,
            presence: Presence::Optional,
            get,
        }
    }

    /// The name of the field in the JSON payload.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the field is required or optional.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Returns the field value in `shape`, if set.
    pub fn get<'a>(&self, shape: &'a S) -> Option<&'a dyn ToPayload> {
        (self.get)(shape)
    }
}

impl<S> std::fmt::Debug for Field<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .finish()
    }
}

/// A structure declared by the service schema.
///
/// Implemented by the generated request shapes and by the structures nested
/// inside them.
pub trait Shape: Sized + 'static {
    /// The shape type name, reported in errors.
    const NAME: &'static str;

    /// The fields, in schema declaration order.
    const FIELDS: &'static [Field<Self>];
}

/// Types that can be converted to a JSON payload value.
///
/// The conversion happens when the shape is serialized, never earlier.
pub trait ToPayload {
    fn to_payload(&self) -> Result<Value>;
}

/// Helper for the generated field accessors.
///
/// Converts an optional field into the type-erased value walked by
/// [to_payload].
pub fn value<T: ToPayload>(field: &Option<T>) -> Option<&dyn ToPayload> {
    field.as_ref().map(|v| v as &dyn ToPayload)
}

/// Builds the payload of `shape` by walking its field table.
///
/// The payload preserves the declaration order of the fields. No partial
/// payload is returned on error.
pub fn to_payload<S: Shape>(shape: &S) -> Result<Map<String, Value>> {
    let mut payload = Map::new();
    for field in S::FIELDS {
        match (field.get(shape), field.presence()) {
            (None, Presence::Required) => return Err(missing(field.name(), S::NAME)),
            (None, Presence::Optional) => continue,
            (Some(v), _) => {
                payload.insert(field.name().to_string(), v.to_payload()?);
            }
        }
    }
    Ok(payload)
}

/// Converts a nested shape into a JSON object.
pub fn to_value<S: Shape>(shape: &S) -> Result<Value> {
    to_payload(shape).map(Value::Object)
}

/// Creates a shape from a loosely-typed input mapping.
///
/// Keys use the wire names of the shape. Unknown keys are ignored, missing
/// keys leave the field unset. The `@region` key is routed to the request
/// options of the shape.
///
/// # Example
/// ```
/// # use awsclient_gax::shape::from_input;
/// #[derive(serde::Deserialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct Foo { name: Option<String> }
/// let foo: Foo = from_input(serde_json::json!({"Name": "abc", "Other": 42}))?;
/// assert_eq!(foo.name.as_deref(), Some("abc"));
/// # Ok::<(), awsclient_gax::error::Error>(())
/// ```
pub fn from_input<S>(input: Value) -> Result<S>
where
    S: serde::de::DeserializeOwned,
{
    serde_json::from_value(input).map_err(Error::deser)
}

impl ToPayload for String {
    fn to_payload(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl ToPayload for bool {
    fn to_payload(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

impl ToPayload for i32 {
    fn to_payload(&self) -> Result<Value> {
        Ok(Value::from(*self))
    }
}

impl ToPayload for i64 {
    fn to_payload(&self) -> Result<Value> {
        Ok(Value::from(*self))
    }
}

impl<T: ToPayload> ToPayload for Vec<T> {
    fn to_payload(&self) -> Result<Value> {
        self.iter()
            .map(ToPayload::to_payload)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<T: ToPayload> ToPayload for std::collections::HashMap<String, T> {
    fn to_payload(&self) -> Result<Value> {
        // Sort the keys, the same shape always produces the same bytes.
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        let mut map = Map::new();
        for (k, v) in entries {
            map.insert(k.clone(), v.to_payload()?);
        }
        Ok(Value::Object(map))
    }
}
