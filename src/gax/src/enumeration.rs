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

//! Implements common code for string enumerations.
//!
//! Generated enumerations have one variant per value declared in the service
//! schema, and an `UnknownValue` variant for values added to the service after
//! the library was generated.

use std::marker::PhantomData;

/// A closed set of string constants declared by the service schema.
pub trait Enumeration {
    /// All the values known to this library, as sent on the wire.
    const VALUES: &'static [&'static str];

    /// Returns true if `candidate` is one of the known values.
    ///
    /// The comparison is exact and case-sensitive.
    fn exists(candidate: &str) -> bool {
        Self::VALUES.contains(&candidate)
    }
}

/// A value not known to this version of the library.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownEnumValue(String);

impl UnknownEnumValue {
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }

    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl serde::ser::Serialize for UnknownEnumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

/// Deserializes generated enumerations from their string values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumVisitor<'lf, T> {
    name: &'lf str,
    _unused: PhantomData<T>,
}

impl<'lf, T> EnumVisitor<'lf, T> {
    pub fn new(name: &'lf str) -> Self {
        Self {
            name,
            _unused: Default::default(),
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<'_, T>
where
    T: for<'a> From<&'a str>,
{
    type Value = T;
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }
    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(&format!("a {} enum value in string format", self.name))
    }
}
