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

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by the request shape helpers.
///
/// Request shapes are validated and serialized before any request is sent.
/// The only problem a well-typed shape can report is a missing required
/// field. Loosely typed construction and client configuration report their
/// own error kinds.
///
/// Most applications will just return the error or log it. Applications that
/// need more details can use the predicates in this type, or
/// [as_inner][Error::as_inner] to find the underlying error.
///
/// # Example
/// ```
/// use awsclient_gax::error::{Error, MissingRequiredField};
/// let error = Error::binding(MissingRequiredField::new("Password", "AdminSetUserPasswordRequest"));
/// assert!(error.is_binding());
/// let inner = error.as_inner::<MissingRequiredField>().unwrap();
/// assert_eq!(inner.field(), "Password");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

impl Error {
    /// Creates an error representing a request shape that cannot be
    /// serialized because a required field is not set.
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: source.into(),
        }
    }

    /// If true, the request shape was missing required parameters.
    ///
    /// # Troubleshooting
    ///
    /// This always indicates a problem in the application: a required field
    /// of the shape was not initialized before calling `to_request()`. The
    /// error message names the field and the shape. Use
    /// [as_inner][Error::as_inner] with [MissingRequiredField][super::MissingRequiredField]
    /// to examine the details programmatically.
    ///
    /// Retrying the operation with the same shape always fails.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Creates an error representing an input mapping that could not be
    /// converted into a request shape.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: source.into(),
        }
    }

    /// The input mapping could not be converted into a request shape.
    ///
    /// # Troubleshooting
    ///
    /// Loosely typed construction accepts any key, but the value for a known
    /// key must have the type declared by the schema. For example, a number
    /// in a string field is rejected. Unknown keys are ignored and never cause
    /// this error.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing an invalid client configuration.
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Configuration,
            source: source.into(),
        }
    }

    /// The client configuration cannot be used to resolve an endpoint.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is an endpoint override that is not a valid URI,
    /// or that is missing the host.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration)
    }

    /// Recurses through the source error chain and returns a reference to the
    /// inner value if it is of type `T`, or `None` if it isn't found.
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        let mut error = self.source.as_ref() as &dyn StdError;
        // Prevent infinite loops due to cycles in the `source()` errors.
        for _ in 0..32 {
            if let Some(e) = error.downcast_ref::<T>() {
                return Some(e);
            }
            error = error.source()?;
        }
        None
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::Binding => write!(f, "cannot serialize the request shape: {}", self.source),
            ErrorKind::Deserialization => {
                write!(f, "cannot convert the input into a request shape: {}", self.source)
            }
            ErrorKind::Configuration => {
                write!(f, "invalid client configuration: {}", self.source)
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Deserialization,
    Configuration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingRequiredField;

    #[derive(Debug, Default)]
    struct LeafError {}

    impl LeafError {
        fn hey(&self) -> &'static str {
            "hey"
        }
    }

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "leaf error")
        }
    }

    impl StdError for LeafError {}

    #[derive(Debug)]
    struct MiddleError {
        source: Option<BoxError>,
    }

    impl std::fmt::Display for MiddleError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "middle error")
        }
    }

    impl StdError for MiddleError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            match &self.source {
                Some(e) => Some(e.as_ref()),
                None => None,
            }
        }
    }

    #[test]
    fn binding() {
        let error = Error::binding(MissingRequiredField::new("Username", "FooRequest"));
        assert!(error.is_binding(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(!error.is_configuration(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = format!("{error}");
        assert!(got.contains("Username"), "{got}");
        assert!(got.contains("FooRequest"), "{got}");
    }

    #[test]
    fn deser() {
        let error = Error::deser("simulated problem");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_binding(), "{error:?}");
        let got = format!("{error}");
        assert!(got.contains("simulated problem"), "{got}");
    }

    #[test]
    fn configuration() {
        let error = Error::configuration("bad endpoint");
        assert!(error.is_configuration(), "{error:?}");
        assert!(!error.is_binding(), "{error:?}");
        let got = format!("{error}");
        assert!(got.contains("bad endpoint"), "{got}");
    }

    #[test]
    fn as_inner_downcast() {
        let middle = MiddleError {
            source: Some(Box::new(LeafError::default())),
        };
        let error = Error::binding(middle);
        let msg = error.as_inner::<LeafError>().map(LeafError::hey);
        assert_eq!(msg, Some("hey"));

        let error = Error::binding(MiddleError { source: None });
        assert!(error.as_inner::<LeafError>().is_none(), "{error:?}");
    }
}
