// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error types for frequency queries and input parsing.

use std::fmt;

/// The kind of failure reported by an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A query that requires at least one element was given none.
    EmptyInput,
    /// A raw token could not be converted into an element.
    MalformedElement,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "EmptyInput",
            ErrorKind::MalformedElement => "MalformedElement",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
        }
    }

    /// Attaches a key/value pair describing where the error happened.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached context pairs in insertion order.
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }
}

// Convenience constructors used across the crate.
impl Error {
    pub(crate) fn empty_input(operation: &'static str) -> Self {
        Self::new(
            ErrorKind::EmptyInput,
            format!("{operation} requires at least one element"),
        )
        .with_context("operation", operation)
    }

    pub(crate) fn malformed_element(token: &str, position: usize) -> Self {
        Self::new(
            ErrorKind::MalformedElement,
            format!("cannot parse token {token:?} at position {position}"),
        )
        .with_context("token", token)
        .with_context("position", position)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: {value}")?;
            }
            write!(f, " }}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = Error::malformed_element("x1", 3);
        assert_eq!(err.kind(), ErrorKind::MalformedElement);
        assert_eq!(
            err.to_string(),
            "MalformedElement: cannot parse token \"x1\" at position 3, context: { token: x1, position: 3 }"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = Error::new(ErrorKind::EmptyInput, "nothing to count");
        assert_eq!(err.to_string(), "EmptyInput: nothing to count");
        assert!(err.context().is_empty());
    }
}
