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

//! Conversion of a raw input line into a sequence of elements.
//!
//! # Examples
//!
//! ```
//! # use freqmode::parse::Whitespace;
//! # use freqmode::parse::parse_chars;
//! # use freqmode::parse::parse_elements;
//! let numbers: Vec<i64> = parse_elements(" 4 4\t5 5 6 ").unwrap();
//! assert_eq!(numbers, vec![4, 4, 5, 5, 6]);
//!
//! let chars = parse_chars("aa b", Whitespace::Strip);
//! assert_eq!(chars, vec!['a', 'a', 'b']);
//! ```

use std::str::FromStr;

use crate::error::Error;

/// How whitespace characters are treated when a line is split into characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Whitespace {
    /// Drop every whitespace character before splitting.
    #[default]
    Strip,
    /// Count whitespace characters like any other character.
    Keep,
}

/// Splits `line` on runs of whitespace and parses every token as `T`.
///
/// A blank line yields an empty sequence.
///
/// # Errors
///
/// Returns an [`ErrorKind::MalformedElement`](crate::error::ErrorKind::MalformedElement) error
/// naming the first token that fails to parse and its 0-based position.
pub fn parse_elements<T: FromStr>(line: &str) -> Result<Vec<T>, Error> {
    line.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<T>()
                .map_err(|_| Error::malformed_element(token, position))
        })
        .collect()
}

/// Returns the characters of `line`, optionally with whitespace removed.
pub fn parse_chars(line: &str, whitespace: Whitespace) -> Vec<char> {
    match whitespace {
        Whitespace::Strip => line.chars().filter(|c| !c.is_whitespace()).collect(),
        Whitespace::Keep => line.chars().collect(),
    }
}
