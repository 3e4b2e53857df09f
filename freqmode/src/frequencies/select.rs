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

//! Mode and second-mode selection with smallest-item tie-breaking.

use std::hash::Hash;

use crate::error::Error;
use crate::frequencies::map::FrequencyMap;
use crate::frequencies::map::count_frequencies;

impl<T: Ord + Hash> FrequencyMap<T> {
    /// Returns the most frequent item.
    ///
    /// When several items share the highest count, the smallest of them is returned.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::EmptyInput`](crate::error::ErrorKind::EmptyInput) error if the
    /// map is empty.
    pub fn mode(&self) -> Result<&T, Error> {
        let mut best: Option<(&T, u64)> = None;
        for (item, count) in self.iter() {
            let replace = match best {
                None => true,
                Some((best_item, best_count)) => {
                    count > best_count || (count == best_count && item < best_item)
                }
            };
            if replace {
                best = Some((item, count));
            }
        }
        best.map(|(item, _)| item)
            .ok_or_else(|| Error::empty_input("mode"))
    }

    /// Returns the smallest item whose count is the second-highest distinct count.
    ///
    /// Returns `None` when the map holds fewer than two distinct count values: it is empty,
    /// it has a single item, or every item occurs equally often.
    pub fn second_mode(&self) -> Option<&T> {
        let max_count = self.max_count()?;
        let second_count = self
            .iter()
            .map(|(_, count)| count)
            .filter(|&count| count < max_count)
            .max()?;
        self.smallest_with_count(second_count)
    }

    /// Returns the smallest item whose count is the `level`-th highest distinct count.
    ///
    /// Level 0 is the mode and level 1 is the second mode. Returns `None` if the map has
    /// `level` or fewer distinct count values.
    pub fn nth_mode(&self, level: usize) -> Option<&T> {
        let count = *self.levels().get(level)?;
        self.smallest_with_count(count)
    }

    fn smallest_with_count(&self, count: u64) -> Option<&T> {
        self.iter()
            .filter(|&(_, c)| c == count)
            .map(|(item, _)| item)
            .min()
    }
}

/// Returns the most frequent element of `items`, breaking ties by the smallest element.
///
/// # Errors
///
/// Returns an [`ErrorKind::EmptyInput`](crate::error::ErrorKind::EmptyInput) error if `items`
/// is empty.
pub fn mode<T: Ord + Hash>(items: &[T]) -> Result<&T, Error> {
    count_frequencies(items).mode().copied()
}

/// Returns the smallest element at the second-highest distinct frequency of `items`.
///
/// See [`FrequencyMap::second_mode`] for when this returns `None`.
pub fn second_mode<T: Ord + Hash>(items: &[T]) -> Option<&T> {
    count_frequencies(items).second_mode().copied()
}

/// Returns the smallest element at the `level`-th highest distinct frequency of `items`.
pub fn nth_mode<T: Ord + Hash>(items: &[T], level: usize) -> Option<&T> {
    count_frequencies(items).nth_mode(level).copied()
}
