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

//! Exact frequency counting and mode selection over finite sequences.
//!
//! # Overview
//!
//! A [`FrequencyMap`] maps each distinct item of a sequence to the number of times it occurs.
//! Items may be of any type `T` that is `Ord + Hash`: the hash drives linear-time counting and
//! the total order drives deterministic tie-breaking.
//!
//! The following queries are supported:
//! * [`FrequencyMap::mode`]: the most frequent item. Ties are broken by picking the smallest
//!   item. An empty input is an [`ErrorKind::EmptyInput`] error rather than a default value.
//! * [`FrequencyMap::second_mode`]: the smallest item whose count is the second-highest
//!   *distinct* count. When fewer than two distinct counts exist the result is `None`; this is
//!   an expected outcome, not an error.
//! * [`FrequencyMap::nth_mode`]: the generalization of both to any frequency level.
//! * [`FrequencyMap::rows`] and [`FrequencyMap::top_k`]: the ranked frequency table.
//!
//! The free functions [`count_frequencies`], [`mode`], [`second_mode`] and [`nth_mode`] build a
//! fresh map over a borrowed slice for each call and return references into that slice.
//!
//! # Complexity
//!
//! Counting is `O(n)` expected time in the sequence length. Mode selection is a single pass
//! over the distinct items. An equivalent `O(n^2)` formulation marks visited positions and
//! rescans the rest of the sequence for each unvisited element; it produces identical results
//! but is not provided here.
//!
//! # Examples
//!
//! ```
//! # use freqmode::frequencies::mode;
//! # use freqmode::frequencies::second_mode;
//! let items = [1, 1, 1, 2, 2, 3];
//! assert_eq!(mode(&items).unwrap(), &1);
//! assert_eq!(second_mode(&items), Some(&2));
//! assert_eq!(second_mode(&[1, 2, 3]), None);
//! ```
//!
//! Building a map once and querying it repeatedly:
//!
//! ```
//! # use freqmode::frequencies::FrequencyMap;
//! let map: FrequencyMap<char> = "aabbbcc".chars().collect();
//! assert_eq!(map.mode().unwrap(), &'b');
//! assert_eq!(map.total_weight(), 7);
//!
//! let top = map.top_k(2);
//! assert_eq!(*top[0].item(), 'b');
//! assert_eq!(*top[1].item(), 'a');
//! ```
//!
//! [`ErrorKind::EmptyInput`]: crate::error::ErrorKind::EmptyInput

mod map;
mod select;

pub use self::map::FrequencyMap;
pub use self::map::Iter;
pub use self::map::Row;
pub use self::map::count_frequencies;
pub use self::select::mode;
pub use self::select::nth_mode;
pub use self::select::second_mode;
