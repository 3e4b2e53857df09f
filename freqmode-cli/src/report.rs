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

//! Human-readable answers for each query.

use std::fmt::Display;
use std::hash::Hash;

use freqmode::error::Error;
use freqmode::frequencies::FrequencyMap;

use crate::cli::Query;

const NO_SECOND_MODE: &str = "no second most frequent element (fewer than two distinct frequencies)";
const NO_ELEMENTS: &str = "no elements";

/// Answers `query` against `map`.
///
/// Every query except `counts` renders a single line. An empty `counts` table renders as
/// `no elements`.
pub fn render<T>(query: &Query, map: &FrequencyMap<T>) -> Result<String, Error>
where
    T: Ord + Hash + Clone + Display,
{
    let out = match query {
        Query::Mode { .. } => format!("most frequent element: {}", map.mode()?),
        Query::SecondMode { .. } => match map.second_mode() {
            Some(item) => format!("second most frequent element: {item}"),
            None => NO_SECOND_MODE.to_string(),
        },
        Query::Nth { level, .. } => match map.nth_mode(*level) {
            Some(item) => format!("frequency level {level} element: {item}"),
            None => format!("no element at frequency level {level}"),
        },
        Query::Counts { .. } if map.is_empty() => NO_ELEMENTS.to_string(),
        Query::Counts { top, .. } => {
            let rows = match top {
                Some(k) => map.top_k(*k),
                None => map.rows(),
            };
            rows.iter()
                .map(|row| format!("{}: {}", row.item(), row.count()))
                .collect::<Vec<_>>()
                .join("\n")
        }
    };
    Ok(out)
}
