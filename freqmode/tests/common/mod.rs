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

#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Returns a reproducible random sequence of `len` values drawn from `0..domain`.
pub fn random_sequence(seed: u64, len: usize, domain: i64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..domain)).collect()
}

/// Quadratic mode: marks visited positions and rescans the tail for each unvisited element.
///
/// Used as an independent oracle for the hash-based implementation.
pub fn visited_scan_mode<T: Ord>(items: &[T]) -> Option<&T> {
    let mut visited = vec![false; items.len()];
    let mut best: Option<(&T, usize)> = None;
    for i in 0..items.len() {
        if visited[i] {
            continue;
        }
        let mut freq = 0;
        for j in i..items.len() {
            if !visited[j] && items[i] == items[j] {
                freq += 1;
                visited[j] = true;
            }
        }
        best = match best {
            None => Some((&items[i], freq)),
            Some((_, best_freq)) if freq > best_freq => Some((&items[i], freq)),
            Some((best_item, best_freq)) if freq == best_freq => {
                Some((best_item.min(&items[i]), freq))
            }
            keep => keep,
        };
    }
    best.map(|(item, _)| item)
}

/// Counts occurrences of `needle` by linear scan.
pub fn occurrences<T: PartialEq>(items: &[T], needle: &T) -> u64 {
    items.iter().filter(|item| *item == needle).count() as u64
}
