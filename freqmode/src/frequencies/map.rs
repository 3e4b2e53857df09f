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

//! Exact frequency map over a finite multiset.

use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;

/// One entry of a ranked frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<T> {
    item: T,
    count: u64,
}

impl<T> Row<T> {
    /// Returns the item value.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the number of occurrences of the item.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Consumes the row and returns its item.
    pub fn into_item(self) -> T {
        self.item
    }
}

/// Mapping from each distinct item to its number of occurrences.
///
/// Every stored count is at least one, and [`FrequencyMap::total_weight`] always equals the
/// sum of all counts. Iteration order is unspecified; all queries are independent of it.
///
/// See [`crate::frequencies`] for an overview of the available queries.
#[derive(Debug, Clone)]
pub struct FrequencyMap<T> {
    counts: HashMap<T, u64>,
    total_weight: u64,
}

impl<T> Default for FrequencyMap<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total_weight: 0,
        }
    }
}

impl<T: Eq + Hash> PartialEq for FrequencyMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.total_weight == other.total_weight && self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for FrequencyMap<T> {}

impl<T: Eq + Hash> FrequencyMap<T> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no item has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the number of distinct items.
    pub fn num_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the sum of all counts.
    ///
    /// For a map built from a sequence this is the sequence length.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Returns the number of occurrences of `item`, or zero if it was never counted.
    pub fn count(&self, item: &T) -> u64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Counts one occurrence of `item`.
    pub fn update(&mut self, item: T) {
        self.update_with_count(item, 1);
    }

    /// Counts `count` occurrences of `item`.
    ///
    /// A count of zero is a no-op, so the map never stores a zero count.
    pub fn update_with_count(&mut self, item: T, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(item).or_insert(0) += count;
        self.total_weight += count;
    }

    /// Adds every count of `other` into this map.
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        for (item, count) in other.iter() {
            self.update_with_count(item.clone(), count);
        }
    }

    /// Returns an iterator over `(item, count)` pairs in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Returns the highest count, or `None` if the map is empty.
    pub fn max_count(&self) -> Option<u64> {
        self.counts.values().copied().max()
    }

    /// Returns the distinct count values, highest first.
    ///
    /// The length of the result is the number of frequency levels present in the map.
    pub fn levels(&self) -> Vec<u64> {
        let mut levels: Vec<u64> = self.counts.values().copied().collect();
        levels.sort_unstable_by(|a, b| b.cmp(a));
        levels.dedup();
        levels
    }

    /// Returns the ranked frequency table.
    ///
    /// Rows are ordered by count (highest first); rows with equal counts are ordered by item
    /// (smallest first), so the first row is always the mode.
    pub fn rows(&self) -> Vec<Row<T>>
    where
        T: Ord + Clone,
    {
        let mut rows: Vec<Row<T>> = self
            .iter()
            .map(|(item, count)| Row {
                item: item.clone(),
                count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));
        rows
    }

    /// Returns the first `k` rows of [`FrequencyMap::rows`].
    pub fn top_k(&self, k: usize) -> Vec<Row<T>>
    where
        T: Ord + Clone,
    {
        let mut rows = self.rows();
        rows.truncate(k);
        rows
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrequencyMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<T: Eq + Hash> Extend<T> for FrequencyMap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.update(item);
        }
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a FrequencyMap<T> {
    type Item = (&'a T, u64);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(item, count)` pairs of a [`FrequencyMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: hash_map::Iter<'a, T, u64>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(item, count)| (item, *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Counts the occurrences of every element of `items` in linear time.
///
/// The map borrows the elements, so `items` is neither cloned nor modified. An empty slice
/// yields an empty map.
pub fn count_frequencies<T: Eq + Hash>(items: &[T]) -> FrequencyMap<&T> {
    items.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_is_not_stored() {
        let mut map = FrequencyMap::new();
        map.update_with_count('a', 0);
        assert!(map.is_empty());
        assert_eq!(map.total_weight(), 0);
        assert_eq!(map.count(&'a'), 0);
    }

    #[test]
    fn test_levels_are_distinct_and_descending() {
        let map: FrequencyMap<i64> = [1, 1, 1, 2, 2, 3, 4, 4].into_iter().collect();
        assert_eq!(map.levels(), vec![3, 2, 1]);
        assert_eq!(map.max_count(), Some(3));
    }

    #[test]
    fn test_rows_break_ties_by_item() {
        let map: FrequencyMap<i64> = [6, 5, 5, 4, 4].into_iter().collect();
        let rows = map.rows();
        let ranked: Vec<(i64, u64)> = rows.iter().map(|r| (*r.item(), r.count())).collect();
        assert_eq!(ranked, vec![(4, 2), (5, 2), (6, 1)]);
        assert_eq!(map.top_k(1).len(), 1);
        assert_eq!(map.top_k(10).len(), 3);
    }
}
