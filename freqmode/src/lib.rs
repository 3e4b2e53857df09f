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

//! Exact frequency analysis for finite sequences.
//!
//! This crate counts how often each element of a sequence occurs and answers questions about
//! the resulting distribution: the most frequent element, the element at the second-highest
//! frequency, and the full ranked table. Ties are always broken toward the smallest element,
//! so every query is deterministic.
//!
//! See [`frequencies`] for the queries and [`parse`] for turning a raw input line into a
//! sequence.

pub mod error;
pub mod frequencies;
pub mod parse;
