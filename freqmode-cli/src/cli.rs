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

use clap::Args;
use clap::Parser;
use clap::Subcommand;

/// Answers frequency questions about one line of input.
#[derive(Debug, Parser)]
#[command(name = "freqmode", version, about, long_about = None)]
pub struct Command {
    #[command(subcommand)]
    pub query: Query,

    #[command(flatten)]
    pub input: InputArgs,

    /// Log filter directive, e.g. `debug` or `freqmode=trace`.
    #[arg(long, global = true, env = "FREQMODE_LOG", default_value = "warn")]
    pub log: String,
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Analyze the characters of the input instead of whitespace-separated integers.
    #[arg(long, global = true)]
    pub chars: bool,

    /// With `--chars`, count whitespace characters too.
    #[arg(long, global = true, requires = "chars")]
    pub keep_whitespace: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Query {
    /// Print the most frequent element, smallest first on ties.
    Mode {
        /// Input tokens; one line is read from stdin when omitted.
        #[arg(allow_negative_numbers = true)]
        tokens: Vec<String>,
    },
    /// Print the smallest element at the second-highest distinct frequency.
    SecondMode {
        /// Input tokens; one line is read from stdin when omitted.
        #[arg(allow_negative_numbers = true)]
        tokens: Vec<String>,
    },
    /// Print the smallest element at the given frequency level (0 is the mode).
    Nth {
        /// Frequency level to report, counting distinct frequencies from the highest.
        #[arg(long)]
        level: usize,
        /// Input tokens; one line is read from stdin when omitted.
        #[arg(allow_negative_numbers = true)]
        tokens: Vec<String>,
    },
    /// Print the ranked frequency table.
    Counts {
        /// Only print the first K rows.
        #[arg(long, value_name = "K")]
        top: Option<usize>,
        /// Input tokens; one line is read from stdin when omitted.
        #[arg(allow_negative_numbers = true)]
        tokens: Vec<String>,
    },
}

impl Query {
    pub fn tokens(&self) -> &[String] {
        match self {
            Query::Mode { tokens }
            | Query::SecondMode { tokens }
            | Query::Nth { tokens, .. }
            | Query::Counts { tokens, .. } => tokens,
        }
    }
}
