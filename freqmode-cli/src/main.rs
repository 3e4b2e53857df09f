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

mod cli;
mod report;

use std::fmt::Display;
use std::hash::Hash;
use std::io;
use std::io::BufRead;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use freqmode::frequencies::count_frequencies;
use freqmode::parse::Whitespace;
use freqmode::parse::parse_chars;
use freqmode::parse::parse_elements;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::cli::Query;

fn main() -> ExitCode {
    let cmd = Command::parse();
    if let Err(err) = init_logging(&cmd.log) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    match run(&cmd, io::stdin().lock()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "query failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter {directive:?}"))?;
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
    Ok(())
}

fn run(cmd: &Command, stdin: impl BufRead) -> anyhow::Result<String> {
    let line = read_input(cmd.query.tokens(), stdin)?;
    if cmd.input.chars {
        let whitespace = if cmd.input.keep_whitespace {
            Whitespace::Keep
        } else {
            Whitespace::Strip
        };
        let items = parse_chars(&line, whitespace);
        answer(&cmd.query, &items)
    } else {
        let items: Vec<i64> = parse_elements(&line).context("failed to parse input")?;
        answer(&cmd.query, &items)
    }
}

/// Joins the positional tokens, or reads a single line from `stdin` when there are none.
///
/// The line terminator is not part of the input.
fn read_input(tokens: &[String], mut stdin: impl BufRead) -> anyhow::Result<String> {
    if !tokens.is_empty() {
        return Ok(tokens.join(" "));
    }
    let mut line = String::new();
    stdin
        .read_line(&mut line)
        .context("failed to read input from stdin")?;
    line.truncate(line.trim_end_matches(['\n', '\r']).len());
    tracing::trace!(bytes = line.len(), "read input line");
    Ok(line)
}

fn answer<T>(query: &Query, items: &[T]) -> anyhow::Result<String>
where
    T: Ord + Hash + Display,
{
    let map = count_frequencies(items);
    tracing::debug!(
        len = items.len(),
        distinct = map.num_distinct(),
        levels = map.levels().len(),
        "counted input"
    );
    let output = report::render(query, &map).context("failed to answer query")?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Command {
        Command::try_parse_from(std::iter::once("freqmode").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_read_input_joins_tokens() {
        let tokens = vec!["4".to_string(), "4".to_string(), "5".to_string()];
        let line = read_input(&tokens, "ignored\n".as_bytes()).unwrap();
        assert_eq!(line, "4 4 5");
    }

    #[test]
    fn test_read_input_strips_line_terminator() {
        assert_eq!(read_input(&[], "ab\n".as_bytes()).unwrap(), "ab");
        assert_eq!(read_input(&[], "ab\r\n".as_bytes()).unwrap(), "ab");
        assert_eq!(read_input(&[], "ab".as_bytes()).unwrap(), "ab");
        assert_eq!(read_input(&[], "".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_read_input_reads_only_first_line() {
        assert_eq!(read_input(&[], "1 2\n3 4\n".as_bytes()).unwrap(), "1 2");
    }

    #[test]
    fn test_keep_whitespace_ignores_line_terminator() {
        let cmd = command(&["--chars", "--keep-whitespace", "counts"]);
        let out = run(&cmd, "ab\n".as_bytes()).unwrap();
        assert_eq!(out, "a: 1\nb: 1");

        let cmd = command(&["--chars", "--keep-whitespace", "mode"]);
        let out = run(&cmd, "ab\r\n".as_bytes()).unwrap();
        assert_eq!(out, "most frequent element: a");
    }

    #[test]
    fn test_keep_whitespace_counts_inner_spaces() {
        let cmd = command(&["--chars", "--keep-whitespace", "mode"]);
        let out = run(&cmd, "a  b\n".as_bytes()).unwrap();
        assert_eq!(out, "most frequent element:  ");
    }

    #[test]
    fn test_chars_strip_whitespace_by_default() {
        let cmd = command(&["--chars", "mode"]);
        let out = run(&cmd, "a  b b\n".as_bytes()).unwrap();
        assert_eq!(out, "most frequent element: b");
    }

    #[test]
    fn test_integers_from_stdin_and_tokens() {
        let cmd = command(&["second-mode"]);
        let out = run(&cmd, "1 1 1 2 2 3\n".as_bytes()).unwrap();
        assert_eq!(out, "second most frequent element: 2");

        let cmd = command(&["mode", "4", "4", "5", "5", "6"]);
        let out = run(&cmd, "".as_bytes()).unwrap();
        assert_eq!(out, "most frequent element: 4");
    }

    #[test]
    fn test_malformed_token_is_error() {
        let cmd = command(&["mode"]);
        let err = run(&cmd, "1 two 3\n".as_bytes()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed to parse input"), "unexpected error: {message}");
        assert!(message.contains("MalformedElement"), "unexpected error: {message}");
    }

    #[test]
    fn test_empty_input_mode_is_error() {
        let cmd = command(&["mode"]);
        let err = run(&cmd, "\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("EmptyInput"));
    }
}
