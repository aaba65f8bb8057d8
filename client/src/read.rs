//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Read strategies
//!
//! Each strategy differs in how long it is willing to wait and how much it is willing to
//! receive before handing data back:
//!
//! | method            | waits                     | receives               |
//! |-------------------|---------------------------|------------------------|
//! | `read_until`      | until match or timeout    | as needed              |
//! | `read_all`        | until end of file         | everything             |
//! | `read_some`       | until data or end of file | as needed              |
//! | `read_very_eager` | never                     | everything ready       |
//! | `read_eager`      | never                     | until data, if ready   |
//! | `read_lazy`       | never                     | nothing                |
//! | `read_very_lazy`  | never                     | nothing, no processing |
//!
//! All of them return [`TelnetError::ConnectionClosed`] once end of file has been seen and
//! nothing is buffered, except `read_all` and `read_some`, which return an empty buffer.

use crate::{Result, Telnet, TelnetError};
use bytes::Bytes;
use regex::bytes::Regex;
use std::ops::Range;
use std::time::Duration;
use tokio::time::Instant;

/// Outcome of [`Telnet::expect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectMatch {
    /// Position of the matching pattern in the list, `None` on timeout or end of file.
    pub index: Option<usize>,
    /// Byte range of the match within `text`.
    pub span: Option<Range<usize>>,
    /// Data consumed: through the end of the match, or whatever was buffered.
    pub text: Bytes,
}

impl ExpectMatch {
    /// True when one of the patterns matched.
    pub fn is_match(&self) -> bool {
        self.index.is_some()
    }
}

fn find_subsequence(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| from + position)
}

fn first_match(patterns: &[Regex], haystack: &[u8]) -> Option<(usize, Range<usize>)> {
    patterns.iter().enumerate().find_map(|(index, pattern)| {
        pattern.find(haystack).map(|found| (index, found.range()))
    })
}

impl Telnet {
    /// Read until `pattern` is seen or `timeout` elapses.
    ///
    /// On a match the data through the end of the pattern is returned and the rest stays
    /// buffered. Otherwise whatever is buffered is returned, possibly empty, the same way
    /// [`Telnet::read_very_lazy`] does.
    pub async fn read_until(&mut self, pattern: &[u8], timeout: Option<Duration>) -> Result<Bytes> {
        let found = self
            .pump_until(timeout, |cooked, previous_len| {
                let from = previous_len.saturating_sub(pattern.len());
                find_subsequence(cooked, pattern, from).map(|start| start + pattern.len())
            })
            .await?;
        match found {
            Some(end) => Ok(self.processor.take_cooked_to(end)),
            None => self.read_very_lazy(),
        }
    }

    /// Read everything until end of file.
    pub async fn read_all(&mut self) -> Result<Bytes> {
        self.process_raw().await;
        while !self.eof {
            self.fill().await?;
            self.process_raw().await;
        }
        Ok(self.processor.take_cooked())
    }

    /// Read at least one byte unless end of file is hit first.
    pub async fn read_some(&mut self) -> Result<Bytes> {
        self.process_raw().await;
        while self.processor.cooked().is_empty() && !self.eof {
            self.fill().await?;
            self.process_raw().await;
        }
        Ok(self.processor.take_cooked())
    }

    /// Read everything available without waiting.
    pub async fn read_very_eager(&mut self) -> Result<Bytes> {
        self.process_raw().await;
        while !self.eof && self.try_fill()? {
            self.process_raw().await;
        }
        self.read_very_lazy()
    }

    /// Read what is ready without waiting, stopping as soon as some data is available.
    pub async fn read_eager(&mut self) -> Result<Bytes> {
        self.process_raw().await;
        while self.processor.cooked().is_empty() && !self.eof && self.try_fill()? {
            self.process_raw().await;
        }
        self.read_very_lazy()
    }

    /// Process what was already received and return the cooked data. Never touches the
    /// transport.
    pub async fn read_lazy(&mut self) -> Result<Bytes> {
        self.process_raw().await;
        self.read_very_lazy()
    }

    /// Return cooked data without processing or receiving.
    pub fn read_very_lazy(&mut self) -> Result<Bytes> {
        let buffer = self.processor.take_cooked();
        if buffer.is_empty() && self.eof && self.processor.raw_is_empty() {
            return Err(TelnetError::ConnectionClosed);
        }
        Ok(buffer)
    }

    /// Drain the payload of the most recent subnegotiation. Call it after the handler sees
    /// `SE`.
    pub fn read_sb_data(&mut self) -> Bytes {
        self.processor.take_sb_data()
    }

    /// Read until one of `patterns` matches or `timeout` elapses.
    ///
    /// Patterns are tried in list order against the buffered data and the first that matches
    /// wins, even when a later one would match earlier in the data. With no match the buffered
    /// data is returned with `index` and `span` unset. End of file with nothing buffered is
    /// [`TelnetError::ConnectionClosed`].
    pub async fn expect(
        &mut self,
        patterns: &[Regex],
        timeout: Option<Duration>,
    ) -> Result<ExpectMatch> {
        let found = self
            .pump_until(timeout, |cooked, _| first_match(patterns, cooked))
            .await?;
        if let Some((index, span)) = found {
            let text = self.processor.take_cooked_to(span.end);
            return Ok(ExpectMatch {
                index: Some(index),
                span: Some(span),
                text,
            });
        }
        let text = self.read_very_lazy()?;
        if text.is_empty() && self.eof {
            return Err(TelnetError::ConnectionClosed);
        }
        Ok(ExpectMatch {
            index: None,
            span: None,
            text,
        })
    }

    /// Receive and process until `scan` finds something, end of file, or the deadline.
    ///
    /// `scan` sees the cooked queue and its length before the latest receive, so searches can
    /// resume near the old tail instead of rescanning from the start.
    async fn pump_until<T, F>(&mut self, timeout: Option<Duration>, mut scan: F) -> Result<Option<T>>
    where
        F: FnMut(&[u8], usize) -> Option<T> + Send,
    {
        let deadline = timeout.map(|limit| Instant::now() + limit);
        self.process_raw().await;
        let mut found = scan(self.processor.cooked(), 0);
        while found.is_none() && !self.eof {
            let remaining = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    Some(deadline - now)
                }
                None => None,
            };
            if !self.wait_readable(remaining).await? {
                break;
            }
            let previous_len = self.processor.cooked().len();
            if !self.try_fill()? {
                continue;
            }
            self.process_raw().await;
            found = scan(self.processor.cooked(), previous_len);
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_subsequence() {
        assert_eq!(find_subsequence(b"abcabc", b"ca", 0), Some(2));
        assert_eq!(find_subsequence(b"abcabc", b"abc", 1), Some(3));
        assert_eq!(find_subsequence(b"abc", b"x", 0), None);
        assert_eq!(find_subsequence(b"abc", b"", 2), Some(2));
        assert_eq!(find_subsequence(b"abc", b"abcd", 0), None);
    }

    #[test]
    fn test_first_listed_pattern_wins() {
        let patterns = [
            Regex::new("bar").unwrap(),
            Regex::new("xx").unwrap(),
        ];
        assert_eq!(first_match(&patterns, b"xxbarxx"), Some((0, 2..5)));
        assert_eq!(first_match(&patterns[1..], b"xxbarxx"), Some((0, 0..2)));
        assert_eq!(first_match(&patterns, b"none"), None);
    }
}
