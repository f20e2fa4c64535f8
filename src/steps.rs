// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;

/// The delay used when a step list has no valid steps at all.
pub const DEFAULT_STEP_MINUTES: u32 = 10;

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1440.0;

/// Parse a step specification like `"1m 10m 1d"` into delays in minutes.
///
/// Each whitespace-separated token is a number followed by an optional unit
/// (`m`, `h` or `d`; minutes when omitted). Tokens that don't match are
/// logged and dropped. Order is preserved and nothing is deduplicated.
pub fn parse_steps(spec: &str) -> Vec<u32> {
    let mut steps = Vec::new();
    for token in spec.split_whitespace() {
        match parse_token(token) {
            Some(minutes) => steps.push(minutes),
            None => log::warn!("Skipping malformed learning step: {token:?}"),
        }
    }
    steps
}

fn parse_token(token: &str) -> Option<u32> {
    let (number, scale) = match token.char_indices().last() {
        Some((idx, 'm')) => (&token[..idx], 1.0),
        Some((idx, 'h')) => (&token[..idx], MINUTES_PER_HOUR),
        Some((idx, 'd')) => (&token[..idx], MINUTES_PER_DAY),
        Some(_) => (token, 1.0),
        None => return None,
    };
    // `f64::from_str` accepts things like "inf", "1e3" and "+5". Only plain
    // decimals are steps.
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    let minutes = (value * scale).round();
    if minutes > u32::MAX as f64 {
        return None;
    }
    Some(minutes as u32)
}

/// A parsed, ordered sequence of (re)learning delays in minutes.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(from = "String")]
pub struct LearningSteps {
    minutes: Vec<u32>,
}

impl LearningSteps {
    pub fn new(minutes: Vec<u32>) -> Self {
        Self { minutes }
    }

    pub fn parse(spec: &str) -> Self {
        Self::new(parse_steps(spec))
    }

    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }

    /// The delay of the first step, or the default delay if there are no
    /// steps.
    pub fn first(&self) -> u32 {
        self.get(0)
    }

    /// The delay of step `index`. Out of range indices fall back to the
    /// default delay.
    pub fn get(&self, index: usize) -> u32 {
        match self.minutes.get(index) {
            Some(minutes) => *minutes,
            None => {
                log::warn!(
                    "No learning step at index {index} ({} configured), using {DEFAULT_STEP_MINUTES}m.",
                    self.minutes.len()
                );
                DEFAULT_STEP_MINUTES
            }
        }
    }

    /// Whether `index` is the final step, i.e. passing it graduates the card.
    /// An empty list behaves like a single default step.
    pub fn is_last(&self, index: usize) -> bool {
        index.saturating_add(1) >= self.minutes.len().max(1)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.minutes
    }
}

impl From<String> for LearningSteps {
    fn from(value: String) -> Self {
        LearningSteps::parse(&value)
    }
}
