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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// Where a card is in its lifecycle. A card starts as `New` and never
/// returns to it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CardState {
    /// Never graded.
    New,
    /// Working through the learning steps for the first time.
    Learning,
    /// Graduated, scheduled in whole days.
    Review,
    /// Working through the relearning steps after graduation.
    Relearning,
}

impl CardState {
    pub fn as_str(&self) -> &str {
        match self {
            CardState::New => "new",
            CardState::Learning => "learning",
            CardState::Review => "review",
            CardState::Relearning => "relearning",
        }
    }

    /// Whether the card is stepping through intraday delays.
    pub fn is_learning(&self) -> bool {
        matches!(self, CardState::Learning | CardState::Relearning)
    }
}

impl TryFrom<String> for CardState {
    type Error = ErrorReport;

    /// An unknown tag means the stored card is corrupt. There is no sensible
    /// default to schedule it with, so this is an error rather than a guess.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "new" => Ok(CardState::New),
            "learning" => Ok(CardState::Learning),
            "review" => Ok(CardState::Review),
            "relearning" => Ok(CardState::Relearning),
            _ => fail(format!("Invalid card state: {}", value)),
        }
    }
}

impl From<CardState> for String {
    fn from(value: CardState) -> Self {
        value.as_str().to_string()
    }
}

impl Display for CardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
