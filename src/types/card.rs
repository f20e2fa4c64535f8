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
use serde::Serialize;

use crate::types::card_state::CardState;
use crate::types::timestamp::Timestamp;

/// A snapshot of a card's scheduling fields. The scheduler never holds on to
/// a card: it reads a snapshot and hands back a replacement.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Card {
    /// The card's lifecycle state. Every other field is read according to it.
    pub state: CardState,
    /// When the card next becomes eligible for review.
    pub due_at: Timestamp,
    /// The current review interval in days. Zero while learning.
    pub interval_days: f64,
    /// The interval multiplier applied on a `Good` review.
    pub ease: f64,
    /// Zero-based position in the (re)learning steps.
    pub learning_step_index: usize,
    /// The number of completed gradings.
    pub reps: u32,
    /// The number of times the card was forgotten while in review.
    pub lapses: u32,
}

impl Card {
    /// A card that has never been graded, due immediately.
    pub fn new(now: Timestamp) -> Self {
        Self {
            state: CardState::New,
            due_at: now,
            interval_days: 0.0,
            ease: 0.0,
            learning_step_index: 0,
            reps: 0,
            lapses: 0,
        }
    }
}
