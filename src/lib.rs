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

//! An Anki-style SM-2 scheduler.
//!
//! Given a card's scheduling state and a rating, compute the card's next
//! state, interval and due time. Everything here is a pure function of its
//! inputs: the caller supplies the current time and persists the result.

pub mod calendar;
pub mod cli;
mod cmd;
pub mod config;
pub mod error;
pub mod format;
pub mod preview;
pub mod scheduler;
pub mod steps;
pub mod types;

pub use config::SchedulerSettings;
pub use error::ErrorReport;
pub use error::Fallible;
pub use error::fail;
pub use preview::IntervalPreview;
pub use preview::preview_intervals;
pub use scheduler::SchedulingResult;
pub use scheduler::grade_card;
pub use steps::LearningSteps;
pub use steps::parse_steps;
pub use types::card::Card;
pub use types::card_state::CardState;
pub use types::rating::Rating;
pub use types::timestamp::Timestamp;
