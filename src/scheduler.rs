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

//! The scheduling state machine.
//!
//! Grading is a pure function of a card snapshot, a rating, the settings and
//! the current time. The current time is always passed in, and its time zone
//! decides where calendar days begin.

mod learning;
mod new;
mod review;

use chrono::DateTime;
use chrono::TimeZone;
use serde::Serialize;

use crate::calendar::due_from_delay;
use crate::calendar::due_from_interval_days;
use crate::config::SchedulerSettings;
use crate::types::card::Card;
use crate::types::card_state::CardState;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// The lowest ease a card can have.
pub const MIN_EASE: f64 = 1.3;

/// The highest ease a card can have.
pub const MAX_EASE: f64 = 3.0;

/// The outcome of grading a card: a full replacement for its scheduling
/// fields.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SchedulingResult {
    pub state: CardState,
    pub due_at: Timestamp,
    pub interval_days: f64,
    pub ease: f64,
    pub learning_step_index: usize,
    pub reps: u32,
    pub lapses: u32,
}

impl SchedulingResult {
    pub fn into_card(self) -> Card {
        Card {
            state: self.state,
            due_at: self.due_at,
            interval_days: self.interval_days,
            ease: self.ease,
            learning_step_index: self.learning_step_index,
            reps: self.reps,
            lapses: self.lapses,
        }
    }
}

impl From<SchedulingResult> for Card {
    fn from(value: SchedulingResult) -> Self {
        value.into_card()
    }
}

pub fn clamp_ease(ease: f64) -> f64 {
    ease.clamp(MIN_EASE, MAX_EASE)
}

/// Bring an ease taken from the settings or a stored card into range,
/// warning when it was outside it.
fn sanitize_ease(ease: f64) -> f64 {
    if ease.is_nan() {
        log::warn!("Ease is NaN, using {MIN_EASE}.");
        return MIN_EASE;
    }
    let clamped = clamp_ease(ease);
    if clamped != ease {
        log::warn!("Ease {ease} is outside [{MIN_EASE}, {MAX_EASE}], clamped to {clamped}.");
    }
    clamped
}

/// Grade a card.
pub fn grade_card<Tz: TimeZone>(
    card: &Card,
    rating: Rating,
    settings: &SchedulerSettings,
    now: &DateTime<Tz>,
) -> SchedulingResult {
    let result = match card.state {
        CardState::New => new::grade(rating, settings, now),
        CardState::Learning => learning::grade(card, rating, settings, now),
        CardState::Relearning => learning::grade(card, rating, settings, now),
        CardState::Review => review::grade(card, rating, settings, now),
    };
    log::debug!(
        "Graded {} card as {rating}: now {}, interval {} days, step {}, due {}.",
        card.state,
        result.state,
        result.interval_days,
        result.learning_step_index,
        result.due_at
    );
    result
}

/// Fields that stay fixed across one transition.
struct Counters {
    ease: f64,
    reps: u32,
    lapses: u32,
}

/// A card sitting on a (re)learning step.
fn on_step<Tz: TimeZone>(
    state: CardState,
    step_index: usize,
    counters: Counters,
    settings: &SchedulerSettings,
    now: &DateTime<Tz>,
) -> SchedulingResult {
    let steps = settings.steps_for(state == CardState::Relearning);
    let minutes = steps.get(step_index);
    SchedulingResult {
        state,
        due_at: due_from_delay(minutes, now, settings.rollover_hour).into(),
        interval_days: 0.0,
        ease: counters.ease,
        learning_step_index: step_index,
        reps: counters.reps,
        lapses: counters.lapses,
    }
}

/// A card in review with the given interval.
fn in_review<Tz: TimeZone>(
    interval_days: f64,
    counters: Counters,
    settings: &SchedulerSettings,
    now: &DateTime<Tz>,
) -> SchedulingResult {
    SchedulingResult {
        state: CardState::Review,
        due_at: due_from_interval_days(interval_days, now, settings.rollover_hour).into(),
        interval_days,
        ease: counters.ease,
        learning_step_index: 0,
        reps: counters.reps,
        lapses: counters.lapses,
    }
}
