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

use chrono::DateTime;
use chrono::TimeZone;

use crate::config::SchedulerSettings;
use crate::scheduler::Counters;
use crate::scheduler::SchedulingResult;
use crate::scheduler::in_review;
use crate::scheduler::on_step;
use crate::scheduler::sanitize_ease;
use crate::types::card::Card;
use crate::types::card_state::CardState;
use crate::types::rating::Rating;

/// Grade a card in `Learning` or `Relearning`. Both step through their
/// delays the same way and graduate into `Review`.
pub fn grade<Tz: TimeZone>(
    card: &Card,
    rating: Rating,
    settings: &SchedulerSettings,
    now: &DateTime<Tz>,
) -> SchedulingResult {
    let steps = settings.steps_for(card.state == CardState::Relearning);
    let ease = sanitize_ease(card.ease);
    let index = card.learning_step_index;
    match rating {
        Rating::Again => on_step(
            card.state,
            0,
            Counters {
                ease,
                reps: card.reps,
                lapses: card.lapses,
            },
            settings,
            now,
        ),
        Rating::Hard | Rating::Good if !steps.is_last(index) => on_step(
            card.state,
            index.saturating_add(1),
            Counters {
                ease,
                reps: card.reps.saturating_add(1),
                lapses: card.lapses,
            },
            settings,
            now,
        ),
        Rating::Hard | Rating::Good | Rating::Easy => in_review(
            settings.graduating_interval_days,
            Counters {
                ease,
                reps: card.reps.saturating_add(1),
                lapses: card.lapses,
            },
            settings,
            now,
        ),
    }
}
