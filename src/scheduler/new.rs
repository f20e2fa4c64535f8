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
use crate::types::card_state::CardState;
use crate::types::rating::Rating;

/// Grade a card that has never been graded.
///
/// `Again` leaves `reps` at zero while `Hard` and `Good` count as the first
/// rep. Downstream "reviewed today" counters rely on this.
pub fn grade<Tz: TimeZone>(
    rating: Rating,
    settings: &SchedulerSettings,
    now: &DateTime<Tz>,
) -> SchedulingResult {
    let ease = sanitize_ease(settings.starting_ease);
    match rating {
        Rating::Again => on_step(
            CardState::Learning,
            0,
            Counters {
                ease,
                reps: 0,
                lapses: 0,
            },
            settings,
            now,
        ),
        // There is no distinct `Hard` for a card that was never seen.
        Rating::Hard | Rating::Good => on_step(
            CardState::Learning,
            0,
            Counters {
                ease,
                reps: 1,
                lapses: 0,
            },
            settings,
            now,
        ),
        Rating::Easy => in_review(
            settings.graduating_interval_days,
            Counters {
                ease,
                reps: 1,
                lapses: 0,
            },
            settings,
            now,
        ),
    }
}
