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
use serde::Serialize;

use crate::config::SchedulerSettings;
use crate::format::format_days;
use crate::format::format_minutes;
use crate::scheduler::SchedulingResult;
use crate::scheduler::grade_card;
use crate::types::card::Card;
use crate::types::card_state::CardState;
use crate::types::rating::Rating;

/// The interval each rating would give, formatted for display.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct IntervalPreview {
    pub again: String,
    /// Absent for new cards, which have no `Hard` option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard: Option<String>,
    pub good: String,
    pub easy: String,
}

/// Compute what every rating would do to `card`, without changing it.
pub fn preview_intervals<Tz: TimeZone>(
    card: &Card,
    settings: &SchedulerSettings,
    now: &DateTime<Tz>,
) -> IntervalPreview {
    let label = |rating: Rating| describe(&grade_card(card, rating, settings, now), settings);
    let hard = match card.state {
        CardState::New => None,
        _ => Some(label(Rating::Hard)),
    };
    IntervalPreview {
        again: label(Rating::Again),
        hard,
        good: label(Rating::Good),
        easy: label(Rating::Easy),
    }
}

/// Learning results are labelled with the step's delay, review results with
/// the interval.
fn describe(result: &SchedulingResult, settings: &SchedulerSettings) -> String {
    if result.state.is_learning() {
        let steps = settings.steps_for(result.state == CardState::Relearning);
        format_minutes(f64::from(steps.get(result.learning_step_index)))
    } else {
        format_days(result.interval_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::now;
    use crate::scheduler::tests::settings;

    fn card(state: CardState, interval_days: f64, step: usize) -> Card {
        Card {
            state,
            due_at: now().into(),
            interval_days,
            ease: 2.5,
            learning_step_index: step,
            reps: 4,
            lapses: 0,
        }
    }

    #[test]
    fn test_new_card_has_no_hard() {
        let now = now();
        let preview = preview_intervals(&Card::new(now.into()), &settings("1m 10m"), &now);
        assert_eq!(
            preview,
            IntervalPreview {
                again: "1m".to_string(),
                hard: None,
                good: "1m".to_string(),
                easy: "1 day".to_string(),
            }
        );
    }

    #[test]
    fn test_learning_card() {
        let now = now();
        let preview = preview_intervals(
            &card(CardState::Learning, 0.0, 0),
            &settings("1m 10m 1h"),
            &now,
        );
        assert_eq!(preview.again, "1m");
        assert_eq!(preview.hard.as_deref(), Some("10m"));
        assert_eq!(preview.good, "10m");
        assert_eq!(preview.easy, "1 day");
    }

    #[test]
    fn test_learning_card_on_last_step() {
        let now = now();
        let preview = preview_intervals(
            &card(CardState::Learning, 0.0, 1),
            &settings("1m 1h"),
            &now,
        );
        assert_eq!(preview.again, "1m");
        assert_eq!(preview.good, "1 day");
    }

    #[test]
    fn test_interday_step_label() {
        let now = now();
        let preview = preview_intervals(
            &card(CardState::Learning, 0.0, 0),
            &settings("10m 2d"),
            &now,
        );
        assert_eq!(preview.good, "2 days");
    }

    #[test]
    fn test_review_card() {
        let now = now();
        let preview = preview_intervals(
            &card(CardState::Review, 40.0, 0),
            &SchedulerSettings::default(),
            &now,
        );
        assert_eq!(preview.again, "1 day");
        // 40 * 1.2 = 48
        assert_eq!(preview.hard.as_deref(), Some("2 months"));
        // 40 * 2.5 = 100
        assert_eq!(preview.good, "3 months");
        // 40 * 2.65 * 1.3 = 137.8
        assert_eq!(preview.easy, "5 months");
    }

    #[test]
    fn test_long_intervals() {
        let now = now();
        let preview = preview_intervals(
            &card(CardState::Review, 300.0, 0),
            &SchedulerSettings::default(),
            &now,
        );
        assert_eq!(preview.good, "2 years");
    }

    #[test]
    fn test_preview_is_pure() {
        let now = now();
        let settings = settings("1m 10m");
        let card = card(CardState::Review, 12.0, 0);
        let before = card.clone();
        let first = preview_intervals(&card, &settings, &now);
        let second = preview_intervals(&card, &settings, &now);
        assert_eq!(first, second);
        assert_eq!(card, before);
    }

    #[test]
    fn test_serialize_omits_hard_for_new() {
        let now = now();
        let preview = preview_intervals(&Card::new(now.into()), &settings("1m 10m"), &now);
        let json = serde_json::to_string(&preview).unwrap();
        assert_eq!(json, r#"{"again":"1m","good":"1m","easy":"1 day"}"#);
    }
}
