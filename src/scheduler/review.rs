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
use crate::scheduler::clamp_ease;
use crate::scheduler::in_review;
use crate::scheduler::sanitize_ease;
use crate::types::card::Card;
use crate::types::rating::Rating;

const AGAIN_EASE_PENALTY: f64 = 0.20;
const HARD_EASE_PENALTY: f64 = 0.15;
const EASY_EASE_BONUS: f64 = 0.15;

/// Grade a card in review.
///
/// A lapse resets the interval to the graduating interval but keeps the card
/// in `Review`; it is not moved to `Relearning`. Other ratings grow the
/// interval within `[graduating_interval_days, maximum_interval_days]`.
pub fn grade<Tz: TimeZone>(
    card: &Card,
    rating: Rating,
    settings: &SchedulerSettings,
    now: &DateTime<Tz>,
) -> SchedulingResult {
    let floor = settings.graduating_interval_days;
    let ceiling = settings.maximum_interval_days.max(floor);
    let current = if card.interval_days.is_finite() {
        card.interval_days
    } else {
        log::warn!("Interval {} is not finite, using {floor}.", card.interval_days);
        floor
    };
    let grown = |interval: f64| interval.round().max(floor).min(ceiling);
    let stored = sanitize_ease(card.ease);
    let (ease, interval, lapses) = match rating {
        Rating::Again => {
            let ease = clamp_ease(stored - AGAIN_EASE_PENALTY);
            (ease, floor, card.lapses.saturating_add(1))
        }
        Rating::Hard => {
            let ease = clamp_ease(stored - HARD_EASE_PENALTY);
            let interval = grown(current * settings.hard_interval);
            (ease, interval, card.lapses)
        }
        Rating::Good => (stored, grown(current * stored), card.lapses),
        Rating::Easy => {
            let ease = clamp_ease(stored + EASY_EASE_BONUS);
            let interval = grown(current * ease * settings.easy_bonus);
            (ease, interval, card.lapses)
        }
    };
    let reps = card.reps.saturating_add(1);
    in_review(interval, Counters { ease, reps, lapses }, settings, now)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use crate::config::SchedulerSettings;
    use crate::scheduler::MAX_EASE;
    use crate::scheduler::MIN_EASE;
    use crate::scheduler::grade_card;
    use crate::scheduler::tests::now;
    use crate::scheduler::tests::review_card;
    use crate::scheduler::tests::tomorrow_at_rollover;
    use crate::types::card_state::CardState;
    use crate::types::rating::Rating;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_lapse() {
        let now = now();
        let settings = SchedulerSettings::default();
        let result = grade_card(&review_card(10.0, 2.5), Rating::Again, &settings, &now);
        assert_eq!(result.state, CardState::Review);
        assert!(close(result.ease, 2.3));
        assert_eq!(result.lapses, 1);
        assert_eq!(result.interval_days, settings.graduating_interval_days);
        assert_eq!(result.due_at, tomorrow_at_rollover());
        assert_eq!(result.reps, 6);
    }

    #[test]
    fn test_lapse_ease_floor() {
        let now = now();
        let settings = SchedulerSettings::default();
        let result = grade_card(&review_card(10.0, 1.4), Rating::Again, &settings, &now);
        assert_eq!(result.ease, MIN_EASE);
    }

    #[test]
    fn test_hard() {
        let now = now();
        let settings = SchedulerSettings::default();
        let result = grade_card(&review_card(10.0, 2.5), Rating::Hard, &settings, &now);
        assert_eq!(result.state, CardState::Review);
        assert!(close(result.ease, 2.35));
        // 10 * 1.2
        assert_eq!(result.interval_days, 12.0);
        assert_eq!(result.lapses, 0);
        assert_eq!(result.reps, 6);
    }

    #[test]
    fn test_hard_factor_can_shrink() {
        let now = now();
        let settings = SchedulerSettings {
            hard_interval: 0.5,
            ..SchedulerSettings::default()
        };
        let result = grade_card(&review_card(10.0, 2.5), Rating::Hard, &settings, &now);
        assert_eq!(result.interval_days, 5.0);
    }

    #[test]
    fn test_good() {
        let now = now();
        let settings = SchedulerSettings::default();
        let result = grade_card(&review_card(10.0, 2.5), Rating::Good, &settings, &now);
        assert_eq!(result.ease, 2.5);
        assert_eq!(result.interval_days, 25.0);
        let expected = now.date_naive() + Duration::days(25);
        assert_eq!(result.due_at.in_zone(now.offset()).date_naive(), expected);
    }

    #[test]
    fn test_good_rounds() {
        let now = now();
        let settings = SchedulerSettings::default();
        // 3 * 2.3 = 6.9
        let result = grade_card(&review_card(3.0, 2.3), Rating::Good, &settings, &now);
        assert_eq!(result.interval_days, 7.0);
    }

    #[test]
    fn test_easy() {
        let now = now();
        let settings = SchedulerSettings::default();
        let result = grade_card(&review_card(10.0, 2.5), Rating::Easy, &settings, &now);
        assert!(close(result.ease, 2.65));
        // 10 * 2.65 * 1.3 = 34.45
        assert_eq!(result.interval_days, 34.0);
    }

    #[test]
    fn test_easy_ease_ceiling() {
        let now = now();
        let settings = SchedulerSettings::default();
        let result = grade_card(&review_card(10.0, 2.95), Rating::Easy, &settings, &now);
        assert_eq!(result.ease, MAX_EASE);
        // 10 * 3.0 * 1.3
        assert_eq!(result.interval_days, 39.0);
    }

    #[test]
    fn test_interval_never_below_floor() {
        let now = now();
        let settings = SchedulerSettings {
            graduating_interval_days: 2.0,
            hard_interval: 0.1,
            ..SchedulerSettings::default()
        };
        for interval in [0.0, 0.4, 1.0, 2.0, 3.0, 50.0] {
            for ease in [MIN_EASE, 2.5, MAX_EASE] {
                for rating in [Rating::Hard, Rating::Good, Rating::Easy] {
                    let result =
                        grade_card(&review_card(interval, ease), rating, &settings, &now);
                    assert!(result.interval_days >= settings.graduating_interval_days);
                }
            }
        }
    }

    #[test]
    fn test_interval_grows_on_good() {
        let now = now();
        let settings = SchedulerSettings::default();
        let mut card = review_card(1.0, 2.5);
        let mut intervals = Vec::new();
        for _ in 0..5 {
            card = grade_card(&card, Rating::Good, &settings, &now).into_card();
            intervals.push(card.interval_days);
        }
        // 1 * 2.5 = 2.5 rounds to 3, then 7.5 to 8, 20, 50, 125.
        assert_eq!(intervals, vec![3.0, 8.0, 20.0, 50.0, 125.0]);
    }

    #[test]
    fn test_long_good_streak_is_capped() {
        let now = now();
        let settings = SchedulerSettings::default();
        let mut card = review_card(1.0, 2.5);
        for _ in 0..40 {
            card = grade_card(&card, Rating::Good, &settings, &now).into_card();
            assert!(card.interval_days <= settings.maximum_interval_days);
        }
        assert_eq!(card.interval_days, settings.maximum_interval_days);
        let expected = now.date_naive() + Duration::days(36500);
        assert_eq!(card.due_at.in_zone(now.offset()).date_naive(), expected);
    }

    #[test]
    fn test_huge_stored_interval() {
        let now = now();
        let settings = SchedulerSettings::default();
        for rating in [Rating::Hard, Rating::Good, Rating::Easy] {
            let result = grade_card(&review_card(5.0e7, 2.5), rating, &settings, &now);
            assert_eq!(result.interval_days, settings.maximum_interval_days);
        }
    }

    #[test]
    fn test_non_finite_stored_interval() {
        let now = now();
        let settings = SchedulerSettings::default();
        for interval in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let card = review_card(interval, 2.5);
            let result = grade_card(&card, Rating::Good, &settings, &now);
            // Treated as the graduating interval: 1 * 2.5 rounds to 3.
            assert_eq!(result.interval_days, 3.0);
            let expected = now.date_naive() + Duration::days(3);
            assert_eq!(result.due_at.in_zone(now.offset()).date_naive(), expected);
        }
    }

    #[test]
    fn test_custom_maximum_interval() {
        let now = now();
        let settings = SchedulerSettings {
            maximum_interval_days: 30.0,
            ..SchedulerSettings::default()
        };
        let result = grade_card(&review_card(20.0, 2.5), Rating::Easy, &settings, &now);
        assert_eq!(result.interval_days, 30.0);
        let result = grade_card(&review_card(10.0, 2.5), Rating::Good, &settings, &now);
        assert_eq!(result.interval_days, 25.0);
    }

    #[test]
    fn test_counters_saturate() {
        let now = now();
        let settings = SchedulerSettings::default();
        let mut card = review_card(10.0, 2.5);
        card.reps = u32::MAX;
        card.lapses = u32::MAX;
        let result = grade_card(&card, Rating::Again, &settings, &now);
        assert_eq!(result.reps, u32::MAX);
        assert_eq!(result.lapses, u32::MAX);
    }
}
