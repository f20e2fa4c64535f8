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
use chrono::Days;
use chrono::Duration;
use chrono::LocalResult;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::Offset;
use chrono::TimeZone;

/// Minutes in one day. Delays at or above this are scheduled by calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// The default hour at which a new study day starts.
pub const DEFAULT_ROLLOVER_HOUR: u32 = 4;

/// Compute the due time for a (re)learning delay.
///
/// Delays shorter than a day are added to `now` exactly. Longer delays are
/// truncated to whole days, counted from `now`'s date, and pinned to the
/// rollover hour.
pub fn due_from_delay<Tz: TimeZone>(
    minutes: u32,
    now: &DateTime<Tz>,
    rollover_hour: u32,
) -> DateTime<Tz> {
    if minutes >= MINUTES_PER_DAY {
        let days = u64::from(minutes / MINUTES_PER_DAY);
        day_start(now, days, rollover_hour)
    } else {
        let delay = Duration::minutes(i64::from(minutes));
        now.clone()
            .checked_add_signed(delay)
            .unwrap_or_else(|| now.clone())
    }
}

/// Compute the due time for a review interval: `round(days)` days from
/// `now`'s date, at the rollover hour. Negative and NaN intervals count as
/// zero days.
pub fn due_from_interval_days<Tz: TimeZone>(
    days: f64,
    now: &DateTime<Tz>,
    rollover_hour: u32,
) -> DateTime<Tz> {
    // Float to int casts saturate, so infinity becomes `u64::MAX`.
    let days = days.round().max(0.0) as u64;
    day_start(now, days, rollover_hour)
}

/// The rollover instant `days` calendar days after `now`'s date, in `now`'s
/// time zone. Dates past the end of the calendar saturate.
fn day_start<Tz: TimeZone>(now: &DateTime<Tz>, days: u64, rollover_hour: u32) -> DateTime<Tz> {
    let date: NaiveDate = now
        .date_naive()
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX);
    let time = NaiveTime::from_hms_opt(rollover_hour, 0, 0).unwrap_or(NaiveTime::MIN);
    let naive = date.and_time(time);
    let tz = now.timezone();
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // The rollover falls in a DST gap. Apply the offset in effect a
            // day earlier, before the gap, which pushes the wall clock past
            // it.
            let shifted = naive
                .checked_sub_signed(Duration::days(1))
                .and_then(|before| tz.offset_from_local_datetime(&before).earliest())
                .and_then(|offset| {
                    let offset = Duration::seconds(i64::from(offset.fix().local_minus_utc()));
                    naive.checked_sub_signed(offset)
                })
                .unwrap_or(naive);
            tz.from_utc_datetime(&shifted)
        }
    }
}
