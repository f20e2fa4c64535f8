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

//! Short human-readable labels for intervals, as shown on rating buttons.

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1440.0;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Format a delay given in minutes. Delays of a day or more are formatted as
/// days.
pub fn format_minutes(minutes: f64) -> String {
    if minutes < 1.0 {
        "<1m".to_string()
    } else if minutes.round() < MINUTES_PER_HOUR {
        format!("{}m", minutes.round())
    } else if (minutes / MINUTES_PER_HOUR).round() < 24.0 {
        format!("{}h", (minutes / MINUTES_PER_HOUR).round())
    } else {
        format_days(minutes / MINUTES_PER_DAY)
    }
}

/// Format an interval given in days.
pub fn format_days(days: f64) -> String {
    let rounded = days.round();
    if rounded < DAYS_PER_MONTH {
        return plural(rounded.max(1.0), "day");
    }
    let months = (days / DAYS_PER_MONTH).round();
    if months < 12.0 {
        return plural(months, "month");
    }
    plural((days / DAYS_PER_YEAR).round().max(1.0), "year")
}

fn plural(n: f64, unit: &str) -> String {
    if n == 1.0 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
