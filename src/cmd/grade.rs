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

use std::path::Path;

use chrono::DateTime;
use chrono::TimeZone;

use crate::cmd::load_card;
use crate::cmd::load_settings;
use crate::error::Fallible;
use crate::scheduler::grade_card;
use crate::types::card::Card;
use crate::types::rating::Rating;

pub fn grade_command<Tz: TimeZone>(
    card_path: &Path,
    rating: Rating,
    config: Option<&Path>,
    now: &DateTime<Tz>,
) -> Fallible<()> {
    let card = grade_file(card_path, rating, config, now)?;
    let json = serde_json::to_string_pretty(&card)?;
    println!("{json}");
    Ok(())
}

fn grade_file<Tz: TimeZone>(
    card_path: &Path,
    rating: Rating,
    config: Option<&Path>,
    now: &DateTime<Tz>,
) -> Fallible<Card> {
    let settings = load_settings(config)?;
    let card = load_card(card_path)?;
    Ok(grade_card(&card, rating, &settings, now).into_card())
}
