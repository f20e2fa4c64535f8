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
use crate::preview::preview_intervals;

pub fn preview_command<Tz: TimeZone>(
    card_path: &Path,
    config: Option<&Path>,
    now: &DateTime<Tz>,
) -> Fallible<()> {
    let settings = load_settings(config)?;
    let card = load_card(card_path)?;
    let preview = preview_intervals(&card, &settings, now);
    let json = serde_json::to_string_pretty(&preview)?;
    println!("{json}");
    Ok(())
}
