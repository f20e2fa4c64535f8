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

pub mod grade;
pub mod preview;
pub mod steps;

use std::fs::read_to_string;
use std::path::Path;

use crate::config::SchedulerSettings;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;

fn load_card(path: &Path) -> Fallible<Card> {
    if !path.exists() {
        return fail(format!("card file does not exist: {}", path.display()));
    }
    let content = read_to_string(path)?;
    let card: Card = serde_json::from_str(&content)?;
    Ok(card)
}

fn load_settings(path: Option<&Path>) -> Fallible<SchedulerSettings> {
    match path {
        Some(path) => SchedulerSettings::load(path),
        None => Ok(SchedulerSettings::default()),
    }
}
