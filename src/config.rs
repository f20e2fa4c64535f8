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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::calendar::DEFAULT_ROLLOVER_HOUR;
use crate::error::Fallible;
use crate::error::fail;
use crate::scheduler::MAX_EASE;
use crate::scheduler::MIN_EASE;
use crate::steps::LearningSteps;

const DEFAULT_LEARNING_STEPS: &str = "1m 10m";
const DEFAULT_GRADUATING_INTERVAL_DAYS: f64 = 1.0;
const DEFAULT_MAXIMUM_INTERVAL_DAYS: f64 = 36500.0;
const DEFAULT_STARTING_EASE: f64 = 2.5;
const DEFAULT_EASY_BONUS: f64 = 1.3;
const DEFAULT_HARD_INTERVAL: f64 = 1.2;

/// Scheduler configuration. Read-only to the scheduler.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerSettings {
    /// Delays for cards in the `Learning` state.
    pub learning_steps: LearningSteps,
    /// Delays for cards in the `Relearning` state. Falls back to the learning
    /// steps when not set.
    pub relearning_steps: Option<LearningSteps>,
    /// The interval given on graduation, and the floor for review intervals.
    pub graduating_interval_days: f64,
    /// The ceiling for review intervals.
    pub maximum_interval_days: f64,
    /// The ease a card starts with when it first enters learning.
    pub starting_ease: f64,
    /// Extra multiplier on the interval when a review is rated `Easy`.
    pub easy_bonus: f64,
    /// Multiplier on the interval when a review is rated `Hard`.
    pub hard_interval: f64,
    /// The hour at which a new study day starts.
    pub rollover_hour: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            learning_steps: LearningSteps::parse(DEFAULT_LEARNING_STEPS),
            relearning_steps: None,
            graduating_interval_days: DEFAULT_GRADUATING_INTERVAL_DAYS,
            maximum_interval_days: DEFAULT_MAXIMUM_INTERVAL_DAYS,
            starting_ease: DEFAULT_STARTING_EASE,
            easy_bonus: DEFAULT_EASY_BONUS,
            hard_interval: DEFAULT_HARD_INTERVAL,
            rollover_hour: DEFAULT_ROLLOVER_HOUR,
        }
    }
}

impl SchedulerSettings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Fallible<Self> {
        log::debug!("Loading scheduler settings from {}", path.display());
        let content = read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Fallible<Self> {
        let settings: SchedulerSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Fallible<()> {
        if !(MIN_EASE..=MAX_EASE).contains(&self.starting_ease) {
            return fail(format!(
                "starting_ease must be between {MIN_EASE} and {MAX_EASE}, got {}.",
                self.starting_ease
            ));
        }
        if self.easy_bonus.is_nan() || self.easy_bonus <= 0.0 {
            return fail(format!(
                "easy_bonus must be positive, got {}.",
                self.easy_bonus
            ));
        }
        if self.hard_interval.is_nan() || self.hard_interval <= 0.0 {
            return fail(format!(
                "hard_interval must be positive, got {}.",
                self.hard_interval
            ));
        }
        if self.graduating_interval_days.is_nan() || self.graduating_interval_days < 1.0 {
            return fail(format!(
                "graduating_interval_days must be at least 1, got {}.",
                self.graduating_interval_days
            ));
        }
        if !self.maximum_interval_days.is_finite()
            || self.maximum_interval_days < self.graduating_interval_days
        {
            return fail(format!(
                "maximum_interval_days must be finite and at least graduating_interval_days, got {}.",
                self.maximum_interval_days
            ));
        }
        if self.rollover_hour >= 24 {
            return fail(format!(
                "rollover_hour must be less than 24, got {}.",
                self.rollover_hour
            ));
        }
        if self.learning_steps.is_empty() {
            log::warn!("No valid learning steps configured.");
        }
        Ok(())
    }

    /// The steps that apply to a card in the given learning state.
    pub fn steps_for(&self, relearning: bool) -> &LearningSteps {
        match (&self.relearning_steps, relearning) {
            (Some(steps), true) => steps,
            _ => &self.learning_steps,
        }
    }
}
