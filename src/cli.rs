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

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use crate::cmd::grade::grade_command;
use crate::cmd::preview::preview_command;
use crate::cmd::steps::steps_command;
use crate::error::Fallible;
use crate::types::rating::Rating;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Grade a card and print its new scheduling state.
    Grade {
        /// Path to the card snapshot, as JSON.
        card: PathBuf,
        /// How well the card was recalled.
        #[arg(value_enum)]
        rating: Rating,
        /// Optional path to a TOML file with scheduler settings.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the interval each rating would give a card.
    Preview {
        /// Path to the card snapshot, as JSON.
        card: PathBuf,
        /// Optional path to a TOML file with scheduler settings.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Parse a learning step specification and print the delays in minutes.
    Steps {
        /// The step specification, e.g. "1m 10m 1d".
        spec: String,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Grade {
            card,
            rating,
            config,
        } => grade_command(&card, rating, config.as_deref(), &Local::now()),
        Command::Preview { card, config } => {
            preview_command(&card, config.as_deref(), &Local::now())
        }
        Command::Steps { spec } => steps_command(&spec),
    }
}
