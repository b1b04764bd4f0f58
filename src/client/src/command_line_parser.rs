// Copyright © spellclash 2024-present
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;
use data::game_states::config::SimulationConfig;
use utils::command_line::{CommandLine, TracingStyle};

use crate::initialize::version;

/// Command-line surface for the `risk-sim` driver.
///
/// Every simulation-shaping flag is optional and overrides the matching
/// field of the config file loaded from `--config-path`, which in turn
/// overrides [SimulationConfig::default]. Flags absent on the command line
/// and absent from the config file fall back to the default.
#[derive(Parser, Debug)]
#[command(version = version(), about)]
pub struct CommandLineParser {
    #[arg(
        long,
        value_enum,
        default_value_t = TracingStyle::Forest,
        help = "Configuration for capturing program traces"
    )]
    pub tracing_style: TracingStyle,

    #[arg(long, help = "Number of turns to simulate before halting")]
    pub turns: Option<u32>,

    #[arg(long, help = "Probability an attack-capable agent attacks on its turn")]
    pub attack_rate: Option<f64>,

    #[arg(long, help = "Seconds to sleep between steps, for presentation")]
    pub ai_delay: Option<u32>,

    #[arg(long, help = "Seed for the kernel's RNG stream")]
    pub seed: Option<u64>,

    #[arg(long, help = "Path to a RON-encoded starting GameState; a fresh state is built otherwise")]
    pub start_state_path: Option<PathBuf>,

    #[arg(long, help = "Path to a TOML file overriding SimulationConfig defaults")]
    pub config_path: Option<PathBuf>,
}

impl CommandLineParser {
    pub fn build(&self) -> CommandLine {
        CommandLine { tracing_style: self.tracing_style }
    }

    /// Loads `--config-path` if present, then applies any flags the user
    /// passed explicitly on top of it.
    pub fn simulation_config(&self) -> utils::outcome::Value<SimulationConfig> {
        use utils::with_error::WithError;

        let mut config = match &self.config_path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_error(|| format!("Failed to read config file {}", path.display()))?;
                toml::from_str(&text).with_error(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };

        if let Some(turns) = self.turns {
            config.turns = turns;
        }
        if let Some(attack_rate) = self.attack_rate {
            config.attack_rate = attack_rate;
        }
        if let Some(ai_delay) = self.ai_delay {
            config.ai_delay_seconds = ai_delay;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        Ok(config)
    }
}
