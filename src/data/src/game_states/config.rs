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

use std::collections::BTreeMap;

use primitives::identifiers::PlayerId;
use serde::{Deserialize, Serialize};

/// Binds a non-human player to an agent implementation.
///
/// Deserialized from the optional agent plug-in file described in the
/// external interfaces of this system; absent entries fall back to
/// [AgentBinding::default].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentBinding {
    #[serde(rename = "type")]
    pub family: String,
    #[serde(rename = "strat")]
    pub strategy: String,
    pub attack_probability: f64,
}

impl Default for AgentBinding {
    fn default() -> Self {
        Self { family: "simple".to_string(), strategy: "random".to_string(), attack_probability: 0.5 }
    }
}

/// Top-level configuration for one simulation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of turns to simulate before the Forward Engine halts the run.
    pub turns: u32,
    /// Probability an attack-capable agent chooses to attack on its turn.
    pub attack_rate: f64,
    /// Seconds the outer driver sleeps between steps, for presentation.
    pub ai_delay_seconds: u32,
    /// Seed for the kernel's single RNG stream.
    pub seed: u64,
    /// Per-player agent bindings, keyed by the player's raw id.
    pub agents: BTreeMap<u32, AgentBinding>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            turns: 100,
            attack_rate: 0.5,
            ai_delay_seconds: 0,
            seed: 0,
            agents: BTreeMap::new(),
        }
    }
}

impl SimulationConfig {
    /// Returns the binding for `player`, falling back to a `simple`/`random`
    /// agent carrying this run's `attack_rate` when the player has no
    /// explicit entry in `agents`.
    pub fn agent_binding(&self, player: PlayerId) -> AgentBinding {
        self.agents
            .get(&player.0)
            .cloned()
            .unwrap_or_else(|| AgentBinding { attack_probability: self.attack_rate, ..AgentBinding::default() })
    }
}
