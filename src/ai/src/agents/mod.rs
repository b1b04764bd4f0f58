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

pub mod simple_agent;

use data::agents::agent::Agent;
use data::game_states::config::AgentBinding;
use utils::fail;
use utils::outcome::Value;

use crate::agents::simple_agent::SimpleAgent;

/// A per-territory heuristic used by [SimpleAgent].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    Random,
    Defensive,
    Aggressive,
}

impl Strategy {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "random" => Some(Self::Random),
            "defensive" => Some(Self::Defensive),
            "aggressive" => Some(Self::Aggressive),
            _ => None,
        }
    }
}

/// Builds the [Agent] described by a binding from the simulation config.
///
/// Family `"simple"` is the only one implemented directly by this crate.
/// Search-driven families (`"mcts"`, `"bt"`, `"htn"`, `"dpn"`, `"bpmn"`,
/// `"devs"`) are named in the external agent plug-in schema but have no
/// binding to a concrete [GameStateNode](crate::core::game_state_node::GameStateNode)
/// implementation in this crate; requesting one fails the run at startup
/// rather than silently falling back to a different family.
pub fn create_agent(binding: &AgentBinding) -> Value<Box<dyn Agent>> {
    match binding.family.as_str() {
        "simple" => {
            let Some(strategy) = Strategy::parse(&binding.strategy) else {
                fail!("Unknown strategy '{}' for agent family 'simple'", binding.strategy);
            };
            Ok(Box::new(SimpleAgent { strategy, attack_probability: binding.attack_probability }))
        }
        other => {
            fail!("Agent family '{}' is not implemented by this build", other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_random_binding_resolves() {
        let binding = AgentBinding {
            family: "simple".to_string(),
            strategy: "random".to_string(),
            attack_probability: 0.5,
        };
        assert!(create_agent(&binding).is_ok());
    }

    #[test]
    fn unknown_family_is_refused_gracefully() {
        let binding = AgentBinding {
            family: "mcts".to_string(),
            strategy: "random".to_string(),
            attack_probability: 0.5,
        };
        assert!(create_agent(&binding).is_err());
    }

    #[test]
    fn unknown_strategy_is_refused_gracefully() {
        let binding = AgentBinding {
            family: "simple".to_string(),
            strategy: "berserk".to_string(),
            attack_probability: 0.5,
        };
        assert!(create_agent(&binding).is_err());
    }
}
