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

use data::event_model::events::{EventKind, StackElement};
use data::game_states::game_state::GameState;
use utils::outcome::{StopCondition, Value};

use crate::engine::{EngineOutcome, RuleEngine};

/// Handles the driver-control markers: [EventKind::PauseProcessing] and
/// [EventKind::SystemResume]/[EventKind::SystemStep] are pure markers with no
/// state effect, left on the tape for an outer driver to react to.
/// [EventKind::SystemInterrupt] halts the run with [StopCondition::Interrupted]
/// once it reaches the top of the stack.
pub struct SystemEngine;

impl RuleEngine for SystemEngine {
    fn name(&self) -> &str {
        "SystemEngine"
    }

    fn process(&self, _state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };

        match event.kind {
            EventKind::SystemInterrupt => Err(StopCondition::Interrupted),
            EventKind::PauseProcessing { .. } | EventKind::SystemResume | EventKind::SystemStep => {
                Ok(EngineOutcome::Handled(vec![]))
            }
            _ => Ok(EngineOutcome::Decline),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use data::game_states::config::SimulationConfig;
    use data::game_states::player::Player;
    use data::game_states::territory::Territory;
    use primitives::identifiers::{ContinentId, PlayerId, TerritoryId};

    use super::*;

    fn state() -> GameState {
        let mut territories = BTreeMap::new();
        territories.insert(TerritoryId(0), Territory::new(TerritoryId(0), "T0".to_string(), ContinentId(0)));
        let mut players = BTreeMap::new();
        players.insert(PlayerId(0), Player::new(PlayerId(0), "P0"));
        GameState::new(territories, players, PlayerId(0), &SimulationConfig::default())
    }

    #[test]
    fn pause_processing_is_swallowed_without_halting() {
        let mut state = state();
        let element = StackElement::event(EventKind::PauseProcessing { delay_seconds: 3 });
        assert!(matches!(SystemEngine.process(&mut state, &element).unwrap(), EngineOutcome::Handled(produced) if produced.is_empty()));
    }

    #[test]
    fn system_interrupt_halts_the_run() {
        let mut state = state();
        let element = StackElement::event(EventKind::SystemInterrupt);
        assert!(matches!(SystemEngine.process(&mut state, &element), Err(StopCondition::Interrupted)));
    }
}
