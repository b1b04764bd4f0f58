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
use utils::outcome::Value;

use crate::engine::{EngineOutcome, RuleEngine};

/// Inserts a [EventKind::PauseProcessing] marker ahead of each agent's turn
/// end, so an outer driver can throttle stepping for presentation without
/// the kernel's own step loop ever sleeping.
///
/// Registered ahead of [crate::engines::phase_turn::PhaseTurnEngine] in the
/// chain; re-emits the same `AgentTurnEnd` with `delayed` set so the turn
/// engine still performs the actual advance and this engine does not loop
/// on its own output.
pub struct DelayEngine {
    pub delay_seconds: u32,
}

impl RuleEngine for DelayEngine {
    fn name(&self) -> &str {
        "DelayEngine"
    }

    fn process(&self, _state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };

        match event.kind {
            EventKind::AgentTurnEnd { turn, player, delayed: false } if self.delay_seconds > 0 => {
                Ok(EngineOutcome::Handled(vec![
                    StackElement::event(EventKind::PauseProcessing { delay_seconds: self.delay_seconds }),
                    StackElement::event(EventKind::AgentTurnEnd { turn, player, delayed: true }),
                ]))
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
    fn zero_delay_declines_so_the_turn_engine_advances_immediately() {
        let engine = DelayEngine { delay_seconds: 0 };
        let mut state = state();
        let element = StackElement::event(EventKind::AgentTurnEnd { turn: 0, player: PlayerId(0), delayed: false });
        assert!(matches!(engine.process(&mut state, &element).unwrap(), EngineOutcome::Decline));
    }

    #[test]
    fn nonzero_delay_inserts_a_pause_and_does_not_retrigger_on_the_replay() {
        let engine = DelayEngine { delay_seconds: 2 };
        let mut state = state();
        let element = StackElement::event(EventKind::AgentTurnEnd { turn: 0, player: PlayerId(0), delayed: false });
        let EngineOutcome::Handled(produced) = engine.process(&mut state, &element).unwrap() else {
            panic!("expected Handled");
        };
        assert_eq!(produced.len(), 2);

        let replay = produced[1].clone();
        assert!(matches!(engine.process(&mut state, &replay).unwrap(), EngineOutcome::Decline));
    }
}
