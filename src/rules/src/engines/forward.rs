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

use data::event_model::events::{LevelKind, StackElement};
use data::game_states::game_state::GameState;
use utils::outcome::{StopCondition, Value};

use crate::engine::{EngineOutcome, RuleEngine};

/// Halts the simulation once `budget` turns have elapsed since the run
/// started.
///
/// The sole engine registered for [LevelKind::Turn] Levels: it either halts
/// the run or swallows the Level so processing continues into the turn.
/// `start_turn` is the turn number the controller was constructed at, so a
/// run resumed partway through a game still gets `budget` turns of its own
/// rather than halting against an absolute turn count.
pub struct ForwardEngine {
    pub budget: Option<u32>,
    pub start_turn: u32,
}

impl RuleEngine for ForwardEngine {
    fn name(&self) -> &str {
        "ForwardEngine"
    }

    fn process(&self, _state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Level(level) = element else {
            return Ok(EngineOutcome::Decline);
        };
        let LevelKind::Turn { turn, .. } = level.kind else {
            return Ok(EngineOutcome::Decline);
        };

        match self.budget {
            Some(budget) if turn.saturating_sub(self.start_turn) >= budget => {
                Err(StopCondition::ForwardBudgetReached)
            }
            _ => Ok(EngineOutcome::Handled(vec![])),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use data::game_states::config::SimulationConfig;
    use data::game_states::player::Player;
    use primitives::identifiers::PlayerId;

    use super::*;

    fn state() -> GameState {
        let players = BTreeMap::from([(PlayerId(0), Player::new(PlayerId(0), "P0"))]);
        GameState::new(BTreeMap::new(), players, PlayerId(0), &SimulationConfig::default())
    }

    #[test]
    fn a_resumed_run_gets_budget_turns_of_its_own() {
        let engine = ForwardEngine { budget: Some(2), start_turn: 4 };
        let mut state = state();
        let under = StackElement::level(LevelKind::Turn { turn: 5, player: PlayerId(0) });
        assert!(matches!(engine.process(&mut state, &under).unwrap(), EngineOutcome::Handled(_)));

        let over = StackElement::level(LevelKind::Turn { turn: 6, player: PlayerId(0) });
        assert!(matches!(engine.process(&mut state, &over), Err(StopCondition::ForwardBudgetReached)));
    }

    #[test]
    fn no_budget_never_halts() {
        let engine = ForwardEngine { budget: None, start_turn: 0 };
        let mut state = state();
        let level = StackElement::level(LevelKind::Turn { turn: 1_000, player: PlayerId(0) });
        assert!(matches!(engine.process(&mut state, &level).unwrap(), EngineOutcome::Handled(_)));
    }
}
