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

use data::event_model::events::{EventKind, LevelKind, StackElement};
use data::game_states::game_state::GameState;
use utils::outcome::Value;

use crate::engine::{EngineOutcome, RuleEngine};

/// Consumes the bootstrap [EventKind::Game] event and opens the first turn.
pub struct BootEngine;

impl RuleEngine for BootEngine {
    fn name(&self) -> &str {
        "BootEngine"
    }

    fn process(&self, state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };
        if !matches!(event.kind, EventKind::Game) {
            return Ok(EngineOutcome::Decline);
        }

        let turn = state.total_turns;
        let player = state.current_player;

        Ok(EngineOutcome::Handled(vec![
            StackElement::level(LevelKind::Turn { turn, player }),
            StackElement::event(EventKind::UpdateReinforcements { player }),
            StackElement::level(LevelKind::Placement { turn, player }),
        ]))
    }
}
