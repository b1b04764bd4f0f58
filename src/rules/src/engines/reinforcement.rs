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

/// Computes a player's reinforcement grant and hands it off to a
/// [EventKind::SetPlacementCredits] side-effect event.
pub struct ReinforcementEngine;

impl RuleEngine for ReinforcementEngine {
    fn name(&self) -> &str {
        "ReinforcementEngine"
    }

    fn process(&self, state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };
        let EventKind::UpdateReinforcements { player } = event.kind else {
            return Ok(EngineOutcome::Decline);
        };

        let amount = state.calculate_reinforcements(player);
        let previous = state.placements_left;
        Ok(EngineOutcome::Handled(vec![StackElement::event(EventKind::SetPlacementCredits {
            amount,
            previous,
        })]))
    }
}
