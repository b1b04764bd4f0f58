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

/// Validates and resolves [EventKind::TroopPlacement] intents.
pub struct PlacementEngine;

impl RuleEngine for PlacementEngine {
    fn name(&self) -> &str {
        "PlacementEngine"
    }

    fn process(&self, state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };
        let EventKind::TroopPlacement { player, territory, num_troops } = event.kind else {
            return Ok(EngineOutcome::Decline);
        };

        let reason = if num_troops < 1 {
            Some("At least one troop must be placed")
        } else if !state.territory(territory)?.is_owned_by(player) {
            Some("Player does not own the target territory")
        } else if num_troops > state.placements_left {
            Some("Not enough placement credits remaining")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Ok(EngineOutcome::Handled(vec![StackElement::event(EventKind::RejectTroopPlacement {
                player,
                territory,
                reason: reason.to_string(),
            })]));
        }

        Ok(EngineOutcome::Handled(vec![
            StackElement::event(EventKind::AdjustArmies { territory, delta: num_troops as i32 }),
            StackElement::event(EventKind::AdjustPlacementCredits { delta: -(num_troops as i32) }),
        ]))
    }
}
