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

/// Validates and resolves [EventKind::MovementOfTroops] intents.
///
/// A legal transfer moves troops between two territories the same player
/// controls, connected by an adjacency, leaving at least one behind.
pub struct MovementEngine;

impl RuleEngine for MovementEngine {
    fn name(&self) -> &str {
        "MovementEngine"
    }

    fn process(&self, state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };
        let EventKind::MovementOfTroops { player, from, to, moving_troops } = event.kind else {
            return Ok(EngineOutcome::Decline);
        };

        let from_territory = state.territory(from)?;
        let to_territory = state.territory(to)?;

        let reason = if !from_territory.is_owned_by(player) || !to_territory.is_owned_by(player) {
            Some("Both territories must be controlled by the moving player".to_string())
        } else if !from_territory.is_adjacent_to(to) {
            Some("Territories are not adjacent".to_string())
        } else if moving_troops < 1 {
            Some("At least one troop must move".to_string())
        } else if moving_troops >= from_territory.armies {
            Some("Transfer would leave the source territory empty".to_string())
        } else {
            None
        };

        if let Some(reason) = reason {
            return Ok(EngineOutcome::Handled(vec![StackElement::event(EventKind::RejectTransfer {
                player,
                from,
                to,
                reason,
            })]));
        }

        Ok(EngineOutcome::Handled(vec![
            StackElement::event(EventKind::AdjustArmies { territory: from, delta: -(moving_troops as i32) }),
            StackElement::event(EventKind::AdjustArmies { territory: to, delta: moving_troops as i32 }),
        ]))
    }
}
