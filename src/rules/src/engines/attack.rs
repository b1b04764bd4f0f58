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

use data::event_model::events::{AttackRejectReason, EventKind, StackElement};
use data::game_states::game_state::GameState;
use utils::outcome::Value;

use crate::engine::{EngineOutcome, RuleEngine};

/// Validates [EventKind::AttackOnTerritory] intents and opens combat.
///
/// Legality is checked in T1-T5 order; the first violated rule is the one
/// reported in the rejection, even if several are violated at once.
pub struct AttackEngine;

impl RuleEngine for AttackEngine {
    fn name(&self) -> &str {
        "AttackEngine"
    }

    fn process(&self, state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };
        let EventKind::AttackOnTerritory { player, from, to, attacking_troops } = event.kind else {
            return Ok(EngineOutcome::Decline);
        };

        let from_territory = state.territory(from)?;
        let to_territory = state.territory(to)?;

        let reason = if !from_territory.is_owned_by(player) {
            Some(AttackRejectReason::NotOwner)
        } else if to_territory.is_owned_by(player) {
            Some(AttackRejectReason::SameOwner)
        } else if attacking_troops < 1 {
            Some(AttackRejectReason::InsufficientAttackers)
        } else if attacking_troops > from_territory.armies {
            Some(AttackRejectReason::InsufficientTroops)
        } else if attacking_troops == from_territory.armies {
            Some(AttackRejectReason::WouldEmptySource)
        } else {
            None
        };

        if let Some(reason) = reason {
            return Ok(EngineOutcome::Handled(vec![StackElement::event(EventKind::RejectAttack {
                player,
                from,
                to,
                reason,
            })]));
        }

        let defender = to_territory
            .owner
            .expect("a territory that did not share the attacker's owner has an owner");
        Ok(EngineOutcome::Handled(vec![StackElement::event(EventKind::Fight {
            attacker: player,
            defender,
            from,
            to,
            attacking_troops,
            defending_troops: to_territory.armies,
        })]))
    }
}
