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
use data::event_model::side_effect;
use data::game_states::game_state::GameState;
use utils::outcome::Value;

use crate::engine::{EngineOutcome, RuleEngine};

/// Applies every side-effect event to `state` as soon as it is popped.
///
/// Registered last among the engines that emit side-effect events, so that
/// validating engines (Placement, Attack, Fight, Movement) get first refusal
/// and the side effects they emit arrive here already legal.
pub struct SideEffectEngine;

fn is_side_effect(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::AdjustArmies { .. }
            | EventKind::AdjustPlacementCredits { .. }
            | EventKind::SetPlacementCredits { .. }
            | EventKind::ClearReinforcements { .. }
            | EventKind::Casualties { .. }
            | EventKind::CaptureTerritory { .. }
    )
}

impl RuleEngine for SideEffectEngine {
    fn name(&self) -> &str {
        "SideEffectEngine"
    }

    fn process(&self, state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };
        if !is_side_effect(&event.kind) {
            return Ok(EngineOutcome::Decline);
        }
        side_effect::apply(&event.kind, state)?;
        Ok(EngineOutcome::Handled(vec![]))
    }
}
