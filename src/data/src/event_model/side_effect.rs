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

use utils::outcome::Outcome;
use utils::{fail, verify};

use crate::event_model::events::EventKind;
use crate::game_states::game_state::GameState;

/// Applies the effect of a side-effect [EventKind] to `state`.
///
/// Only side-effect variants are handled here; calling this with an intent,
/// rejection, or system event is a programming error.
pub fn apply(kind: &EventKind, state: &mut GameState) -> Outcome {
    match *kind {
        EventKind::AdjustArmies { territory, delta } => {
            let territory = state.territory_mut(territory)?;
            let updated = territory.armies as i64 + delta as i64;
            verify!(updated >= 0, "AdjustArmies would make armies negative");
            territory.armies = updated as u32;
            utils::outcome::OK
        }
        EventKind::AdjustPlacementCredits { delta } => {
            let updated = state.placements_left as i64 + delta as i64;
            verify!(updated >= 0, "AdjustPlacementCredits would make placements_left negative");
            state.placements_left = updated as u32;
            utils::outcome::OK
        }
        EventKind::SetPlacementCredits { amount, .. } => {
            state.placements_left = amount;
            utils::outcome::OK
        }
        EventKind::ClearReinforcements { .. } => {
            state.placements_left = 0;
            utils::outcome::OK
        }
        EventKind::Casualties { territory, losses } => {
            let territory = state.territory_mut(territory)?;
            verify!(territory.armies >= losses, "Casualties would make armies negative");
            territory.armies -= losses;
            utils::outcome::OK
        }
        EventKind::CaptureTerritory { territory, new_owner, moved_armies, .. } => {
            let territory = state.territory_mut(territory)?;
            territory.owner = Some(new_owner);
            territory.armies = moved_armies;
            utils::outcome::OK
        }
        _ => fail!("Not a side-effect event: {kind:?}"),
    }
}

/// Reverts the effect of a side-effect [EventKind], undoing exactly what
/// [apply] did. `revert(apply(state)) == state` for every variant handled
/// here.
pub fn revert(kind: &EventKind, state: &mut GameState) -> Outcome {
    match *kind {
        EventKind::AdjustArmies { territory, delta } => {
            let territory = state.territory_mut(territory)?;
            let updated = territory.armies as i64 - delta as i64;
            verify!(updated >= 0, "Reverting AdjustArmies would make armies negative");
            territory.armies = updated as u32;
            utils::outcome::OK
        }
        EventKind::AdjustPlacementCredits { delta } => {
            let updated = state.placements_left as i64 - delta as i64;
            verify!(updated >= 0, "Reverting AdjustPlacementCredits would make placements_left negative");
            state.placements_left = updated as u32;
            utils::outcome::OK
        }
        EventKind::SetPlacementCredits { previous, .. } => {
            state.placements_left = previous;
            utils::outcome::OK
        }
        EventKind::ClearReinforcements { previous } => {
            state.placements_left = previous;
            utils::outcome::OK
        }
        EventKind::Casualties { territory, losses } => {
            let territory = state.territory_mut(territory)?;
            territory.armies += losses;
            utils::outcome::OK
        }
        EventKind::CaptureTerritory { territory, previous_owner, previous_armies, .. } => {
            let territory = state.territory_mut(territory)?;
            territory.owner = previous_owner;
            territory.armies = previous_armies;
            utils::outcome::OK
        }
        _ => fail!("Not a side-effect event: {kind:?}"),
    }
}
