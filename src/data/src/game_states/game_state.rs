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

use std::collections::BTreeMap;

use primitives::identifiers::{PlayerId, TerritoryId};
use primitives::phase::GamePhase;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};
use utils::outcome::Value;
use utils::with_error::WithError;

use crate::event_model::stack::EventStack;
use crate::event_model::tape::EventTape;
use crate::game_states::config::SimulationConfig;
use crate::game_states::player::Player;
use crate::game_states::territory::Territory;

/// The minimum reinforcement grant, regardless of territory count.
pub const MINIMUM_REINFORCEMENTS: u32 = 3;

/// The mutable world a simulation run operates on.
///
/// [EventStack] and [EventTape] live alongside the board/player data they
/// describe; the simulation controller is still the only component that
/// drives transitions, but keeping them co-located avoids threading three
/// separate mutable borrows through every rule engine call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub territories: BTreeMap<TerritoryId, Territory>,
    pub players: BTreeMap<PlayerId, Player>,
    pub current_player: PlayerId,
    pub starting_player: PlayerId,
    pub phase: GamePhase,
    pub total_turns: u32,
    pub placements_left: u32,
    pub winner: Option<PlayerId>,
    pub stack: EventStack,
    pub tape: EventTape,
    #[serde(skip, default = "default_rng")]
    pub rng: Xoshiro256StarStar,
}

fn default_rng() -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(0)
}

impl GameState {
    pub fn new(
        territories: BTreeMap<TerritoryId, Territory>,
        players: BTreeMap<PlayerId, Player>,
        starting_player: PlayerId,
        config: &SimulationConfig,
    ) -> Self {
        let mut state = Self {
            territories,
            players,
            current_player: starting_player,
            starting_player,
            phase: GamePhase::Placement,
            total_turns: 0,
            placements_left: 0,
            winner: None,
            stack: EventStack::new(),
            tape: EventTape::new(),
            rng: Xoshiro256StarStar::seed_from_u64(config.seed),
        };
        state.update_statistics();
        state
    }

    pub fn territory(&self, id: TerritoryId) -> Value<&Territory> {
        self.territories.get(&id).with_error(|| format!("Unknown territory {id}"))
    }

    pub fn territory_mut(&mut self, id: TerritoryId) -> Value<&mut Territory> {
        self.territories.get_mut(&id).with_error(|| format!("Unknown territory {id}"))
    }

    pub fn player(&self, id: PlayerId) -> Value<&Player> {
        self.players.get(&id).with_error(|| format!("Unknown player {id}"))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Value<&mut Player> {
        self.players.get_mut(&id).with_error(|| format!("Unknown player {id}"))
    }

    /// `max(3, floor(territory_count / 3))`.
    pub fn calculate_reinforcements(&self, player: PlayerId) -> u32 {
        let count = self.players.get(&player).map(Player::territory_count).unwrap_or(0) as u32;
        MINIMUM_REINFORCEMENTS.max(count / 3)
    }

    /// Recomputes every player's `territories_controlled` and `total_armies`
    /// from territory ownership, and marks players with no territories
    /// inactive. Not maintained transactionally: callers invoke this after a
    /// batch of ownership changes (typically once per captured territory).
    pub fn update_statistics(&mut self) {
        for player in self.players.values_mut() {
            player.territories_controlled.clear();
            player.total_armies = 0;
        }
        for territory in self.territories.values() {
            if let Some(owner) = territory.owner {
                if let Some(player) = self.players.get_mut(&owner) {
                    player.territories_controlled.insert(territory.id);
                    player.total_armies += territory.armies;
                }
            }
        }
        for player in self.players.values_mut() {
            player.is_active = !player.is_eliminated();
        }
    }

    /// Advances `current_player` to the next active player, wrapping past
    /// inactive ones with a bounded loop (the source language's equivalent
    /// recurses once per skipped player, which is unbounded when only one
    /// player remains active).
    pub fn advance_player(&mut self) {
        let ids: Vec<PlayerId> = self.players.keys().copied().collect();
        if ids.is_empty() {
            return;
        }
        let current_index = ids.iter().position(|id| *id == self.current_player).unwrap_or(0);
        for offset in 1..=ids.len() {
            let next_index = (current_index + offset) % ids.len();
            let candidate = ids[next_index];
            if self.players.get(&candidate).map(|p| p.is_active).unwrap_or(false) {
                if candidate == self.starting_player {
                    self.total_turns += 1;
                }
                self.current_player = candidate;
                return;
            }
        }
        // No active player remains; leave current_player unchanged, the
        // victory check below will have already halted the run in practice.
    }

    /// A player wins when they are the sole active player, or when they own
    /// every territory on the map.
    pub fn check_victory_condition(&mut self) -> Option<PlayerId> {
        let active: Vec<PlayerId> = self.players.values().filter(|p| p.is_active).map(|p| p.id).collect();
        if active.len() == 1 {
            self.winner = Some(active[0]);
            return self.winner;
        }
        if !self.territories.is_empty() {
            let first_owner = self.territories.values().next().and_then(|t| t.owner);
            if let Some(owner) = first_owner {
                if self.territories.values().all(|t| t.owner == Some(owner)) {
                    self.winner = Some(owner);
                    return self.winner;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use primitives::identifiers::ContinentId;

    use super::*;
    use crate::game_states::config::SimulationConfig;

    fn two_player_three_territory_state() -> GameState {
        let mut territories = BTreeMap::new();
        for i in 0..3u32 {
            let mut territory = Territory::new(TerritoryId(i), format!("T{i}"), ContinentId(0));
            territory.owner = Some(PlayerId(i % 2));
            territory.armies = 1;
            territories.insert(TerritoryId(i), territory);
        }
        let mut players = BTreeMap::new();
        players.insert(PlayerId(0), Player::new(PlayerId(0), "P0"));
        players.insert(PlayerId(1), Player::new(PlayerId(1), "P1"));
        GameState::new(territories, players, PlayerId(0), &SimulationConfig::default())
    }

    #[test]
    fn calculate_reinforcements_has_a_floor_of_three() {
        let state = two_player_three_territory_state();
        assert_eq!(state.calculate_reinforcements(PlayerId(0)), 3);
    }

    #[test]
    fn advance_player_skips_inactive_players_without_recursion() {
        let mut state = two_player_three_territory_state();
        state.players.get_mut(&PlayerId(1)).unwrap().is_active = false;
        state.advance_player();
        assert_eq!(state.current_player, PlayerId(0));
        assert_eq!(state.total_turns, 1);
    }

    #[test]
    fn check_victory_condition_detects_sole_owner_of_all_territories() {
        let mut state = two_player_three_territory_state();
        for territory in state.territories.values_mut() {
            territory.owner = Some(PlayerId(0));
        }
        state.update_statistics();
        assert_eq!(state.check_victory_condition(), Some(PlayerId(0)));
    }
}
