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

use data::event_model::events::EventKind;
use data::game_states::game_state::GameState;
use data::game_states::territory::Territory;
use data::plan::Goal;
use primitives::identifiers::{PlayerId, TerritoryId};
use rand::prelude::IteratorRandom;
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::agents::Strategy;

/// A hand-written, non-search-based agent driven by a fixed per-territory
/// heuristic. This is the "simple" agent family described in the external
/// agent plug-in schema.
pub struct SimpleAgent {
    pub strategy: Strategy,
    pub attack_probability: f64,
}

impl SimpleAgent {
    fn owned_territories<'a>(
        &self,
        state: &'a GameState,
        player: PlayerId,
    ) -> impl Iterator<Item = &'a Territory> {
        state.territories.values().filter(move |t| t.is_owned_by(player))
    }

    fn is_frontier(&self, state: &GameState, territory: &Territory, player: PlayerId) -> bool {
        territory.adjacent.iter().any(|id| {
            state.territories.get(id).map(|t| !t.is_owned_by(player)).unwrap_or(false)
        })
    }

    /// Picks the territory that should receive this turn's reinforcements.
    fn placement_target(
        &self,
        state: &GameState,
        player: PlayerId,
        rng: &mut Xoshiro256StarStar,
    ) -> Option<TerritoryId> {
        match self.strategy {
            Strategy::Random => self.owned_territories(state, player).map(|t| t.id).choose(rng),
            Strategy::Defensive => self
                .owned_territories(state, player)
                .filter(|t| self.is_frontier(state, t, player))
                .min_by_key(|t| t.armies)
                .or_else(|| self.owned_territories(state, player).min_by_key(|t| t.armies))
                .map(|t| t.id),
            Strategy::Aggressive => self
                .owned_territories(state, player)
                .max_by_key(|t| t.adjacent.iter().filter(|id| self.enemy_owns(state, **id, player)).count())
                .map(|t| t.id),
        }
    }

    fn enemy_owns(&self, state: &GameState, territory: TerritoryId, player: PlayerId) -> bool {
        state.territories.get(&territory).map(|t| !t.is_owned_by(player) && t.owner.is_some()).unwrap_or(false)
    }

    /// Finds a legal (source, target) attack pair, if the strategy wants to
    /// attack this turn.
    fn attack_candidate(
        &self,
        state: &GameState,
        player: PlayerId,
        rng: &mut Xoshiro256StarStar,
    ) -> Option<(TerritoryId, TerritoryId, u32)> {
        let candidates = self.owned_territories(state, player).filter(|t| t.armies > 1).flat_map(|from| {
            from.adjacent
                .iter()
                .filter_map(|id| state.territories.get(id))
                .filter(|to| !to.is_owned_by(player))
                .map(move |to| (from, to))
        });

        let chosen = match self.strategy {
            Strategy::Random => candidates.choose(rng),
            Strategy::Aggressive => candidates.min_by_key(|(_, to)| to.armies),
            Strategy::Defensive => candidates
                .filter(|(from, to)| from.armies > to.armies * 2)
                .min_by_key(|(_, to)| to.armies),
        }?;

        let (from, to) = chosen;
        let attacking_troops = from.armies - 1;
        Some((from.id, to.id, attacking_troops))
    }

    /// Finds a legal (source, target) transfer pair moving surplus troops
    /// from an interior territory to an adjacent frontier territory.
    fn movement_candidate(&self, state: &GameState, player: PlayerId) -> Option<(TerritoryId, TerritoryId, u32)> {
        let interior = self
            .owned_territories(state, player)
            .filter(|t| t.armies > 1 && !self.is_frontier(state, t, player));

        for source in interior {
            if let Some(target) = source
                .adjacent
                .iter()
                .filter_map(|id| state.territories.get(id))
                .find(|t| t.is_owned_by(player) && self.is_frontier(state, t, player))
            {
                return Some((source.id, target.id, source.armies - 1));
            }
        }
        None
    }

    fn wants_to_attack(&self, rng: &mut Xoshiro256StarStar) -> bool {
        rng.gen_bool(self.attack_probability.clamp(0.0, 1.0))
    }
}

impl data::agents::agent::Agent for SimpleAgent {
    fn name(&self) -> &str {
        match self.strategy {
            Strategy::Random => "simple/random",
            Strategy::Defensive => "simple/defensive",
            Strategy::Aggressive => "simple/aggressive",
        }
    }

    fn decide_placement(
        &self,
        state: &GameState,
        player: PlayerId,
        _goal: Option<&Goal>,
        rng: &mut Xoshiro256StarStar,
    ) -> Vec<EventKind> {
        if state.placements_left == 0 {
            return Vec::new();
        }
        let Some(territory) = self.placement_target(state, player, rng) else {
            return Vec::new();
        };
        vec![EventKind::TroopPlacement { player, territory, num_troops: state.placements_left }]
    }

    fn decide_attack(
        &self,
        state: &GameState,
        player: PlayerId,
        _goal: Option<&Goal>,
        rng: &mut Xoshiro256StarStar,
    ) -> Vec<EventKind> {
        if !self.wants_to_attack(rng) {
            return Vec::new();
        }
        let Some((from, to, attacking_troops)) = self.attack_candidate(state, player, rng) else {
            return Vec::new();
        };
        vec![EventKind::AttackOnTerritory { player, from, to, attacking_troops }]
    }

    fn decide_movement(
        &self,
        state: &GameState,
        player: PlayerId,
        _goal: Option<&Goal>,
        _rng: &mut Xoshiro256StarStar,
    ) -> Vec<EventKind> {
        let Some((from, to, moving_troops)) = self.movement_candidate(state, player) else {
            return Vec::new();
        };
        vec![EventKind::MovementOfTroops { player, from, to, moving_troops }]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use data::game_states::config::SimulationConfig;
    use data::game_states::player::Player;
    use primitives::identifiers::ContinentId;
    use rand::SeedableRng;

    use super::*;

    fn two_player_state() -> GameState {
        let mut territories = BTreeMap::new();
        let mut a = Territory::new(TerritoryId(0), "A", ContinentId(0));
        a.owner = Some(PlayerId(0));
        a.armies = 5;
        let mut b = Territory::new(TerritoryId(1), "B", ContinentId(0));
        b.owner = Some(PlayerId(1));
        b.armies = 1;
        a.adjacent.insert(TerritoryId(1));
        b.adjacent.insert(TerritoryId(0));
        territories.insert(TerritoryId(0), a);
        territories.insert(TerritoryId(1), b);

        let mut players = BTreeMap::new();
        players.insert(PlayerId(0), Player::new(PlayerId(0), "P0"));
        players.insert(PlayerId(1), Player::new(PlayerId(1), "P1"));
        let mut state = GameState::new(territories, players, PlayerId(0), &SimulationConfig::default());
        state.placements_left = 3;
        state.update_statistics();
        state
    }

    #[test]
    fn aggressive_agent_always_attacks_the_weakest_neighbor() {
        let state = two_player_state();
        let agent = SimpleAgent { strategy: Strategy::Aggressive, attack_probability: 1.0 };
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let events = agent.decide_attack(&state, PlayerId(0), None, &mut rng);
        assert_eq!(
            events,
            vec![EventKind::AttackOnTerritory {
                player: PlayerId(0),
                from: TerritoryId(0),
                to: TerritoryId(1),
                attacking_troops: 4,
            }]
        );
    }

    #[test]
    fn placement_spends_the_full_credit_pool_in_one_event() {
        let state = two_player_state();
        let agent = SimpleAgent { strategy: Strategy::Aggressive, attack_probability: 0.5 };
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let events = agent.decide_placement(&state, PlayerId(0), None, &mut rng);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], EventKind::TroopPlacement { num_troops: 3, .. }));
    }

    #[test]
    fn same_seed_produces_the_same_random_strategy_choice() {
        let state = two_player_state();
        let agent = SimpleAgent { strategy: Strategy::Random, attack_probability: 1.0 };
        let mut rng_a = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng_b = Xoshiro256StarStar::seed_from_u64(42);
        let a = agent.decide_attack(&state, PlayerId(0), None, &mut rng_a);
        let b = agent.decide_attack(&state, PlayerId(0), None, &mut rng_b);
        assert_eq!(a, b);
    }
}
