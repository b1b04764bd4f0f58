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

use data::game_states::config::SimulationConfig;
use data::game_states::game_state::GameState;
use data::game_states::player::Player;
use data::game_states::territory::Territory;
use primitives::identifiers::{ContinentId, PlayerId, TerritoryId};

/// A fluent builder for small territory maps used in rule engine and
/// determinism tests. Territories and players are created implicitly the
/// first time they are named.
#[derive(Debug, Clone, Default)]
pub struct TestMapBuilder {
    territories: BTreeMap<TerritoryId, Territory>,
    players: BTreeMap<PlayerId, Player>,
    names: BTreeMap<String, TerritoryId>,
}

impl TestMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a territory on continent 0, owned by no one with 0 armies,
    /// unless later overridden by [Self::owner] and [Self::armies].
    pub fn territory(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let id = TerritoryId(self.territories.len() as u32);
        self.territories.insert(id, Territory::new(id, name.clone(), ContinentId(0)));
        self.names.insert(name, id);
        self
    }

    pub fn adjacency(mut self, a: &str, b: &str) -> Self {
        let a_id = self.id(a);
        let b_id = self.id(b);
        self.territories.get_mut(&a_id).expect("unknown territory").adjacent.insert(b_id);
        self.territories.get_mut(&b_id).expect("unknown territory").adjacent.insert(a_id);
        self
    }

    pub fn owner(mut self, territory: &str, player: PlayerId) -> Self {
        let id = self.id(territory);
        self.players.entry(player).or_insert_with(|| Player::new(player, format!("Player {}", player.0)));
        self.territories.get_mut(&id).expect("unknown territory").owner = Some(player);
        self
    }

    pub fn armies(mut self, territory: &str, armies: u32) -> Self {
        let id = self.id(territory);
        self.territories.get_mut(&id).expect("unknown territory").armies = armies;
        self
    }

    fn id(&self, name: &str) -> TerritoryId {
        *self.names.get(name).unwrap_or_else(|| panic!("unknown territory {name}"))
    }

    pub fn build(self, starting_player: PlayerId, config: &SimulationConfig) -> GameState {
        GameState::new(self.territories, self.players, starting_player, config)
    }
}
