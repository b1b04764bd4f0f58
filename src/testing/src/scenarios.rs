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

use data::game_states::config::SimulationConfig;
use data::game_states::game_state::GameState;
use primitives::identifiers::PlayerId;

use crate::map_builder::TestMapBuilder;

/// Two territories, two players, one shared border. The minimal map on
/// which an attack is legal.
pub fn two_territory_skirmish(config: &SimulationConfig) -> GameState {
    TestMapBuilder::new()
        .territory("Alpha")
        .territory("Beta")
        .adjacency("Alpha", "Beta")
        .owner("Alpha", PlayerId(0))
        .armies("Alpha", 5)
        .owner("Beta", PlayerId(1))
        .armies("Beta", 3)
        .build(PlayerId(0), config)
}

/// Six territories arranged in a ring, three players each controlling an
/// opposite pair. Large enough to exercise multi-round turn order and
/// elimination without combinatorial blowup.
pub fn three_player_ring(config: &SimulationConfig) -> GameState {
    TestMapBuilder::new()
        .territory("T0")
        .territory("T1")
        .territory("T2")
        .territory("T3")
        .territory("T4")
        .territory("T5")
        .adjacency("T0", "T1")
        .adjacency("T1", "T2")
        .adjacency("T2", "T3")
        .adjacency("T3", "T4")
        .adjacency("T4", "T5")
        .adjacency("T5", "T0")
        .owner("T0", PlayerId(0))
        .armies("T0", 4)
        .owner("T1", PlayerId(1))
        .armies("T1", 4)
        .owner("T2", PlayerId(2))
        .armies("T2", 4)
        .owner("T3", PlayerId(0))
        .armies("T3", 4)
        .owner("T4", PlayerId(1))
        .armies("T4", 4)
        .owner("T5", PlayerId(2))
        .armies("T5", 4)
        .build(PlayerId(0), config)
}
