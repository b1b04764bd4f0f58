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

use ai::agents::create_agent;
use data::game_states::config::{AgentBinding, SimulationConfig};
use rules::controller::SimulationController;
use testing::scenarios;

#[test]
fn game_is_deterministic() {
    let tape = run();
    for _ in 0..100 {
        assert_eq!(tape, run());
    }
}

fn run() -> String {
    let config = SimulationConfig {
        turns: 20,
        seed: 156562599311216480,
        ..SimulationConfig::default()
    };
    let mut state = scenarios::three_player_ring(&config);

    let mut controller = SimulationController::new(Some(config.turns), 0, state.total_turns);
    let binding = AgentBinding { family: "simple".to_string(), strategy: "random".to_string(), attack_probability: 0.5 };
    for player in state.players.keys().copied().collect::<Vec<_>>() {
        controller.bind_agent(player, create_agent(&binding).expect("simple/random is always available"));
    }
    controller.bootstrap(&mut state);

    let _ = controller.run(&mut state);
    state.tape.render()
}
