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
use criterion::{criterion_group, criterion_main, Criterion};
use data::game_states::config::{AgentBinding, SimulationConfig};
use data::game_states::game_state::GameState;
use rules::controller::SimulationController;
use testing::scenarios;

criterion_main!(benches);
criterion_group!(benches, simulation_step);

fn build_state_and_controller() -> (GameState, SimulationController) {
    let config = SimulationConfig { turns: 50, seed: 99, ..SimulationConfig::default() };
    let mut state = scenarios::three_player_ring(&config);
    let mut controller = SimulationController::new(Some(config.turns), 0, state.total_turns);
    let binding = AgentBinding::default();
    for player in state.players.keys().copied().collect::<Vec<_>>() {
        controller.bind_agent(player, create_agent(&binding).expect("simple/random is always available"));
    }
    controller.bootstrap(&mut state);
    (state, controller)
}

pub fn simulation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");
    group.bench_function("run_to_completion", |b| {
        b.iter(|| {
            let (mut state, controller) = build_state_and_controller();
            let _ = controller.run(&mut state);
        })
    });
}
