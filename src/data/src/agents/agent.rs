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

use primitives::identifiers::PlayerId;
use rand_xoshiro::Xoshiro256StarStar;

use crate::event_model::events::EventKind;
use crate::game_states::game_state::GameState;
use crate::plan::Goal;

/// A pluggable decision-maker bound to one player.
///
/// Implementations must not mutate `state` and must not retain it beyond the
/// call; they read a snapshot, and return a finite ordered list of intent
/// events for the Controller to push onto the stack. If the rule engine that
/// eventually processes a returned event rejects it, the agent is not
/// re-invoked for that phase.
///
/// `rng` is the kernel's single seeded stream (advanced by the caller after
/// the call returns), not a fresh OS-seeded generator — any stochastic
/// choice an agent makes must draw from it so that a seeded run is
/// reproducible end to end, matching the Fight Engine's own dice rolls.
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    fn decide_placement(
        &self,
        state: &GameState,
        player: PlayerId,
        goal: Option<&Goal>,
        rng: &mut Xoshiro256StarStar,
    ) -> Vec<EventKind>;

    fn decide_attack(
        &self,
        state: &GameState,
        player: PlayerId,
        goal: Option<&Goal>,
        rng: &mut Xoshiro256StarStar,
    ) -> Vec<EventKind>;

    fn decide_movement(
        &self,
        state: &GameState,
        player: PlayerId,
        goal: Option<&Goal>,
        rng: &mut Xoshiro256StarStar,
    ) -> Vec<EventKind>;
}
