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

use ron::ser::PrettyConfig;
use utils::outcome::Value;
use utils::with_error::WithError;

use crate::game_states::game_state::GameState;

/// Renders `state` to a human-readable, diffable textual form.
///
/// The rendering omits nothing present on [GameState] itself: there are no
/// UI-only fields on this type to strip, unlike the system this kernel
/// reimplements.
pub fn render(state: &GameState) -> Value<String> {
    ron::ser::to_string_pretty(state, PrettyConfig::default()).with_error(|| "Failed to render game state")
}

/// Reconstructs a [GameState] from text produced by [render].
///
/// Fidelity guarantee: `render(&parse(&render(&s)?)?) == render(&s)?` after
/// calling [GameState::update_statistics] on the reconstructed state (the RNG
/// stream position is not preserved across a round trip, since `rand_xoshiro`
/// state is not serialized).
pub fn parse(text: &str) -> Value<GameState> {
    let mut state: GameState =
        ron::from_str(text).with_error(|| "Failed to parse game state")?;
    state.update_statistics();
    Ok(state)
}
