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

use data::event_model::events::StackElement;
use data::game_states::game_state::GameState;
use utils::outcome::Value;

/// What a [RuleEngine] did with the event it was offered.
pub enum EngineOutcome {
    /// This engine does not handle this kind of element; try the next one.
    Decline,
    /// This engine handled the element. The contained elements, if any, are
    /// pushed onto the stack with `[0]` ending up on top (processed next).
    Handled(Vec<StackElement>),
}

/// One narrowly scoped slice of the overall rule set.
///
/// The simulation controller offers every popped stack element to each
/// registered engine in turn; the first engine to return anything other than
/// [EngineOutcome::Decline] owns that element for this step.
pub trait RuleEngine: Send + Sync {
    fn name(&self) -> &str;

    fn process(&self, state: &mut GameState, element: &StackElement) -> Value<EngineOutcome>;
}
