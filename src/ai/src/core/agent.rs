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

use std::time::{Duration, Instant};

use crate::core::game_state_node::GameStateNode;

/// Bounds placed on a single action-selection call.
#[derive(Debug, Clone, Copy)]
pub struct AgentConfig {
    /// Time at which the agent should complete its move selection.
    pub deadline: Instant,
    /// If set, exceeding `deadline` partway through a search panics instead
    /// of falling back to the best move found so far. Only useful for
    /// benchmark harnesses that want to catch runaway searches.
    pub panic_on_search_timeout: bool,
}

impl AgentConfig {
    pub fn with_deadline(seconds: u64) -> Self {
        Self { deadline: Instant::now() + Duration::from_secs(seconds), panic_on_search_timeout: false }
    }
}

/// An AI Agent for a given game state, any system capable of selecting valid
/// game actions for a player.
pub trait Agent<TNode>: Send
where
    TNode: GameStateNode,
{
    /// Name of this agent, used for debugging.
    fn name(&self) -> &'static str;

    /// Select an action for the current player to take in the `node` game
    /// state. Should attempt to return a result before the [AgentConfig]'s
    /// `deadline`.
    fn pick_action(&mut self, config: AgentConfig, node: &TNode) -> TNode::Action;
}
