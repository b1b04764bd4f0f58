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

//! Decision-making code: the concrete [Agent](data::agents::agent::Agent)
//! implementations bound to players, plus a generic tree-search framework
//! (`core`/`monte_carlo`/`tree_search`) retained for agent families that
//! plug into it.

pub mod agents;
pub mod core;
pub mod monte_carlo;
pub mod tree_search;
