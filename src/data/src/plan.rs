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

use serde::{Deserialize, Serialize};

/// An optional descriptor of what an agent is trying to achieve, passed
/// through to `decide_placement`/`decide_attack`/`decide_movement` unchanged.
/// The kernel never inspects or scores a [Goal] itself.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Goal {
    pub description: String,
}

impl Goal {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}
