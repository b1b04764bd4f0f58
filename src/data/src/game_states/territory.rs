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

use std::collections::BTreeSet;

use primitives::identifiers::{ContinentId, PlayerId, TerritoryId};
use serde::{Deserialize, Serialize};

/// One territory on the map.
///
/// Adjacency and ownership are the only facts the kernel's rule engines
/// consult; geometry (vertices, screen position) lives entirely outside this
/// crate and is never modeled here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    pub continent: ContinentId,
    pub owner: Option<PlayerId>,
    pub armies: u32,
    pub adjacent: BTreeSet<TerritoryId>,
}

impl Territory {
    pub fn new(id: TerritoryId, name: impl Into<String>, continent: ContinentId) -> Self {
        Self {
            id,
            name: name.into(),
            continent,
            owner: None,
            armies: 0,
            adjacent: BTreeSet::new(),
        }
    }

    pub fn is_adjacent_to(&self, other: TerritoryId) -> bool {
        self.adjacent.contains(&other)
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }
}
