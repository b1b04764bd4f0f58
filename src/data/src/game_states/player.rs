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
use std::time::Duration;

use primitives::identifiers::{PlayerId, TerritoryId};
use serde::{Deserialize, Serialize};

/// One player's runtime record. `territories_controlled` and `total_armies`
/// are derived data: they are recomputed wholesale by
/// [crate::game_states::game_state::GameState::update_statistics], never
/// maintained incrementally.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_active: bool,
    pub is_human: bool,
    pub territories_controlled: BTreeSet<TerritoryId>,
    pub total_armies: u32,
    #[serde(with = "duration_as_millis")]
    pub agent_runtime: Duration,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
            is_human: false,
            territories_controlled: BTreeSet::new(),
            total_armies: 0,
            agent_runtime: Duration::ZERO,
        }
    }

    pub fn territory_count(&self) -> usize {
        self.territories_controlled.len()
    }

    pub fn is_eliminated(&self) -> bool {
        self.territories_controlled.is_empty()
    }
}

mod duration_as_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
