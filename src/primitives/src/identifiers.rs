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

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Identifies a player within a [crate::identifiers::PlayerId]-keyed table.
///
/// Players are numbered in turn order starting from zero, matching the order
/// in which they take their first turn.
#[derive(
    Display, From, Into, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize,
)]
pub struct PlayerId(pub u32);

/// Identifies a territory on the map.
///
/// Territory ids are assigned by the map loader and are stable for the
/// lifetime of a run; they are never reused or renumbered.
#[derive(
    Display, From, Into, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize,
)]
pub struct TerritoryId(pub u32);

/// Identifies a continent grouping of territories.
///
/// Continents are out of scope for the kernel's rule engines (no
/// continent-bonus reinforcement is modeled) but the id survives on
/// [crate::identifiers::TerritoryId] metadata because map data carries it.
#[derive(
    Display, From, Into, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize,
)]
pub struct ContinentId(pub u32);
