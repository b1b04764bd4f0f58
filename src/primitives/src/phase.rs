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

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// The phase of a single player's turn.
///
/// A turn always visits these phases in order; [GamePhase::Placement] is
/// re-entered for the next player once [GamePhase::Movement] ends.
#[derive(Sequence, Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum GamePhase {
    Placement,
    Attack,
    Movement,
}
