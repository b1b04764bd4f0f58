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

use color_eyre::eyre::Report;

/// Reason the simulation controller's step loop stopped running steps.
///
/// Distinct from a rejection: rejections are ordinary events returned from a
/// rule engine and never produce a [StopCondition]. This only captures
/// terminal conditions and unrecoverable invariant violations.
#[derive(Debug)]
pub enum StopCondition {
    /// A player has won the game. Carries the winning player's raw id.
    Victory(u32),
    /// The configured turn budget for a forward-simulation run was reached.
    ForwardBudgetReached,
    /// An external signal asked the run to stop early. The tape up to this
    /// point is preserved, unlike [StopCondition::Error].
    Interrupted,
    /// A fatal invariant violation. Carries the underlying error report.
    Error(Report),
}

/// Result type for operations with no success value, only a potential halt.
pub type Outcome = Result<(), StopCondition>;

/// Result type for operations that produce a value on success.
pub type Value<T> = Result<T, StopCondition>;

/// A constant representing a successful outcome with no halt condition.
pub const OK: Outcome = Ok(());

pub fn victory(player: u32) -> Outcome {
    Err(StopCondition::Victory(player))
}

pub const FORWARD_BUDGET_REACHED: Outcome = Err(StopCondition::ForwardBudgetReached);
