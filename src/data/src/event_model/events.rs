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

use primitives::identifiers::{PlayerId, TerritoryId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event_model::event::{identity, EVENT_NAMESPACE, LEVEL_NAMESPACE};

/// Reason code for a rejected attack. Fixed by the original rule set; see
/// [crate::event_model::events::EventKind::RejectAttack].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum AttackRejectReason {
    /// T1: the target territory is already owned by the attacking player.
    SameOwner,
    /// T2: fewer than one attacking troop was declared.
    InsufficientAttackers,
    /// T3: the declared source territory is not owned by the acting player.
    NotOwner,
    /// T4: committing the declared troops would leave the source empty.
    WouldEmptySource,
    /// T5: the source territory does not hold enough troops to commit.
    InsufficientTroops,
}

/// A scope-boundary marker pushed and popped around a player's phase.
///
/// Levels never trigger engine processing themselves; they only bound the
/// lifetime of the intent/resolution events nested within them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum LevelKind {
    /// Encloses an entire player turn, from reinforcement through movement.
    Turn { turn: u32, player: PlayerId },
    Placement { turn: u32, player: PlayerId },
    Attack { turn: u32, player: PlayerId },
    Movement { turn: u32, player: PlayerId },
}

/// An immutable scope marker with a stable, content-derived identity.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Level {
    pub kind: LevelKind,
    id: Uuid,
}

impl Level {
    pub fn new(kind: LevelKind) -> Self {
        Self { kind, id: identity(LEVEL_NAMESPACE, &kind) }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Level {}

impl std::hash::Hash for Level {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// One concrete event payload. Every variant maps one-to-one to a Python
/// event class in the system this kernel reimplements; grouping them in a
/// single tagged union recovers compile-time field typing in place of a
/// runtime attribute dictionary.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum EventKind {
    /// Bootstrap event pushed once at the start of a run.
    Game,

    // --- Intent events, produced by agents or engines ---
    TroopPlacement { player: PlayerId, territory: TerritoryId, num_troops: u32 },
    AttackOnTerritory { player: PlayerId, from: TerritoryId, to: TerritoryId, attacking_troops: u32 },
    MovementOfTroops { player: PlayerId, from: TerritoryId, to: TerritoryId, moving_troops: u32 },

    // --- Phase-end signals, consumed by the Phase/Turn Engine ---
    PlacementPhaseEnd { turn: u32, player: PlayerId },
    AttackPhaseEnd { turn: u32, player: PlayerId },
    MovementPhaseEnd { turn: u32, player: PlayerId },
    /// `delayed` is set once the Delay Engine has already turned this event
    /// into a [EventKind::PauseProcessing] pair, so it is not paused twice.
    AgentTurnEnd { turn: u32, player: PlayerId, delayed: bool },

    // --- Side-effect events. See [crate::event_model::side_effect]. ---
    /// Adjusts a territory's army count by `delta` (positive or negative).
    AdjustArmies { territory: TerritoryId, delta: i32 },
    /// Adjusts the current player's placement credit pool by `delta`.
    AdjustPlacementCredits { delta: i32 },
    /// Marker consumed by the Reinforcement Engine: compute this player's
    /// credit grant and emit [EventKind::SetPlacementCredits].
    UpdateReinforcements { player: PlayerId },
    /// The side-effect counterpart of [EventKind::UpdateReinforcements]: sets
    /// placement credits to a freshly computed reinforcement amount.
    SetPlacementCredits { amount: u32, previous: u32 },
    /// Zeroes placement credits at the end of the placement phase.
    ClearReinforcements { previous: u32 },
    /// Applies combat losses to the defending or attacking side's territory.
    Casualties { territory: TerritoryId, losses: u32 },
    /// Transfers ownership of a conquered territory to the attacker.
    CaptureTerritory {
        territory: TerritoryId,
        new_owner: PlayerId,
        previous_owner: Option<PlayerId>,
        previous_armies: u32,
        moved_armies: u32,
    },

    // --- Combat resolution ---
    Fight { attacker: PlayerId, defender: PlayerId, from: TerritoryId, to: TerritoryId, attacking_troops: u32, defending_troops: u32 },
    ResolveFight {
        attacker_losses: u32,
        defender_losses: u32,
        attacker_survivors: u32,
        defender_survivors: u32,
        captured: bool,
    },

    // --- Rejections ---
    RejectTroopPlacement { player: PlayerId, territory: TerritoryId, reason: String },
    RejectAttack { player: PlayerId, from: TerritoryId, to: TerritoryId, reason: AttackRejectReason },
    RejectTransfer { player: PlayerId, from: TerritoryId, to: TerritoryId, reason: String },

    // --- System control ---
    PauseProcessing { delay_seconds: u32 },
    SystemInterrupt,
    SystemResume,
    SystemStep,

    /// Terminal marker appended to the tape immediately before the
    /// controller halts with [utils::outcome::StopCondition::Victory].
    Victory { player: PlayerId },
}

/// An immutable unit of kernel history with a stable, content-derived
/// identity: two events with equal payloads compare and hash equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    id: Uuid,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self { kind, id: identity(EVENT_NAMESPACE, &kind) }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

impl std::hash::Hash for Event {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// Either an [Event] or a [Level]; the only things that can occupy a stack
/// slot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum StackElement {
    Event(Event),
    Level(Level),
}

impl StackElement {
    pub fn event(kind: EventKind) -> Self {
        Self::Event(Event::new(kind))
    }

    pub fn level(kind: LevelKind) -> Self {
        Self::Level(Level::new(kind))
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Self::Event(event) => Some(event),
            Self::Level(_) => None,
        }
    }

    pub fn as_level(&self) -> Option<&Level> {
        match self {
            Self::Level(level) => Some(level),
            Self::Event(_) => None,
        }
    }

    pub fn is_level(&self) -> bool {
        matches!(self, Self::Level(_))
    }
}
