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

use crate::event_model::events::{EventKind, StackElement};

/// Classification used to compute a tape entry's indentation depth. Every
/// [crate::event_model::events::Level] push opens a branch; the matching
/// phase-end (or turn-end) event closes it. Everything else inherits the
/// currently open depth.
enum DepthClass {
    Open,
    Close,
    Inherit,
}

fn classify(element: &StackElement) -> DepthClass {
    match element {
        StackElement::Level(_) => DepthClass::Open,
        StackElement::Event(event) => match event.kind {
            EventKind::PlacementPhaseEnd { .. }
            | EventKind::AttackPhaseEnd { .. }
            | EventKind::MovementPhaseEnd { .. }
            | EventKind::AgentTurnEnd { .. } => DepthClass::Close,
            _ => DepthClass::Inherit,
        },
    }
}

/// An append-only record of every element popped from the [super::stack::EventStack],
/// in processing order, each tagged with the nesting depth it was appended at.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventTape {
    entries: Vec<(StackElement, usize)>,
    depth: usize,
}

impl EventTape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element`, recomputing its depth from the paired-hierarchy
    /// classification above. This is the tape's only mutator: there is no
    /// `pop`.
    pub fn push(&mut self, element: StackElement) {
        let recorded_depth = match classify(&element) {
            DepthClass::Open => {
                let depth = self.depth;
                self.depth += 1;
                depth
            }
            DepthClass::Close => {
                self.depth = self.depth.saturating_sub(1);
                self.depth
            }
            DepthClass::Inherit => self.depth,
        };
        self.entries.push((element, recorded_depth));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(StackElement, usize)] {
        &self.entries
    }

    /// Renders the tape in reverse chronological order, one entry per line,
    /// indented two spaces per depth unit.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len());
        for (element, depth) in self.entries.iter().rev() {
            let indent = "  ".repeat(*depth);
            let text = match element {
                StackElement::Event(event) => format!("{:?}", event.kind),
                StackElement::Level(level) => format!("{:?}", level.kind),
            };
            lines.push(format!("{indent}{text}"));
        }
        lines.join("\n")
    }
}
