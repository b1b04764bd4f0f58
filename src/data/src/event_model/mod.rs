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

pub mod event;
pub mod events;
pub mod side_effect;
pub mod stack;
pub mod tape;

#[cfg(test)]
mod tests {
    use primitives::identifiers::{PlayerId, TerritoryId};

    use super::events::{EventKind, LevelKind, StackElement};
    use super::stack::EventStack;
    use super::tape::EventTape;

    #[test]
    fn equal_payloads_hash_equal() {
        let a = StackElement::event(EventKind::TroopPlacement {
            player: PlayerId(0),
            territory: TerritoryId(1),
            num_troops: 3,
        });
        let b = StackElement::event(EventKind::TroopPlacement {
            player: PlayerId(0),
            territory: TerritoryId(1),
            num_troops: 3,
        });
        assert_eq!(a.as_event().unwrap(), b.as_event().unwrap());
    }

    #[test]
    fn stack_tracks_depth_and_current_level() {
        let mut stack = EventStack::new();
        assert_eq!(stack.depth(), 0);
        stack.push(StackElement::level(LevelKind::Turn { turn: 0, player: PlayerId(0) }));
        stack.push(StackElement::level(LevelKind::Placement { turn: 0, player: PlayerId(0) }));
        assert_eq!(stack.depth(), 2);
        assert_eq!(
            stack.current_level().unwrap().kind,
            LevelKind::Placement { turn: 0, player: PlayerId(0) }
        );
        stack.pop();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current_level().unwrap().kind, LevelKind::Turn { turn: 0, player: PlayerId(0) });
    }

    #[test]
    fn push_all_preserves_first_returned_on_top() {
        let mut stack = EventStack::new();
        stack.push_all(vec![
            StackElement::event(EventKind::PauseProcessing { delay_seconds: 1 }),
            StackElement::event(EventKind::SystemStep),
        ]);
        assert_eq!(stack.pop().unwrap().as_event().unwrap().kind.clone(), EventKind::PauseProcessing { delay_seconds: 1 });
    }

    #[test]
    fn tape_depth_opens_on_level_and_closes_on_phase_end() {
        let mut tape = EventTape::new();
        tape.push(StackElement::level(LevelKind::Placement { turn: 0, player: PlayerId(0) }));
        tape.push(StackElement::event(EventKind::TroopPlacement {
            player: PlayerId(0),
            territory: TerritoryId(0),
            num_troops: 1,
        }));
        tape.push(StackElement::event(EventKind::PlacementPhaseEnd { turn: 0, player: PlayerId(0) }));
        let depths: Vec<usize> = tape.entries().iter().map(|(_, d)| *d).collect();
        assert_eq!(depths, vec![0, 1, 0]);
    }
}
