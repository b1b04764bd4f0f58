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

use crate::event_model::events::{Level, StackElement};

/// A LIFO stack of [StackElement]s with O(1) depth tracking on push, and an
/// O(stack size) rescan on pop of a [Level] (level pops are rare compared to
/// event pops, so this is an acceptable tradeoff).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventStack {
    elements: Vec<StackElement>,
    depth: usize,
    current_level: Option<Level>,
}

impl EventStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: StackElement) {
        if let StackElement::Level(level) = &element {
            self.depth += 1;
            self.current_level = Some(*level);
        }
        self.elements.push(element);
    }

    /// Pushes a sequence of elements such that `elements[0]` ends up on top,
    /// i.e. it will be the next element returned by [Self::pop].
    pub fn push_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = StackElement>,
        I::IntoIter: DoubleEndedIterator,
    {
        for element in elements.into_iter().rev() {
            self.push(element);
        }
    }

    pub fn pop(&mut self) -> Option<StackElement> {
        let popped = self.elements.pop()?;
        if popped.is_level() {
            self.depth = self.depth.saturating_sub(1);
            self.current_level = self.elements.iter().rev().find_map(|e| e.as_level().copied());
        }
        Some(popped)
    }

    pub fn peek(&self) -> Option<&StackElement> {
        self.elements.last()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.depth = 0;
        self.current_level = None;
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn current_level(&self) -> Option<Level> {
        self.current_level
    }

    /// Returns an independent copy of the bottom `n` elements.
    pub fn substack(&self, n: usize) -> Vec<StackElement> {
        let n = n.min(self.elements.len());
        self.elements[..n].to_vec()
    }

    /// Returns an independent copy of the top `n` elements, nearest-top first.
    pub fn topstack(&self, n: usize) -> Vec<StackElement> {
        let n = n.min(self.elements.len());
        self.elements[self.elements.len() - n..].iter().rev().cloned().collect()
    }
}
