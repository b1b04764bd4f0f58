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

use std::fmt::Debug;

use uuid::Uuid;

/// Namespace for hashing [crate::event_model::events::GameEvent] instances into
/// a stable identity. Matches no external standard; picked once and frozen.
pub const EVENT_NAMESPACE: Uuid = Uuid::from_bytes([
    0x83, 0x56, 0x5e, 0x68, 0x44, 0x00, 0x49, 0x6e, 0xa9, 0xfe, 0x93, 0x2f, 0x80, 0xbc, 0xf8, 0x03,
]);

/// Namespace for hashing [crate::event_model::events::Level] instances.
pub const LEVEL_NAMESPACE: Uuid = Uuid::from_bytes([
    0x38, 0xc0, 0xf2, 0xc1, 0x6e, 0xf3, 0x4d, 0x4b, 0x88, 0x45, 0x7d, 0x2a, 0x37, 0x8b, 0x3a, 0x88,
]);

/// Computes a deterministic identity for an event or level payload.
///
/// Two payloads that render identically via [Debug] hash identically; this is
/// what gives [crate::event_model::events::StackElement] its "equal if equal
/// (name, context)" semantics without needing a separate context dictionary.
pub fn identity(namespace: Uuid, payload: &impl Debug) -> Uuid {
    Uuid::new_v5(&namespace, format!("{payload:?}").as_bytes())
}
