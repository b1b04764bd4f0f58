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

use data::event_model::events::{EventKind, StackElement};
use data::game_states::game_state::GameState;
use rand::Rng;
use utils::outcome::Value;

use crate::engine::{EngineOutcome, RuleEngine};

const MAX_ATTACKER_DICE: u32 = 3;
const MAX_DEFENDER_DICE: u32 = 2;

/// Resolves the full exchange of combat opened by [EventKind::Fight].
///
/// Each round the attacker rolls up to three dice, the defender up to two,
/// both capped by the troops still committed. Dice are compared
/// highest-to-highest, the defender wins every tie, and rounds repeat until
/// one side has no troops left.
pub struct FightEngine;

fn roll_dice(rng: &mut impl Rng, count: u32) -> Vec<u32> {
    let mut dice: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=6)).collect();
    dice.sort_unstable_by(|a, b| b.cmp(a));
    dice
}

impl RuleEngine for FightEngine {
    fn name(&self) -> &str {
        "FightEngine"
    }

    fn process(&self, state: &mut GameState, element: &StackElement) -> Value<EngineOutcome> {
        let StackElement::Event(event) = element else {
            return Ok(EngineOutcome::Decline);
        };
        let EventKind::Fight { attacker, defender, from, to, attacking_troops, defending_troops } =
            event.kind
        else {
            return Ok(EngineOutcome::Decline);
        };

        let mut attacker_remaining = attacking_troops;
        let mut defender_remaining = defending_troops;

        while attacker_remaining > 0 && defender_remaining > 0 {
            let attacker_dice = attacker_remaining.min(MAX_ATTACKER_DICE);
            let defender_dice = defender_remaining.min(MAX_DEFENDER_DICE);
            let attacker_rolls = roll_dice(&mut state.rng, attacker_dice);
            let defender_rolls = roll_dice(&mut state.rng, defender_dice);

            for (a, d) in attacker_rolls.iter().zip(defender_rolls.iter()) {
                if a > d {
                    defender_remaining -= 1;
                } else {
                    attacker_remaining -= 1;
                }
            }
        }

        let attacker_survivors = attacker_remaining;
        let defender_survivors = defender_remaining;
        let attacker_losses = attacking_troops - attacker_survivors;
        let defender_losses = defending_troops - defender_survivors;
        let captured = defender_survivors == 0;

        let mut events = vec![
            StackElement::event(EventKind::ResolveFight {
                attacker_losses,
                defender_losses,
                attacker_survivors,
                defender_survivors,
                captured,
            }),
            StackElement::event(EventKind::Casualties { territory: from, losses: attacker_losses }),
            StackElement::event(EventKind::Casualties { territory: to, losses: defender_losses }),
        ];

        if captured {
            let to_territory = state.territory(to)?;
            events.push(StackElement::event(EventKind::CaptureTerritory {
                territory: to,
                new_owner: attacker,
                previous_owner: Some(defender),
                previous_armies: to_territory.armies - defender_losses,
                moved_armies: attacker_survivors,
            }));
        }

        Ok(EngineOutcome::Handled(events))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use data::game_states::config::SimulationConfig;
    use data::game_states::player::Player;
    use data::game_states::territory::Territory;
    use primitives::identifiers::{ContinentId, PlayerId, TerritoryId};

    use super::*;

    fn state() -> GameState {
        let mut territories = BTreeMap::new();
        let mut from = Territory::new(TerritoryId(0), "From", ContinentId(0));
        from.owner = Some(PlayerId(0));
        let mut to = Territory::new(TerritoryId(1), "To", ContinentId(0));
        to.owner = Some(PlayerId(1));
        to.armies = 8;
        territories.insert(TerritoryId(0), from);
        territories.insert(TerritoryId(1), to);

        let mut players = BTreeMap::new();
        players.insert(PlayerId(0), Player::new(PlayerId(0), "P0"));
        players.insert(PlayerId(1), Player::new(PlayerId(1), "P1"));
        GameState::new(territories, players, PlayerId(0), &SimulationConfig::default())
    }

    #[test]
    fn a_ten_versus_eight_battle_keeps_fighting_past_the_first_exchange() {
        let engine = FightEngine;
        let mut state = state();
        let element = StackElement::event(EventKind::Fight {
            attacker: PlayerId(0),
            defender: PlayerId(1),
            from: TerritoryId(0),
            to: TerritoryId(1),
            attacking_troops: 10,
            defending_troops: 8,
        });

        let EngineOutcome::Handled(produced) = engine.process(&mut state, &element).unwrap() else {
            panic!("expected Handled");
        };
        let StackElement::Event(resolve) = &produced[0] else { panic!("expected an event") };
        let EventKind::ResolveFight { attacker_survivors, defender_survivors, .. } = resolve.kind else {
            panic!("expected ResolveFight")
        };
        assert!(attacker_survivors == 0 || defender_survivors == 0);
        assert!(attacker_survivors < 10 || defender_survivors < 8);
    }

    #[test]
    fn a_capture_event_is_present_exactly_when_the_defender_is_wiped_out() {
        let engine = FightEngine;
        let mut state = state();
        state.territories.get_mut(&TerritoryId(1)).unwrap().armies = 1;
        let element = StackElement::event(EventKind::Fight {
            attacker: PlayerId(0),
            defender: PlayerId(1),
            from: TerritoryId(0),
            to: TerritoryId(1),
            attacking_troops: 5,
            defending_troops: 1,
        });

        let EngineOutcome::Handled(produced) = engine.process(&mut state, &element).unwrap() else {
            panic!("expected Handled");
        };
        let StackElement::Event(resolve) = &produced[0] else { panic!("expected an event") };
        let EventKind::ResolveFight { defender_survivors, .. } = resolve.kind else {
            panic!("expected ResolveFight")
        };
        let captured = produced.iter().any(|e| {
            matches!(e, StackElement::Event(event) if matches!(event.kind, EventKind::CaptureTerritory { .. }))
        });
        assert_eq!(captured, defender_survivors == 0);
    }
}
