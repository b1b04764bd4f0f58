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

use std::collections::BTreeMap;
use std::time::Instant;

use data::agents::agent::Agent;
use data::event_model::events::{EventKind, LevelKind, StackElement};
use data::game_states::game_state::GameState;
use data::plan::Goal;
use primitives::identifiers::PlayerId;
use utils::outcome::{Outcome, StopCondition};
use utils::{fail, with_error::WithError};

use crate::engine::{EngineOutcome, RuleEngine};
use crate::engines::attack::AttackEngine;
use crate::engines::boot::BootEngine;
use crate::engines::delay::DelayEngine;
use crate::engines::fight::FightEngine;
use crate::engines::forward::ForwardEngine;
use crate::engines::movement::MovementEngine;
use crate::engines::phase_turn::PhaseTurnEngine;
use crate::engines::placement::PlacementEngine;
use crate::engines::reinforcement::ReinforcementEngine;
use crate::engines::side_effect_engine::SideEffectEngine;
use crate::engines::system::SystemEngine;

/// Drives a [GameState] forward one [StackElement] at a time.
///
/// Levels bound to the Placement, Attack, or Movement phase are routed to
/// the bound agent directly; every other element is offered to each
/// registered [RuleEngine] in order until one accepts it. The controller
/// owns no game data itself, only the policy for advancing it.
pub struct SimulationController {
    engines: Vec<Box<dyn RuleEngine>>,
    agents: BTreeMap<PlayerId, Box<dyn Agent>>,
    goals: BTreeMap<PlayerId, Goal>,
}

impl SimulationController {
    /// `delay_seconds` inserts a [DelayEngine] ahead of the turn engine; pass
    /// `0` to skip pausing entirely (the usual choice for tests and
    /// benchmarks, where presentation throttling serves no purpose).
    ///
    /// `start_turn` is the turn the passed-in [GameState] is at when this
    /// controller begins driving it, so `forward_budget` is always spent
    /// relative to this run rather than to the state's absolute turn count.
    pub fn new(forward_budget: Option<u32>, delay_seconds: u32, start_turn: u32) -> Self {
        Self {
            engines: vec![
                Box::new(BootEngine),
                Box::new(ReinforcementEngine),
                Box::new(PlacementEngine),
                Box::new(AttackEngine),
                Box::new(FightEngine),
                Box::new(MovementEngine),
                Box::new(DelayEngine { delay_seconds }),
                Box::new(PhaseTurnEngine),
                Box::new(ForwardEngine { budget: forward_budget, start_turn }),
                Box::new(SideEffectEngine),
                Box::new(SystemEngine),
            ],
            agents: BTreeMap::new(),
            goals: BTreeMap::new(),
        }
    }

    pub fn bind_agent(&mut self, player: PlayerId, agent: Box<dyn Agent>) {
        self.agents.insert(player, agent);
    }

    pub fn set_goal(&mut self, player: PlayerId, goal: Goal) {
        self.goals.insert(player, goal);
    }

    /// Pushes the bootstrap event that starts a fresh run.
    pub fn bootstrap(&self, state: &mut GameState) {
        state.stack.push(StackElement::event(EventKind::Game));
    }

    /// Pops and processes a single [StackElement], appending it to the tape.
    ///
    /// Returns `Ok(())` once the element (and anything it produced) has been
    /// handled, or the [StopCondition] that should end the run.
    pub fn step(&self, state: &mut GameState) -> Outcome {
        let Some(element) = state.stack.pop() else {
            fail!("Stack exhausted without reaching a victory or forward-budget stop condition")
        };

        let result = match &element {
            StackElement::Level(level) => match level.kind {
                LevelKind::Placement { player, .. } => self.dispatch_agent(state, player, &element),
                LevelKind::Attack { player, .. } => self.dispatch_agent(state, player, &element),
                LevelKind::Movement { player, .. } => self.dispatch_agent(state, player, &element),
                LevelKind::Turn { .. } => self.try_engines(state, &element),
            },
            StackElement::Event(_) => self.try_engines(state, &element),
        };

        state.tape.push(element);

        if let Err(StopCondition::Victory(player)) = result {
            state.tape.push(StackElement::event(EventKind::Victory { player: PlayerId(player) }));
        }
        result
    }

    /// Runs [Self::step] until the stack empties or a [StopCondition] fires.
    pub fn run(&self, state: &mut GameState) -> Outcome {
        while !state.stack.is_empty() {
            self.step(state)?;
        }
        utils::outcome::OK
    }

    fn try_engines(&self, state: &mut GameState, element: &StackElement) -> Outcome {
        for engine in &self.engines {
            match engine.process(state, element)? {
                EngineOutcome::Decline => continue,
                EngineOutcome::Handled(produced) => {
                    state.stack.push_all(produced);
                    return utils::outcome::OK;
                }
            }
        }
        fail!("No rule engine handled {element:?}")
    }

    fn dispatch_agent(&self, state: &mut GameState, player: PlayerId, element: &StackElement) -> Outcome {
        let StackElement::Level(level) = element else {
            fail!("dispatch_agent called with a non-Level element")
        };

        let agent = self.agents.get(&player).with_error(|| format!("No agent bound for player {player}"))?;
        let goal = self.goals.get(&player);

        let started = Instant::now();
        let mut rng = state.rng.clone();
        let (intents, phase_end): (Vec<EventKind>, EventKind) = match level.kind {
            LevelKind::Placement { turn, player } => (
                agent.decide_placement(state, player, goal, &mut rng),
                EventKind::PlacementPhaseEnd { turn, player },
            ),
            LevelKind::Attack { turn, player } => (
                agent.decide_attack(state, player, goal, &mut rng),
                EventKind::AttackPhaseEnd { turn, player },
            ),
            LevelKind::Movement { turn, player } => (
                agent.decide_movement(state, player, goal, &mut rng),
                EventKind::MovementPhaseEnd { turn, player },
            ),
            LevelKind::Turn { .. } => fail!("dispatch_agent does not handle Turn levels"),
        };
        let elapsed = started.elapsed();
        state.rng = rng;

        let mut produced: Vec<StackElement> = intents.into_iter().map(StackElement::event).collect();
        produced.push(StackElement::event(phase_end));

        state.stack.push_all(produced);
        state.player_mut(player)?.agent_runtime += elapsed;
        utils::outcome::OK
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use data::event_model::events::EventKind;
    use data::game_states::config::SimulationConfig;
    use data::game_states::game_state::GameState;
    use data::game_states::player::Player;
    use data::game_states::territory::Territory;
    use data::plan::Goal;
    use primitives::identifiers::{ContinentId, PlayerId, TerritoryId};

    use super::*;

    struct PassiveAgent;

    impl Agent for PassiveAgent {
        fn name(&self) -> &str {
            "passive"
        }

        fn decide_placement(
            &self,
            _state: &GameState,
            _player: PlayerId,
            _goal: Option<&Goal>,
            _rng: &mut rand_xoshiro::Xoshiro256StarStar,
        ) -> Vec<EventKind> {
            Vec::new()
        }

        fn decide_attack(
            &self,
            _state: &GameState,
            _player: PlayerId,
            _goal: Option<&Goal>,
            _rng: &mut rand_xoshiro::Xoshiro256StarStar,
        ) -> Vec<EventKind> {
            Vec::new()
        }

        fn decide_movement(
            &self,
            _state: &GameState,
            _player: PlayerId,
            _goal: Option<&Goal>,
            _rng: &mut rand_xoshiro::Xoshiro256StarStar,
        ) -> Vec<EventKind> {
            Vec::new()
        }
    }

    fn two_player_state() -> GameState {
        let mut territories = BTreeMap::new();
        for i in 0..2u32 {
            let mut territory = Territory::new(TerritoryId(i), format!("T{i}"), ContinentId(0));
            territory.owner = Some(PlayerId(i));
            territory.armies = 1;
            territories.insert(TerritoryId(i), territory);
        }
        let mut players = BTreeMap::new();
        players.insert(PlayerId(0), Player::new(PlayerId(0), "P0"));
        players.insert(PlayerId(1), Player::new(PlayerId(1), "P1"));
        let mut state = GameState::new(territories, players, PlayerId(0), &SimulationConfig::default());
        state.update_statistics();
        state
    }

    #[test]
    fn bootstrap_reaches_the_first_placement_level_with_credits_applied() {
        let mut state = two_player_state();
        let mut controller = SimulationController::new(Some(1), 0, 0);
        controller.bind_agent(PlayerId(0), Box::new(PassiveAgent));
        controller.bind_agent(PlayerId(1), Box::new(PassiveAgent));
        controller.bootstrap(&mut state);

        // Game -> Turn Level -> UpdateReinforcements -> SetPlacementCredits
        // -> Placement Level (dispatched to the passive agent).
        for _ in 0..5 {
            controller.step(&mut state).unwrap();
        }

        assert_eq!(state.placements_left, 3);
    }

    #[test]
    fn forward_budget_of_zero_halts_before_any_turn_completes() {
        let mut state = two_player_state();
        let mut controller = SimulationController::new(Some(0), 0, 0);
        controller.bind_agent(PlayerId(0), Box::new(PassiveAgent));
        controller.bind_agent(PlayerId(1), Box::new(PassiveAgent));
        controller.bootstrap(&mut state);

        let result = controller.run(&mut state);
        assert!(matches!(result, Err(StopCondition::ForwardBudgetReached)));
    }

    #[test]
    fn forward_budget_is_relative_to_the_turn_the_controller_started_at() {
        let mut state = two_player_state();
        state.total_turns = 4;
        let mut controller = SimulationController::new(Some(2), 0, 4);
        controller.bind_agent(PlayerId(0), Box::new(PassiveAgent));
        controller.bind_agent(PlayerId(1), Box::new(PassiveAgent));
        controller.bootstrap(&mut state);

        let result = controller.run(&mut state);
        assert!(matches!(result, Err(StopCondition::ForwardBudgetReached)));
        assert_eq!(state.total_turns, 6);
    }
}
