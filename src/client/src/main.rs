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

use std::time::Duration;
use std::{env, fs, process, thread};

use clap::Parser;
use data::event_model::events::{EventKind, StackElement};
use data::game_states::game_state::GameState;
use primitives::identifiers::PlayerId;
use rules::controller::SimulationController;
use tracing::{error, info};
use utils::command_line::TracingStyle;
use utils::outcome::StopCondition;
use utils::{command_line, with_error::WithError};

use crate::command_line_parser::CommandLineParser;

mod command_line_parser;
mod initialize;
mod logging;

fn load_initial_state(
    cli: &CommandLineParser,
    config: &data::game_states::config::SimulationConfig,
) -> utils::outcome::Value<GameState> {
    match &cli.start_state_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_error(|| format!("Failed to read start state file {}", path.display()))?;
            data::persistence::parse(&text)
        }
        None => Ok(testing::scenarios::three_player_ring(config)),
    }
}

fn run(cli: CommandLineParser) -> utils::outcome::Outcome {
    let config = cli.simulation_config()?;
    let mut state = load_initial_state(&cli, &config)?;

    let start_turn = state.total_turns;
    let mut controller = SimulationController::new(Some(config.turns), config.ai_delay_seconds, start_turn);
    for player in state.players.keys().copied().collect::<Vec<PlayerId>>() {
        let binding = config.agent_binding(player);
        let agent = ai::agents::create_agent(&binding)?;
        controller.bind_agent(player, agent);
    }
    controller.bootstrap(&mut state);

    let result = loop {
        if let Err(stop) = controller.step(&mut state) {
            break Err(stop);
        }
        if state.stack.is_empty() {
            break Ok(());
        }
        if let Some((StackElement::Event(event), _)) = state.tape.entries().last() {
            if let EventKind::PauseProcessing { delay_seconds } = event.kind {
                thread::sleep(Duration::from_secs(delay_seconds as u64));
            }
        }
    };

    println!("{}", state.tape.render());

    match result {
        Ok(())
        | Err(StopCondition::Victory(_))
        | Err(StopCondition::ForwardBudgetReached)
        | Err(StopCondition::Interrupted) => {
            info!("Simulation halted cleanly after {} turns", state.total_turns);
            Ok(())
        }
        Err(stop @ StopCondition::Error(_)) => {
            error!(?stop, "Simulation halted on a fatal invariant violation");
            Err(stop)
        }
    }
}

fn main() {
    let cli = CommandLineParser::parse();
    command_line::FLAGS.set(cli.build()).expect("Flags should not be set multiple times");

    match command_line::flags().tracing_style {
        TracingStyle::AggregateTime => {
            tracing_span_tree::span_tree().aggregate(true).enable();
        }
        TracingStyle::Forest => {
            logging::initialize();
        }
        TracingStyle::None => {}
    }

    if env::var("DISABLE_PANIC_HANDLER").is_err() {
        initialize::initialize_panic_handler();
    }

    let commit = env!("VERGEN_GIT_SHA");
    info!(commit, "Starting simulation");

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(_) => process::exit(1),
    }
}
