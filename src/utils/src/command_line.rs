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

use clap::ValueEnum;
use once_cell::sync::OnceCell;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum TracingStyle {
    #[default]
    Forest,
    AggregateTime,
    None,
}

#[derive(Debug)]
pub struct CommandLine {
    pub tracing_style: TracingStyle,
}

pub static FLAGS: OnceCell<CommandLine> = OnceCell::new();

/// Returns the globally configured command line flags.
///
/// Panics if [FLAGS] has not yet been set by the binary entry point.
pub fn flags() -> &'static CommandLine {
    FLAGS.get().expect("Command line flags have not been initialized")
}
