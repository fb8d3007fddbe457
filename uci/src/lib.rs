/*
  Raptor, a UCI-compatible chess engine.
  Copyright (C) 2022 The Raptor Authors (see AUTHORS.md file)

  Raptor is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Raptor is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The UCI text-protocol driver: command parsing, response formatting, and
//! the stdin read-eval-respond loop that sits between a GUI and
//! `raptor_engine::search`. This crate owns the only stdin/stdout I/O in the
//! workspace.

mod command;
mod driver;
mod message;
mod parse;

pub use command::{GoOption, UciCommand};
pub use driver::Driver;
pub use message::{EngineInfo, OptionType, UciMessage};
pub use parse::{parse_line, ParseResult};
