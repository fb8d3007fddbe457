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

//! Search, evaluation, and the transposition table built on top of
//! `raptor_base`. This crate knows nothing about the UCI wire format; it
//! exposes a plain function call (`search::search`) that the `raptor_uci`
//! driver calls with a deadline and gets a best move back.

pub mod config;
pub mod error;
pub mod eval;
pub mod evaluate;
pub mod nnue_file;
pub mod search;
pub mod time;
pub mod transposition;

pub use config::SearchConfig;
pub use error::{NnueError, SearchError};
pub use eval::Eval;
pub use search::{search, SearchInfo};
pub use transposition::{Bound, TTable};
