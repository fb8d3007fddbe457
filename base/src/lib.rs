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

//! Shared data types and move generation found across the entire Raptor
//! engine. This crate performs no file I/O and knows nothing about UCI,
//! search, or the NNUE weight file format; it is the board-representation
//! foundation that `raptor_engine` builds on.

mod attacks;

mod bitboard;
pub use crate::bitboard::Bitboard;

mod castling;
use castling::CastleRights;

mod color;
pub use color::Color;

mod direction;
use direction::Direction;

mod error;
pub use error::FenError;

mod magic;
pub use magic::MAGIC;

pub mod movegen;

mod moves;
pub use moves::Move;

pub mod nnue;

pub mod perft;

mod piece;
pub use piece::Kind;

mod position;
pub use position::{Position, STARTING_FEN};

mod square;
pub use square::Square;

mod zobrist;
