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

//! Piece kinds, which contain no information about their color or current square.

use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
/// The kind of a piece. Contains no information about the location of a
/// piece, or of its color.
pub enum Kind {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Kind {
    /// Total number of piece kinds.
    pub const NUM_TYPES: usize = 6;

    /// Array containing all piece kinds.
    pub const ALL_TYPES: [Kind; Kind::NUM_TYPES] = [
        Kind::Pawn,
        Kind::Knight,
        Kind::Bishop,
        Kind::Rook,
        Kind::Queen,
        Kind::King,
    ];

    /// Array containing the kinds a pawn may promote to.
    pub const PROMOTE_TYPES: [Kind; 4] = [Kind::Knight, Kind::Bishop, Kind::Rook, Kind::Queen];

    /// Array containing piece kinds which are not pawns.
    pub const NON_PAWN_TYPES: [Kind; Kind::NUM_TYPES - 1] = [
        Kind::Knight,
        Kind::Bishop,
        Kind::Rook,
        Kind::Queen,
        Kind::King,
    ];

    /// Array containing piece kinds which are not kings.
    pub const NON_KING_TYPES: [Kind; Kind::NUM_TYPES - 1] = [
        Kind::Pawn,
        Kind::Knight,
        Kind::Bishop,
        Kind::Rook,
        Kind::Queen,
    ];

    /// Get the FEN code of this piece kind as an uppercase string.
    pub const fn code(self) -> &'static str {
        match self {
            Kind::Pawn => "P",
            Kind::Knight => "N",
            Kind::Bishop => "B",
            Kind::Rook => "R",
            Kind::Queen => "Q",
            Kind::King => "K",
        }
    }

    /// Given a FEN character, convert it to a piece kind. Must be uppercase.
    pub const fn from_code(c: char) -> Option<Kind> {
        match c {
            'P' => Some(Kind::Pawn),
            'N' => Some(Kind::Knight),
            'B' => Some(Kind::Bishop),
            'R' => Some(Kind::Rook),
            'Q' => Some(Kind::Queen),
            'K' => Some(Kind::King),
            _ => None,
        }
    }

    /// The material value of this kind, in centipawns. Used by MVV-LVA move
    /// ordering and by the NNUE leaf rules as a sanity fallback.
    pub const fn value(self) -> i32 {
        match self {
            Kind::Pawn => 100,
            Kind::Knight => 320,
            Kind::Bishop => 330,
            Kind::Rook => 500,
            Kind::Queen => 900,
            Kind::King => 20_000,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}
