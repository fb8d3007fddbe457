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

//! Errors produced while constructing a position from untrusted input.

use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Reasons a FEN string (or a move string applied to a position) can be
/// rejected.
pub enum FenError {
    /// Ran out of input before the board section described all 64 squares.
    TruncatedBoard,
    /// A piece character did not match any known piece code.
    UnknownPieceCode,
    /// Expected a field separator (space) but found something else.
    ExpectedSpace,
    /// The side-to-move field was not `w` or `b`.
    BadSideToMove,
    /// The castling-rights field contained an unrecognized character.
    BadCastleRights,
    /// The en-passant field did not name a legal square.
    BadEnPassantSquare,
    /// The halfmove clock field was not a nonnegative integer.
    BadHalfmoveClock,
    /// A side does not have exactly one king.
    WrongNumberOfKings,
    /// A pawn was placed on the first or last rank.
    PawnOnBackRank,
    /// Castling rights are set for a side whose king or rook is not on its
    /// home square.
    InconsistentCastleRights,
    /// The en passant square is set but inconsistent with the side to move
    /// or the pawn structure.
    InconsistentEnPassant,
    /// The side not to move is currently in check, which is impossible.
    OpponentInCheck,
}

impl Display for FenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            FenError::TruncatedBoard => "FEN ended before the board was fully described",
            FenError::UnknownPieceCode => "unrecognized piece character in FEN",
            FenError::ExpectedSpace => "expected a space between FEN fields",
            FenError::BadSideToMove => "side to move must be 'w' or 'b'",
            FenError::BadCastleRights => "unrecognized castling rights character",
            FenError::BadEnPassantSquare => "en passant field is not a legal square",
            FenError::BadHalfmoveClock => "halfmove clock is not a nonnegative integer",
            FenError::WrongNumberOfKings => "each side must have exactly one king",
            FenError::PawnOnBackRank => "a pawn cannot stand on rank 1 or rank 8",
            FenError::InconsistentCastleRights => {
                "castling rights do not match king/rook placement"
            }
            FenError::InconsistentEnPassant => "en passant square is inconsistent with the position",
            FenError::OpponentInCheck => "side not to move is in check",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for FenError {}
