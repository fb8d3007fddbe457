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

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An error encountered while running a search.
pub enum SearchError {
    /// [`crate::search::search`] was asked to find a move in a position with
    /// no legal moves (i.e. checkmate or stalemate).
    NoLegalMoves,
    /// Internal signal used to unwind the search tree once the deadline has
    /// passed. Never escapes [`crate::search::search`] itself; the last
    /// completed iteration's result is returned to the caller instead.
    Timeout,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves => write!(f, "no legal moves in the given position"),
            SearchError::Timeout => write!(f, "search deadline elapsed"),
        }
    }
}

impl std::error::Error for SearchError {}

#[derive(Clone, Debug, PartialEq, Eq)]
/// An error encountered while decoding an NNUE weight file.
pub enum NnueError {
    /// The file was shorter than its header claimed.
    Truncated,
    /// The file's magic number did not match [`crate::nnue_file::MAGIC`].
    BadMagic,
    /// The file declared a hidden-layer width that does not match
    /// [`raptor_base::nnue::HIDDEN`].
    WrongHiddenWidth { found: u32 },
    /// An I/O error occurred while reading the file.
    Io(String),
}

impl Display for NnueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NnueError::Truncated => write!(f, "NNUE file ended before its header was satisfied"),
            NnueError::BadMagic => write!(f, "NNUE file is missing the expected magic number"),
            NnueError::WrongHiddenWidth { found } => {
                write!(f, "NNUE file declares hidden width {found}, expected a fixed build-time width")
            }
            NnueError::Io(msg) => write!(f, "I/O error reading NNUE file: {msg}"),
        }
    }
}

impl std::error::Error for NnueError {}

impl From<std::io::Error> for NnueError {
    fn from(e: std::io::Error) -> NnueError {
        NnueError::Io(e.to_string())
    }
}
