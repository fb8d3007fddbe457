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

use raptor_base::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The set of commands the GUI can send the engine over UCI.
pub enum UciCommand {
    /// Sent once at startup. The engine must reply with `id`, then `uciok`.
    Uci,
    /// Turn the engine's stderr diagnostics on or off. Off by default.
    Debug(bool),
    /// Ask the engine to confirm it has processed every prior command.
    /// The engine must reply `readyok`.
    IsReady,
    /// Set an engine option. Only `name Hash value <N>` is recognized; any
    /// other name is accepted and ignored, since a GUI may probe for options
    /// this engine never advertised.
    SetOption { name: String, value: Option<String> },
    /// The next `position` begins a new game: clear the transposition table
    /// rather than let it carry stale entries from an unrelated position
    /// tree into the new one.
    NewGame,
    /// Set up the position to search from: either the FEN given, or the
    /// standard starting position if `fen` is `None`, then play `moves`.
    Position { fen: Option<String>, moves: Vec<String> },
    /// Start a search with the given options.
    Go(Vec<GoOption>),
    /// Stop searching as soon as possible and report the best move found.
    Stop,
    /// Exit the process.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An option attached to a `go` command.
pub enum GoOption {
    WhiteTime(u32),
    BlackTime(u32),
    WhiteInc(u32),
    BlackInc(u32),
    Depth(u8),
    MoveTime(u32),
    /// Search until `stop`, ignoring every clock-derived deadline.
    Infinite,
}
