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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Tunables for a search, set once by the driver before calling
/// [`crate::search::search`].
pub struct SearchConfig {
    /// The deepest ply iterative deepening will start a new iteration at.
    /// `go infinite` and `go depth` with no explicit cap both use 99, which
    /// is effectively unreachable before the deadline or a `stop` arrives.
    pub max_depth: u8,
    /// Size, in mebibytes, of the transposition table. Rounded down to the
    /// nearest power-of-two entry count.
    pub tt_size_mb: usize,
    /// How many nodes to search between checks of the wall-clock deadline.
    /// Checking every node would make the clock read dominate hot move-gen
    /// loops; checking too rarely blows through the deadline.
    pub node_check_interval: u64,
}

impl SearchConfig {
    #[must_use]
    pub fn new() -> SearchConfig {
        SearchConfig {
            max_depth: 99,
            tt_size_mb: 16,
            node_check_interval: 2048,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::new()
    }
}
