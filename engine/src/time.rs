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

//! Turning UCI `go wtime`/`btime`/`winc`/`binc` into a wall-clock budget.
//!
//! The core search in [`crate::search`] never sees clock state directly; it
//! only ever receives a deadline `Instant`. This module is where clock state
//! gets turned into that deadline, kept separate so the search itself stays
//! testable without a clock in the loop.

/// Milliseconds of thinking time to allocate given `remaining` milliseconds
/// left on the clock and `increment` milliseconds gained per move.
///
/// A single flat heuristic (no `movestogo` accounting, unlike engines tuned
/// for classical time controls): spend a twentieth of what's left, plus the
/// increment, since the increment is banked again immediately after the
/// move completes.
#[must_use]
pub fn allocate_millis(remaining: u32, increment: u32) -> u32 {
    remaining / 20 + increment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spends_a_twentieth_plus_increment() {
        assert_eq!(allocate_millis(20_000, 100), 1_100);
    }

    #[test]
    fn zero_remaining_still_uses_the_increment() {
        assert_eq!(allocate_millis(0, 250), 250);
    }
}
