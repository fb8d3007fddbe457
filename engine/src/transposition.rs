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

//! The transposition table: a fixed power-of-two array of 16-byte entries
//! indexed by `zobrist_key % capacity`, each verified against a truncated
//! key signature to reject the rare collision between two positions that
//! share an index.

use raptor_base::Move;

use crate::Eval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
/// What kind of bound a stored score represents, relative to the window the
/// search that produced it was called with.
pub enum Bound {
    /// The stored score is the exact value of the position.
    Exact,
    /// The stored score is a lower bound (search failed high, beta cutoff).
    Lower,
    /// The stored score is an upper bound (search failed low, no move beat alpha).
    Upper,
}

#[derive(Clone, Copy, Debug)]
/// One transposition table slot. 16 bytes: a 32-bit signature rather than
/// the full 64-bit key (the index itself already encodes most of the key),
/// the best move found, its score, the depth it was searched to, the kind
/// of bound, and the generation it was written in.
struct TTEntry {
    signature: u32,
    best_move: Move,
    score: i16,
    depth: u8,
    bound: Bound,
    age: u8,
    _pad: [u8; 5],
}

impl TTEntry {
    const EMPTY: TTEntry = TTEntry {
        signature: 0,
        best_move: Move::NONE,
        score: 0,
        depth: 0,
        bound: Bound::Exact,
        age: 0,
        _pad: [0; 5],
    };

    fn is_empty(self) -> bool {
        self.best_move == Move::NONE && self.signature == 0
    }
}

#[must_use]
/// A hit returned by [`TTable::probe`].
pub struct TTHit {
    pub best_move: Move,
    pub score: Eval,
    pub depth: u8,
    pub bound: Bound,
}

/// The transposition table proper.
pub struct TTable {
    entries: Vec<TTEntry>,
    /// `entries.len()` is always a power of two; this is `entries.len() - 1`,
    /// used as the index mask instead of a modulo.
    mask: u64,
    /// The current search generation. Bumped by [`TTable::age_up`] so that
    /// entries from a previous search (which may now be stale, e.g. after an
    /// irreversible move) are preferentially overwritten.
    age: u8,
}

const ENTRY_SIZE: usize = std::mem::size_of::<TTEntry>();

impl TTable {
    #[must_use]
    /// Build a table sized to approximately `mb` mebibytes, rounded down to
    /// the nearest power-of-two entry count.
    pub fn with_size_mb(mb: usize) -> TTable {
        let target_entries = (mb * 1024 * 1024 / ENTRY_SIZE).max(1);
        TTable::with_capacity(target_entries.next_power_of_two().max(2) / 2)
    }

    #[must_use]
    /// Build a table with exactly `capacity` entries. `capacity` is rounded
    /// up to the next power of two.
    pub fn with_capacity(capacity: usize) -> TTable {
        let capacity = capacity.next_power_of_two().max(1);
        TTable {
            entries: vec![TTEntry::EMPTY; capacity],
            mask: capacity as u64 - 1,
            age: 0,
        }
    }

    #[must_use]
    /// The number of entries this table holds.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Size of this table in mebibytes.
    pub fn size_mb(&self) -> usize {
        self.entries.len() * ENTRY_SIZE / (1024 * 1024)
    }

    #[inline(always)]
    fn index(&self, key: u64) -> usize {
        (key & self.mask) as usize
    }

    #[inline(always)]
    fn signature(key: u64) -> u32 {
        (key >> 32) as u32
    }

    #[must_use]
    /// Look up `key`. Returns `None` on a miss or a signature collision.
    pub fn probe(&self, key: u64) -> Option<TTHit> {
        let entry = self.entries[self.index(key)];
        if entry.is_empty() || entry.signature != TTable::signature(key) {
            return None;
        }
        Some(TTHit {
            best_move: entry.best_move,
            score: Eval::centipawns(entry.score),
            depth: entry.depth,
            bound: entry.bound,
        })
    }

    /// Store a search result for `key`. Replaces the existing occupant of
    /// the slot only if it is empty, from an older generation, or was
    /// searched to a shallower (or equal) depth than this result - "replace
    /// if deeper or same generation".
    pub fn store(&mut self, key: u64, best_move: Move, score: Eval, depth: u8, bound: Bound) {
        let idx = self.index(key);
        let incumbent = self.entries[idx];
        let replace = incumbent.is_empty() || incumbent.age != self.age || incumbent.depth <= depth;
        if !replace {
            return;
        }
        self.entries[idx] = TTEntry {
            signature: TTable::signature(key),
            best_move,
            score: score.centipawn_val(),
            depth,
            bound,
            age: self.age,
            _pad: [0; 5],
        };
    }

    /// Advance to a new search generation without clearing the table: old
    /// entries become preferentially replaceable rather than being dropped
    /// outright, so a still-useful deep entry can survive across searches.
    pub fn age_up(&mut self) {
        self.age = self.age.wrapping_add(1);
    }

    /// Drop every stored entry. Used when the driver resizes the table
    /// after an irreversible move (e.g. a `setoption name Hash` during a
    /// game, or `ucinewgame`).
    pub fn clear(&mut self) {
        self.entries.fill(TTEntry::EMPTY);
        self.age = 0;
    }

    #[must_use]
    /// Fraction of slots in use, in parts per thousand, for UCI `hashfull`.
    pub fn fill_rate_permill(&self) -> u16 {
        let sample = self.entries.len().min(1000);
        let used = self.entries[..sample].iter().filter(|e| !e.is_empty()).count();
        ((used * 1000) / sample.max(1)) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raptor_base::Square;

    #[test]
    fn entry_is_sixteen_bytes() {
        assert_eq!(ENTRY_SIZE, 16);
    }

    #[test]
    fn miss_on_empty_table() {
        let t = TTable::with_capacity(64);
        assert!(t.probe(0xDEAD_BEEF).is_none());
    }

    #[test]
    fn store_then_probe_hits() {
        let mut t = TTable::with_capacity(64);
        let m = Move::quiet(Square::E2, Square::E4);
        t.store(12345, m, Eval::centipawns(57), 4, Bound::Exact);
        let hit = t.probe(12345).unwrap();
        assert_eq!(hit.best_move, m);
        assert_eq!(hit.score, Eval::centipawns(57));
        assert_eq!(hit.depth, 4);
        assert_eq!(hit.bound, Bound::Exact);
    }

    #[test]
    fn signature_collision_on_same_index_is_a_miss() {
        let mut t = TTable::with_capacity(64);
        let m = Move::quiet(Square::E2, Square::E4);
        t.store(12345, m, Eval::centipawns(57), 4, Bound::Exact);
        // same low bits (same index), different high bits (different signature)
        let colliding_key = 12345u64 | (1u64 << 40);
        assert!(t.probe(colliding_key).is_none());
    }

    #[test]
    fn shallower_same_generation_entry_does_not_overwrite_deeper() {
        let mut t = TTable::with_capacity(64);
        let deep_move = Move::quiet(Square::E2, Square::E4);
        let shallow_move = Move::quiet(Square::D2, Square::D4);
        t.store(999, deep_move, Eval::centipawns(10), 8, Bound::Exact);
        t.store(999, shallow_move, Eval::centipawns(20), 2, Bound::Exact);
        assert_eq!(t.probe(999).unwrap().best_move, deep_move);
    }

    #[test]
    fn new_generation_overwrites_regardless_of_depth() {
        let mut t = TTable::with_capacity(64);
        let old_move = Move::quiet(Square::E2, Square::E4);
        let new_move = Move::quiet(Square::D2, Square::D4);
        t.store(999, old_move, Eval::centipawns(10), 8, Bound::Exact);
        t.age_up();
        t.store(999, new_move, Eval::centipawns(20), 1, Bound::Exact);
        assert_eq!(t.probe(999).unwrap().best_move, new_move);
    }

    #[test]
    fn capacity_rounds_up_to_a_power_of_two() {
        let t = TTable::with_capacity(100);
        assert_eq!(t.capacity(), 128);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut t = TTable::with_capacity(64);
        t.store(1, Move::quiet(Square::E2, Square::E4), Eval::centipawns(5), 3, Bound::Exact);
        t.clear();
        assert!(t.probe(1).is_none());
    }
}
