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

//! Performance testing, or "perft." Perft counts the leaf nodes of the legal
//! move tree to a fixed depth, and is the standard way to validate a move
//! generator: any mismatch against a known-good count points at a bug in
//! move generation rather than evaluation or search.

use crate::movegen::{generate_moves, ALL};

use super::Position;

#[must_use]
/// Count the number of leaf positions reachable from `pos` in exactly
/// `depth` plies of legal play.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_moves::<ALL>(pos);
    if depth == 1 {
        // at the last ply we only need the count, not a recursive descent
        return moves.len() as u64;
    }
    let mut total = 0;
    let mut child = pos.clone();
    for m in moves {
        child.make_move(m);
        total += perft(&child, depth - 1);
        child.unmake_move();
    }
    total
}

/// Like [`perft`], but also prints the per-root-move subtree counts to
/// stdout ("divide"), which is the usual way of bisecting a move generation
/// bug against a reference engine.
pub fn perft_divide(pos: &Position, depth: u8) -> u64 {
    let moves = generate_moves::<ALL>(pos);
    let mut total = 0;
    let mut child = pos.clone();
    for m in moves {
        child.make_move(m);
        let count = perft(&child, depth.saturating_sub(1));
        child.unmake_move();
        println!("{m}: {count}");
        total += count;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perft_assistant(fen: &str, node_counts: &[u64]) {
        let pos = Position::from_fen(fen).unwrap();
        for (i, &expected) in node_counts.iter().enumerate() {
            assert_eq!(perft(&pos, i as u8), expected, "perft({i}) mismatch for {fen}");
        }
    }

    #[test]
    fn perft_start_position() {
        perft_assistant(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &[1, 20, 400, 8_902, 197_281, 4_865_609],
        );
    }

    #[test]
    fn perft_kiwipete() {
        perft_assistant(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            &[1, 48, 2_039, 97_862, 4_085_603],
        );
    }

    #[test]
    fn perft_endgame() {
        perft_assistant(
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            &[1, 14, 191, 2_812, 43_238, 674_624],
        );
    }

    #[test]
    fn perft_unbalanced() {
        perft_assistant(
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            &[1, 6, 264, 9_467, 422_333],
        );
    }

    #[test]
    fn perft_edwards() {
        perft_assistant(
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            &[1, 44, 1_486, 62_379, 2_103_487],
        );
    }

    #[test]
    fn perft_edwards2() {
        perft_assistant(
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
            &[1, 46, 2_079, 89_890, 3_894_594],
        );
    }
}
