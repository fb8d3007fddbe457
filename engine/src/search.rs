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

//! Iterative deepening over a negamax alpha-beta search, backed by the
//! transposition table and the NNUE evaluator.
//!
//! Mate scores are kept local to whichever node produced them (`mate_in(0)`
//! always means "mated on the move just played, from here"), and every
//! recursive call steps them one ply further from zero going down
//! ([`Eval::step_forward`]) and one ply back coming up
//! ([`Eval::step_back`]). Because the value a node computes is always
//! relative to itself rather than to the root, a transposition table entry
//! written at one point in the tree is still correct when probed from a
//! different path to the same position, with no separate ply-correction
//! step needed at store or probe time.

use std::time::Instant;

use raptor_base::{
    movegen::{generate_moves, has_moves, order_moves, ALL, CAPTURES},
    Move, Position,
};

use crate::{
    config::SearchConfig,
    error::SearchError,
    evaluate::leaf_evaluate,
    transposition::{Bound, TTable},
    Eval,
};

#[derive(Clone, Debug)]
/// The result of a (possibly deadline-truncated) iterative deepening search.
pub struct SearchInfo {
    pub best_move: Move,
    pub score: Eval,
    /// The deepest iteration that completed before the deadline.
    pub depth: u8,
    pub nodes: u64,
    /// The principal variation, reconstructed from the transposition table
    /// after the search. May be shorter than `depth` if a transposition
    /// along the line was since overwritten.
    pub pv: Vec<Move>,
}

/// Run iterative deepening from depth 1 up to `config.max_depth`, stopping
/// early once `deadline` passes. Returns the best move found by the
/// deepest iteration that completed in time.
///
/// # Errors
///
/// Returns [`SearchError::NoLegalMoves`] if `pos` has no legal moves at all
/// (checkmate or stalemate).
pub fn search(pos: &mut Position, config: &SearchConfig, tt: &mut TTable, deadline: Instant) -> Result<SearchInfo, SearchError> {
    if !has_moves(pos) {
        return Err(SearchError::NoLegalMoves);
    }

    let mut searcher = Searcher {
        tt,
        deadline,
        node_check_interval: config.node_check_interval.max(1),
        nodes: 0,
        nodes_since_check: 0,
        timed_out: false,
    };

    let mut info = SearchInfo {
        best_move: Move::NONE,
        score: Eval::DRAW,
        depth: 0,
        nodes: 0,
        pv: Vec::new(),
    };

    for depth in 1..=config.max_depth {
        match searcher.negamax(pos, depth, Eval::MIN, Eval::MAX) {
            Ok(score) => {
                let best_move = searcher.tt.probe(pos.zobrist_key()).map_or(Move::NONE, |hit| hit.best_move);
                info.score = score;
                info.depth = depth;
                info.nodes = searcher.nodes;
                info.pv = extract_pv(pos, searcher.tt, depth);
                if best_move != Move::NONE {
                    info.best_move = best_move;
                }
            }
            Err(SearchError::Timeout) => break,
            Err(e) => return Err(e),
        }
        if searcher.timed_out {
            break;
        }
    }

    if info.best_move == Move::NONE {
        return Err(SearchError::NoLegalMoves);
    }

    Ok(info)
}

/// Walk the transposition table's recorded best moves from `pos`, up to
/// `max_len` plies, to reconstruct the principal variation for reporting.
/// Bounded by `max_len` so a cycle of transposed positions cannot loop
/// forever.
fn extract_pv(pos: &Position, tt: &TTable, max_len: u8) -> Vec<Move> {
    let mut pv = Vec::new();
    let mut cursor = pos.clone();
    for _ in 0..max_len {
        let Some(hit) = tt.probe(cursor.zobrist_key()) else {
            break;
        };
        if hit.best_move == Move::NONE {
            break;
        }
        pv.push(hit.best_move);
        cursor.make_move(hit.best_move);
    }
    pv
}

struct Searcher<'a> {
    tt: &'a mut TTable,
    deadline: Instant,
    node_check_interval: u64,
    nodes: u64,
    nodes_since_check: u64,
    timed_out: bool,
}

impl<'a> Searcher<'a> {
    /// Count this node and, at most once every `node_check_interval` nodes,
    /// check the wall clock. Returns `Err(SearchError::Timeout)` once the
    /// deadline has passed, whether just noticed or noticed on an earlier
    /// call (the flag is sticky so every still-open frame unwinds instead
    /// of resuming work).
    fn time_check(&mut self) -> Result<(), SearchError> {
        self.nodes += 1;
        self.nodes_since_check += 1;
        if self.nodes_since_check >= self.node_check_interval {
            self.nodes_since_check = 0;
            if Instant::now() >= self.deadline {
                self.timed_out = true;
            }
        }
        if self.timed_out {
            return Err(SearchError::Timeout);
        }
        Ok(())
    }

    fn negamax(&mut self, pos: &mut Position, depth: u8, alpha: Eval, beta: Eval) -> Result<Eval, SearchError> {
        self.time_check()?;

        if pos.is_repetition() || pos.is_fifty_move_draw() || pos.is_insufficient_material() {
            return Ok(Eval::DRAW);
        }

        if depth == 0 {
            return self.quiescence(pos, alpha, beta);
        }

        let key = pos.zobrist_key();
        let mut tt_move = None;
        if let Some(hit) = self.tt.probe(key) {
            tt_move = Some(hit.best_move);
            if hit.depth >= depth {
                match hit.bound {
                    Bound::Exact => return Ok(hit.score),
                    Bound::Lower if hit.score >= beta => return Ok(hit.score),
                    Bound::Upper if hit.score <= alpha => return Ok(hit.score),
                    _ => {}
                }
            }
        }

        let mut moves = generate_moves::<ALL>(pos);
        if moves.is_empty() {
            return Ok(if pos.is_check() { -Eval::mate_in(0) } else { Eval::DRAW });
        }
        order_moves(pos, &mut moves, tt_move);

        let original_alpha = alpha;
        let mut alpha = alpha;
        let mut best_score = Eval::MIN;
        let mut best_move = moves[0];

        for m in moves {
            pos.make_move(m);
            let result = self.negamax(pos, depth - 1, -beta.step_forward(), -alpha.step_forward());
            pos.unmake_move();
            let score = -result?.step_back();

            if score > best_score {
                best_score = score;
                best_move = m;
                if score > alpha {
                    alpha = score;
                }
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_score <= original_alpha {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(key, best_move, best_score, depth, bound);

        Ok(best_score)
    }

    /// Captures-only search to a stand-pat quiet horizon, extended with
    /// full evasions whenever the side to move is in check (standing pat
    /// is not legal in check, and captures alone could miss the only legal
    /// replies).
    fn quiescence(&mut self, pos: &mut Position, alpha: Eval, beta: Eval) -> Result<Eval, SearchError> {
        self.time_check()?;

        if pos.is_check() {
            let mut moves = generate_moves::<ALL>(pos);
            if moves.is_empty() {
                return Ok(-Eval::mate_in(0));
            }
            order_moves(pos, &mut moves, None);

            let mut alpha = alpha;
            let mut best = Eval::MIN;
            for m in moves {
                pos.make_move(m);
                let result = self.quiescence(pos, -beta.step_forward(), -alpha.step_forward());
                pos.unmake_move();
                let score = -result?.step_back();

                if score > best {
                    best = score;
                    if score > alpha {
                        alpha = score;
                    }
                }
                if alpha >= beta {
                    break;
                }
            }
            return Ok(best);
        }

        let stand_pat = leaf_evaluate(pos);
        if stand_pat >= beta {
            return Ok(stand_pat);
        }
        let mut alpha = alpha;
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut moves = generate_moves::<CAPTURES>(pos);
        order_moves(pos, &mut moves, None);

        let mut best = stand_pat;
        for m in moves {
            pos.make_move(m);
            let result = self.quiescence(pos, -beta.step_forward(), -alpha.step_forward());
            pos.unmake_move();
            let score = -result?.step_back();

            if score > best {
                best = score;
                if score > alpha {
                    alpha = score;
                }
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn generous_deadline() -> Instant {
        Instant::now() + Duration::from_secs(5)
    }

    #[test]
    fn finds_mate_in_one() {
        // a ladder mate: Rb7 cuts off the seventh rank, Ra1-a8 delivers
        // checkmate along the eighth with the king unable to step anywhere
        let mut pos = Position::from_fen("7k/1R6/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut tt = TTable::with_capacity(1 << 16);
        let config = SearchConfig { max_depth: 3, ..Default::default() };
        let info = search(&mut pos, &config, &mut tt, generous_deadline()).unwrap();
        assert_eq!(info.best_move.to_uci(), "a1a8");
        assert_eq!(info.score.moves_to_mate(), Some(1));
    }

    #[test]
    fn no_legal_moves_is_an_error() {
        // black is stalemated
        let mut pos = Position::from_fen("7k/8/6Q1/8/8/8/8/6K1 b - - 0 1").unwrap();
        let mut tt = TTable::with_capacity(1 << 12);
        let config = SearchConfig::default();
        let err = search(&mut pos, &config, &mut tt, generous_deadline()).unwrap_err();
        assert_eq!(err, SearchError::NoLegalMoves);
    }

    #[test]
    fn respects_an_immediate_deadline() {
        let mut pos = Position::new();
        let mut tt = TTable::with_capacity(1 << 12);
        let config = SearchConfig { node_check_interval: 32, ..Default::default() };
        // a deadline already in the past should still yield the depth-1 result
        let info = search(&mut pos, &config, &mut tt, Instant::now()).unwrap();
        assert_ne!(info.best_move, Move::NONE);
    }

    #[test]
    fn takes_a_hanging_rook() {
        // the rook on g8 is undefended and the bishop on c4 attacks it
        let mut pos = Position::from_fen("6rk/8/8/8/2B5/8/8/6K1 w - - 0 1").unwrap();
        let mut tt = TTable::with_capacity(1 << 16);
        let config = SearchConfig { max_depth: 2, ..Default::default() };
        let info = search(&mut pos, &config, &mut tt, generous_deadline()).unwrap();
        assert_eq!(info.best_move.to_uci(), "c4g8");
    }

    #[test]
    fn rook_lift_pins_the_bishop_and_wins_material() {
        let mut pos = Position::from_fen("kbK5/pp6/1P6/8/8/8/8/R7 w - - 0 1").unwrap();
        let mut tt = TTable::with_capacity(1 << 16);
        let config = SearchConfig { max_depth: 4, ..Default::default() };
        let info = search(&mut pos, &config, &mut tt, generous_deadline()).unwrap();
        assert_eq!(info.best_move.to_uci(), "a1a6");
    }

    #[test]
    fn queen_delivers_mate_on_the_back_rank() {
        let mut pos = Position::from_fen("4k3/Q6n/8/8/8/8/PR5P/4K1NR w K - 0 1").unwrap();
        let mut tt = TTable::with_capacity(1 << 16);
        let config = SearchConfig { max_depth: 4, ..Default::default() };
        let info = search(&mut pos, &config, &mut tt, generous_deadline()).unwrap();
        assert_eq!(info.best_move.to_uci(), "b2b8");
    }
}
