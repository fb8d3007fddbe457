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

//! The [`Position`] type: a full chess position, including the metadata
//! (castling rights, en passant, move clocks) needed to play a legal game,
//! plus the incremental state (Zobrist key, checkers, pins, NNUE
//! accumulators) that search and move generation lean on.
//!
//! Unlike a bare board snapshot, `Position` supports true `make_move` /
//! `unmake_move`: each `make_move` pushes an undo record onto an internal
//! history stack instead of cloning the whole position, so search can walk
//! deep into a tree without copying 64-square arrays at every ply.

use crate::{attacks, nnue, zobrist, MAGIC};

use super::{Bitboard, CastleRights, Color, FenError, Kind, Move, Square};

use std::convert::TryFrom;

/// The standard chess starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything needed to undo one `make_move`.
#[derive(Clone)]
struct PlyInfo {
    mv: Move,
    captured: Option<Kind>,
    castle_rights: CastleRights,
    en_passant_square: Option<Square>,
    halfmove_clock: u32,
    zobrist_key: u64,
    nnue_accum: [nnue::Accumulator; 2],
}

#[derive(Clone)]
/// A chess position: piece placement, whose move it is, and enough
/// incidental state to make and unmake moves correctly and to detect
/// threefold repetition.
pub struct Position {
    /// Bitboard of each piece kind, regardless of color.
    pieces: [Bitboard; Kind::NUM_TYPES],
    /// Bitboard of each color's pieces, regardless of kind.
    sides: [Bitboard; 2],
    side_to_move: Color,
    castle_rights: CastleRights,
    en_passant_square: Option<Square>,
    /// Plies since the last pawn move or capture, for the fifty-move rule.
    halfmove_clock: u32,
    king_sqs: [Square; 2],
    /// Pieces currently giving check to `side_to_move`'s king.
    checkers: Bitboard,
    /// Pieces of `side_to_move` that are pinned against their own king.
    pinned: Bitboard,
    zobrist_key: u64,
    /// Per-perspective NNUE accumulator: `nnue_accum[c]` is keyed to the
    /// king square of color `c` and contains every non-king piece on the
    /// board as a feature.
    nnue_accum: [nnue::Accumulator; 2],
    history: Vec<PlyInfo>,
}

impl Position {
    #[must_use]
    /// The standard chess starting position.
    pub fn new() -> Position {
        Position::from_fen(STARTING_FEN).expect("STARTING_FEN must always parse")
    }

    /// Parse a position from Forsyth-Edwards Notation.
    ///
    /// The halfmove clock and fullmove number fields are optional, per
    /// common FEN practice; if absent, the halfmove clock defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns `Err` describing the first structural or semantic problem
    /// found: a malformed field, a side without exactly one king, a pawn on
    /// the back rank, castling rights that don't match king/rook placement,
    /// an en passant square inconsistent with the position, or the side not
    /// to move already in check.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let mut pieces = [Bitboard::EMPTY; Kind::NUM_TYPES];
        let mut sides = [Bitboard::EMPTY; 2];

        let mut chars = fen.chars();
        let mut rank = 7usize;
        let mut file = 0usize;
        loop {
            if (rank, file) == (0, 8) {
                break;
            }
            let c = chars.next().ok_or(FenError::TruncatedBoard)?;
            if let Some(kind) = Kind::from_code(c.to_ascii_uppercase()) {
                if file >= 8 {
                    return Err(FenError::TruncatedBoard);
                }
                let color = if c.is_uppercase() { Color::White } else { Color::Black };
                let sq = Square::new(rank, file).ok_or(FenError::TruncatedBoard)?;
                let bb = Bitboard::from(sq);
                pieces[kind as usize] |= bb;
                sides[color as usize] |= bb;
                file += 1;
            } else if c == '/' {
                if rank == 0 || file != 8 {
                    return Err(FenError::TruncatedBoard);
                }
                rank -= 1;
                file = 0;
            } else if let Some(blanks) = c.to_digit(10) {
                file += blanks as usize;
            } else {
                return Err(FenError::UnknownPieceCode);
            }
        }

        if chars.next() != Some(' ') {
            return Err(FenError::ExpectedSpace);
        }

        let side_to_move = match chars.next() {
            Some('w') => Color::White,
            Some('b') => Color::Black,
            _ => return Err(FenError::BadSideToMove),
        };

        if chars.next() != Some(' ') {
            return Err(FenError::ExpectedSpace);
        }

        let mut castle_rights = CastleRights::NO_RIGHTS;
        let mut c = chars.next().ok_or(FenError::ExpectedSpace)?;
        while c != ' ' {
            castle_rights |= match c {
                'K' => CastleRights::king_castle(Color::White),
                'Q' => CastleRights::queen_castle(Color::White),
                'k' => CastleRights::king_castle(Color::Black),
                'q' => CastleRights::queen_castle(Color::Black),
                '-' => CastleRights::NO_RIGHTS,
                _ => return Err(FenError::BadCastleRights),
            };
            c = chars.next().ok_or(FenError::ExpectedSpace)?;
        }

        let ep_file = chars.next().ok_or(FenError::BadEnPassantSquare)?;
        let en_passant_square = if ep_file == '-' {
            None
        } else {
            let ep_rank = chars.next().ok_or(FenError::BadEnPassantSquare)?;
            let s: String = [ep_file, ep_rank].into_iter().collect();
            Some(Square::from_algebraic(&s).map_err(|_| FenError::BadEnPassantSquare)?)
        };

        let halfmove_clock = match chars.next() {
            None => 0,
            Some(' ') => chars
                .as_str()
                .split_whitespace()
                .next()
                .map(str::parse::<u32>)
                .transpose()
                .map_err(|_| FenError::BadHalfmoveClock)?
                .unwrap_or(0),
            _ => return Err(FenError::ExpectedSpace),
        };

        let mut pos = Position {
            pieces,
            sides,
            side_to_move,
            castle_rights,
            en_passant_square,
            halfmove_clock,
            king_sqs: [Square::A1; 2],
            checkers: Bitboard::EMPTY,
            pinned: Bitboard::EMPTY,
            zobrist_key: 0,
            nnue_accum: [[0; nnue::HIDDEN]; 2],
            history: Vec::new(),
        };

        let white_kings = pos.pieces[Kind::King as usize] & pos.sides[Color::White as usize];
        let black_kings = pos.pieces[Kind::King as usize] & pos.sides[Color::Black as usize];
        if white_kings.len() != 1 || black_kings.len() != 1 {
            return Err(FenError::WrongNumberOfKings);
        }
        let white_king = Square::try_from(white_kings).map_err(|_| FenError::WrongNumberOfKings)?;
        let black_king = Square::try_from(black_kings).map_err(|_| FenError::WrongNumberOfKings)?;
        pos.king_sqs = [white_king, black_king];

        let back_ranks = Bitboard::horizontal(Square::A1) | Bitboard::horizontal(Square::A8);
        if !(pos.pieces[Kind::Pawn as usize] & back_ranks).is_empty() {
            return Err(FenError::PawnOnBackRank);
        }

        let rook_bb = |c: Color| pos.pieces[Kind::Rook as usize] & pos.sides[c as usize];
        let castle_ok = (!castle_rights.is_kingside_castle_legal(Color::White)
            || (white_king == Square::E1 && rook_bb(Color::White).contains(Square::H1)))
            && (!castle_rights.is_queenside_castle_legal(Color::White)
                || (white_king == Square::E1 && rook_bb(Color::White).contains(Square::A1)))
            && (!castle_rights.is_kingside_castle_legal(Color::Black)
                || (black_king == Square::E8 && rook_bb(Color::Black).contains(Square::H8)))
            && (!castle_rights.is_queenside_castle_legal(Color::Black)
                || (black_king == Square::E8 && rook_bb(Color::Black).contains(Square::A8)));
        if !castle_ok {
            return Err(FenError::InconsistentCastleRights);
        }

        if let Some(ep_sq) = pos.en_passant_square {
            let expected_rank = if side_to_move == Color::White { 5 } else { 2 };
            let pawn_rank = if side_to_move == Color::White { 4 } else { 3 };
            let pawn_sq = Square::new(pawn_rank, ep_sq.file()).ok_or(FenError::InconsistentEnPassant)?;
            if ep_sq.rank() != expected_rank
                || !(pos.pieces[Kind::Pawn as usize] & pos.sides[!side_to_move as usize]).contains(pawn_sq)
            {
                return Err(FenError::InconsistentEnPassant);
            }
        }

        let occupancy = pos.sides[0] | pos.sides[1];
        let inactive_king = pos.king_sqs[!side_to_move as usize];
        let checks_on_inactive = pos.attackers_to(inactive_king, occupancy) & pos.sides[side_to_move as usize];
        if !checks_on_inactive.is_empty() {
            return Err(FenError::OpponentInCheck);
        }

        let mut zobrist_key = 0u64;
        for sq in occupancy {
            if let Some(kind) = pos.kind_at(sq) {
                zobrist_key ^= zobrist::square_key(sq, Some(kind), pos.color_at(sq).unwrap());
            }
        }
        zobrist_key ^= zobrist::castle_key(pos.castle_rights.0);
        zobrist_key ^= pos.en_passant_square.map_or(0, zobrist::ep_key);
        if pos.side_to_move == Color::Black {
            zobrist_key ^= zobrist::BLACK_TO_MOVE_KEY;
        }
        pos.zobrist_key = zobrist_key;

        pos.refresh_accumulator(Color::White);
        pos.refresh_accumulator(Color::Black);
        pos.compute_checks_and_pins();

        Ok(pos)
    }

    #[must_use]
    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    #[inline(always)]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[must_use]
    #[inline(always)]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[must_use]
    #[inline(always)]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    #[inline(always)]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_sqs[color as usize]
    }

    #[must_use]
    #[inline(always)]
    pub fn checkers(&self) -> Bitboard {
        self.checkers
    }

    #[must_use]
    #[inline(always)]
    pub fn pinned(&self) -> Bitboard {
        self.pinned
    }

    #[must_use]
    #[inline(always)]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    #[must_use]
    #[inline(always)]
    pub fn nnue_accumulator(&self, color: Color) -> &nnue::Accumulator {
        &self.nnue_accum[color as usize]
    }

    #[must_use]
    #[inline(always)]
    pub fn is_check(&self) -> bool {
        !self.checkers.is_empty()
    }

    #[must_use]
    #[inline(always)]
    pub fn occupancy(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    #[must_use]
    #[inline(always)]
    pub fn occupancy_of(&self, color: Color) -> Bitboard {
        self.sides[color as usize]
    }

    #[must_use]
    #[inline(always)]
    pub fn piece_bb(&self, kind: Kind) -> Bitboard {
        self.pieces[kind as usize]
    }

    #[must_use]
    /// The kind of piece sitting on `sq`, or `None` if it is empty.
    pub fn kind_at(&self, sq: Square) -> Option<Kind> {
        Kind::ALL_TYPES.into_iter().find(|&k| self.pieces[k as usize].contains(sq))
    }

    #[must_use]
    /// The color of the piece sitting on `sq`, or `None` if it is empty.
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        if self.sides[Color::White as usize].contains(sq) {
            Some(Color::White)
        } else if self.sides[Color::Black as usize].contains(sq) {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Parse a UCI long-algebraic move string (`e2e4`, `e7e8q`) against this
    /// position, filling in the capture / castle / en-passant / double-push
    /// flags that [`Move::from_uci_quiet`] cannot determine on its own.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is malformed or names a square with no
    /// piece to move from.
    pub fn move_from_uci(&self, s: &str) -> Result<Move, &'static str> {
        if s.len() != 4 && s.len() != 5 {
            return Err("move string must be 4 or 5 characters");
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let mover = self.kind_at(from).ok_or("no piece on origin square")?;
        let is_capture = self.kind_at(to).is_some();

        if s.len() == 5 {
            let c = s.chars().nth(4).unwrap().to_ascii_uppercase();
            let kind = Kind::from_code(c).ok_or("invalid promotion letter")?;
            if !Kind::PROMOTE_TYPES.contains(&kind) {
                return Err("cannot promote to a pawn or king");
            }
            return Ok(if is_capture {
                Move::promotion_capture(from, to, kind)
            } else {
                Move::promotion(from, to, kind)
            });
        }

        if mover == Kind::Pawn && Some(to) == self.en_passant_square && !is_capture {
            return Ok(Move::en_passant(from, to));
        }
        if mover == Kind::King && from.chebyshev_to(to) > 1 {
            return Ok(if to.file() > from.file() {
                Move::king_castle(from, to)
            } else {
                Move::queen_castle(from, to)
            });
        }
        if mover == Kind::Pawn && from.chebyshev_to(to) > 1 {
            return Ok(Move::double_push(from, to));
        }
        Ok(if is_capture {
            Move::capture(from, to)
        } else {
            Move::quiet(from, to)
        })
    }

    /// Play `mv` on this position, pushing enough information onto the
    /// history stack to reverse it with [`Position::unmake_move`].
    ///
    /// `mv` is trusted to be legal; this is not checked here.
    pub fn make_move(&mut self, mv: Move) {
        let from_sq = mv.from_square();
        let to_sq = mv.to_square();
        let player = self.side_to_move;
        let opponent = !player;

        let mover_kind = self
            .kind_at(from_sq)
            .expect("make_move called with an empty origin square");
        let captured_kind = if mv.is_en_passant() {
            Some(Kind::Pawn)
        } else {
            self.kind_at(to_sq)
        };

        self.history.push(PlyInfo {
            mv,
            captured: captured_kind,
            castle_rights: self.castle_rights,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            zobrist_key: self.zobrist_key,
            nnue_accum: self.nnue_accum,
        });

        if mv.is_en_passant() {
            let captured_sq = Square::new(from_sq.rank(), to_sq.file()).unwrap();
            self.remove_piece(captured_sq, Kind::Pawn, opponent);
        } else if let Some(cap) = captured_kind {
            self.remove_piece(to_sq, cap, opponent);
        }

        self.remove_piece(from_sq, mover_kind, player);
        let placed_kind = mv.promote_kind().unwrap_or(mover_kind);
        self.add_piece(to_sq, placed_kind, player);

        if mv.is_castle() {
            let rank = from_sq.rank();
            let (rook_from_file, rook_to_file) = if mv.is_king_castle() { (7, 5) } else { (0, 3) };
            let rook_from = Square::new(rank, rook_from_file).unwrap();
            let rook_to = Square::new(rank, rook_to_file).unwrap();
            self.remove_piece(rook_from, Kind::Rook, player);
            self.add_piece(rook_to, Kind::Rook, player);
        }

        self.zobrist_key ^= self.en_passant_square.map_or(0, zobrist::ep_key);
        self.en_passant_square = if mv.is_double_push() {
            Square::new((from_sq.rank() + to_sq.rank()) / 2, from_sq.file())
        } else {
            None
        };
        self.zobrist_key ^= self.en_passant_square.map_or(0, zobrist::ep_key);

        let mut removed_rights = if mover_kind == Kind::King {
            CastleRights::color_rights(player)
        } else {
            CastleRights::NO_RIGHTS
        };
        removed_rights |= Position::corner_rights(from_sq);
        removed_rights |= Position::corner_rights(to_sq);
        self.zobrist_key ^= zobrist::castle_key(self.castle_rights.0);
        self.castle_rights &= !removed_rights;
        self.zobrist_key ^= zobrist::castle_key(self.castle_rights.0);

        self.halfmove_clock = if mover_kind == Kind::Pawn || captured_kind.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.side_to_move = opponent;
        self.zobrist_key ^= zobrist::BLACK_TO_MOVE_KEY;

        if mover_kind == Kind::King {
            self.king_sqs[player as usize] = to_sq;
            self.refresh_accumulator(player);
        }

        self.compute_checks_and_pins();
    }

    /// Undo the most recent call to [`Position::make_move`], returning the
    /// move that was undone.
    ///
    /// # Panics
    ///
    /// Panics if no move has been made on this position.
    pub fn unmake_move(&mut self) -> Move {
        let info = self.history.pop().expect("unmake_move on a position with no history");
        let mv = info.mv;
        let from_sq = mv.from_square();
        let to_sq = mv.to_square();
        let opponent = self.side_to_move;
        let player = !opponent;

        if mv.is_castle() {
            let rank = from_sq.rank();
            let (rook_from_file, rook_to_file) = if mv.is_king_castle() { (7, 5) } else { (0, 3) };
            let rook_from = Square::new(rank, rook_from_file).unwrap();
            let rook_to = Square::new(rank, rook_to_file).unwrap();
            self.remove_piece(rook_to, Kind::Rook, player);
            self.add_piece(rook_from, Kind::Rook, player);
        }

        let placed_kind = self.kind_at(to_sq).expect("to-square should hold the moved piece");
        self.remove_piece(to_sq, placed_kind, player);
        let mover_kind = if mv.is_promotion() { Kind::Pawn } else { placed_kind };
        self.add_piece(from_sq, mover_kind, player);

        if mv.is_en_passant() {
            let captured_sq = Square::new(from_sq.rank(), to_sq.file()).unwrap();
            self.add_piece(captured_sq, Kind::Pawn, opponent);
        } else if let Some(cap) = info.captured {
            self.add_piece(to_sq, cap, opponent);
        }

        if mover_kind == Kind::King {
            self.king_sqs[player as usize] = from_sq;
        }

        // The bitboard/king-square bookkeeping above is all that's needed to
        // keep `kind_at`/`occupancy` consistent mid-unmake; the Zobrist key
        // and accumulators are simply restored from the saved ply below
        // rather than reversed incrementally.
        self.castle_rights = info.castle_rights;
        self.en_passant_square = info.en_passant_square;
        self.halfmove_clock = info.halfmove_clock;
        self.zobrist_key = info.zobrist_key;
        self.nnue_accum = info.nnue_accum;
        self.side_to_move = player;

        self.compute_checks_and_pins();

        mv
    }

    /// Clear the history stack, making the current position the new root
    /// for repetition detection. The driver calls this after any
    /// irreversible move it will never need to undo (e.g. once a `position`
    /// command replaces the game from the UCI client), so that stale plies
    /// from a previous game do not leak into `is_repetition`.
    pub fn restore_ply_info(&mut self) {
        self.history.clear();
    }

    #[must_use]
    /// Whether the current position has occurred at least three times since
    /// the last pawn move or capture (the threefold repetition rule).
    pub fn is_repetition(&self) -> bool {
        let mut count = 1;
        for info in self.history.iter().rev().take(self.halfmove_clock as usize) {
            if info.zobrist_key == self.zobrist_key {
                count += 1;
                if count >= 3 {
                    return true;
                }
            }
        }
        false
    }

    #[must_use]
    /// Whether the fifty-move rule allows either player to claim a draw.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    #[must_use]
    /// Whether neither side has enough material remaining to deliver
    /// checkmate, even with maximally uncooperative play.
    pub fn is_insufficient_material(&self) -> bool {
        const DARK_SQUARES: Bitboard = Bitboard::new(0xAA55_AA55_AA55_AA55);
        match self.occupancy().len() {
            0 | 1 => unreachable!("a king is always on the board"),
            2 => true,
            3 => (self.pieces[Kind::Knight as usize] | self.pieces[Kind::Bishop as usize]).len() == 1,
            4 => {
                let bishops = self.pieces[Kind::Bishop as usize];
                bishops.len() == 2
                    && self.pieces[Kind::Knight as usize].is_empty()
                    && self.pieces[Kind::Pawn as usize].is_empty()
                    && self.pieces[Kind::Rook as usize].is_empty()
                    && self.pieces[Kind::Queen as usize].is_empty()
                    && ((bishops & DARK_SQUARES).len() == 2 || (bishops & !DARK_SQUARES).len() == 2)
            }
            _ => false,
        }
    }

    fn corner_rights(sq: Square) -> CastleRights {
        match sq {
            Square::A1 => CastleRights::queen_castle(Color::White),
            Square::H1 => CastleRights::king_castle(Color::White),
            Square::A8 => CastleRights::queen_castle(Color::Black),
            Square::H8 => CastleRights::king_castle(Color::Black),
            _ => CastleRights::NO_RIGHTS,
        }
    }

    fn add_piece(&mut self, sq: Square, kind: Kind, color: Color) {
        let bb = Bitboard::from(sq);
        self.pieces[kind as usize] |= bb;
        self.sides[color as usize] |= bb;
        self.zobrist_key ^= zobrist::square_key(sq, Some(kind), color);
        if kind != Kind::King {
            let transformer = nnue::transformer();
            transformer.add_feature(&mut self.nnue_accum[Color::White as usize], self.king_sqs[Color::White as usize], kind, color, sq);
            transformer.add_feature(&mut self.nnue_accum[Color::Black as usize], self.king_sqs[Color::Black as usize], kind, color, sq);
        }
    }

    fn remove_piece(&mut self, sq: Square, kind: Kind, color: Color) {
        let bb = Bitboard::from(sq);
        self.pieces[kind as usize] &= !bb;
        self.sides[color as usize] &= !bb;
        self.zobrist_key ^= zobrist::square_key(sq, Some(kind), color);
        if kind != Kind::King {
            let transformer = nnue::transformer();
            transformer.remove_feature(&mut self.nnue_accum[Color::White as usize], self.king_sqs[Color::White as usize], kind, color, sq);
            transformer.remove_feature(&mut self.nnue_accum[Color::Black as usize], self.king_sqs[Color::Black as usize], kind, color, sq);
        }
    }

    /// Fully recompute the accumulator for `persp`'s king perspective. Used
    /// at construction time and whenever that side's king moves, since every
    /// feature index depends on the king square.
    fn refresh_accumulator(&mut self, persp: Color) {
        let king_sq = self.king_sqs[persp as usize];
        let occupancy = self.occupancy();
        let features = occupancy.filter_map(|sq| {
            let kind = self.kind_at(sq)?;
            if kind == Kind::King {
                return None;
            }
            Some((kind, self.color_at(sq).unwrap(), sq))
        });
        self.nnue_accum[persp as usize] = nnue::transformer().refresh(king_sq, features);
    }

    fn compute_checks_and_pins(&mut self) {
        let king_sq = self.king_sqs[self.side_to_move as usize];
        let occupancy = self.occupancy();
        self.checkers = self.attackers_to(king_sq, occupancy) & self.sides[!self.side_to_move as usize];

        self.pinned = Bitboard::EMPTY;
        let rook_mask = MAGIC.rook_attacks(Bitboard::EMPTY, king_sq);
        let bishop_mask = MAGIC.bishop_attacks(Bitboard::EMPTY, king_sq);
        let queens = self.pieces[Kind::Queen as usize];
        let snipers = self.sides[!self.side_to_move as usize]
            & ((rook_mask & (queens | self.pieces[Kind::Rook as usize]))
                | (bishop_mask & (queens | self.pieces[Kind::Bishop as usize])));

        for sniper_sq in snipers {
            let between_bb = attacks::between(king_sq, sniper_sq);
            if (between_bb & occupancy).has_single_bit() {
                self.pinned |= between_bb;
            }
        }
    }

    /// All pieces of either color attacking `sq`, given `occupancy` (which
    /// may differ from `self.occupancy()` when probing a hypothetical
    /// blocker configuration).
    pub(crate) fn attackers_to(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let mut attackers = Bitboard::EMPTY;
        attackers |= attacks::PAWN_ATTACKS[Color::Black as usize][sq as usize]
            & self.pieces[Kind::Pawn as usize]
            & self.sides[Color::White as usize];
        attackers |= attacks::PAWN_ATTACKS[Color::White as usize][sq as usize]
            & self.pieces[Kind::Pawn as usize]
            & self.sides[Color::Black as usize];
        attackers |= attacks::KNIGHT_MOVES[sq as usize] & self.pieces[Kind::Knight as usize];
        let queens = self.pieces[Kind::Queen as usize];
        attackers |= MAGIC.rook_attacks(occupancy, sq) & (queens | self.pieces[Kind::Rook as usize]);
        attackers |= MAGIC.bishop_attacks(occupancy, sq) & (queens | self.pieces[Kind::Bishop as usize]);
        attackers |= attacks::KING_MOVES[sq as usize] & self.pieces[Kind::King as usize];
        attackers
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_round_trips() {
        let pos = Position::new();
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.occupancy().len(), 32);
        assert_eq!(pos.king_square(Color::White), Square::E1);
        assert_eq!(pos.king_square(Color::Black), Square::E8);
        assert!(!pos.is_check());
    }

    #[test]
    fn rejects_missing_king() {
        assert!(Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
    }

    #[test]
    fn rejects_pawn_on_back_rank() {
        assert!(Position::from_fen("rnbqkbnP/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
    }

    #[test]
    fn make_and_unmake_restores_state() {
        let mut pos = Position::new();
        let before_hash = pos.zobrist_key();
        let mv = pos.move_from_uci("e2e4").unwrap();
        assert!(mv.is_double_push());
        pos.make_move(mv);
        assert_eq!(pos.en_passant_square(), Some(Square::E3));
        assert_ne!(pos.zobrist_key(), before_hash);
        let undone = pos.unmake_move();
        assert_eq!(undone, mv);
        assert_eq!(pos.zobrist_key(), before_hash);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.en_passant_square(), None);
    }

    #[test]
    fn en_passant_capture_and_unmake() {
        let mut pos = Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
        let mv = pos.move_from_uci("e5d6").unwrap();
        assert!(mv.is_en_passant());
        pos.make_move(mv);
        assert_eq!(pos.kind_at(Square::D5), None);
        assert_eq!(pos.kind_at(Square::D6), Some(Kind::Pawn));
        pos.unmake_move();
        assert_eq!(pos.kind_at(Square::D5), Some(Kind::Pawn));
        assert_eq!(pos.kind_at(Square::D6), None);
    }

    #[test]
    fn castling_removes_both_rights() {
        let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = pos.move_from_uci("e1g1").unwrap();
        assert!(mv.is_king_castle());
        pos.make_move(mv);
        assert!(!pos.castle_rights().is_kingside_castle_legal(Color::White));
        assert!(!pos.castle_rights().is_queenside_castle_legal(Color::White));
        assert_eq!(pos.kind_at(Square::F1), Some(Kind::Rook));
        assert_eq!(pos.king_square(Color::White), Square::G1);
    }

    #[test]
    fn capture_resets_halfmove_clock() {
        let mut pos = Position::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 12 20").unwrap();
        let mv = pos.move_from_uci("e2e3").unwrap();
        pos.make_move(mv);
        assert_eq!(pos.halfmove_clock(), 0);
    }

    #[test]
    fn lone_kings_are_insufficient_material() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(pos.is_insufficient_material());
    }

    #[test]
    fn king_and_pawn_is_sufficient_material() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert!(!pos.is_insufficient_material());
    }

    #[test]
    fn threefold_repetition_detected() {
        let mut pos = Position::new();
        for _ in 0..2 {
            pos.make_move(pos.move_from_uci("g1f3").unwrap());
            pos.make_move(pos.move_from_uci("g8f6").unwrap());
            pos.make_move(pos.move_from_uci("f3g1").unwrap());
            pos.make_move(pos.move_from_uci("f6g8").unwrap());
        }
        assert!(pos.is_repetition());
    }

    #[test]
    /// Play a bounded number of random legal self-play games, checking after
    /// every move that `unmake_move` is a perfect inverse of `make_move` and
    /// that the position never drifts into an illegal state. Stands in for a
    /// property-testing crate this workspace doesn't depend on.
    fn random_self_play_preserves_invariants() {
        use crate::movegen::{generate_moves, ALL};

        fastrand::seed(2024);
        for _ in 0..20 {
            let mut pos = Position::new();
            for _ in 0..40 {
                let moves = generate_moves::<ALL>(&pos);
                if moves.is_empty() {
                    break;
                }
                let mv = moves[fastrand::usize(..moves.len())];
                let before_hash = pos.zobrist_key();
                let before_occ = pos.occupancy().len();

                pos.make_move(mv);
                assert!(pos.occupancy().len() <= before_occ);
                assert_eq!(pos.occupancy_of(Color::White).len() + pos.occupancy_of(Color::Black).len(), pos.occupancy().len());

                let undone = pos.unmake_move();
                assert_eq!(undone, mv);
                assert_eq!(pos.zobrist_key(), before_hash, "unmake_move must restore the exact prior hash");
                assert_eq!(pos.occupancy().len(), before_occ);

                pos.make_move(mv);
            }
        }
    }
}
