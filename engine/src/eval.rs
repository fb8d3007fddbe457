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

//! A wrapper around the centipawn score produced by evaluation and search.

use std::{
    fmt::{self, Display, Formatter},
    ops::Neg,
};

use raptor_base::Color;

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
/// The evaluation of a position, in centipawns from White's perspective: a
/// positive value favors White, a negative value favors Black, and zero is a
/// dead draw.
///
/// Magnitudes above [`Eval::MATE_CUTOFF`] encode forced mates rather than
/// material: `Eval::MATE_0_VAL` is mate delivered on the current move, and
/// each ply further from the mate shrinks the magnitude by one.
pub struct Eval(i16);

impl Eval {
    /// Smaller than every ordinary evaluation or mate score.
    pub const MIN: Eval = Eval(-Eval::MATE_0_VAL - 1000);
    /// Larger than every ordinary evaluation or mate score.
    pub const MAX: Eval = Eval(Eval::MATE_0_VAL + 1000);
    /// Black has delivered mate.
    pub const BLACK_MATE: Eval = Eval(-Eval::MATE_0_VAL);
    /// White has delivered mate.
    pub const WHITE_MATE: Eval = Eval(Eval::MATE_0_VAL);
    /// A dead draw.
    pub const DRAW: Eval = Eval(0);

    const MATE_0_VAL: i16 = 30_000;
    /// Evaluations with a magnitude above this are mate scores, not material.
    const MATE_CUTOFF: i16 = 29_000;
    const PAWN_VALUE: i16 = 100;

    #[inline(always)]
    #[must_use]
    /// An evaluation of `x` centipawns.
    pub const fn centipawns(x: i16) -> Eval {
        Eval(x)
    }

    #[inline(always)]
    #[must_use]
    /// The evaluation of a position where White delivers mate in `nplies`
    /// half-moves. Negate the result for Black to mate.
    pub const fn mate_in(nplies: u16) -> Eval {
        Eval(Eval::MATE_0_VAL - nplies as i16)
    }

    #[inline(always)]
    #[must_use]
    /// Move a mate score one ply further from the root, since a mate found
    /// `n` plies down in a child's subtree is `n + 1` plies away as seen
    /// from here. Ordinary evaluations are unaffected.
    pub const fn step_forward(self) -> Eval {
        if self.0 > Eval::MATE_CUTOFF {
            Eval(self.0 + 1)
        } else if self.0 < -Eval::MATE_CUTOFF {
            Eval(self.0 - 1)
        } else {
            self
        }
    }

    #[inline(always)]
    #[must_use]
    /// The inverse of [`Eval::step_forward`]: move a mate score one ply
    /// closer to the root, e.g. when propagating a child's score back up.
    pub const fn step_back(self) -> Eval {
        if self.0 > Eval::MATE_CUTOFF {
            Eval(self.0 - 1)
        } else if self.0 < -Eval::MATE_CUTOFF {
            Eval(self.0 + 1)
        } else {
            self
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_mate(self) -> bool {
        self.0 > Eval::MATE_CUTOFF || self.0 < -Eval::MATE_CUTOFF
    }

    #[must_use]
    /// The number of moves (not plies) until mate, or `None` if this is not
    /// a mate score.
    pub const fn moves_to_mate(self) -> Option<u8> {
        if !self.is_mate() {
            return None;
        }
        Some(if self.0 > 0 {
            ((Eval::MATE_0_VAL - self.0 + 1) / 2) as u8
        } else {
            ((Eval::MATE_0_VAL + self.0 + 1) / 2) as u8
        })
    }

    #[inline(always)]
    #[must_use]
    pub const fn centipawn_val(self) -> i16 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    /// Flip this evaluation into `player`'s perspective: unchanged for
    /// White, negated for Black. An involution.
    pub const fn in_perspective(self, player: Color) -> Eval {
        match player {
            Color::White => self,
            Color::Black => Eval(-self.0),
        }
    }
}

impl Display for Eval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0 > Eval::MATE_CUTOFF {
            write!(f, "+M{}", (Eval::MATE_0_VAL - self.0 + 1) / 2)
        } else if self.0 < -Eval::MATE_CUTOFF {
            write!(f, "-M{}", (Eval::MATE_0_VAL + self.0 + 1) / 2)
        } else {
            write!(f, "{:+.2}", self.0 as f32 / Eval::PAWN_VALUE as f32)
        }
    }
}

impl Neg for Eval {
    type Output = Eval;
    #[inline(always)]
    fn neg(self) -> Eval {
        Eval(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_eval_is_unaffected_by_stepping() {
        let e = Eval::centipawns(35);
        assert_eq!(e.step_forward(), e);
        assert_eq!(e.step_back(), e);
    }

    #[test]
    fn mate_in_zero_steps_back_to_mate_in_one() {
        assert_eq!(Eval::mate_in(0).step_back(), Eval::mate_in(1));
        assert_eq!(Eval::mate_in(1).step_forward(), Eval::mate_in(0));
    }

    #[test]
    fn moves_to_mate_counts_full_moves() {
        assert_eq!(Eval::centipawns(250).moves_to_mate(), None);
        assert_eq!(Eval::mate_in(5).moves_to_mate(), Some(3));
        assert_eq!((-Eval::mate_in(4)).moves_to_mate(), Some(2));
    }

    #[test]
    fn in_perspective_flips_only_for_black() {
        let e = Eval::centipawns(120);
        assert_eq!(e.in_perspective(Color::White), e);
        assert_eq!(e.in_perspective(Color::Black), Eval::centipawns(-120));
    }

    #[test]
    fn white_mate_outranks_every_ordinary_eval() {
        assert!(Eval::mate_in(10) > Eval::centipawns(i16::MAX - 1000));
        assert!(Eval::BLACK_MATE < Eval::centipawns(-(Eval::MATE_CUTOFF)));
    }
}
