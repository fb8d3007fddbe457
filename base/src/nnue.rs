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

//! The HalfKP-style feature transformer, and the per-color accumulator it
//! maintains incrementally.
//!
//! This crate performs no file I/O of its own (that is `raptor_engine`'s
//! job, since only it links a decoder for the NNUE weight file). Instead,
//! the transformer weights live behind a single process-wide cell that the
//! driver populates once at startup via [`init`]; until that happens (e.g.
//! in tests and in `perft`, which never touch the evaluator) a zeroed
//! transformer is used so every accumulator value is simply its bias.

use once_cell::sync::OnceCell;

use super::{Color, Kind, Square};

/// Width of the accumulator (the hidden layer the feature transformer
/// produces for one color's perspective).
pub const HIDDEN: usize = 256;

/// Number of distinct (king square, piece kind, piece color, piece square)
/// features in the HalfKP-style input layer.
pub const NUM_FEATURES: usize = 64 * Kind::NUM_TYPES * 2 * 64;

static TRANSFORMER: OnceCell<FeatureTransformer> = OnceCell::new();

/// Install the process-wide feature transformer. Intended to be called
/// exactly once, from global initialisation, before any `Position` is
/// constructed with evaluation in mind. Calling it a second time is a
/// no-op: the first transformer installed wins.
pub fn init(transformer: FeatureTransformer) {
    let _ = TRANSFORMER.set(transformer);
}

/// Borrow the installed feature transformer, or a zeroed placeholder if
/// [`init`] has not been called yet.
pub fn transformer() -> &'static FeatureTransformer {
    TRANSFORMER.get_or_init(FeatureTransformer::zeroed)
}

#[inline(always)]
#[must_use]
/// Compute the feature index for a piece of `kind` and `color` standing on
/// `piece_sq`, as seen from a king on `king_sq`.
pub fn feature_index(king_sq: Square, kind: Kind, color: Color, piece_sq: Square) -> usize {
    let k = king_sq as usize;
    let t = kind as usize;
    let c = color as usize;
    let s = piece_sq as usize;
    ((k * Kind::NUM_TYPES + t) * 2 + c) * 64 + s
}

/// One accumulator, i.e. the hidden-layer activations computed for a single
/// color's king perspective.
pub type Accumulator = [i16; HIDDEN];

#[derive(Clone)]
/// The feature transformer: one weight column per input feature, and a
/// shared bias added in at refresh time.
pub struct FeatureTransformer {
    weights: Vec<Accumulator>,
    biases: Accumulator,
}

impl FeatureTransformer {
    /// Construct a transformer whose every weight and bias is zero. Used as
    /// a structural placeholder before real weights are loaded, and in
    /// tests that do not exercise evaluation.
    #[must_use]
    pub fn zeroed() -> FeatureTransformer {
        FeatureTransformer {
            weights: vec![[0; HIDDEN]; NUM_FEATURES],
            biases: [0; HIDDEN],
        }
    }

    /// Construct a transformer from already-decoded weights and biases.
    /// `weights.len()` must equal [`NUM_FEATURES`]; this is the seam
    /// `raptor_engine`'s NNUE-file loader uses after parsing the weight
    /// file.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len() != NUM_FEATURES`.
    #[must_use]
    pub fn from_parts(weights: Vec<Accumulator>, biases: Accumulator) -> FeatureTransformer {
        assert_eq!(weights.len(), NUM_FEATURES, "malformed feature weight table");
        FeatureTransformer { weights, biases }
    }

    /// Fully recompute an accumulator for `king_sq` from the given iterator
    /// of (kind, color, square) active features. Used on construction and
    /// whenever the owning king moves.
    pub fn refresh(&self, king_sq: Square, features: impl Iterator<Item = (Kind, Color, Square)>) -> Accumulator {
        let mut acc = self.biases;
        for (kind, color, sq) in features {
            self.add_feature(&mut acc, king_sq, kind, color, sq);
        }
        acc
    }

    #[inline(always)]
    /// Add one feature's weight column into `acc` in place.
    pub fn add_feature(&self, acc: &mut Accumulator, king_sq: Square, kind: Kind, color: Color, sq: Square) {
        let idx = feature_index(king_sq, kind, color, sq);
        let col = &self.weights[idx];
        for i in 0..HIDDEN {
            acc[i] = acc[i].saturating_add(col[i]);
        }
    }

    #[inline(always)]
    /// Subtract one feature's weight column from `acc` in place.
    pub fn remove_feature(&self, acc: &mut Accumulator, king_sq: Square, kind: Kind, color: Color, sq: Square) {
        let idx = feature_index(king_sq, kind, color, sq);
        let col = &self.weights[idx];
        for i in 0..HIDDEN {
            acc[i] = acc[i].saturating_sub(col[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_transformer_gives_zero_accumulator() {
        let t = FeatureTransformer::zeroed();
        let acc = t.refresh(Square::E1, std::iter::once((Kind::Pawn, Color::White, Square::E2)));
        assert_eq!(acc, [0; HIDDEN]);
    }

    #[test]
    fn add_then_remove_is_identity() {
        let mut weights = vec![[0i16; HIDDEN]; NUM_FEATURES];
        let idx = feature_index(Square::E1, Kind::Knight, Color::White, Square::F3);
        weights[idx] = [7; HIDDEN];
        let t = FeatureTransformer::from_parts(weights, [1; HIDDEN]);

        let mut acc = [1; HIDDEN];
        t.add_feature(&mut acc, Square::E1, Kind::Knight, Color::White, Square::F3);
        assert_eq!(acc, [8; HIDDEN]);
        t.remove_feature(&mut acc, Square::E1, Kind::Knight, Color::White, Square::F3);
        assert_eq!(acc, [1; HIDDEN]);
    }

    #[test]
    fn feature_index_distinguishes_inputs() {
        let a = feature_index(Square::E1, Kind::Pawn, Color::White, Square::E2);
        let b = feature_index(Square::E1, Kind::Pawn, Color::Black, Square::E2);
        let c = feature_index(Square::E1, Kind::Knight, Color::White, Square::E2);
        let d = feature_index(Square::D1, Kind::Pawn, Color::White, Square::E2);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
