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

//! Turning a position's two NNUE accumulators into a centipawn [`Eval`].
//!
//! The feature transformer (one weight column per HalfKP feature) lives in
//! `raptor_base::nnue`, since computing and incrementally maintaining it is
//! tied to board state. Everything downstream of that — the output affine
//! layer and the clipped-ReLU squashing in between — is search/evaluation's
//! concern, so it lives here instead.

use once_cell::sync::OnceCell;
use raptor_base::{nnue::Accumulator, nnue::HIDDEN, Position};

use crate::Eval;

/// Accumulator lanes are clamped to this range before the output dot
/// product, the usual "clipped ReLU" nonlinearity between NNUE layers.
const CLIP_MAX: i32 = 127;

static OUTPUT: OnceCell<OutputLayer> = OnceCell::new();

/// Install the process-wide output layer, paired with a
/// `raptor_base::nnue::init` call for the feature transformer. A no-op if
/// called more than once.
pub fn init(output: OutputLayer) {
    let _ = OUTPUT.set(output);
}

fn output() -> &'static OutputLayer {
    OUTPUT.get_or_init(OutputLayer::zeroed)
}

#[derive(Clone)]
/// The final affine layer: a dot product over both perspectives'
/// (clipped-ReLU'd) accumulators, plus a bias, divided down by a fixed
/// scale factor into centipawns.
pub struct OutputLayer {
    /// Weight for each lane of the side-to-move's own accumulator, followed
    /// by a weight for each lane of the opponent's.
    weights: Vec<i32>,
    bias: i32,
    /// Divisor applied to the raw dot product to land in centipawn range.
    scale: i32,
}

impl OutputLayer {
    #[must_use]
    /// An output layer that always evaluates to zero. Used before real
    /// weights are loaded, matching `FeatureTransformer::zeroed`.
    pub fn zeroed() -> OutputLayer {
        OutputLayer {
            weights: vec![0; 2 * HIDDEN],
            bias: 0,
            scale: 64,
        }
    }

    #[must_use]
    pub fn from_parts(weights: Vec<i32>, bias: i32, scale: i32) -> OutputLayer {
        assert_eq!(weights.len(), 2 * HIDDEN, "malformed output weight table");
        assert!(scale != 0, "NNUE output scale must be nonzero");
        OutputLayer { weights, bias, scale }
    }

    #[must_use]
    fn forward(&self, own: &Accumulator, other: &Accumulator) -> i32 {
        let mut acc = self.bias;
        for (i, &lane) in own.iter().enumerate() {
            acc += clipped(lane) * self.weights[i];
        }
        for (i, &lane) in other.iter().enumerate() {
            acc += clipped(lane) * self.weights[HIDDEN + i];
        }
        acc / self.scale
    }
}

#[inline(always)]
fn clipped(lane: i16) -> i32 {
    (lane as i32).clamp(0, CLIP_MAX)
}

#[must_use]
/// Statically evaluate `pos` from its side to move's perspective: positive
/// favors the side to move, negative favors the opponent. Never returns a
/// mate score; mate/stalemate/draw detection is search's job.
pub fn leaf_evaluate(pos: &Position) -> Eval {
    let stm = pos.side_to_move();
    let own = pos.nnue_accumulator(stm);
    let other = pos.nnue_accumulator(!stm);
    Eval::centipawns(output().forward(own, other).clamp(i16::MIN as i32, i16::MAX as i32) as i16)
}

#[must_use]
/// Like [`leaf_evaluate`], but always from White's perspective, for UCI
/// `info score cp` reporting.
pub fn static_evaluate_white(pos: &Position) -> Eval {
    leaf_evaluate(pos).in_perspective(pos.side_to_move())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_output_layer_is_a_dead_draw() {
        let layer = OutputLayer::zeroed();
        let acc = [0i16; HIDDEN];
        assert_eq!(layer.forward(&acc, &acc), 0);
    }

    #[test]
    fn clipped_relu_ignores_negative_lanes() {
        assert_eq!(clipped(-50), 0);
        assert_eq!(clipped(50), 50);
        assert_eq!(clipped(1000), CLIP_MAX);
    }

    #[test]
    fn leaf_evaluate_of_start_position_is_zero_with_no_weights_loaded() {
        let pos = Position::new();
        assert_eq!(leaf_evaluate(&pos), Eval::DRAW);
    }
}
