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

//! Decoder for the NNUE weight file this engine loads at startup.
//!
//! The format is this implementation's own (neither the teacher nor the
//! distilled specification fixes one), and is intentionally simple: every
//! integer is little-endian, and the file is just the two layers back to
//! back with a four-byte magic and two dimension fields up front so a
//! mismatched build fails loudly instead of reading garbage weights.
//!
//! ```text
//! offset  size                        field
//! 0       4                           magic: b"RNUE"
//! 4       4                           hidden width (u32), must equal HIDDEN
//! 8       4                           feature count (u32), must equal NUM_FEATURES
//! 12      HIDDEN * 2                  feature transformer biases (i16 each)
//! ..      NUM_FEATURES*HIDDEN*2       feature transformer weight columns, one
//!                                     per feature, HIDDEN i16s each
//! ..      4                           output layer bias (i32)
//! ..      2*HIDDEN*2                  output layer weights (i16 each): own
//!                                     accumulator lanes, then the opponent's
//! ..      4                           output scale (i32), divides the raw dot
//!                                     product down into centipawns
//! ```

use std::path::Path;

use raptor_base::nnue::{FeatureTransformer, Accumulator, HIDDEN, NUM_FEATURES};

use crate::{error::NnueError, evaluate::OutputLayer};

/// The four-byte tag every well-formed weight file starts with.
pub const MAGIC: [u8; 4] = *b"RNUE";

/// A fully decoded pair of NNUE layers, ready to be installed via
/// [`raptor_base::nnue::init`] and [`crate::evaluate::init`].
pub struct NnueWeights {
    pub transformer: FeatureTransformer,
    pub output: OutputLayer,
}

/// Read and decode an NNUE weight file from `path`.
///
/// # Errors
///
/// Returns [`NnueError`] if the file cannot be read, is truncated, carries
/// the wrong magic number, or declares a hidden width this build was not
/// compiled for.
pub fn load(path: &Path) -> Result<NnueWeights, NnueError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

fn decode(bytes: &[u8]) -> Result<NnueWeights, NnueError> {
    let mut cursor = Cursor::new(bytes);

    if cursor.take(4)? != MAGIC {
        return Err(NnueError::BadMagic);
    }
    let hidden = cursor.read_u32()?;
    if hidden as usize != HIDDEN {
        return Err(NnueError::WrongHiddenWidth { found: hidden });
    }
    let num_features = cursor.read_u32()?;
    if num_features as usize != NUM_FEATURES {
        return Err(NnueError::WrongHiddenWidth { found: num_features });
    }

    let biases = cursor.read_accumulator()?;
    let mut weights = Vec::with_capacity(NUM_FEATURES);
    for _ in 0..NUM_FEATURES {
        weights.push(cursor.read_accumulator()?);
    }
    let transformer = FeatureTransformer::from_parts(weights, biases);

    let output_bias = cursor.read_i32()?;
    let mut output_weights = Vec::with_capacity(2 * HIDDEN);
    for _ in 0..2 * HIDDEN {
        output_weights.push(i32::from(cursor.read_i16()?));
    }
    let scale = cursor.read_i32()?;
    let output = OutputLayer::from_parts(output_weights, output_bias, scale);

    Ok(NnueWeights { transformer, output })
}

/// A minimal little-endian byte cursor; pulled in-house rather than adding
/// a `byteorder`-style dependency for a handful of fixed-width reads.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Cursor<'a> {
        Cursor { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], NnueError> {
        let end = self.pos + n;
        let slice = self.bytes.get(self.pos..end).ok_or(NnueError::Truncated)?;
        self.pos = end;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32, NnueError> {
        Ok(u32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    fn read_i32(&mut self) -> Result<i32, NnueError> {
        Ok(i32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    fn read_i16(&mut self) -> Result<i16, NnueError> {
        Ok(i16::from_le_bytes(self.take(2)?.try_into().unwrap()))
    }

    fn read_accumulator(&mut self) -> Result<Accumulator, NnueError> {
        let mut acc = [0i16; HIDDEN];
        for lane in &mut acc {
            *lane = self.read_i16()?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(hidden: u32, num_features: u32, rest: &[u8]) -> Vec<u8> {
        let mut out = MAGIC.to_vec();
        out.extend_from_slice(&hidden.to_le_bytes());
        out.extend_from_slice(&num_features.to_le_bytes());
        out.extend_from_slice(rest);
        out
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = encode(HIDDEN as u32, NUM_FEATURES as u32, &[]);
        bytes[0] = b'X';
        assert_eq!(decode(&bytes).unwrap_err(), NnueError::BadMagic);
    }

    #[test]
    fn rejects_mismatched_hidden_width() {
        let bytes = encode(HIDDEN as u32 + 1, NUM_FEATURES as u32, &[]);
        assert!(matches!(decode(&bytes), Err(NnueError::WrongHiddenWidth { .. })));
    }

    #[test]
    fn rejects_truncated_file() {
        let bytes = encode(HIDDEN as u32, NUM_FEATURES as u32, &[0, 1, 2]);
        assert_eq!(decode(&bytes).unwrap_err(), NnueError::Truncated);
    }

    #[test]
    fn decodes_an_all_zero_file() {
        let mut rest = vec![0u8; HIDDEN * 2];
        rest.extend(vec![0u8; NUM_FEATURES * HIDDEN * 2]);
        rest.extend_from_slice(&0i32.to_le_bytes());
        rest.extend(vec![0u8; 2 * HIDDEN * 2]);
        rest.extend_from_slice(&64i32.to_le_bytes());
        let bytes = encode(HIDDEN as u32, NUM_FEATURES as u32, &rest);
        let weights = decode(&bytes).unwrap();
        let acc = weights.transformer.refresh(raptor_base::Square::E1, std::iter::empty());
        assert_eq!(acc, [0; HIDDEN]);
    }
}
