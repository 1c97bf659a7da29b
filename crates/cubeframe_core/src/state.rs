//! Flat facelet-string state.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::{Face, FaceColor};

/// Immutable facelet state: one color per facelet, all six faces
/// concatenated in the order U, L, F, R, B, D, row-major within each face.
///
/// A valid state for an N×N cube has exactly `6·N²` entries. States are
/// replaced wholesale on every change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletState(Vec<FaceColor>);

/// Error parsing a facelet string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStateError {
    /// A character outside the `{W,R,G,Y,O,B,_}` alphabet.
    #[error("invalid color character {c:?} at index {index}")]
    InvalidColor {
        /// Offending character.
        c: char,
        /// Byte index in the input string.
        index: usize,
    },
}

impl FaceletState {
    /// Returns the solved state for an N×N cube: six uniform color bands in
    /// face order (white up, green front).
    pub fn solved(n: usize) -> Self {
        FaceletState(
            FaceColor::SOLVED_BANDS
                .into_iter()
                .flat_map(|color| std::iter::repeat_n(color, n * n))
                .collect(),
        )
    }

    /// Number of facelets.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether the state has no facelets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cube size N such that the state has `6·N²` facelets, or `None` if the
    /// length is not of that form.
    pub fn cube_size(&self) -> Option<usize> {
        if self.0.len() % 6 != 0 {
            return None;
        }
        let face_len = self.0.len() / 6;
        let n = (face_len as f64).sqrt().round() as usize;
        (n * n == face_len && n > 0).then_some(n)
    }

    /// Color at linear index `i`.
    ///
    /// Precondition: `i < self.len()`.
    pub fn get(&self, i: usize) -> FaceColor {
        self.0[i]
    }

    /// Color of the facelet at `(face, row, col)` on an N×N cube.
    ///
    /// Precondition: `self.len() == 6·n²` and `row, col < n`.
    pub fn facelet(&self, n: usize, face: Face, row: usize, col: usize) -> FaceColor {
        self.0[face.facelet_index(n, row, col)]
    }

    /// Returns whether every face is uniformly colored with a real color.
    ///
    /// This is orientation-independent: it does not matter which color ends
    /// up on which face, only that each face is a single color.
    pub fn is_any_orientation_solved(&self) -> bool {
        let Some(n) = self.cube_size() else {
            return false;
        };
        self.0.chunks(n * n).all(|face| {
            face.iter().all_equal() && face.first().is_some_and(|&c| c != FaceColor::Unknown)
        })
    }
}

impl FromStr for FaceletState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, ParseStateError> {
        s.chars()
            .enumerate()
            .map(|(index, c)| {
                FaceColor::from_char(c).ok_or(ParseStateError::InvalidColor { c, index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FaceletState)
    }
}
impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
