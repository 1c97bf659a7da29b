//! Cubie lattice: the N³ small cubes on a centered half-integer grid.

use cgmath::Vector3;

use crate::snap::GridRotation;
use crate::{Axis, FaceColor, PerFace};

/// One of the N³ small cubes composing the puzzle.
///
/// A cubie's identity is its rest coordinate; its current coordinate and
/// orientation change as layers are rotated. Sticker colors are re-derived
/// from the current coordinate by the color projector and never survive a
/// lattice reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubie {
    /// Rest coordinate, used for [`CubeLattice::reset()`].
    pub home: Vector3<f32>,
    /// Current lattice coordinate. Each component is a multiple of 0.5 in
    /// `[−H, H]` whenever no animation is in flight.
    pub pos: Vector3<f32>,
    /// Current orientation, always one of the 24 axis-aligned rotations.
    pub orientation: GridRotation,
    /// Sticker color per outward direction, indexed by the face whose
    /// outward normal matches that direction.
    pub stickers: PerFace<FaceColor>,
}
impl Cubie {
    fn at_rest(home: Vector3<f32>) -> Self {
        Cubie {
            home,
            pos: home,
            orientation: GridRotation::IDENTITY,
            stickers: PerFace::default(),
        }
    }

    /// Component of the current coordinate along `axis`.
    pub fn coord(&self, axis: Axis) -> f32 {
        axis.of(self.pos)
    }
}

/// The full set of N³ cubies for an N×N cube.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeLattice {
    n: usize,
    half: f32,
    cubies: Vec<Cubie>,
}
impl CubeLattice {
    /// Constructs the lattice for an N×N cube at its rest pose.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "cube size must be at least 1");
        let half = (n as f32 - 1.0) / 2.0;
        let coords = (0..n).map(|i| i as f32 - half);
        let mut cubies = Vec::with_capacity(n * n * n);
        for x in coords.clone() {
            for y in coords.clone() {
                for z in coords.clone() {
                    cubies.push(Cubie::at_rest(Vector3::new(x, y, z)));
                }
            }
        }
        CubeLattice { n, half, cubies }
    }

    /// Cube size N.
    pub fn n(&self) -> usize {
        self.n
    }
    /// Half-extent `H = (N−1)/2`. Half-integer for even N.
    pub fn half(&self) -> f32 {
        self.half
    }

    /// All cubies.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }
    /// All cubies, mutably.
    pub fn cubies_mut(&mut self) -> &mut [Cubie] {
        &mut self.cubies
    }
    /// The cubie at `index` (an index into [`Self::cubies()`]).
    pub fn cubie(&self, index: usize) -> &Cubie {
        &self.cubies[index]
    }

    /// Restores every cubie to its rest coordinate and identity orientation.
    ///
    /// Sticker colors are untouched; callers re-derive them by projecting a
    /// facelet state.
    pub fn reset(&mut self) {
        for cubie in &mut self.cubies {
            cubie.pos = cubie.home;
            cubie.orientation = GridRotation::IDENTITY;
        }
    }
}
