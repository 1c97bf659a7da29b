//! Closed enumerations for the six faces and seven sticker colors, and the
//! fixed tables relating faces to axes, signs, and facelet-string offsets.

use std::fmt;
use std::ops::{Index, IndexMut};

use cgmath::Vector3;
use strum::EnumIter;

/// Coordinate axis in the cubie lattice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Axis {
    /// X axis (R/L).
    X,
    /// Y axis (U/D).
    Y,
    /// Z axis (F/B).
    Z,
}
impl Axis {
    /// Unit vector along the axis.
    pub fn unit_vector(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }

    /// Component of `v` along the axis.
    pub fn of(self, v: Vector3<f32>) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// The other two axes, in a fixed order.
    pub fn perpendicular(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

/// One of the six cube faces.
///
/// The discriminant order is the facelet-string face order: U, L, F, R, B, D.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Face {
    /// Up (+Y).
    U,
    /// Left (−X).
    L,
    /// Front (+Z).
    F,
    /// Right (+X).
    R,
    /// Back (−Z).
    B,
    /// Down (−Y).
    D,
}
impl Face {
    /// All six faces in facelet-string order.
    pub const ORDER: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

    /// Parses a face letter.
    pub fn from_char(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'L' => Some(Face::L),
            'F' => Some(Face::F),
            'R' => Some(Face::R),
            'B' => Some(Face::B),
            'D' => Some(Face::D),
            _ => None,
        }
    }

    /// Face letter.
    pub fn char(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
        }
    }

    /// Axis whose extreme plane this face occupies.
    pub fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Sign of the face's outward normal along its axis.
    pub fn sign(self) -> f32 {
        match self {
            Face::U | Face::R | Face::F => 1.0,
            Face::D | Face::L | Face::B => -1.0,
        }
    }

    /// Lattice coordinate of the face plane, `sign · H` where `H = (N−1)/2`.
    pub fn plane_coord(self, half: f32) -> f32 {
        self.sign() * half
    }

    /// Offset of this face's facelets in the flat state string.
    pub fn base_index(self, n: usize) -> usize {
        self as usize * n * n
    }

    /// Linear index of the facelet at `(row, col)` on this face.
    ///
    /// Precondition: `row < n && col < n`. Out-of-range inputs are a
    /// programmer error; no validation is performed.
    pub fn facelet_index(self, n: usize, row: usize, col: usize) -> usize {
        self.base_index(n) + row * n + col
    }
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Sticker color, including the "unknown/unpainted" placeholder.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum FaceColor {
    /// White (`W`).
    White,
    /// Red (`R`).
    Red,
    /// Green (`G`).
    Green,
    /// Yellow (`Y`).
    Yellow,
    /// Orange (`O`).
    Orange,
    /// Blue (`B`).
    Blue,
    /// Unknown or unpainted (`_`).
    #[default]
    Unknown,
}
impl FaceColor {
    /// Face colors of a solved cube, in facelet-string face order.
    pub const SOLVED_BANDS: [FaceColor; 6] = [
        FaceColor::White,  // U
        FaceColor::Orange, // L
        FaceColor::Green,  // F
        FaceColor::Red,    // R
        FaceColor::Blue,   // B
        FaceColor::Yellow, // D
    ];

    /// Parses a color character.
    pub fn from_char(c: char) -> Option<FaceColor> {
        match c {
            'W' => Some(FaceColor::White),
            'R' => Some(FaceColor::Red),
            'G' => Some(FaceColor::Green),
            'Y' => Some(FaceColor::Yellow),
            'O' => Some(FaceColor::Orange),
            'B' => Some(FaceColor::Blue),
            '_' => Some(FaceColor::Unknown),
            _ => None,
        }
    }

    /// Color character.
    pub fn char(self) -> char {
        match self {
            FaceColor::White => 'W',
            FaceColor::Red => 'R',
            FaceColor::Green => 'G',
            FaceColor::Yellow => 'Y',
            FaceColor::Orange => 'O',
            FaceColor::Blue => 'B',
            FaceColor::Unknown => '_',
        }
    }
}
impl fmt::Display for FaceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Fixed-size collection with one value per [`Face`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>(pub [T; 6]);
impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face as usize]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face as usize]
    }
}
impl<T> PerFace<T> {
    /// Iterates over `(face, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ORDER.iter().map(|&f| (f, &self[f]))
    }
}
