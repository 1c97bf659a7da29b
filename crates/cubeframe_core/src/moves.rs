//! Move tokens and layer selection.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

use cgmath::{Rad, Vector3};

use crate::{CubeLattice, Face};

/// The 18 standard face-move tokens accepted by the move/solve service.
pub const KNOWN_MOVES: [&str; 18] = [
    "U", "U'", "U2", "R", "R'", "R2", "F", "F'", "F2", "D", "D'", "D2", "L", "L'", "L2", "B", "B'",
    "B2",
];

/// A parsed move token: face letter plus optional `'` and/or `2` modifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face whose layer turns.
    pub face: Face,
    /// Whether the token contains `'` (reverse turn).
    pub prime: bool,
    /// Whether the token contains `2` (half turn).
    pub double: bool,
}
impl Move {
    /// Parses a move token, or `None` if the first character is not a face
    /// letter. Unknown faces are a soft failure: callers treat `None` as a
    /// no-op rather than an error.
    pub fn parse(token: &str) -> Option<Move> {
        let face = Face::from_char(token.chars().next()?)?;
        Some(Move {
            face,
            prime: token.contains('\''),
            double: token.contains('2'),
        })
    }

    /// Signed rotation angle in radians about the face's axis.
    ///
    /// A plain turn is −90°; `'` flips it to +90°; `2` overrides both with
    /// +180°. The three faces with negative axis coordinate (L, D, B) then
    /// invert the result so that the turn reads clockwise from outside the
    /// face. That inversion is a deliberate convention carried by the whole
    /// engine, not a simplification.
    pub fn angle(self) -> Rad<f32> {
        let mut angle = if self.double {
            PI
        } else if self.prime {
            FRAC_PI_2
        } else {
            -FRAC_PI_2
        };
        if self.face.sign() < 0.0 {
            angle = -angle;
        }
        Rad(angle)
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.double {
            write!(f, "2")?;
        } else if self.prime {
            write!(f, "'")?;
        }
        Ok(())
    }
}

/// A move resolved against a lattice: which cubies turn, about what.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMove {
    /// Indices into [`CubeLattice::cubies()`] of the rotating slab.
    pub cubies: Vec<usize>,
    /// Unit rotation axis.
    pub axis: Vector3<f32>,
    /// Signed rotation angle.
    pub angle: Rad<f32>,
}

/// Selects the cubie layer for `mv`, `layer_depth` planes inward from the
/// face (0 = outermost layer only).
pub fn resolve(lattice: &CubeLattice, mv: Move, layer_depth: usize) -> ResolvedMove {
    let axis = mv.face.axis();
    let face_coord = mv.face.plane_coord(lattice.half());
    let layer_coord = face_coord - layer_depth as f32 * mv.face.sign();

    let cubies = lattice
        .cubies()
        .iter()
        .enumerate()
        .filter(|(_, cubie)| cubie.coord(axis) == layer_coord)
        .map(|(i, _)| i)
        .collect();

    ResolvedMove {
        cubies,
        axis: axis.unit_vector(),
        angle: mv.angle(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_tokens() {
        let r = Move::parse("R").unwrap();
        assert_eq!((Face::R, false, false), (r.face, r.prime, r.double));
        let r_prime = Move::parse("R'").unwrap();
        assert!(r_prime.prime && !r_prime.double);
        let r2 = Move::parse("R2").unwrap();
        assert!(r2.double);
        assert_eq!(None, Move::parse("X"));
        assert_eq!(None, Move::parse(""));
    }

    #[test]
    fn display_round_trips_known_moves() {
        for token in KNOWN_MOVES {
            assert_eq!(token, Move::parse(token).unwrap().to_string());
        }
    }

    #[test]
    fn angle_conventions() {
        assert_eq!(Rad(-FRAC_PI_2), Move::parse("R").unwrap().angle());
        assert_eq!(Rad(FRAC_PI_2), Move::parse("R'").unwrap().angle());
        assert_eq!(Rad(PI), Move::parse("R2").unwrap().angle());
        // L, D, B invert relative to the naive axis-aligned turn.
        assert_eq!(Rad(FRAC_PI_2), Move::parse("L").unwrap().angle());
        assert_eq!(Rad(-FRAC_PI_2), Move::parse("L'").unwrap().angle());
        assert_eq!(Rad(-PI), Move::parse("D2").unwrap().angle());
        assert_eq!(Rad(FRAC_PI_2), Move::parse("B").unwrap().angle());
    }

    #[test]
    fn outer_layer_has_n_squared_cubies() {
        for n in [1, 2, 3, 5] {
            let lattice = CubeLattice::new(n);
            for token in ["U", "L", "F", "R", "B", "D"] {
                let resolved = resolve(&lattice, Move::parse(token).unwrap(), 0);
                assert_eq!(n * n, resolved.cubies.len(), "n={n} move={token}");

                let mv = Move::parse(token).unwrap();
                let coord = mv.face.plane_coord(lattice.half());
                for &i in &resolved.cubies {
                    assert_eq!(coord, lattice.cubie(i).coord(mv.face.axis()));
                }
            }
        }
    }

    #[test]
    fn layer_depth_selects_inner_slabs() {
        let lattice = CubeLattice::new(5);
        let mv = Move::parse("F").unwrap();
        for depth in 0..5 {
            let resolved = resolve(&lattice, mv, depth);
            assert_eq!(25, resolved.cubies.len());
            let expected_z = 2.0 - depth as f32;
            for &i in &resolved.cubies {
                assert_eq!(expected_z, lattice.cubie(i).pos.z);
            }
        }
    }

    #[test]
    fn r_family_selects_the_same_subset() {
        let lattice = CubeLattice::new(3);
        let r = resolve(&lattice, Move::parse("R").unwrap(), 0);
        let r_prime = resolve(&lattice, Move::parse("R'").unwrap(), 0);
        let r2 = resolve(&lattice, Move::parse("R2").unwrap(), 0);
        assert_eq!(r.cubies, r_prime.cubies);
        assert_eq!(r.cubies, r2.cubies);
        assert_eq!(Rad(-r.angle.0), r_prime.angle);
        assert_eq!(Rad(PI), r2.angle);
        assert_eq!(9, r.cubies.len());
        for &i in &r.cubies {
            assert_eq!(1.0, lattice.cubie(i).pos.x);
        }
    }
}
