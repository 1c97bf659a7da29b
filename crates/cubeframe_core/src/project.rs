//! Color projection: deriving per-cubie sticker colors from a facelet state.

use cgmath::Vector3;

use crate::{CubeLattice, Face, FaceletState, PerFace};

/// Which facelets to paint onto the lattice.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProjectionPolicy {
    /// Paint only cubie faces lying exactly on the outer surface.
    #[default]
    OuterOnly,
    /// Additionally paint the facelets that are hidden at rest but become
    /// visible when a layer is mid-turn, approximating the visible surface
    /// of all but the innermost core.
    AllLayers,
}

/// Re-derives every cubie's sticker colors from `state`.
///
/// The color of each slot is determined purely by the cubie's *current*
/// coordinate. Returns `false` without touching the lattice when the state
/// length does not match the lattice's cube size; callers must treat the
/// unchanged colors as a silent validation failure.
pub fn project(lattice: &mut CubeLattice, state: &FaceletState, policy: ProjectionPolicy) -> bool {
    let n = lattice.n();
    if state.len() != 6 * n * n {
        log::warn!(
            "facelet state has {} entries but an {n}×{n} cube needs {}; not projecting",
            state.len(),
            6 * n * n,
        );
        return false;
    }

    let half = lattice.half();
    for cubie in lattice.cubies_mut() {
        cubie.stickers = PerFace::default();
        for face in Face::ORDER {
            if colorable(face, cubie.pos, half, policy) {
                let (row, col) = sticker_coords(face, cubie.pos, half);
                cubie.stickers[face] = state.facelet(n, face, row, col);
            }
        }
    }
    true
}

/// Whether the cubie at `pos` gets a sticker in `face`'s outward direction.
fn colorable(face: Face, pos: Vector3<f32>, half: f32, policy: ProjectionPolicy) -> bool {
    // Coordinate toward the face: `half` exactly on the face plane.
    let toward = face.sign() * face.axis().of(pos);
    match policy {
        ProjectionPolicy::OuterOnly => toward == half,
        // One layer in from the surface, and within the slice pyramid
        // bounded by the orthogonal directions.
        ProjectionPolicy::AllLayers => {
            toward >= half - 1.0
                && face
                    .axis()
                    .perpendicular()
                    .into_iter()
                    .all(|axis| axis.of(pos).abs() <= toward)
        }
    }
}

/// `(row, col)` of the facelet covering `pos` on `face`.
fn sticker_coords(face: Face, pos: Vector3<f32>, half: f32) -> (usize, usize) {
    let Vector3 { x, y, z } = pos;
    let (row, col) = match face {
        Face::F => (half - y, x + half),
        Face::B => (half - y, half - x),
        Face::R => (half - y, half - z),
        Face::L => (half - y, z + half),
        Face::U => (z + half, x + half),
        Face::D => (half - z, x + half),
    };
    (row as usize, col as usize)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FaceColor;

    #[test]
    fn outer_projection_round_trips_every_facelet() {
        for n in [2, 3, 4] {
            let mut lattice = CubeLattice::new(n);
            // Distinct-ish state: cycle through the six real colors.
            let state: FaceletState = "WRGYOB"
                .chars()
                .cycle()
                .take(6 * n * n)
                .collect::<String>()
                .parse()
                .unwrap();
            assert!(project(&mut lattice, &state, ProjectionPolicy::OuterOnly));

            let half = lattice.half();
            let mut seen = 0;
            for cubie in lattice.cubies() {
                for (face, &color) in cubie.stickers.iter() {
                    if color == FaceColor::Unknown {
                        continue;
                    }
                    seen += 1;
                    // The visible slot must reproduce the original character
                    // at its (face, row, col).
                    let (row, col) = sticker_coords(face, cubie.pos, half);
                    assert_eq!(state.facelet(n, face, row, col), color);
                    assert_eq!(half, face.sign() * cubie.coord(face.axis()));
                }
            }
            assert_eq!(6 * n * n, seen, "every facelet appears exactly once");
        }
    }

    #[test]
    fn outer_projection_corner_facelets() {
        let mut lattice = CubeLattice::new(3);
        let state = FaceletState::solved(3);
        assert!(project(&mut lattice, &state, ProjectionPolicy::OuterOnly));

        for cubie in lattice.cubies() {
            let visible = cubie
                .stickers
                .iter()
                .filter(|&(_, &c)| c != FaceColor::Unknown)
                .count();
            let on_surface = [cubie.pos.x, cubie.pos.y, cubie.pos.z]
                .into_iter()
                .filter(|c| c.abs() == 1.0)
                .count();
            assert_eq!(on_surface, visible);
        }
    }

    #[test]
    fn all_layers_projection_extends_one_slice_inward() {
        let mut lattice = CubeLattice::new(3);
        let state = FaceletState::solved(3);
        assert!(project(&mut lattice, &state, ProjectionPolicy::AllLayers));

        // On a 3×3 the inner slice along each axis is the single central
        // column, so the center cubie mirrors every face-center facelet.
        let center = lattice
            .cubies()
            .iter()
            .find(|c| c.pos == Vector3::new(0.0, 0.0, 0.0))
            .unwrap();
        assert_eq!(FaceColor::Green, center.stickers[Face::F]);
        assert_eq!(FaceColor::White, center.stickers[Face::U]);
        assert_eq!(FaceColor::Red, center.stickers[Face::R]);

        // An edge cubie of the middle slice is outside the F slice pyramid
        // (|x| > 0) so it only mirrors the faces it actually sits on.
        let mid_edge = lattice
            .cubies()
            .iter()
            .find(|c| c.pos == Vector3::new(1.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(FaceColor::Unknown, mid_edge.stickers[Face::F]);
        assert_eq!(FaceColor::Red, mid_edge.stickers[Face::R]);
        assert_eq!(FaceColor::White, mid_edge.stickers[Face::U]);
    }

    #[test]
    fn wrong_length_state_is_a_no_op() {
        let mut lattice = CubeLattice::new(3);
        let good = FaceletState::solved(3);
        assert!(project(&mut lattice, &good, ProjectionPolicy::OuterOnly));
        let before = lattice.clone();

        let short: FaceletState = "W".repeat(53).parse().unwrap();
        assert!(!project(&mut lattice, &short, ProjectionPolicy::OuterOnly));
        assert!(!project(&mut lattice, &short, ProjectionPolicy::AllLayers));
        assert_eq!(before, lattice);
    }
}
