//! Geometry/state engine for N×N Rubik's-style cubes.
//!
//! The authoritative cube state is a flat facelet string (see
//! [`FaceletState`]); this crate maps it onto a 3D lattice of cubies,
//! selects the cubie layer affected by a named move, and provides the
//! exact snapping rules used when a layer rotation is committed back to
//! the lattice. Animation and rendering live downstream in
//! `cubeframe_view`.

mod face;
mod lattice;
mod moves;
mod project;
mod snap;
mod state;

pub use face::{Axis, Face, FaceColor, PerFace};
pub use lattice::{CubeLattice, Cubie};
pub use moves::{KNOWN_MOVES, Move, ResolvedMove, resolve};
pub use project::{ProjectionPolicy, project};
pub use snap::{GridRotation, snap_half, snap_point};
pub use state::{FaceletState, ParseStateError};
