//! Viewport layer for Cubeframe: owns a cubie lattice, animates layer
//! turns, and exposes per-frame render data without depending on any
//! particular rendering technology.

mod animation;
mod settings;
mod viewport;

pub use animation::{TwistAnimation, TwistAnimationState, TwistError};
pub use settings::{AnimationSettings, interpolate};
pub use viewport::{CubeViewport, CubieRenderData};
