//! Animation settings, passed explicitly to every operation that needs
//! them; there is no global preferences store.

use web_time::Duration;

/// Interpolation functions.
pub mod interpolate {
    use std::f32::consts::PI;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    pub type InterpolateFn = fn(f32) -> f32;

    /// Constant-speed interpolation.
    pub const LINEAR: InterpolateFn = |x| x;
    /// Interpolate using cosine from 0.0 to PI.
    pub const COSINE: InterpolateFn = |x| (1.0 - (x * PI).cos()) / 2.0;
}

/// Settings for twist animation.
#[derive(Debug, Copy, Clone)]
pub struct AnimationSettings {
    /// Wall-clock duration of one twist.
    pub twist_duration: Duration,
    /// Easing applied to the raw time fraction when rendering. Commit-time
    /// geometry never depends on this.
    pub twist_interpolation: interpolate::InterpolateFn,
}
impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            twist_duration: Duration::from_millis(250),
            twist_interpolation: interpolate::COSINE,
        }
    }
}
