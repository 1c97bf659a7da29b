//! Twist animation state machine.
//!
//! Each twist is Idle → Animating → Committing → Idle. Progress is
//! wall-clock based: `t = clamp(elapsed/duration, 0, 1)`, robust to slow
//! frames and clamped at 1. There is no stateful pivot node; the per-frame
//! rotation is computed analytically from `t`, and commit applies the exact
//! full-angle rotation once, then snaps positions to the half grid and
//! orientations to the nearest axis-aligned rotation.

use cgmath::{Matrix3, Quaternion, Rad, Rotation, Rotation3, Vector3};
use cubeframe_core::{CubeLattice, GridRotation, ResolvedMove, snap_point};
use web_time::{Duration, Instant};

use crate::AnimationSettings;

/// Error starting a twist.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TwistError {
    /// The twist's layer intersects cubies still animating from an earlier
    /// move. Retry once the earlier twist commits.
    #[error("twist blocked by {} in-flight cubie(s)", .cubies.len())]
    Blocked {
        /// Lattice indices of the busy cubies.
        cubies: Vec<usize>,
    },
}

/// A single in-flight layer rotation.
#[derive(Debug, Clone)]
pub struct TwistAnimation {
    cubies: Vec<usize>,
    axis: Vector3<f32>,
    angle: Rad<f32>,
    start: Instant,
    duration: Duration,
}
impl TwistAnimation {
    /// Raw time fraction in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Rotation to apply on top of the lattice transform of every cubie in
    /// this twist's subset when rendering at `now`.
    pub fn current_transform(&self, now: Instant, settings: &AnimationSettings) -> Quaternion<f32> {
        let t = (settings.twist_interpolation)(self.progress(now));
        Quaternion::from_axis_angle(self.axis, self.angle * t)
    }

    /// Indices of the cubies owned by this twist.
    pub fn cubies(&self) -> &[usize] {
        &self.cubies
    }

    /// Applies the full rotation to the lattice and snaps the results.
    fn commit(self, lattice: &mut CubeLattice) {
        let rotation = Quaternion::from_axis_angle(self.axis, self.angle);
        let rotation_matrix = Matrix3::from(rotation);
        for &i in &self.cubies {
            let cubie = &mut lattice.cubies_mut()[i];
            cubie.pos = snap_point(rotation.rotate_vector(cubie.pos));
            cubie.orientation =
                GridRotation::from_matrix(rotation_matrix * cubie.orientation.to_matrix());
        }
    }
}

/// All in-flight twists for one lattice.
///
/// Twists on disjoint cubie subsets may run concurrently; a twist whose
/// subset intersects an animating cubie is rejected with
/// [`TwistError::Blocked`] rather than corrupting positions.
#[derive(Debug, Default, Clone)]
pub struct TwistAnimationState {
    active: Vec<TwistAnimation>,
}
impl TwistAnimationState {
    /// Returns whether no twist is animating.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// In-flight twists.
    pub fn animations(&self) -> &[TwistAnimation] {
        &self.active
    }

    /// Returns whether any cubie in `cubies` is currently animating.
    pub fn any_busy(&self, cubies: &[usize]) -> bool {
        !self.busy_intersection(cubies).is_empty()
    }

    fn busy_intersection(&self, cubies: &[usize]) -> Vec<usize> {
        cubies
            .iter()
            .copied()
            .filter(|i| self.active.iter().any(|anim| anim.cubies.contains(i)))
            .collect()
    }

    /// Starts animating a resolved move at `now`.
    ///
    /// An empty cubie subset (unknown face letter upstream) is a silent
    /// no-op. A subset that overlaps an in-flight twist is rejected.
    pub fn start(
        &mut self,
        resolved: ResolvedMove,
        now: Instant,
        settings: &AnimationSettings,
    ) -> Result<(), TwistError> {
        if resolved.cubies.is_empty() {
            return Ok(());
        }
        let busy = self.busy_intersection(&resolved.cubies);
        if !busy.is_empty() {
            return Err(TwistError::Blocked { cubies: busy });
        }
        self.active.push(TwistAnimation {
            cubies: resolved.cubies,
            axis: resolved.axis,
            angle: resolved.angle,
            start: now,
            duration: settings.twist_duration,
        });
        Ok(())
    }

    /// Advances to the frame at `now`, committing every finished twist back
    /// into the lattice. Returns whether anything is still animating or was
    /// committed this frame (i.e. whether a redraw is needed).
    pub fn proceed(&mut self, lattice: &mut CubeLattice, now: Instant) -> bool {
        if self.active.is_empty() {
            return false;
        }
        let mut still_active = Vec::with_capacity(self.active.len());
        for anim in self.active.drain(..) {
            if anim.is_done(now) {
                anim.commit(lattice);
            } else {
                still_active.push(anim);
            }
        }
        self.active = still_active;
        true
    }

    /// Fast-forwards every in-flight twist to its commit/snap step, leaving
    /// the lattice exactly as a completed animation would.
    pub fn cancel_all(&mut self, lattice: &mut CubeLattice) {
        for anim in self.active.drain(..) {
            anim.commit(lattice);
        }
    }

    /// The extra rotation to render cubie `i` with at `now`, if it is
    /// animating.
    pub fn transform_for(
        &self,
        i: usize,
        now: Instant,
        settings: &AnimationSettings,
    ) -> Option<Quaternion<f32>> {
        self.active
            .iter()
            .find(|anim| anim.cubies.contains(&i))
            .map(|anim| anim.current_transform(now, settings))
    }
}

#[cfg(test)]
mod tests {
    use cubeframe_core::{Move, resolve};
    use pretty_assertions::assert_eq;
    use web_time::Duration;

    use super::*;

    fn occupancy(lattice: &CubeLattice) -> Vec<(i32, i32, i32)> {
        let mut v: Vec<_> = lattice
            .cubies()
            .iter()
            .map(|c| {
                (
                    (c.pos.x * 2.0) as i32,
                    (c.pos.y * 2.0) as i32,
                    (c.pos.z * 2.0) as i32,
                )
            })
            .collect();
        v.sort();
        v
    }

    fn run_twist(lattice: &mut CubeLattice, token: &str, start: Instant) {
        let mv = Move::parse(token).unwrap();
        let resolved = resolve(lattice, mv, 0);
        let settings = AnimationSettings::default();
        let mut state = TwistAnimationState::default();
        state.start(resolved, start, &settings).unwrap();
        // Mid-animation frame: still busy, nothing committed.
        assert!(state.proceed(lattice, start + Duration::from_millis(100)));
        assert!(!state.is_idle());
        // Past the end: committed.
        assert!(state.proceed(lattice, start + Duration::from_millis(300)));
        assert!(state.is_idle());
        assert!(!state.proceed(lattice, start + Duration::from_millis(301)));
    }

    #[test]
    fn quarter_turn_preserves_occupancy() {
        let start = Instant::now();
        for token in ["R", "U'", "F", "L", "D2", "B'"] {
            let mut lattice = CubeLattice::new(3);
            let rest = occupancy(&lattice);
            run_twist(&mut lattice, token, start);
            assert_eq!(rest, occupancy(&lattice), "move {token}");
        }
    }

    #[test]
    fn four_quarter_turns_restore_rest_positions() {
        let start = Instant::now();
        let mut lattice = CubeLattice::new(3);
        for _ in 0..4 {
            run_twist(&mut lattice, "R", start);
        }
        for cubie in lattice.cubies() {
            assert_eq!(cubie.home, cubie.pos);
            assert_eq!(GridRotation::IDENTITY, cubie.orientation);
        }
    }

    #[test]
    fn quarter_turn_permutes_cubies_within_the_layer() {
        let start = Instant::now();
        let mut lattice = CubeLattice::new(3);
        run_twist(&mut lattice, "U", start);
        let moved = lattice
            .cubies()
            .iter()
            .filter(|c| c.pos != c.home)
            .count();
        // The U layer's 8 non-center cubies move; the face center stays.
        assert_eq!(8, moved);
        for cubie in lattice.cubies() {
            if cubie.pos != cubie.home {
                assert_eq!(1.0, cubie.pos.y);
                assert_eq!(1.0, cubie.home.y);
            }
        }
    }

    #[test]
    fn overlapping_subsets_are_rejected() {
        let start = Instant::now();
        let settings = AnimationSettings::default();
        let lattice = CubeLattice::new(3);
        let mut state = TwistAnimationState::default();

        let r = resolve(&lattice, Move::parse("R").unwrap(), 0);
        state.start(r, start, &settings).unwrap();

        // U shares three cubies with the turning R layer.
        let u = resolve(&lattice, Move::parse("U").unwrap(), 0);
        let err = state.start(u, start, &settings).unwrap_err();
        let TwistError::Blocked { cubies } = err;
        assert_eq!(3, cubies.len());

        // L is disjoint from R and may animate concurrently.
        let l = resolve(&lattice, Move::parse("L").unwrap(), 0);
        state.start(l, start, &settings).unwrap();
        assert_eq!(2, state.animations().len());
    }

    #[test]
    fn cancel_matches_completed_animation() {
        let start = Instant::now();
        let settings = AnimationSettings::default();

        let mut completed = CubeLattice::new(3);
        run_twist(&mut completed, "F'", start);

        let mut cancelled = CubeLattice::new(3);
        let resolved = resolve(&cancelled, Move::parse("F'").unwrap(), 0);
        let mut state = TwistAnimationState::default();
        state.start(resolved, start, &settings).unwrap();
        state.cancel_all(&mut cancelled);

        assert_eq!(completed, cancelled);
        assert!(state.is_idle());
    }

    #[test]
    fn progress_is_clamped_and_time_based() {
        let start = Instant::now();
        let settings = AnimationSettings::default();
        let mut lattice = CubeLattice::new(3);
        let resolved = resolve(&lattice, Move::parse("R").unwrap(), 0);
        let mut state = TwistAnimationState::default();
        state.start(resolved, start, &settings).unwrap();

        let anim = &state.animations()[0];
        assert_eq!(0.0, anim.progress(start));
        assert_eq!(0.5, anim.progress(start + Duration::from_millis(125)));
        // Sparse frames overshoot wall-clock time but progress clamps at 1.
        assert_eq!(1.0, anim.progress(start + Duration::from_secs(10)));

        state.cancel_all(&mut lattice);
    }

    #[test]
    fn empty_subset_is_a_no_op() {
        let settings = AnimationSettings::default();
        let mut state = TwistAnimationState::default();
        let resolved = ResolvedMove {
            cubies: vec![],
            axis: Vector3::unit_x(),
            angle: Rad(0.0),
        };
        state.start(resolved, Instant::now(), &settings).unwrap();
        assert!(state.is_idle());
    }
}
