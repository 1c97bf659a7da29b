//! An owned cube viewport: lattice + projected colors + twist queue.

use std::collections::VecDeque;

use cgmath::Matrix4;
use cubeframe_core::{
    CubeLattice, FaceColor, FaceletState, Move, PerFace, ProjectionPolicy, project, resolve,
};
use web_time::Instant;

use crate::{AnimationSettings, TwistAnimationState, TwistError};

/// Everything needed to draw one cubie this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubieRenderData {
    /// World transform: animation rotation (if any) ∘ lattice translation ∘
    /// committed orientation.
    pub transform: Matrix4<f32>,
    /// Sticker color per face direction.
    pub stickers: PerFace<FaceColor>,
}

/// One independent cube view: the lattice, the facelet state last projected
/// onto it, and the animation pipeline. Instances are self-contained;
/// multiple viewports (or tests) coexist freely.
///
/// The facelet string remains the source of truth for cube *state*; the
/// lattice positions here are a visual mirror maintained by the animation
/// commits. Callers should treat cubie positions as final only while
/// [`Self::is_animating()`] is false.
#[derive(Debug, Clone)]
pub struct CubeViewport {
    lattice: CubeLattice,
    state: FaceletState,
    policy: ProjectionPolicy,
    /// Animation settings, adjustable between twists.
    pub settings: AnimationSettings,
    anim: TwistAnimationState,
    /// Moves waiting for their layer to become free.
    queue: VecDeque<(Move, usize)>,
}
impl CubeViewport {
    /// Constructs a viewport showing a solved N×N cube.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        let mut lattice = CubeLattice::new(n);
        let state = FaceletState::solved(n);
        let policy = ProjectionPolicy::default();
        project(&mut lattice, &state, policy);
        Self {
            lattice,
            state,
            policy,
            settings: AnimationSettings::default(),
            anim: TwistAnimationState::default(),
            queue: VecDeque::new(),
        }
    }

    /// Cube size N.
    pub fn n(&self) -> usize {
        self.lattice.n()
    }
    /// The cubie lattice.
    pub fn lattice(&self) -> &CubeLattice {
        &self.lattice
    }
    /// The facelet state last projected onto the lattice.
    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    /// Replaces the facelet state and re-derives all sticker colors.
    ///
    /// Returns `false` (and repaints nothing) if the state length does not
    /// match this viewport's cube size.
    pub fn load_state(&mut self, state: FaceletState) -> bool {
        if !project(&mut self.lattice, &state, self.policy) {
            return false;
        }
        self.state = state;
        true
    }

    /// Switches projection policy and repaints.
    pub fn set_policy(&mut self, policy: ProjectionPolicy) {
        self.policy = policy;
        project(&mut self.lattice, &self.state, policy);
    }

    /// Restores the rest pose, drops queued and in-flight twists, and
    /// repaints from the current facelet state.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.anim = TwistAnimationState::default();
        self.lattice.reset();
        project(&mut self.lattice, &self.state, self.policy);
    }

    /// Parses a move token and starts (or queues) the layer turn at `now`.
    ///
    /// `layer_depth` counts planes inward from the face; 0 is the outermost
    /// layer. Returns `false` for an unknown token, which is a no-op. If the
    /// move's layer is busy the move waits in the queue and starts from a
    /// later [`Self::step()`].
    pub fn apply_move(&mut self, token: &str, layer_depth: usize, now: Instant) -> bool {
        let Some(mv) = Move::parse(token) else {
            log::warn!("ignoring unknown move token {token:?}");
            return false;
        };
        self.queue.push_back((mv, layer_depth));
        self.start_queued(now);
        true
    }

    /// Queues every token of a space-separated solution string.
    ///
    /// Unknown tokens are skipped with a warning; the rest still play.
    pub fn play_solution(&mut self, solution: &str, now: Instant) {
        for token in solution.split_whitespace() {
            self.apply_move(token, 0, now);
        }
    }

    /// Starts queued moves whose layers are free, preserving order per
    /// lattice: a blocked move at the queue front also blocks the moves
    /// behind it, so turns never commute accidentally.
    fn start_queued(&mut self, now: Instant) {
        while let Some(&(mv, layer_depth)) = self.queue.front() {
            let resolved = resolve(&self.lattice, mv, layer_depth);
            match self.anim.start(resolved, now, &self.settings) {
                Ok(()) => {
                    self.queue.pop_front();
                }
                Err(TwistError::Blocked { .. }) => break,
            }
        }
    }

    /// Advances animations to the frame at `now`. Returns whether a redraw
    /// is needed.
    pub fn step(&mut self, now: Instant) -> bool {
        let needs_redraw = self.anim.proceed(&mut self.lattice, now);
        self.start_queued(now);
        needs_redraw || !self.anim.is_idle()
    }

    /// Returns whether any twist is animating or waiting.
    pub fn is_animating(&self) -> bool {
        !self.anim.is_idle() || !self.queue.is_empty()
    }

    /// Fast-forwards all in-flight and queued twists to their committed
    /// state, leaving the lattice consistent.
    pub fn cancel_twists(&mut self, now: Instant) {
        self.anim.cancel_all(&mut self.lattice);
        while !self.queue.is_empty() {
            self.start_queued(now);
            self.anim.cancel_all(&mut self.lattice);
        }
    }

    /// Per-cubie transforms and sticker colors for the frame at `now`.
    pub fn render_data(&self, now: Instant) -> Vec<CubieRenderData> {
        self.lattice
            .cubies()
            .iter()
            .enumerate()
            .map(|(i, cubie)| {
                let local = Matrix4::from_translation(cubie.pos)
                    * Matrix4::from(cubie.orientation.to_matrix());
                let transform = match self.anim.transform_for(i, now, &self.settings) {
                    Some(pivot) => Matrix4::from(pivot) * local,
                    None => local,
                };
                CubieRenderData {
                    transform,
                    stickers: cubie.stickers,
                }
            })
            .collect()
    }
}
