//! Fixed-size state, control, and goal vectors.
//!
//! Layout follows the double-integrator convention used everywhere in the
//! workspace:
//!
//! ```text
//! State   = [position_x, velocity_x, position_y, velocity_y]
//! Control = [acceleration_x, acceleration_y]
//! Goal    = State with both velocity components pinned at 0.0
//! ```
//!
//! All three types are `Copy` and hold no heap data, so agents and recorders
//! pass them by value.

use std::fmt;

use crate::{HriError, HriResult};

/// Number of components in a [`State`] (and a [`Goal`]).
pub const STATE_DIM: usize = 4;

/// Number of components in a [`Control`].
pub const CONTROL_DIM: usize = 2;

// ── State ─────────────────────────────────────────────────────────────────────

/// Point-mass state `(px, vx, py, vy)`.
///
/// No range invariant is enforced; the dynamics accept any finite values.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State(pub [f64; STATE_DIM]);

impl State {
    pub const ZERO: State = State([0.0; STATE_DIM]);

    #[inline]
    pub fn new(px: f64, vx: f64, py: f64, vy: f64) -> Self {
        State([px, vx, py, vy])
    }

    /// A state resting at `(x, y)`.
    #[inline]
    pub fn at_rest(x: f64, y: f64) -> Self {
        State([x, 0.0, y, 0.0])
    }

    /// Build from a slice, failing if it does not have exactly `STATE_DIM`
    /// entries.
    pub fn from_slice(values: &[f64]) -> HriResult<Self> {
        let arr: [f64; STATE_DIM] = values.try_into().map_err(|_| HriError::Dimension {
            expected: STATE_DIM,
            got:      values.len(),
            what:     "state",
        })?;
        Ok(State(arr))
    }

    #[inline]
    pub fn px(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn vx(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn py(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn vy(&self) -> f64 {
        self.0[3]
    }

    #[inline]
    pub fn position(&self) -> [f64; 2] {
        [self.0[0], self.0[2]]
    }

    #[inline]
    pub fn velocity(&self) -> [f64; 2] {
        [self.0[1], self.0[3]]
    }

    /// Euclidean distance over all four components.
    pub fn distance(&self, other: &State) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Euclidean distance between the two positions only.
    pub fn position_distance(&self, other: &State) -> f64 {
        let dx = self.px() - other.px();
        let dy = self.py() - other.py();
        dx.hypot(dy)
    }

    /// Speed (velocity magnitude).
    #[inline]
    pub fn speed(&self) -> f64 {
        self.vx().hypot(self.vy())
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[p=({:.3}, {:.3}) v=({:.3}, {:.3})]",
            self.px(),
            self.py(),
            self.vx(),
            self.vy()
        )
    }
}

// ── Control ───────────────────────────────────────────────────────────────────

/// Acceleration command `(ax, ay)`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Control(pub [f64; CONTROL_DIM]);

impl Control {
    pub const ZERO: Control = Control([0.0; CONTROL_DIM]);

    #[inline]
    pub fn new(ax: f64, ay: f64) -> Self {
        Control([ax, ay])
    }

    #[inline]
    pub fn ax(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn ay(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.ax().hypot(self.ay())
    }

    /// Scale down to magnitude `max` if larger, preserving direction.
    pub fn saturate(self, max: f64) -> Control {
        let n = self.norm();
        if n > max && n > 0.0 {
            let k = max / n;
            Control([self.ax() * k, self.ay() * k])
        } else {
            self
        }
    }

    /// Clamp each component to `[-max, max]`.
    pub fn clamp_box(self, max: f64) -> Control {
        Control([self.ax().clamp(-max, max), self.ay().clamp(-max, max)])
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Control) -> f64 {
        (self.ax() - other.ax()).hypot(self.ay() - other.ay())
    }
}

impl std::ops::Add for Control {
    type Output = Control;
    #[inline]
    fn add(self, rhs: Control) -> Control {
        Control([self.ax() + rhs.ax(), self.ay() + rhs.ay()])
    }
}

// ── Goal ──────────────────────────────────────────────────────────────────────

/// A resting target: a [`State`] whose velocity components are always zero.
///
/// The inner state is private so the zero-velocity invariant cannot be
/// broken after construction.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal(State);

impl Goal {
    /// A goal resting at `(x, y)`.
    #[inline]
    pub fn at(x: f64, y: f64) -> Self {
        Goal(State::at_rest(x, y))
    }

    /// Project any state onto a goal by discarding its velocity.
    #[inline]
    pub fn from_state(state: State) -> Self {
        Goal::at(state.px(), state.py())
    }

    /// Build from a 4-component slice; velocity entries are discarded.
    pub fn from_slice(values: &[f64]) -> HriResult<Self> {
        State::from_slice(values).map(Goal::from_state)
    }

    #[inline]
    pub fn as_state(&self) -> &State {
        &self.0
    }

    #[inline]
    pub fn position(&self) -> [f64; 2] {
        self.0.position()
    }

    /// Full-vector distance between two goals.
    #[inline]
    pub fn distance(&self, other: &Goal) -> f64 {
        self.0.distance(&other.0)
    }
}

impl From<Goal> for State {
    fn from(goal: Goal) -> State {
        goal.0
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "goal({:.3}, {:.3})", self.0.px(), self.0.py())
    }
}
