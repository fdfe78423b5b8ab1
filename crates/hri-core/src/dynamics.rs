//! Discrete-time double-integrator dynamics and the goal-seeking law.
//!
//! # Model
//!
//! Each axis is an independent double integrator sampled at `ts` with
//! zero-order-hold acceleration:
//!
//! ```text
//! p' = p + ts·v + ½·ts²·a
//! v' = v + ts·a
//! ```
//!
//! The map is linear and time-invariant, so identical inputs produce
//! bit-identical outputs.
//!
//! # Goal law
//!
//! `a = sat(−kp·(p − p_goal) − kd·v)` where `sat` scales the vector down to
//! `max_accel` by magnitude.  Construction rejects any `(ts, kp, kd)` whose
//! unsaturated closed loop has an eigenvalue on or outside the unit circle
//! (see [`Gains::is_stable`]), so repeated application converges to the goal.
//! With the default gains that admits every `ts < 1`; at `ts = 1` one
//! eigenvalue sits at −1 and the state oscillates forever.

use crate::{CONTROL_DIM, Control, Gains, Goal, HriResult, STATE_DIM, SimConfig, State};

/// Shared, read-only point-mass model.  Cheap to copy; every agent holds its
/// own copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicsModel {
    ts:    f64,
    gains: Gains,
}

impl DynamicsModel {
    pub const STATE_DIM: usize = STATE_DIM;
    pub const CONTROL_DIM: usize = CONTROL_DIM;

    /// Model with default gains.
    pub fn new(ts: f64) -> HriResult<Self> {
        Self::with_gains(ts, Gains::default())
    }

    pub fn with_gains(ts: f64, gains: Gains) -> HriResult<Self> {
        let probe = SimConfig { ts, gains, ..SimConfig::default() };
        probe.validate()?;
        Ok(Self { ts, gains })
    }

    pub fn from_config(config: &SimConfig) -> HriResult<Self> {
        Self::with_gains(config.ts, config.gains)
    }

    #[inline]
    pub fn ts(&self) -> f64 {
        self.ts
    }

    #[inline]
    pub fn gains(&self) -> &Gains {
        &self.gains
    }

    #[inline]
    pub fn max_accel(&self) -> f64 {
        self.gains.max_accel
    }

    /// Advance `state` by one timestep under `control`.
    pub fn step(&self, state: &State, control: &Control) -> State {
        let ts = self.ts;
        let half_ts2 = 0.5 * ts * ts;
        let [px, vx, py, vy] = state.0;
        let [ax, ay] = control.0;
        State([
            px + ts * vx + half_ts2 * ax,
            vx + ts * ax,
            py + ts * vy + half_ts2 * ay,
            vy + ts * ay,
        ])
    }

    /// Position reached after one step from `state` under `control`, without
    /// computing the velocity.
    #[inline]
    pub fn next_position(&self, state: &State, control: &Control) -> [f64; 2] {
        let next = self.step(state, control);
        next.position()
    }

    /// Saturated PD control driving `state` toward `goal`.
    ///
    /// Exactly zero when `state` equals the goal; never divides.
    pub fn get_goal_control(&self, state: &State, goal: &Goal) -> Control {
        let Gains { kp, kd, max_accel } = self.gains;
        let [gx, gy] = goal.position();
        let ax = -kp * (state.px() - gx) - kd * state.vx();
        let ay = -kp * (state.py() - gy) - kd * state.vy();
        Control::new(ax, ay).saturate(max_accel)
    }

    /// Apply the goal law for one step and return the new state.
    #[inline]
    pub fn step_toward(&self, state: &State, goal: &Goal) -> State {
        let u = self.get_goal_control(state, goal);
        self.step(state, &u)
    }
}
