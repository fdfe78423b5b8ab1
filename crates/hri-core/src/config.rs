//! Simulation and controller configuration.
//!
//! `SimConfig` is typically loaded from a TOML file by the application crate
//! (with the `serde` feature) and passed by reference to every builder.  All
//! builders call [`SimConfig::validate`] so malformed values fail at
//! construction, never mid-rollout.

use crate::{HriError, HriResult};

// ── Gains ─────────────────────────────────────────────────────────────────────

/// Feedback gains and actuator limit of the goal-seeking control law.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Gains {
    /// Position gain.
    pub kp: f64,
    /// Velocity (damping) gain.
    pub kd: f64,
    /// Maximum acceleration magnitude.  Also the half-width of the box of
    /// admissible controls used by the safety filter.
    pub max_accel: f64,
}

impl Default for Gains {
    fn default() -> Self {
        Self { kp: 1.0, kd: 2.0, max_accel: 10.0 }
    }
}

impl Gains {
    pub fn validate(&self) -> HriResult<()> {
        positive("kp", self.kp)?;
        positive("kd", self.kd)?;
        positive("max_accel", self.max_accel)
    }

    /// Per-axis closed-loop matrix of the unsaturated goal law sampled at `ts`,
    /// acting on `[p - p_goal, v]`.
    fn closed_loop(&self, ts: f64) -> [[f64; 2]; 2] {
        let half_ts2 = 0.5 * ts * ts;
        [
            [1.0 - self.kp * half_ts2, ts - self.kd * half_ts2],
            [-self.kp * ts,            1.0 - self.kd * ts],
        ]
    }

    /// Spectral radius of the unsaturated closed loop at `ts`.  The goal law
    /// converges iff this is below one.
    pub fn spectral_radius(&self, ts: f64) -> f64 {
        let [[a, b], [c, d]] = self.closed_loop(ts);
        let trace = a + d;
        let det = a * d - b * c;
        let disc = trace * trace - 4.0 * det;
        if disc >= 0.0 {
            let root = disc.sqrt();
            (0.5 * (trace + root)).abs().max((0.5 * (trace - root)).abs())
        } else {
            det.sqrt()
        }
    }

    /// Jury criterion for a 2×2 system: both eigenvalues strictly inside the
    /// unit circle iff `|det| < 1` and `|trace| < 1 + det`.
    pub fn is_stable(&self, ts: f64) -> bool {
        let [[a, b], [c, d]] = self.closed_loop(ts);
        let trace = a + d;
        let det = a * d - b * c;
        det.abs() < 1.0 && trace.abs() < 1.0 + det
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration shared by the simulator and the dataset builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Integration timestep in seconds.  Default: 0.05.  Must keep the goal
    /// law stable; with the default gains that means `ts < 1`.
    pub ts: f64,

    /// Steps per trial.  Every recorded trajectory has exactly this length.
    pub horizon: usize,

    /// Full-state distance below which the human counts as having reached
    /// its goal.  Default: 0.1.
    pub reach_threshold: f64,

    /// Minimum robot-human separation enforced by the safety filter.
    pub dmin: f64,

    /// Goal-seeking gains shared by both agents.
    pub gains: Gains,

    /// Candidate goals sampled per trial.
    pub num_goals: usize,

    /// Sampled positions lie in `[-domain, domain]` on each axis.
    pub domain: f64,

    /// Master RNG seed.  The same seed always produces identical datasets.
    pub seed: u64,

    /// Trials generated by the dataset builder.
    pub num_trials: usize,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ts:              0.05,
            horizon:         200,
            reach_threshold: 0.1,
            dmin:            1.0,
            gains:           Gains::default(),
            num_goals:       3,
            domain:          10.0,
            seed:            42,
            num_trials:      1000,
            num_threads:     None,
        }
    }
}

impl SimConfig {
    /// Reject values that would make a rollout meaningless.
    pub fn validate(&self) -> HriResult<()> {
        positive("ts", self.ts)?;
        positive("reach_threshold", self.reach_threshold)?;
        positive("dmin", self.dmin)?;
        positive("domain", self.domain)?;
        self.gains.validate()?;
        if !self.gains.is_stable(self.ts) {
            return Err(HriError::Config(format!(
                "goal law is unstable at ts = {} with kp = {}, kd = {} (spectral radius {:.3})",
                self.ts,
                self.gains.kp,
                self.gains.kd,
                self.gains.spectral_radius(self.ts),
            )));
        }
        if self.horizon == 0 {
            return Err(HriError::Config("horizon must be at least 1".into()));
        }
        if self.num_goals == 0 {
            return Err(HriError::Config("num_goals must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(HriError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }

    /// Simulated duration of one trial in seconds.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.horizon as f64 * self.ts
    }
}

fn positive(name: &str, value: f64) -> HriResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HriError::Config(format!("{name} must be finite and positive, got {value}")))
    }
}
