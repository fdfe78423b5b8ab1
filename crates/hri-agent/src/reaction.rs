//! How the human adjusts its motion in response to the robot.
//!
//! The coupling law is a policy, not a fixed formula.  Implement
//! [`ReactionPolicy`] to try a different one; the simulator and dataset
//! builder are generic over it.

use hri_core::{Control, State};

/// Additive control adjustment applied on top of the human's goal-seeking
/// control.
///
/// Must be deterministic and total over finite inputs.
pub trait ReactionPolicy: Send + Sync + 'static {
    fn react(&self, human: &State, robot: &State) -> Control;
}

/// The human ignores the robot entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReaction;

impl ReactionPolicy for NoReaction {
    #[inline]
    fn react(&self, _human: &State, _robot: &State) -> Control {
        Control::ZERO
    }
}

/// Push away from the robot when it comes within `radius`.
///
/// The push points from the robot to the human and grows linearly with the
/// penetration depth: `gain · (radius − d)`.  It is zero at or beyond
/// `radius` and zero when both positions coincide (no defined direction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    pub gain:   f64,
    pub radius: f64,
}

impl Default for Repulsion {
    fn default() -> Self {
        Self { gain: 2.0, radius: 0.75 }
    }
}

impl ReactionPolicy for Repulsion {
    fn react(&self, human: &State, robot: &State) -> Control {
        let d = human.position_distance(robot);
        if d >= self.radius || d == 0.0 {
            return Control::ZERO;
        }
        let k = self.gain * (self.radius - d) / d;
        Control::new(k * (human.px() - robot.px()), k * (human.py() - robot.py()))
    }
}
