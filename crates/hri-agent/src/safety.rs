//! Minimum-distance safety filter for the robot's control.
//!
//! # Contract
//!
//! Given a nominal control, the robot's state, and what the robot observes of
//! the human, return the admissible control that keeps the next-step
//! separation from the human at least `dmin`, whenever one exists.  If none
//! exists, return the admissible control that violates the constraint least.
//! Filters never fail and never panic on finite inputs.
//!
//! # `ProjectionFilter`
//!
//! Under the double-integrator model the robot's next position is affine in
//! its control `u`:
//!
//! ```text
//! p_r' = p_r + ts·v_r + c·u,     c = ½·ts²
//! ```
//!
//! The human's next position is predicted with a constant-acceleration model
//! whose acceleration is estimated from the change in the human's velocity
//! over the last step.  The human's actual acceleration can differ from that
//! estimate by up to `2·max_accel` (both are bounded by `max_accel`; without
//! the estimate the bound is `max_accel`), so its actual next position lies
//! within `m = c·‖Δa‖max` of the prediction.  The filter therefore enforces
//! `dmin + m` against the prediction, which keeps the actual next-step
//! separation at least `dmin`.
//!
//! Writing `q = p_r + ts·v_r − p_h'`, the constraint `‖q + c·u‖ ≥ dmin + m`
//! says `u` must lie outside the disk of radius `R = (dmin + m) / c` centred
//! at `z = −q / c`.
//!
//! The admissible set is the box `|u_x|, |u_y| ≤ max_accel`.  The closest
//! feasible point to the nominal control is one of:
//!
//! - the radial projection of the nominal control onto the circle,
//! - the projection of the nominal control onto a box edge,
//! - an intersection of the circle with a box edge,
//! - a box corner.
//!
//! All candidates are enumerated in a fixed order and the nearest feasible one
//! wins (earlier candidates win ties).  The distance to `z` is convex, so its
//! maximum over the box is attained at a corner: if no corner is feasible,
//! nothing is, and the best corner is the least-violating control.

use hri_core::{Control, DynamicsModel, State};

use crate::Interaction;

/// Relative slack allowed when testing candidates that sit exactly on the
/// constraint boundary.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Result of filtering one nominal control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterOutcome {
    /// Control to apply.
    pub control: Control,
    /// Control that was requested.
    pub nominal: Control,
    /// `true` if `control` satisfies the distance constraint, margin included.
    pub feasible: bool,
    /// `true` if `control` differs from `nominal`.
    pub modified: bool,
    /// Predicted robot-human separation after applying `control`.
    pub projected_distance: f64,
}

/// Constraint-enforcing post-processing of the robot's nominal control.
pub trait SafetyFilter: Send + Sync + 'static {
    fn filter(
        &self,
        nominal:  Control,
        robot:    &State,
        obs:      &Interaction,
        dynamics: &DynamicsModel,
        dmin:     f64,
    ) -> FilterOutcome;
}

/// Closest-feasible-control projection.  See the module docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectionFilter {
    /// Include the finite-difference human acceleration in the prediction.
    /// When `false` the human is assumed to coast at constant velocity.
    pub predict_human_accel: bool,
}

impl Default for ProjectionFilter {
    fn default() -> Self {
        Self { predict_human_accel: true }
    }
}

impl ProjectionFilter {
    /// Predicted human position one step ahead.
    pub fn predict_human(&self, obs: &Interaction, dynamics: &DynamicsModel) -> [f64; 2] {
        let ts = dynamics.ts();
        let accel = if self.predict_human_accel {
            obs.human_accel_estimate(ts)
        } else {
            [0.0, 0.0]
        };
        dynamics.next_position(&obs.human, &Control(accel))
    }

    /// Largest distance between the predicted and the actual human position
    /// one step ahead, given that the human's acceleration is bounded by the
    /// shared `max_accel`.
    pub fn prediction_margin(&self, dynamics: &DynamicsModel) -> f64 {
        let ts = dynamics.ts();
        let accel_error = if self.predict_human_accel {
            2.0 * dynamics.max_accel()
        } else {
            dynamics.max_accel()
        };
        0.5 * ts * ts * accel_error
    }
}

impl SafetyFilter for ProjectionFilter {
    fn filter(
        &self,
        nominal:  Control,
        robot:    &State,
        obs:      &Interaction,
        dynamics: &DynamicsModel,
        dmin:     f64,
    ) -> FilterOutcome {
        let ts = dynamics.ts();
        let c = 0.5 * ts * ts;
        let max = dynamics.max_accel();
        let [hx, hy] = self.predict_human(obs, dynamics);
        let required = dmin + self.prediction_margin(dynamics);

        // Drift of the relative position with zero robot acceleration.
        let qx = robot.px() + ts * robot.vx() - hx;
        let qy = robot.py() + ts * robot.vy() - hy;
        let projected = |u: &Control| (qx + c * u.ax()).hypot(qy + c * u.ay());
        let outcome = |u: Control, feasible: bool| FilterOutcome {
            control: u,
            nominal,
            feasible,
            modified: u != nominal,
            projected_distance: projected(&u),
        };

        let start = nominal.clamp_box(max);
        if projected(&start) >= required {
            return outcome(start, true);
        }

        // Forbidden disk in control space.
        let (zx, zy) = (-qx / c, -qy / c);
        let radius = required / c;
        let feasible = |u: &Control| {
            u.ax().abs() <= max
                && u.ay().abs() <= max
                && (u.ax() - zx).hypot(u.ay() - zy) >= radius * (1.0 - BOUNDARY_TOLERANCE)
        };

        let mut best: Option<(Control, f64)> = None;
        for cand in candidates(start, (zx, zy), radius, max, robot, &obs.human) {
            if !feasible(&cand) {
                continue;
            }
            let d = cand.distance(&start);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((cand, d)),
            }
        }
        if let Some((u, _)) = best {
            return outcome(u, true);
        }

        // Nothing admissible satisfies the constraint: take the corner that
        // maximises separation.
        let u = corners(max)
            .into_iter()
            .fold((Control::ZERO, f64::NEG_INFINITY), |(bu, bd), u| {
                let d = projected(&u);
                if d > bd { (u, d) } else { (bu, bd) }
            })
            .0;
        outcome(u, false)
    }
}

fn corners(max: f64) -> [Control; 4] {
    [
        Control::new(-max, -max),
        Control::new(max, -max),
        Control::new(max, max),
        Control::new(-max, max),
    ]
}

/// Every point that can be the nearest feasible control to `start`.
fn candidates(
    start:  Control,
    center: (f64, f64),
    radius: f64,
    max:    f64,
    robot:  &State,
    human:  &State,
) -> Vec<Control> {
    let (zx, zy) = center;
    let mut out = Vec::with_capacity(20);

    // Radial projection onto the circle.
    let (mut dx, mut dy) = (start.ax() - zx, start.ay() - zy);
    let mut len = dx.hypot(dy);
    if len == 0.0 {
        // Nominal sits at the centre: push straight away from the human.
        dx = robot.px() - human.px();
        dy = robot.py() - human.py();
        len = dx.hypot(dy);
        if len == 0.0 {
            (dx, dy, len) = (1.0, 0.0, 1.0);
        }
    }
    out.push(Control::new(zx + radius * dx / len, zy + radius * dy / len));

    // Projections onto the four edges.
    out.push(Control::new(-max, start.ay()));
    out.push(Control::new(max, start.ay()));
    out.push(Control::new(start.ax(), -max));
    out.push(Control::new(start.ax(), max));

    // Circle ∩ edges.
    for edge in [-max, max] {
        let rem = radius * radius - (edge - zx) * (edge - zx);
        if rem >= 0.0 {
            let h = rem.sqrt();
            for y in [zy - h, zy + h] {
                if y.abs() <= max {
                    out.push(Control::new(edge, y));
                }
            }
        }
        let rem = radius * radius - (edge - zy) * (edge - zy);
        if rem >= 0.0 {
            let h = rem.sqrt();
            for x in [zx - h, zx + h] {
                if x.abs() <= max {
                    out.push(Control::new(x, edge));
                }
            }
        }
    }

    out.extend(corners(max));
    out
}
