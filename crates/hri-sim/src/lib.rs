//! `hri-sim`: one fixed-horizon human-robot rollout.
//!
//! # Per-step loop
//!
//! ```text
//! for i in 0..config.horizon:
//!   ① Record  : human state, robot state, human goal, reached indicator.
//!   ② Human   : u_h = human.get_u(robot state now).
//!   ③ Robot   : u_r = safety_filter(goal control, human now,
//!                                    robot/human states at i-1)
//!                (step 0: current states stand in for i-1).
//!   ④ Advance : both agents step; nothing else is mutated.
//! ```
//!
//! The robot only sees the previous step's states as history, never anything
//! computed later in the same step.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hri_core::{SimConfig, TrialRng};
//! use hri_sim::{NoopObserver, Scenario, SimBuilder};
//!
//! let config = SimConfig::default();
//! let scenario = Scenario::sample(&mut TrialRng::new(config.seed, 0), &config);
//! let record = SimBuilder::new(config, scenario).build()?.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod plan;
pub mod record;
pub mod scenario;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, StepSample};
pub use plan::{RobotPlan, get_empty_robot_plan, get_robot_plan};
pub use record::{Trajectory, TrajectoryBuilder, TrialRecord};
pub use scenario::Scenario;
pub use sim::InteractionSimulator;
