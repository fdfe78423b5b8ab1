//! `hri-agent`: the two interacting agents and their control policies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`agent`]     | `Agent` capability trait, `Interaction` observation           |
//! | [`human`]     | `Human` (candidate goals + reaction policy), `GoalSelection`  |
//! | [`reaction`]  | `ReactionPolicy` trait, `NoReaction`, `Repulsion`             |
//! | [`safety`]    | `SafetyFilter` trait, `ProjectionFilter`, `FilterOutcome`     |
//! | [`robot`]     | `Robot` (single goal + safety filter)                         |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                                |
//!
//! # Design notes
//!
//! Human and Robot are not a class hierarchy: they share the [`Agent`]
//! capability (`state`, `goal`, `get_u`, `step`) and differ only in what they
//! observe.  The human reacts to the robot's current state; the robot needs
//! the human's current state plus both agents' previous-step states, which is
//! expressed through the associated `Observation` type.
//!
//! Both policy seams ([`ReactionPolicy`], [`SafetyFilter`]) are
//! `Send + Sync + 'static` so a dataset build can run trials on Rayon workers.

pub mod agent;
pub mod error;
pub mod human;
pub mod reaction;
pub mod robot;
pub mod safety;


pub use agent::{Agent, Interaction};
pub use error::{AgentError, AgentResult};
pub use human::{GoalSelection, Human, nearest_goal};
pub use reaction::{NoReaction, ReactionPolicy, Repulsion};
pub use robot::Robot;
pub use safety::{FilterOutcome, ProjectionFilter, SafetyFilter};
