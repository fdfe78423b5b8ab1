//! `hri-core`: foundational types for the `hri` human-robot interaction
//! simulator.
//!
//! This crate is a dependency of every other `hri-*` crate.  It has no
//! `hri-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`state`]       | `State`, `Control`, `Goal`, `STATE_DIM`, `CONTROL_DIM`|
//! | [`dynamics`]    | `DynamicsModel` (double integrator + goal law)        |
//! | [`config`]      | `SimConfig`, `Gains`                                  |
//! | [`rng`]         | `TrialRng` (per-trial), `SimRng` (root)               |
//! | [`error`]       | `HriError`, `HriResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod dynamics;
pub mod error;
pub mod rng;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Gains, SimConfig};
pub use dynamics::DynamicsModel;
pub use error::{HriError, HriResult};
pub use rng::{SimRng, TrialRng};
pub use state::{CONTROL_DIM, Control, Goal, STATE_DIM, State};
