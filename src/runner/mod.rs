//! Terminal animation loop around the simulation core

pub mod pacer;
pub mod seed;
pub mod session;

pub use pacer::{FixedInterval, Pacer};
pub use seed::{clock_seed, seeded_rng};
pub use session::{Frame, RunSummary, Session, StopReason, CLEAR_SCREEN};
