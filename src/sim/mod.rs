//! Deterministic gameplay core
//!
//! All game rules live here, behind the engine boundary:
//! - `state`: entity registry and the owning session
//! - `progress`: score / collection / terminal-flag bookkeeping
//! - `spawn`: initial population, bonus drops, hazard escalation
//! - `collision`: what the engine's contact events mean
//! - `tick`: per-frame input handling
//!
//! Rules of the module: seeded RNG only, engine access only through the
//! boundary trait, no rendering or platform dependencies.

pub mod collision;
pub mod progress;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{collect_pickup, hit_hazard};
pub use progress::Progress;
pub use state::{GameSession, Hazard, MotionState, Pickup, Platform, Player};
pub use tick::{TickInput, tick};
