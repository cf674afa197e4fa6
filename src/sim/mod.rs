//! Simulation module
//!
//! All game logic lives here. This module must stay deterministic:
//! - Seeded RNG only, passed in explicitly
//! - Fixed tick interval only
//! - No rendering or platform dependencies

pub mod clock;
pub mod session;
pub mod state;

pub use clock::{AnimationClock, ClockStatus};
pub use session::{GameEvent, Session, Snapshot};
pub use state::{GameState, Rules, Tint, TriggerOutcome};
