//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::platform_hits;
pub use rect::Rect;
pub use state::{EndReason, EntityRef, Platform, Player, Session, SessionOutcome, SessionPhase};
pub use tick::{TickInput, respawn_platforms, tick};
