//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order, monotonic entity IDs)
//! - No rendering or platform dependencies

pub mod collision;
pub mod formation;
pub mod player;
pub mod registry;
pub mod state;
pub mod tick;
pub mod volley;

pub use collision::boxes_overlap;
pub use formation::Formation;
pub use player::{HitOutcome, PlayerShip};
pub use registry::{Enemy, EntityRegistry, Shot, ShotOwner};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
