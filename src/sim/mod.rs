//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Geometry computed from state, never read back from a renderer
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use clock::{Fired, Scheduler, Timer};
pub use collision::{Aabb, Gate, PlayerBounds, player_bounds};
pub use obstacles::{Obstacle, ObstacleField};
pub use state::{DeathCause, GameEvent, Player, Screen, SoundCue, World};
pub use tick::{TickOutcome, spawn_step, tick};
