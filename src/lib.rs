//! Flappy Gates - a side-scrolling gate-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, obstacle lifecycle)
//! - `game`: Screen state machine that owns the simulation and its clocks
//! - `highscores`: Best score tracking and medal tiers
//! - `persistence`: High score storage boundary
//! - `platform`: Browser/native platform abstraction
//! - `config`: Startup configuration (`?debug`, `?easy`)
//!
//! Rendering, audio playback and input devices live outside this crate. They
//! consume [`GameEvent`]s and feed actions back into [`Game`].

pub mod config;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, Screen};
pub use highscores::{HighScore, Medal};
pub use persistence::{HighScoreStore, MemoryStore, StorageError};
pub use sim::{GameEvent, SoundCue};

/// Game configuration constants
///
/// Distances are in fly-area pixels, velocities in pixels per tick.
pub mod consts {
    /// Simulation tick rate
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ;
    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 1.4;
    /// Largest frame delta fed to the scheduler (prevents spiral of death)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player physics
    pub const GRAVITY: f32 = 0.25;
    pub const JUMP_IMPULSE: f32 = -4.6;
    pub const START_POSITION: f32 = 180.0;
    /// Rotation never exceeds this (degrees, nose down)
    pub const MAX_ROTATION: f32 = 90.0;

    /// Player sprite, left edge fixed at `PLAYER_X`
    pub const PLAYER_X: f32 = 60.0;
    pub const PLAYER_WIDTH: f32 = 34.0;
    pub const PLAYER_HEIGHT: f32 = 24.0;
    /// Hit box loses up to this much width as the sprite rotates
    pub const HITBOX_SHRINK: f32 = 8.0;

    /// Height of the fly area; the ground starts right below it
    pub const FLY_AREA_HEIGHT: f32 = 420.0;

    /// Gate geometry
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const GATE_GAP: f32 = 90.0;
    pub const EASY_GATE_GAP: f32 = 200.0;
    /// Minimum height of either pipe segment
    pub const GATE_PADDING: f32 = 80.0;

    /// Gate centre when spawned (left edge at 900)
    pub const PIPE_SPAWN_X: f32 = 900.0 + PIPE_WIDTH / 2.0;
    /// Gate centre at which a gate is fully off-screen (left edge at -100)
    pub const PIPE_RETIRE_X: f32 = -100.0 + PIPE_WIDTH / 2.0;
    /// Horizontal scroll: 1000px every 7.5 seconds
    pub const SCROLL_SPEED: f32 = 1000.0 / 7.5;

    /// High score lifetime in the store
    pub const HIGH_SCORE_TTL_DAYS: u32 = 999;
}
