//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`World`], which the screen state
//! machine owns and lends to the tick and spawn functions.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::obstacles::{Obstacle, ObstacleField};
use crate::config::GameConfig;
use crate::consts::MAX_ROTATION;
use crate::highscores::Medal;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Title screen, waiting for the first tap
    Splash,
    /// Clocks running, player in control
    Playing,
    /// Session over, scoreboard up
    ScoreDisplay,
}

/// Fire-and-forget audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Jump,
    Score,
    Hit,
    Die,
    Swoosh,
}

/// What ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Ground,
    Obstacle,
}

/// Events produced for the presentation and audio collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ScreenChanged {
        from: Screen,
        to: Screen,
    },
    /// Emitted once per tick while playing
    PlayerMoved {
        position: f32,
        rotation: f32,
    },
    ObstacleSpawned {
        id: u32,
        top_height: f32,
        bottom_height: f32,
        center_x: f32,
    },
    ObstacleRetired {
        id: u32,
    },
    ScoreChanged {
        score: u32,
    },
    /// Emitted exactly once per session, after the clocks are stopped
    SessionEnded {
        score: u32,
        high_score: u32,
        new_high_score: bool,
        medal: Option<Medal>,
        cause: DeathCause,
        /// How far the sprite still has to drop to rest on the ground
        fall_distance: f32,
    },
    /// Collision boxes, only in debug mode
    DebugBounds {
        player: Aabb,
        gate: Option<Aabb>,
    },
    Sound {
        cue: SoundCue,
    },
}

/// The falling, jumping player entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top of the sprite, measured down from the ceiling
    pub position: f32,
    /// Pixels per tick, positive is downward
    pub velocity: f32,
    /// Degrees, derived from velocity on every integration step
    pub rotation: f32,
}

impl Player {
    pub fn new(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    /// Rotation for a given velocity. Only the nose-down side is clamped.
    #[inline]
    pub fn rotation_for(velocity: f32) -> f32 {
        (velocity / 10.0 * 90.0).min(MAX_ROTATION)
    }

    /// One tick of gravity
    pub fn integrate(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.position += self.velocity;
        self.rotation = Self::rotation_for(self.velocity);
    }

    /// Replace the current velocity with the jump impulse
    pub fn jump(&mut self, impulse: f32) {
        self.velocity = impulse;
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct World {
    seed: u64,
    rng: Pcg32,
    pub player: Player,
    pub score: u32,
    pub obstacles: ObstacleField,
    /// Simulation time in seconds; set by the scheduler before each event
    pub time: f32,
    /// Ticks since the session started
    pub ticks: u64,
}

impl World {
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(config.start_position),
            score: 0,
            obstacles: ObstacleField::default(),
            time: 0.0,
            ticks: 0,
        }
    }

    /// Seed of the obstacle RNG, for replaying a run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Back to the splash layout. Time keeps running and the RNG keeps its
    /// stream so consecutive sessions get different gates.
    pub fn reset(&mut self, config: &GameConfig) {
        self.player = Player::new(config.start_position);
        self.score = 0;
        self.obstacles.clear();
        self.ticks = 0;
    }

    /// Spawn a gate at the right edge using the session RNG
    pub fn spawn_obstacle(&mut self, config: &GameConfig) -> &Obstacle {
        self.obstacles.spawn(&mut self.rng, config, self.time)
    }
}
