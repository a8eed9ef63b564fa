//! Gate spawning and lifecycle
//!
//! Gates move left at a constant speed, so a gate's horizontal position is a
//! pure function of the time since it spawned. Gates still to be cleared sit
//! in `pending` (head = next gate); cleared gates move to `passed` and stay in
//! the world until they scroll off the left edge.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// A pair of pipes with an opening between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub top_height: f32,
    pub bottom_height: f32,
    pub gap_height: f32,
    /// Centre x at `spawned_at`
    pub start_x: f32,
    pub spawned_at: f32,
}

impl Obstacle {
    /// Gate whose opening starts `top_height` below the ceiling
    pub fn new(
        id: u32,
        top_height: f32,
        config: &GameConfig,
        start_x: f32,
        spawned_at: f32,
    ) -> Self {
        Self {
            id,
            top_height,
            bottom_height: config.fly_area_height - config.gate_gap - top_height,
            gap_height: config.gate_gap,
            start_x,
            spawned_at,
        }
    }

    /// Centre x at simulation time `now`
    #[inline]
    pub fn center_x(&self, scroll_speed: f32, now: f32) -> f32 {
        self.start_x - scroll_speed * (now - self.spawned_at)
    }

    pub fn is_offscreen(&self, config: &GameConfig, now: f32) -> bool {
        self.center_x(config.scroll_speed, now) <= config.pipe_retire_x
    }
}

/// Draw a top-segment height so both segments are at least `gate_padding` tall
pub fn random_top_height<R: Rng>(rng: &mut R, config: &GameConfig) -> f32 {
    let constraint = config.fly_area_height - config.gate_gap - config.gate_padding * 2.0;
    (rng.random::<f32>() * constraint + config.gate_padding).floor()
}

/// All gates currently in the world
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    /// Not yet cleared, ordered left to right
    pending: VecDeque<Obstacle>,
    /// Cleared but still on screen
    passed: VecDeque<Obstacle>,
    next_id: u32,
}

impl ObstacleField {
    /// Next gate the player has to get through
    pub fn head(&self) -> Option<&Obstacle> {
        self.pending.front()
    }

    /// Mark the head as cleared
    pub fn pop_head(&mut self) -> Option<&Obstacle> {
        let cleared = self.pending.pop_front()?;
        self.passed.push_back(cleared);
        self.passed.back()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.passed.is_empty()
    }

    /// Every gate in the world, left to right
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.passed.iter().chain(self.pending.iter())
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.passed.clear();
    }

    /// Append a gate at the spawn position
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, config: &GameConfig, now: f32) -> &Obstacle {
        let top_height = random_top_height(rng, config);
        self.push(top_height, config, config.pipe_spawn_x, now)
    }

    /// Append a gate with explicit geometry
    pub fn push(
        &mut self,
        top_height: f32,
        config: &GameConfig,
        start_x: f32,
        now: f32,
    ) -> &Obstacle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending
            .push_back(Obstacle::new(id, top_height, config, start_x, now));
        &self.pending[self.pending.len() - 1]
    }

    /// Drop gates that scrolled past the left edge. Returns their ids.
    pub fn retire_offscreen(&mut self, config: &GameConfig, now: f32) -> Vec<u32> {
        let mut retired = Vec::new();
        for queue in [&mut self.passed, &mut self.pending] {
            while queue.front().is_some_and(|o| o.is_offscreen(config, now)) {
                if let Some(gone) = queue.pop_front() {
                    retired.push(gone.id);
                }
            }
        }
        retired
    }
}
