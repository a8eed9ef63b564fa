//! Fixed timestep simulation tick and obstacle spawn step
//!
//! Both run against a [`World`] at `world.time`. Neither knows about screens:
//! the state machine decides when they are allowed to run.

use super::collision::{self, Gate};
use super::state::{DeathCause, GameEvent, SoundCue, World};
use crate::config::GameConfig;

/// Result of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Alive,
    /// The head gate was cleared this tick
    Scored,
    /// Terminal collision
    Died(DeathCause),
}

/// Advance the player by one tick, then test ground, ceiling and the next gate
pub fn tick(world: &mut World, config: &GameConfig, events: &mut Vec<GameEvent>) -> TickOutcome {
    world.ticks += 1;
    world.player.integrate(config.gravity);
    events.push(GameEvent::PlayerMoved {
        position: world.player.position,
        rotation: world.player.rotation,
    });

    let bounds = collision::player_bounds(&world.player, config);
    let gate = world
        .obstacles
        .head()
        .map(|head| Gate::of(head, config, world.time));

    if config.debug {
        events.push(GameEvent::DebugBounds {
            player: bounds.hit,
            gate: gate.map(|g| g.opening()),
        });
    }

    // Ground always wins over a gate hit in the same tick
    if collision::hits_ground(&bounds, config) {
        return TickOutcome::Died(DeathCause::Ground);
    }

    if collision::above_ceiling(&bounds) {
        world.player.position = 0.0;
    }

    let Some(gate) = gate else {
        return TickOutcome::Alive;
    };

    if gate.violated_by(&bounds.hit) {
        return TickOutcome::Died(DeathCause::Obstacle);
    }

    if gate.cleared(&bounds.hit) {
        if let Some(cleared) = world.obstacles.pop_head() {
            log::debug!("Cleared gate {} at t={:.2}", cleared.id, world.time);
        }
        world.score += 1;
        events.push(GameEvent::ScoreChanged { score: world.score });
        events.push(GameEvent::Sound { cue: SoundCue::Score });
        return TickOutcome::Scored;
    }

    TickOutcome::Alive
}

/// Retire off-screen gates, then spawn a new one at the right edge
pub fn spawn_step(world: &mut World, config: &GameConfig, events: &mut Vec<GameEvent>) {
    let now = world.time;
    for id in world.obstacles.retire_offscreen(config, now) {
        log::debug!("Retired gate {}", id);
        events.push(GameEvent::ObstacleRetired { id });
    }

    let gate = world.spawn_obstacle(config);
    log::debug!(
        "Spawned gate {} (top={}, bottom={})",
        gate.id,
        gate.top_height,
        gate.bottom_height
    );
    events.push(GameEvent::ObstacleSpawned {
        id: gate.id,
        top_height: gate.top_height,
        bottom_height: gate.bottom_height,
        center_x: gate.center_x(config.scroll_speed, now),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Player;

    fn setup() -> (World, GameConfig) {
        let config = GameConfig::default();
        (World::new(42, &config), config)
    }

    #[test]
    fn test_free_fall_without_gates() {
        let (mut world, config) = setup();
        let mut events = Vec::new();
        assert_eq!(tick(&mut world, &config, &mut events), TickOutcome::Alive);
        assert_eq!(world.player.velocity, GRAVITY);
        assert_eq!(world.player.position, START_POSITION + GRAVITY);
        assert_eq!(
            events,
            vec![GameEvent::PlayerMoved {
                position: START_POSITION + GRAVITY,
                rotation: Player::rotation_for(GRAVITY),
            }]
        );
    }

    #[test]
    fn test_ground_death() {
        let (mut world, config) = setup();
        world.player.position = FLY_AREA_HEIGHT - PLAYER_HEIGHT;
        let mut events = Vec::new();
        assert_eq!(
            tick(&mut world, &config, &mut events),
            TickOutcome::Died(DeathCause::Ground)
        );
    }

    #[test]
    fn test_ceiling_clamp() {
        let (mut world, config) = setup();
        world.player.position = 2.0;
        world.player.jump(JUMP_IMPULSE);
        let mut events = Vec::new();
        assert_eq!(tick(&mut world, &config, &mut events), TickOutcome::Alive);
        assert_eq!(world.player.position, 0.0);
        // No bounce
        assert_eq!(world.player.velocity, JUMP_IMPULSE + GRAVITY);
    }

    #[test]
    fn test_gate_hit() {
        let (mut world, config) = setup();
        // Opening well below the player, gate overlapping horizontally
        world.obstacles.push(250.0, &config, 77.0, 0.0);
        let mut events = Vec::new();
        assert_eq!(
            tick(&mut world, &config, &mut events),
            TickOutcome::Died(DeathCause::Obstacle)
        );
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_flying_through_gate() {
        let (mut world, config) = setup();
        world.obstacles.push(150.0, &config, 77.0, 0.0);
        let mut events = Vec::new();
        assert_eq!(tick(&mut world, &config, &mut events), TickOutcome::Alive);
        assert_eq!(world.obstacles.pending_len(), 1);
    }

    #[test]
    fn test_scoring_pops_exactly_one_gate() {
        let (mut world, config) = setup();
        // Already behind the player, opening around the player
        world.obstacles.push(150.0, &config, 20.0, 0.0);
        // Next one far to the right
        world.obstacles.push(150.0, &config, 500.0, 0.0);

        let mut events = Vec::new();
        assert_eq!(tick(&mut world, &config, &mut events), TickOutcome::Scored);
        assert_eq!(world.score, 1);
        assert_eq!(world.obstacles.head().map(|o| o.id), Some(1));
        assert!(events.contains(&GameEvent::ScoreChanged { score: 1 }));
        assert!(events.contains(&GameEvent::Sound { cue: SoundCue::Score }));

        for _ in 0..5 {
            assert_eq!(tick(&mut world, &config, &mut events), TickOutcome::Alive);
        }
        assert_eq!(world.score, 1);
        assert_eq!(world.obstacles.pending_len(), 1);
    }

    #[test]
    fn test_ground_beats_gate() {
        let (mut world, config) = setup();
        world.player.position = 400.0;
        // Opening at 100..190, far above the player, gate overlapping
        world.obstacles.push(100.0, &config, 77.0, 0.0);
        let mut events = Vec::new();
        assert_eq!(
            tick(&mut world, &config, &mut events),
            TickOutcome::Died(DeathCause::Ground)
        );
    }

    #[test]
    fn test_gate_position_follows_time() {
        let (mut world, config) = setup();
        // Opening far above: fatal only once the gate reaches the player
        world.obstacles.push(0.0, &config, 300.0, 0.0);
        let mut events = Vec::new();
        assert_eq!(tick(&mut world, &config, &mut events), TickOutcome::Alive);

        world.player = Player::new(START_POSITION);
        world.time = (300.0 - 77.0) / config.scroll_speed;
        assert_eq!(
            tick(&mut world, &config, &mut events),
            TickOutcome::Died(DeathCause::Obstacle)
        );
    }

    #[test]
    fn test_debug_bounds_only_in_debug() {
        let (mut world, mut config) = setup();
        let mut events = Vec::new();
        tick(&mut world, &config, &mut events);
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::DebugBounds { .. })));

        config.debug = true;
        events.clear();
        tick(&mut world, &config, &mut events);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::DebugBounds { gate: None, .. })));
    }

    #[test]
    fn test_spawn_step() {
        let (mut world, config) = setup();
        let mut events = Vec::new();
        world.time = 1.4;
        spawn_step(&mut world, &config, &mut events);
        assert_eq!(world.obstacles.pending_len(), 1);
        assert!(matches!(
            events[0],
            GameEvent::ObstacleSpawned { id: 0, center_x, .. } if center_x == PIPE_SPAWN_X
        ));

        // Long after, the first gate is off-screen and gets retired
        world.time = 30.0;
        events.clear();
        spawn_step(&mut world, &config, &mut events);
        assert_eq!(events[0], GameEvent::ObstacleRetired { id: 0 });
        assert!(matches!(events[1], GameEvent::ObstacleSpawned { id: 1, .. }));
        assert_eq!(world.obstacles.pending_len(), 1);
    }

    #[test]
    fn test_spawns_are_seeded() {
        let config = GameConfig::default();
        let mut a = World::new(9, &config);
        let mut b = World::new(9, &config);
        let mut events = Vec::new();
        for _ in 0..5 {
            spawn_step(&mut a, &config, &mut events);
            spawn_step(&mut b, &config, &mut events);
        }
        let tops_a: Vec<f32> = a.obstacles.iter().map(|o| o.top_height).collect();
        let tops_b: Vec<f32> = b.obstacles.iter().map(|o| o.top_height).collect();
        assert_eq!(tops_a, tops_b);
    }
}
