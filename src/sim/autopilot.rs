//! Idle/demo controller
//!
//! Flaps whenever the player sinks below the middle of the next opening.
//! Used by the headless runner; never consulted by the rules themselves.

use super::collision::{Gate, player_bounds};
use super::state::World;
use crate::config::GameConfig;

/// How far below the aim line the hit box may sink before flapping
const FLAP_MARGIN: f32 = 8.0;

/// Should the player flap this tick?
pub fn wants_flap(world: &World, config: &GameConfig) -> bool {
    let bounds = player_bounds(&world.player, config);

    // Aim for the next opening, or the middle of the sky when there is none
    let target = world
        .obstacles
        .head()
        .map(|head| {
            let gate = Gate::of(head, config, world.time);
            (gate.gap_top + gate.gap_bottom) / 2.0
        })
        .unwrap_or(config.fly_area_height / 2.0);

    // Only flap on the way down, otherwise we overshoot into the top pipe
    world.player.velocity >= 0.0 && bounds.hit.max.y > target + FLAP_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flaps_when_sinking_below_opening() {
        let config = GameConfig::default();
        let mut world = World::new(1, &config);
        world.obstacles.push(80.0, &config, 400.0, 0.0);

        world.player.position = 200.0;
        world.player.velocity = 1.0;
        assert!(wants_flap(&world, &config));

        // Rising: let it coast
        world.player.velocity = -2.0;
        assert!(!wants_flap(&world, &config));
    }

    #[test]
    fn test_holds_when_above_opening() {
        let config = GameConfig::default();
        let mut world = World::new(1, &config);
        world.obstacles.push(250.0, &config, 400.0, 0.0);

        world.player.position = 200.0;
        world.player.velocity = 1.0;
        assert!(!wants_flap(&world, &config));
    }

    #[test]
    fn test_aims_mid_sky_without_gates() {
        let config = GameConfig::default();
        let mut world = World::new(1, &config);
        world.player.velocity = 0.5;

        world.player.position = 100.0;
        assert!(!wants_flap(&world, &config));
        world.player.position = 300.0;
        assert!(wants_flap(&world, &config));
    }
}
