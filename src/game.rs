//! Screen state machine
//!
//! `Game` owns the simulation context, both clocks, the best score and the
//! store. Input arrives as abstract actions; everything the outside world
//! needs to draw or play comes back out through [`Game::drain_events`].
//!
//! ```text
//! Splash --primary--> Playing --terminal collision--> ScoreDisplay
//!    ^                                                     |
//!    +---------- replay (after score_presented) -----------+
//! ```

use crate::config::{ConfigError, GameConfig};
use crate::highscores::{HighScore, Medal};
use crate::persistence::HighScoreStore;
use crate::sim::{
    DeathCause, GameEvent, Scheduler, SoundCue, TickOutcome, Timer, World, spawn_step, tick,
};

pub use crate::sim::Screen;

/// One player's game across any number of sessions
#[derive(Debug)]
pub struct Game<S: HighScoreStore> {
    config: GameConfig,
    screen: Screen,
    world: World,
    scheduler: Scheduler,
    high_score: HighScore,
    store: S,
    /// One-shot gate for the replay action
    replay_clickable: bool,
    events: Vec<GameEvent>,
}

impl<S: HighScoreStore> Game<S> {
    /// Validate the config, load the best score and show the splash screen
    pub fn new(config: GameConfig, store: S, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let high_score = HighScore::new(store.load_high_score());
        log::info!(
            "Game created (seed={}, gap={}, debug={}, best={})",
            seed,
            config.gate_gap,
            config.debug,
            high_score.best()
        );

        let mut game = Self {
            scheduler: Scheduler::new(config.tick_period(), config.spawn_interval),
            world: World::new(seed, &config),
            config,
            screen: Screen::Splash,
            high_score,
            store,
            replay_clickable: false,
            events: Vec::new(),
        };
        game.enter_splash();
        Ok(game)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Is the replay action currently accepted?
    pub fn replay_available(&self) -> bool {
        self.replay_clickable
    }

    /// Hand pending events to the presentation
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Input ===

    /// Tap, click or space: start on the splash screen, jump while playing
    pub fn primary_action(&mut self) {
        match self.screen {
            Screen::Splash => self.start(),
            Screen::Playing => self.jump(),
            Screen::ScoreDisplay => log::debug!("Primary action ignored on the scoreboard"),
        }
    }

    /// Keyboard space: the scoreboard treats it as the replay button
    pub fn space(&mut self) {
        if self.screen == Screen::ScoreDisplay {
            self.replay();
        } else {
            self.primary_action();
        }
    }

    /// Jump now. No-op outside of play.
    pub fn jump(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        self.world.player.jump(self.config.jump_impulse);
        self.events.push(GameEvent::Sound { cue: SoundCue::Jump });
    }

    /// The presentation finished showing the scoreboard; replay may fire once
    pub fn score_presented(&mut self) {
        if self.screen == Screen::ScoreDisplay && !self.replay_clickable {
            self.replay_clickable = true;
            log::debug!("Replay available");
        }
    }

    /// Back to the splash screen. Returns false (and does nothing) unless
    /// the scoreboard is up and the latch is open.
    pub fn replay(&mut self) -> bool {
        if self.screen != Screen::ScoreDisplay || !self.replay_clickable {
            return false;
        }
        self.replay_clickable = false;
        self.events.push(GameEvent::Sound { cue: SoundCue::Swoosh });
        self.enter_splash();
        true
    }

    // === Time ===

    /// Feed a frame delta (seconds) and run every tick and spawn that fell due
    pub fn advance(&mut self, dt: f32) {
        self.scheduler.advance(dt);

        // Stopping the scheduler inside a tick ends this loop immediately
        while let Some(fired) = self.scheduler.poll() {
            self.world.time = fired.at;
            match fired.timer {
                Timer::Tick => {
                    self.tick();
                }
                Timer::Spawn => self.spawn(),
            }
        }
    }

    /// One simulation step at the current `world.time`. No-op (`None`)
    /// outside of play. Only `advance` moves time forward; stepping here
    /// directly is for in-crate drivers that want gates to stand still.
    pub(crate) fn tick(&mut self) -> Option<TickOutcome> {
        if self.screen != Screen::Playing {
            return None;
        }

        let outcome = tick(&mut self.world, &self.config, &mut self.events);
        if let TickOutcome::Died(cause) = outcome {
            self.end_session(cause);
        }
        Some(outcome)
    }

    fn spawn(&mut self) {
        if self.screen == Screen::Playing {
            spawn_step(&mut self.world, &self.config, &mut self.events);
        }
    }

    // === Transitions ===

    fn set_screen(&mut self, to: Screen) {
        let from = self.screen;
        if from != to {
            self.screen = to;
            log::info!("Screen {:?} -> {:?}", from, to);
            self.events.push(GameEvent::ScreenChanged { from, to });
        }
    }

    fn enter_splash(&mut self) {
        self.world.reset(&self.config);
        self.set_screen(Screen::Splash);
        self.events.push(GameEvent::Sound { cue: SoundCue::Swoosh });
    }

    fn start(&mut self) {
        self.world.reset(&self.config);
        self.scheduler.start();
        self.world.time = self.scheduler.now();
        self.set_screen(Screen::Playing);
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        self.jump();
    }

    fn end_session(&mut self, cause: DeathCause) {
        // Clocks go first so nothing can touch the frozen world
        self.scheduler.stop();
        self.replay_clickable = false;

        self.events.push(GameEvent::Sound { cue: SoundCue::Hit });
        self.events.push(GameEvent::Sound { cue: SoundCue::Die });

        let score = self.world.score;
        let new_high_score = self.high_score.submit(score);
        if new_high_score {
            if let Err(e) = self
                .store
                .save_high_score(self.high_score.best(), self.config.high_score_ttl_days)
            {
                log::warn!("Failed to save high score: {}", e);
            }
        }
        let medal = Medal::for_score(score);

        // Rotated 90 degrees the sprite is `player_width` tall
        let player_bottom = self.world.player.position + self.config.player_width;
        let fall_distance = (self.config.fly_area_height - player_bottom).max(0.0);

        log::info!(
            "Session over: {:?}, score={}, best={}, medal={}",
            cause,
            score,
            self.high_score.best(),
            medal.map(|m| m.as_str()).unwrap_or("none")
        );

        self.set_screen(Screen::ScoreDisplay);
        self.events.push(GameEvent::SessionEnded {
            score,
            high_score: self.high_score.best(),
            new_high_score,
            medal,
            cause,
            fall_distance,
        });
    }
}
