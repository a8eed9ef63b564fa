//! Fixed-rate clocks on a single simulation timeline
//!
//! The scheduler owns both intervals (simulation tick and obstacle spawn).
//! Frames push the horizon forward with [`Scheduler::advance`]; callers then
//! drain due events one at a time with [`Scheduler::poll`]. Because stopping
//! an interval clears its deadline, nothing can fire after teardown, not even
//! events that were already due within the same frame.

use crate::consts::MAX_FRAME_DT;

/// Which clock fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Tick,
    Spawn,
}

/// An event that fired at simulation time `at`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fired {
    pub timer: Timer,
    pub at: f32,
}

/// A repeating deadline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub period: f32,
    next_due: Option<f32>,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// First fire one full period after `now`
    pub fn start(&mut self, now: f32) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Deadline if it is at or before `horizon`
    fn due_by(&self, horizon: f32) -> Option<f32> {
        self.next_due.filter(|&due| due <= horizon)
    }
}

/// Tick and spawn clocks sharing one timeline
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Time of the last fired event (or of the last start)
    now: f32,
    /// Time the caller has advanced to
    horizon: f32,
    tick: Interval,
    spawn: Interval,
}

impl Scheduler {
    pub fn new(tick_period: f32, spawn_period: f32) -> Self {
        Self {
            now: 0.0,
            horizon: 0.0,
            tick: Interval::new(tick_period),
            spawn: Interval::new(spawn_period),
        }
    }

    pub fn now(&self) -> f32 {
        self.now
    }

    pub fn is_running(&self) -> bool {
        self.tick.is_running() || self.spawn.is_running()
    }

    /// Start both clocks from the current horizon
    pub fn start(&mut self) {
        self.now = self.horizon;
        self.tick.start(self.now);
        self.spawn.start(self.now);
    }

    /// Tear both clocks down
    pub fn stop(&mut self) {
        self.tick.stop();
        self.spawn.stop();
    }

    /// Move the horizon forward by a frame delta (clamped)
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.horizon += dt.min(MAX_FRAME_DT);
        }
        if !self.is_running() {
            self.now = self.horizon;
        }
    }

    /// Next due event, earliest first. Ties go to the tick.
    pub fn poll(&mut self) -> Option<Fired> {
        let tick = self.tick.due_by(self.horizon);
        let spawn = self.spawn.due_by(self.horizon);

        let (timer, at) = match (tick, spawn) {
            (Some(t), Some(s)) if s < t => (Timer::Spawn, s),
            (Some(t), _) => (Timer::Tick, t),
            (None, Some(s)) => (Timer::Spawn, s),
            (None, None) => return None,
        };

        let interval = match timer {
            Timer::Tick => &mut self.tick,
            Timer::Spawn => &mut self.spawn,
        };
        interval.next_due = Some(at + interval.period);
        self.now = at;

        Some(Fired { timer, at })
    }
}
