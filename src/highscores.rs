//! Best score tracking and medal tiers
//!
//! The best score is loaded from the store at startup and written back only
//! when a session beats it.

use serde::{Deserialize, Serialize};

/// Medal awarded on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Medal {
    /// Medal for a final score (`None` below 10)
    pub fn for_score(score: u32) -> Option<Self> {
        match score {
            0..=9 => None,
            10..=19 => Some(Medal::Bronze),
            20..=29 => Some(Medal::Silver),
            30..=39 => Some(Medal::Gold),
            _ => Some(Medal::Platinum),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Bronze => "bronze",
            Medal::Silver => "silver",
            Medal::Gold => "gold",
            Medal::Platinum => "platinum",
        }
    }
}

/// Best score across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished session. Returns true if it set a new best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}
