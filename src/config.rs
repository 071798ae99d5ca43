use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::message::Opponent;

/// Session settings, read from a RON file such as
/// `(opponent: Computer, computer_delay_ms: 500, notify_delay_ms: 10)`.
/// Missing fields fall back to their defaults.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub opponent: Opponent,
    pub computer_delay_ms: u64,
    pub notify_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            opponent: Opponent::Human,
            computer_delay_ms: 500,
            notify_delay_ms: 10,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            computer_delay: Duration::from_millis(self.computer_delay_ms),
            notify_delay: Duration::from_millis(self.notify_delay_ms),
        }
    }
}

/// Cosmetic pauses between a move and what follows it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Pacing {
    /// Before the computer plays.
    pub computer_delay: Duration,
    /// Before a win or draw is announced and the board reset.
    pub notify_delay: Duration,
}

impl Pacing {
    pub const INSTANT: Pacing = Pacing {
        computer_delay: Duration::ZERO,
        notify_delay: Duration::ZERO,
    };
}
