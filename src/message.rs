use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::board::Player;

/// Who plays O.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, clap::ValueEnum)]
pub enum Opponent {
    #[default]
    Human,
    Computer,
}

impl Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opponent::Human => write!(f, "human"),
            Opponent::Computer => write!(f, "computer"),
        }
    }
}

impl FromStr for Opponent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Opponent::Human),
            "computer" | "ai" => Ok(Opponent::Computer),
            _ => Err(()),
        }
    }
}

/// Input from whatever is rendering the game.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Event {
    CellActivated(u8),
    SetOpponent(Opponent),
    Restart,
    /// The last notification has been shown; start the next game.
    Acknowledge,
}

/// What the renderer should show.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Output {
    Marked { tile: u8, player: Player },
    Notification(String),
    Scores { player1: String, player2: String },
    Cleared,
}

impl From<Opponent> for Event {
    fn from(value: Opponent) -> Self {
        Event::SetOpponent(value)
    }
}
