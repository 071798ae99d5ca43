use serde::{Deserialize, Serialize};

use crate::board::Player;

/// Win counters for the current session. Restarting a game never touches these.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreBoard {
    pub fn record(&mut self, winner: Player) {
        match winner {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Display line for one player, e.g. `Player 2 (O) - Wins: 3`.
    pub fn label(&self, player: Player) -> String {
        let seat = match player {
            Player::X => 1,
            Player::O => 2,
        };
        format!("Player {seat} ({player}) - Wins: {}", self.wins(player))
    }
}
