use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Player, TileId};
use crate::score::ScoreBoard;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Conclusion {
    Win(Player),
    Draw,
}

impl Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conclusion::Win(player) => write!(f, "Player {player} wins!"),
            Conclusion::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum State {
    Playing(Player),
    Concluded(Conclusion),
}

impl Default for State {
    fn default() -> Self {
        State::Playing(Player::X)
    }
}

/// What a call to [`Game::apply_move`] did.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoveOutcome {
    /// Out of range, occupied, or the game is already over. Nothing changed.
    Ignored,
    NextTurn(Player),
    Concluded(Conclusion),
}

/// The board, whose turn it is, and the session's win counters.
#[derive(Debug, Default, Clone)]
pub struct Game {
    board: Board,
    state: State,
    scores: ScoreBoard,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn whos_turn(&self) -> Option<Player> {
        match self.state {
            State::Playing(player) => Some(player),
            State::Concluded(_) => None,
        }
    }

    pub fn conclusion(&self) -> Option<Conclusion> {
        match self.state {
            State::Playing(_) => None,
            State::Concluded(conclusion) => Some(conclusion),
        }
    }

    /// Marks `index` for the player to move. Invalid moves are dropped silently.
    pub fn apply_move(&mut self, index: u8) -> MoveOutcome {
        let State::Playing(turn) = self.state else {
            return MoveOutcome::Ignored;
        };
        let Some(tile) = TileId::new(index).filter(|&tile| self.is_valid_mark(tile)) else {
            debug!(index, "ignoring move");
            return MoveOutcome::Ignored;
        };

        self.board.mark(tile, turn);
        debug!(%tile, player = %turn, "marked");

        if let Some(conclusion) = self.has_game_concluded(turn) {
            if let Conclusion::Win(winner) = conclusion {
                self.scores.record(winner);
            }
            info!(%conclusion, "game over");
            self.state = State::Concluded(conclusion);
            MoveOutcome::Concluded(conclusion)
        } else {
            self.state = State::Playing(!turn);
            MoveOutcome::NextTurn(!turn)
        }
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.state = State::default();
        debug!("board reset");
    }

    /// Called once the conclusion has been shown: hands it back and starts a fresh game.
    pub fn acknowledge(&mut self) -> Option<Conclusion> {
        let conclusion = self.conclusion()?;
        self.restart();
        Some(conclusion)
    }

    // only the player who just moved can have completed a line
    fn has_game_concluded(&self, mover: Player) -> Option<Conclusion> {
        if self.board.mark_count() < 5 {
            return None;
        }

        if self.board.has_line(mover) {
            return Some(Conclusion::Win(mover));
        }

        if self.board.is_full() {
            return Some(Conclusion::Draw);
        }

        None
    }

    fn is_valid_mark(&self, tile: TileId) -> bool {
        self.board[tile].is_none()
    }
}
