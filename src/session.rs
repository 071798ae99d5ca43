use tracing::{debug, info, instrument};

use crate::board::Player;
use crate::game::{Conclusion, Game, MoveOutcome, State};
use crate::message::{Event, Opponent, Output};
use crate::minimax::select_move;

/// One page session: a game, its running scores, and the opponent setting.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    opponent: Opponent,
}

impl Session {
    pub fn new(opponent: Opponent) -> Self {
        Self {
            game: Game::new(),
            opponent,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    #[instrument(skip(self))]
    pub fn handle(&mut self, event: Event) -> Vec<Output> {
        match event {
            Event::CellActivated(index) => self.play(index),
            Event::SetOpponent(opponent) => {
                info!(%opponent, "opponent changed");
                self.opponent = opponent;
                Vec::new()
            }
            Event::Restart => {
                self.game.restart();
                vec![Output::Cleared]
            }
            Event::Acknowledge => self.acknowledge(),
        }
    }

    pub fn computer_to_move(&self) -> bool {
        self.opponent == Opponent::Computer && self.game.state() == State::Playing(Player::O)
    }

    pub fn awaiting_acknowledgement(&self) -> bool {
        self.game.conclusion().is_some()
    }

    /// Lets minimax pick O's tile and plays it. Does nothing unless it is the computer's turn.
    pub fn play_computer_turn(&mut self) -> Vec<Output> {
        if !self.computer_to_move() {
            return Vec::new();
        }
        match select_move(self.game.board(), Player::O) {
            Some(tile) => {
                debug!(%tile, "computer move");
                self.play(tile.index())
            }
            None => Vec::new(),
        }
    }

    pub fn acknowledge(&mut self) -> Vec<Output> {
        match self.game.acknowledge() {
            Some(_) => vec![Output::Cleared],
            None => Vec::new(),
        }
    }

    fn play(&mut self, index: u8) -> Vec<Output> {
        let Some(player) = self.game.whos_turn() else {
            return Vec::new();
        };

        match self.game.apply_move(index) {
            MoveOutcome::Ignored => Vec::new(),
            MoveOutcome::NextTurn(_) => vec![Output::Marked {
                tile: index,
                player,
            }],
            MoveOutcome::Concluded(conclusion) => {
                let mut outputs = vec![
                    Output::Marked {
                        tile: index,
                        player,
                    },
                    Output::Notification(conclusion.to_string()),
                ];
                if let Conclusion::Win(_) = conclusion {
                    outputs.push(self.score_text());
                }
                outputs
            }
        }
    }

    pub fn score_text(&self) -> Output {
        let scores = self.game.scores();
        Output::Scores {
            player1: scores.label(Player::X),
            player2: scores.label(Player::O),
        }
    }
}
