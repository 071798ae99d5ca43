//! Tic-tac-toe for two players, or one player against an unbeatable minimax O.
//!
//! [`game::Game`] is the state machine and [`minimax::select_move`] picks the
//! computer's tiles. [`session::Session`] ties them to the events a front end
//! sends, and [`driver`] adds the pauses between a move and its follow-ups.

pub mod board;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod message;
pub mod minimax;
pub mod replay;
pub mod score;
pub mod session;
pub mod term;

pub use board::{Board, Player, TileId, WINNING_LINES};
pub use config::{Config, Pacing};
pub use error::{Error, Result};
pub use game::{Conclusion, Game, MoveOutcome, State};
pub use message::{Event, Opponent, Output};
pub use minimax::select_move;
pub use score::ScoreBoard;
pub use session::Session;
