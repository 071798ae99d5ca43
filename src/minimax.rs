//! Exhaustive minimax over the 3x3 board.
//!
//! O is the maximizing side and X the minimizing side. Every line of play is
//! searched to the end, which stays cheap only because the board is fixed at
//! nine tiles.

use std::cmp::Ordering;

use tracing::{instrument, trace};

use crate::board::{Board, Player, TileId};

pub const O_WINS: i32 = 10;
pub const X_WINS: i32 = -10;
pub const DRAW: i32 = 0;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct Evaluation {
    score: i32,
    /// Moves until the game ends along the principal line.
    plies: u32,
}

impl Evaluation {
    /// How `self` ranks against `other` from `player`'s side.
    ///
    /// Scores decide first. Between equal scores a win is better sooner and a
    /// loss is better later; equal draws compare as equal.
    fn cmp_for(&self, other: &Evaluation, player: Player) -> Ordering {
        let (mine, theirs) = match player {
            Player::O => (self.score, other.score),
            Player::X => (-self.score, -other.score),
        };
        mine.cmp(&theirs).then_with(|| match mine.cmp(&DRAW) {
            Ordering::Greater => other.plies.cmp(&self.plies),
            Ordering::Less => self.plies.cmp(&other.plies),
            Ordering::Equal => Ordering::Equal,
        })
    }
}

/// Picks the best tile for `player`, or `None` if the board is already decided.
///
/// The board passed in is never modified; the search marks and clears tiles on
/// a private copy. Among equally good tiles the lowest index wins.
#[instrument(skip(board), fields(marks = board.mark_count()))]
pub fn select_move(board: &Board, player: Player) -> Option<TileId> {
    if leaf_score(board).is_some() {
        return None;
    }

    let mut search = Search {
        board: board.clone(),
        nodes: 0,
    };
    let mut best: Option<(TileId, Evaluation)> = None;

    for tile in board.empty_tiles() {
        search.board.mark(tile, player);
        let eval = search.evaluate(!player);
        search.board.clear(tile);

        let eval = Evaluation {
            plies: eval.plies + 1,
            ..eval
        };
        trace!(%tile, score = eval.score, plies = eval.plies, "candidate");

        if best.map_or(true, |(_, b)| eval.cmp_for(&b, player) == Ordering::Greater) {
            best = Some((tile, eval));
        }
    }

    trace!(nodes = search.nodes, "search finished");
    best.map(|(tile, _)| tile)
}

/// Score of a finished board, `None` while play can continue.
fn leaf_score(board: &Board) -> Option<i32> {
    if board.has_line(Player::X) {
        Some(X_WINS)
    } else if board.has_line(Player::O) {
        Some(O_WINS)
    } else if board.is_full() {
        Some(DRAW)
    } else {
        None
    }
}

struct Search {
    board: Board,
    nodes: u64,
}

impl Search {
    fn evaluate(&mut self, to_move: Player) -> Evaluation {
        self.nodes += 1;
        if let Some(score) = leaf_score(&self.board) {
            return Evaluation { score, plies: 0 };
        }

        let mut best: Option<Evaluation> = None;
        for i in 0..9 {
            let Some(tile) = TileId::new(i).filter(|&t| self.board[t].is_none()) else {
                continue;
            };

            self.board.mark(tile, to_move);
            let child = self.evaluate(!to_move);
            self.board.clear(tile);

            let eval = Evaluation {
                score: child.score,
                plies: child.plies + 1,
            };
            if best.map_or(true, |b| eval.cmp_for(&b, to_move) == Ordering::Greater) {
                best = Some(eval);
            }
        }

        // a non-leaf board always has an empty tile
        best.unwrap_or(Evaluation {
            score: DRAW,
            plies: 0,
        })
    }
}
