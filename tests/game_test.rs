//! State machine properties: ignored moves, draws, and restarts.

use proptest::prelude::*;
use tic_tac_toe::{Board, Conclusion, Event, Game, MoveOutcome, Opponent, Output, Player, Session, State};

/// Plays tiles in order until the game ends or the tiles run out.
fn play_out(game: &mut Game, order: &[u8]) {
    for &index in order {
        if game.conclusion().is_some() {
            return;
        }
        game.apply_move(index);
    }
}

fn shuffled_tiles() -> impl Strategy<Value = Vec<u8>> {
    Just((0..9).collect::<Vec<u8>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn finished_games_ignore_every_move(order in shuffled_tiles(), extra in 0u8..20) {
        let mut game = Game::new();
        play_out(&mut game, &order);
        prop_assert!(game.conclusion().is_some());

        let board = game.board().clone();
        let state = game.state();
        let scores = *game.scores();
        prop_assert_eq!(game.apply_move(extra), MoveOutcome::Ignored);
        prop_assert_eq!(game.board(), &board);
        prop_assert_eq!(game.state(), state);
        prop_assert_eq!(game.scores(), &scores);
    }

    #[test]
    fn nine_moves_without_a_line_draw(order in shuffled_tiles()) {
        let mut game = Game::new();
        play_out(&mut game, &order);
        if game.board().winner().is_none() {
            prop_assert_eq!(game.board().mark_count(), 9);
            prop_assert_eq!(game.conclusion(), Some(Conclusion::Draw));
        } else {
            prop_assert_eq!(game.conclusion(), game.board().winner().map(Conclusion::Win));
        }
    }

    #[test]
    fn restart_keeps_scores(order in shuffled_tiles(), cut in 0usize..10) {
        let mut game = Game::new();
        play_out(&mut game, &order[..cut.min(9)]);
        let scores = *game.scores();

        game.restart();
        prop_assert_eq!(game.board(), &Board::new());
        prop_assert_eq!(game.state(), State::Playing(Player::X));
        prop_assert_eq!(game.scores(), &scores);
    }
}

#[test]
fn scores_accumulate_across_games() {
    let mut session = Session::new(Opponent::Human);
    for _ in 0..2 {
        for index in [0, 3, 1, 4, 2] {
            session.handle(Event::CellActivated(index));
        }
        session.handle(Event::Acknowledge);
    }
    for index in [0, 3, 1, 4, 8, 5] {
        session.handle(Event::CellActivated(index));
    }
    assert_eq!(
        session.score_text(),
        Output::Scores {
            player1: "Player 1 (X) - Wins: 2".to_string(),
            player2: "Player 2 (O) - Wins: 1".to_string(),
        }
    );

    assert_eq!(session.handle(Event::Restart), vec![Output::Cleared]);
    assert_eq!(session.game().scores().wins(Player::X), 2);
    assert_eq!(session.game().scores().wins(Player::O), 1);
}
