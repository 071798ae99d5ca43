use std::str::FromStr;

use tokio::io::{self, AsyncBufReadExt, BufReader};

use crate::board::{Board, TileId};
use crate::config::Config;
use crate::driver::dispatch;
use crate::message::{Event, Output};
use crate::session::Session;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play(Event),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = match (words.next(), words.next()) {
            (Some("quit" | "q"), None) => Command::Quit,
            (Some("help" | "?"), None) => Command::Help,
            (Some("restart" | "r"), None) => Command::Play(Event::Restart),
            (Some("mode"), Some(mode)) => Command::Play(Event::SetOpponent(mode.parse()?)),
            (Some(tile), None) => Command::Play(Event::CellActivated(TileId::from_str(tile)?.index())),
            _ => return Err(()),
        };
        if words.next().is_some() {
            return Err(());
        }
        Ok(command)
    }
}

const HELP: &str = "\
a1..c3 or 0..8   mark a tile
restart          clear the board
mode <who>       human or computer plays O
quit             leave";

/// What the player sees, rebuilt only from [`Output`]s.
#[derive(Debug, Default)]
struct View {
    board: Board,
}

impl View {
    fn render(&mut self, output: Output) {
        match output {
            Output::Marked { tile, player } => {
                if let Some(tile) = TileId::new(tile) {
                    self.board.mark(tile, player);
                    println!("{player} marks {tile}");
                }
            }
            Output::Notification(text) => println!("\n{}\n\n*** {text} ***", self.board),
            Output::Scores { player1, player2 } => println!("{player1}\n{player2}"),
            Output::Cleared => {
                self.board.reset();
                println!("New game.");
            }
        }
    }
}

/// Interactive game on stdin/stdout.
pub async fn play(config: &Config) -> io::Result<()> {
    let mut session = Session::new(config.opponent);
    let mut view = View::default();
    let pacing = config.pacing();
    let mut lines = BufReader::new(io::stdin()).lines();

    println!("Opponent: {}. Type `help` for commands.", session.opponent());
    view.render(session.score_text());

    loop {
        println!("\n{}\n", view.board);
        if let Some(turn) = session.game().whos_turn() {
            println!("{turn}'s turn: ");
        }

        let Some(input) = lines.next_line().await? else {
            return Ok(());
        };

        let event = match input.trim().parse::<Command>() {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(Command::Play(event)) => event,
            Err(()) => {
                println!("Invalid input! Try again.");
                continue;
            }
        };

        dispatch(&mut session, event, pacing, &mut |output| view.render(output)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Opponent;

    #[test]
    fn parses_commands() {
        assert_eq!("b2".parse(), Ok(Command::Play(Event::CellActivated(4))));
        assert_eq!("7".parse(), Ok(Command::Play(Event::CellActivated(7))));
        assert_eq!("restart".parse(), Ok(Command::Play(Event::Restart)));
        assert_eq!("mode computer".parse(), Ok(Command::Play(Event::SetOpponent(Opponent::Computer))));
        assert_eq!("mode Human".parse(), Ok(Command::Play(Event::SetOpponent(Opponent::Human))));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(()));
        assert_eq!("z9".parse::<Command>(), Err(()));
        assert_eq!("mode robot".parse::<Command>(), Err(()));
        assert_eq!("b2 b3".parse::<Command>(), Err(()));
    }
}
