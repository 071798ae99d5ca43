//! Runs events through a [`Session`] with the pauses a player expects to see.
//!
//! A human move may be followed by a computer reply, and any concluding move
//! by a short wait, the notification, and an automatic reset. Pauses are
//! never cancelled once started.

use tokio::time::sleep;
use tracing::debug;

use crate::config::Pacing;
use crate::message::{Event, Output};
use crate::session::Session;

pub async fn dispatch<F>(session: &mut Session, event: Event, pacing: Pacing, render: &mut F)
where
    F: FnMut(Output),
{
    let mut outputs = session.handle(event);

    loop {
        emit(outputs, pacing, &mut *render).await;

        if session.awaiting_acknowledgement() {
            debug!("resetting after conclusion");
            for output in session.acknowledge() {
                render(output);
            }
            return;
        }

        if !session.computer_to_move() {
            return;
        }
        sleep(pacing.computer_delay).await;
        outputs = session.play_computer_turn();
    }
}

async fn emit<F>(outputs: Vec<Output>, pacing: Pacing, render: &mut F)
where
    F: FnMut(Output),
{
    for output in outputs {
        // let the final mark show before the announcement
        if let Output::Notification(_) = output {
            sleep(pacing.notify_delay).await;
        }
        render(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::message::Opponent;
    use std::time::Duration;

    async fn run(session: &mut Session, events: Vec<Event>) -> Vec<Output> {
        let mut seen = Vec::new();
        for event in events {
            dispatch(session, event, Pacing::INSTANT, &mut |o| seen.push(o)).await;
        }
        seen
    }

    #[tokio::test]
    async fn computer_replies_after_human() {
        let mut session = Session::new(Opponent::Computer);
        let seen = run(&mut session, vec![Event::CellActivated(0)]).await;
        assert_eq!(
            seen,
            vec![
                Output::Marked {
                    tile: 0,
                    player: Player::X
                },
                Output::Marked {
                    tile: 4,
                    player: Player::O
                },
            ]
        );
        assert_eq!(session.game().whos_turn(), Some(Player::X));
    }

    #[tokio::test]
    async fn conclusion_resets_automatically() {
        let mut session = Session::new(Opponent::Human);
        let events = [0, 3, 1, 4, 2].map(Event::CellActivated).to_vec();
        let seen = run(&mut session, events).await;
        assert_eq!(seen.last(), Some(&Output::Cleared));
        assert!(seen.contains(&Output::Notification("Player X wins!".to_string())));
        assert_eq!(session.game().board().mark_count(), 0);
        assert_eq!(session.game().scores().wins(Player::X), 1);
    }

    #[tokio::test]
    async fn switching_to_computer_on_o_turn_plays_o() {
        let mut session = Session::new(Opponent::Human);
        run(&mut session, vec![Event::CellActivated(4)]).await;
        let seen = run(&mut session, vec![Event::SetOpponent(Opponent::Computer)]).await;
        assert_eq!(seen.len(), 1);
        assert_eq!(session.game().whos_turn(), Some(Player::X));
    }

    #[tokio::test(start_paused = true)]
    async fn computer_waits_for_its_delay() {
        let mut session = Session::new(Opponent::Computer);
        let pacing = Pacing {
            computer_delay: Duration::from_millis(500),
            notify_delay: Duration::from_millis(10),
        };
        let start = tokio::time::Instant::now();
        dispatch(&mut session, Event::CellActivated(0), pacing, &mut |_| {}).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
