use std::path::Path;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::config::Pacing;
use crate::driver::dispatch;
use crate::error::{Error, Result};
use crate::message::{Event, Output};
use crate::session::Session;

/// Reads a RON list of events, e.g. `[CellActivated(4), Restart]`.
pub async fn load_script(path: &Path) -> Result<Vec<Event>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
    parse_script(&text)
}

pub fn parse_script(text: &str) -> Result<Vec<Event>> {
    ron::from_str(text).map_err(Error::Script)
}

/// Plays `events` without pauses, writing each output as one line of RON.
pub async fn replay<W>(session: &mut Session, events: Vec<Event>, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    info!(events = events.len(), "replaying");
    for event in events {
        let mut outputs = Vec::new();
        dispatch(session, event, Pacing::INSTANT, &mut |o| outputs.push(o)).await;
        for output in outputs {
            send(out, &output).await?;
        }
    }
    out.flush().await?;
    Ok(())
}

async fn send<W>(out: &mut W, output: &Output) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let line = format!("{}\n", ron::ser::to_string(output)?);
    out.write_all(line.as_bytes()).await?;
    Ok(())
}
