use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tic_tac_toe::{replay, term, Config, Opponent, Session};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe in the terminal, against a friend or a minimax opponent.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// RON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Who plays O, overriding the settings file
    #[arg(long, value_enum, global = true)]
    opponent: Option<Opponent>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively (the default)
    Play,
    /// Run a RON list of events and print every output as RON
    Replay { script: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(opponent) = cli.opponent {
        config.opponent = opponent;
    }
    debug!(?config, "starting");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => term::play(&config).await?,
        Command::Replay { script } => {
            let events = replay::load_script(&script).await?;
            let mut session = Session::new(config.opponent);
            replay::replay(&mut session, events, &mut tokio::io::stdout()).await?;
        }
    }

    Ok(())
}
