//! Terminal front end.
//!
//! Reads one command per line from stdin and redraws the panel after each.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use scoundrel::ui::{panel, parse_command, Command, HELP};
use scoundrel::{GameSession, SessionConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn draw(out: &mut impl Write, session: &GameSession, message: &str) -> io::Result<()> {
    write!(out, "{}", panel(&session.snapshot()))?;
    if !message.is_empty() {
        writeln!(out, "{message}")?;
    }
    write!(out, "> ")?;
    out.flush()
}

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SessionConfig::from_env();
    let mut session = GameSession::new(config);
    tracing::info!(seed = session.seed(), "starting scoundrel");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    draw(&mut stdout, &session, HELP)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let message = match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => HELP.to_string(),
            Some(Command::Act(action)) => match session.dispatch(action) {
                Ok(outcome) => outcome.to_string(),
                Err(e) => e.to_string(),
            },
            None => format!("Unknown key {:?}. {HELP}", line.trim()),
        };
        draw(&mut stdout, &session, &message)?;
    }

    writeln!(stdout)?;
    Ok(())
}
