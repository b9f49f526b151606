//! Interactive loop: read entries, show the next bet, keep the history.

use crate::entry::{parse_entry, EntryError};
use crate::render::{hand_line, indicator};
use crate::store;
use navigator_execution::{Session, SessionError};
use std::io::{BufRead, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// A line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hand(u8, u8),
    Reset,
    History,
    Help,
    Quit,
    Invalid(EntryError),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "r" | "reset" => Command::Reset,
            "h" | "history" => Command::History,
            "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => match parse_entry(other) {
                Ok((player, banker)) => Command::Hand(player, banker),
                Err(err) => Command::Invalid(err),
            },
        }
    }
}

const HELP: &str = "enter two digits (player then banker), r = reset, h = history, q = quit";

/// Options for [Console::run].
pub struct Console<'a> {
    /// Snapshot file written after every change.
    pub session_path: Option<&'a Path>,
    pub confirm_reset: bool,
}

impl Console<'_> {
    /// Drive `session` from `input` until quit or end of input.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut session: Session,
        input: &mut R,
        output: &mut W,
    ) -> Result<Session, ConsoleError> {
        writeln!(output, "{HELP}")?;
        self.prompt(&session, output)?;
        while let Some(line) = read_line(input)? {
            match Command::parse(&line) {
                Command::Hand(player, banker) => {
                    session = session.submit_hand(player, banker)?;
                    if let Some(hand) = session.latest() {
                        writeln!(output, "{}", hand_line(hand))?;
                    }
                    self.persist(&session, output)?;
                }
                Command::Reset => {
                    if self.confirm(input, output)? {
                        session = session.reset();
                        info!("session reset");
                        writeln!(output, "session cleared")?;
                        self.persist(&session, output)?;
                    } else {
                        writeln!(output, "reset cancelled")?;
                    }
                }
                Command::History => {
                    if session.ledger().is_empty() {
                        writeln!(output, "waiting for first hand")?;
                    }
                    for hand in session.ledger().newest_first() {
                        writeln!(output, "{}", hand_line(hand))?;
                    }
                }
                Command::Help => writeln!(output, "{HELP}")?,
                Command::Quit => break,
                Command::Invalid(err) => {
                    warn!(%err, "entry refused");
                    writeln!(output, "{err}")?;
                }
            }
            self.prompt(&session, output)?;
        }
        Ok(session)
    }

    fn prompt<W: Write>(&self, session: &Session, output: &mut W) -> Result<(), ConsoleError> {
        write!(
            output,
            "[next {} | total {}] > ",
            indicator(session.current_prediction()),
            session.ledger().running_total()
        )?;
        output.flush()?;
        Ok(())
    }

    fn confirm<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool, ConsoleError> {
        if !self.confirm_reset {
            return Ok(true);
        }
        write!(output, "clear all hand history? this cannot be undone [y/N] ")?;
        output.flush()?;
        let answer = read_line(input)?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }

    /// Save after a change. A failed save is reported and play continues.
    fn persist<W: Write>(&self, session: &Session, output: &mut W) -> Result<(), ConsoleError> {
        let Some(path) = self.session_path else {
            return Ok(());
        };
        if let Err(err) = store::save(path, session) {
            warn!(%err, "session not saved");
            writeln!(output, "could not save session: {err}")?;
        }
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, std::io::Error> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
