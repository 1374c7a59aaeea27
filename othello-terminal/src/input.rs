//! Parsing of typed commands.
//!
//! A cell is accepted either in board notation (`D3`) or as `x y` / `x,y`
//! column and row numbers. Range checks are left to the engine, which rejects
//! off-board cells like any other illegal move.

use derive_more::{Display, Error};
use othello_engine::Location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Place { x: usize, y: usize },
    Moves,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseCommandError {
    #[display(fmt = "no command entered")]
    Empty,
    #[display(fmt = "cannot understand {:?}", input)]
    Unrecognized { input: String },
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseCommandError::Empty);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            "moves" | "m" => return Ok(Command::Moves),
            "help" | "h" | "?" => return Ok(Command::Help),
            _ => {}
        }

        if let Ok(loc) = trimmed.parse::<Location>() {
            let (x, y) = loc.to_coords();
            return Ok(Command::Place { x, y });
        }

        parse_pair(trimmed).ok_or_else(|| ParseCommandError::Unrecognized {
            input: trimmed.to_string(),
        })
    }
}

/// Parse `x y` or `x,y` into a placement.
fn parse_pair(s: &str) -> Option<Command> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(Command::Place { x, y })
}
