//! The start menu shown before and between games.

use crate::session::{Session, SessionEnd, SessionOptions};
use std::io::{self, BufRead, Write};
use tracing::info;

const TITLE: &str = "Othello";

/// A choice made at the start menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

impl MenuChoice {
    /// Interpret one line typed at the menu. An empty line starts a game.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "start" | "s" => Some(MenuChoice::Start),
            "quit" | "exit" | "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Show the menu until the player quits or the input runs out, playing a game
/// each time one is requested.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: SessionOptions,
) -> io::Result<()> {
    let mut games = 0;

    loop {
        writeln!(output, "{}", TITLE)?;
        write!(output, "Press Enter (or type `start`) to play, `quit` to exit: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Start) => {
                games += 1;
                info!(game = games, "starting game from menu");

                let end = Session::new(&mut *input, &mut *output, options).run()?;
                if end == SessionEnd::Closed {
                    return Ok(());
                }
            }
            Some(MenuChoice::Quit) => {
                info!(games, "leaving menu");
                return Ok(());
            }
            None => writeln!(output, "Unknown choice {:?}.", line.trim())?,
        }
    }
}
