//! A single game played over a line-oriented input and output.

use crate::input::{Command, ParseCommandError};
use crate::render::render_board;
use itertools::Itertools;
use othello_engine::{GameEngine, LocationList, Score};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "\
Enter a cell as a column letter and row number (D3), or as column and row
numbers counted from zero (3 2). Other commands:
  moves  list the cells where the player to move can play
  help   show this message
  quit   abandon the game";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Mark the cells where the player to move can play.
    pub hints: bool,
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player to move had no legal move.
    Finished(Score),
    /// A player typed `quit`.
    Quit,
    /// The input ran out.
    Closed,
}

pub struct Session<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session on a fresh game.
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self::with_engine(GameEngine::new(), input, output, options)
    }

    /// Start a session on an existing game.
    pub fn with_engine(engine: GameEngine, input: R, output: W, options: SessionOptions) -> Self {
        Self {
            engine,
            input,
            output,
            options,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until the game ends, a player quits, or the input runs out.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        info!("game started");
        self.draw()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed, abandoning game");
                writeln!(self.output)?;
                return Ok(SessionEnd::Closed);
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(ParseCommandError::Empty) => continue,
                Err(err) => {
                    writeln!(self.output, "Sorry, {}. Type `help` for commands.", err)?;
                    continue;
                }
            };

            match command {
                Command::Quit => {
                    info!("game abandoned");
                    return Ok(SessionEnd::Quit);
                }
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Moves => {
                    let mut moves = self.engine.legal_moves(self.engine.current_player());
                    writeln!(self.output, "Legal moves: {}", moves.join(", "))?;
                }
                Command::Place { x, y } => {
                    if let Some(end) = self.place(x, y)? {
                        return Ok(end);
                    }
                }
            }
        }
    }

    fn place(&mut self, x: usize, y: usize) -> io::Result<Option<SessionEnd>> {
        let mover = self.engine.current_player();

        match self.engine.try_move(x, y) {
            Err(err) => {
                writeln!(self.output, "You cannot place a piece there! ({})", err)?;
                Ok(None)
            }
            Ok(flips) => {
                debug!(player = %mover, x, y, flipped = flips.len(), "placed piece");
                self.draw()?;

                if !self.engine.is_terminal() {
                    return Ok(None);
                }

                let score = self.engine.score();
                info!(black = score.black, white = score.white, "game over");
                writeln!(self.output, "Game over")?;
                writeln!(self.output, "{}", self.engine.result_summary())?;
                Ok(Some(SessionEnd::Finished(score)))
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let hints = if self.options.hints {
            self.engine.legal_moves(self.engine.current_player())
        } else {
            LocationList::default()
        };

        writeln!(self.output, "{}", render_board(self.engine.board(), hints))?;
        writeln!(self.output, "{}", self.engine.current_player_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_engine::{Board, Cell, Player};

    fn run_script(
        engine: GameEngine,
        script: &str,
        options: SessionOptions,
    ) -> (SessionEnd, GameEngine, String) {
        let mut output = Vec::new();
        let mut session = Session::with_engine(engine, script.as_bytes(), &mut output, options);
        let end = session.run().unwrap();
        let engine = *session.engine();
        drop(session);

        (end, engine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn illegal_then_legal_move() {
        let (end, engine, output) =
            run_script(GameEngine::new(), "d4\nc5\nquit\n", SessionOptions::default());

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("You cannot place a piece there! (D4 is already occupied)"));
        assert!(output.contains("White to move"));
        assert_eq!(engine.board().cell(2, 4), Cell::Black);
        assert_eq!(engine.board().cell(3, 4), Cell::Black);
        assert_eq!(engine.current_player(), Player::White);
    }

    #[test]
    fn coordinates_and_off_board_cells() {
        let (end, engine, output) =
            run_script(GameEngine::new(), "8 0\n2,4\n", SessionOptions::default());

        assert_eq!(end, SessionEnd::Closed);
        assert!(output.contains("(8, 0) is off the board"));
        assert_eq!(engine.score().black, 4);
    }

    #[test]
    fn unknown_input_reprompts() {
        let (end, engine, output) =
            run_script(GameEngine::new(), "\nhello\n", SessionOptions::default());

        assert_eq!(end, SessionEnd::Closed);
        assert!(output.contains("Sorry, cannot understand \"hello\""));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn lists_moves_and_hints() {
        let options = SessionOptions { hints: true };
        let (_, _, output) = run_script(GameEngine::new(), "moves\n", options);

        assert!(output.contains("Legal moves: E3, F4, C5, D6"));
        assert!(output.contains(" 5 . . * O # . . ."));
    }

    #[test]
    fn reports_result_when_game_ends() {
        let board: Board = format!("{}XXXXXXO-", "X".repeat(56)).parse().unwrap();
        let engine = GameEngine::with_position(board, Player::Black);
        let (end, _, output) = run_script(engine, "h8\nquit\n", SessionOptions::default());

        assert_eq!(end, SessionEnd::Finished(Score { black: 64, white: 0 }));
        assert!(output.ends_with("Game over\nBlack wins!\nBlack: 64, White: 0\n"));
    }
}
