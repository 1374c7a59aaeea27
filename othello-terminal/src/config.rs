//! Command-line configuration, with environment-variable fallbacks.

use crate::session::SessionOptions;
use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(name = "othello")]
#[command(about = "Two-player Othello in the terminal")]
pub struct Config {
    /// Tracing filter directive, e.g. `info` or `othello_engine=trace`
    #[arg(long, env = "OTHELLO_LOG", default_value = "warn")]
    pub log_level: String,

    /// Mark the cells where the player to move can play
    #[arg(long, env = "OTHELLO_HINTS")]
    pub hints: bool,

    /// Start a game immediately and exit when it ends
    #[arg(long)]
    pub skip_menu: bool,
}

impl Config {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions { hints: self.hints }
    }
}
