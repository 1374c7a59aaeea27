use anyhow::{Context, Result};
use clap::Parser;
use othello_terminal::config::Config;
use othello_terminal::menu;
use othello_terminal::session::Session;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log filter {:?}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(?config, "starting othello");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if config.skip_menu {
        let end = Session::new(&mut input, &mut output, config.session_options())
            .run()
            .context("game session failed")?;
        info!(?end, "session finished");
    } else {
        menu::run(&mut input, &mut output, config.session_options()).context("menu failed")?;
    }

    Ok(())
}
