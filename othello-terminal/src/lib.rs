//! `othello-terminal` hosts an [`othello_engine::GameEngine`] in a terminal.
//!
//! The host only translates typed input into (column, row) pairs and prints what
//! the engine reports; every rule lives in the engine.

pub mod config;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;
