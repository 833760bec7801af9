//! Game services
//!
//! Command parsing and the console loop that drives the board.

pub mod commands;
pub mod game;
