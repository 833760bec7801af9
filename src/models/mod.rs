//! Domain models
//!
//! The linear Lights Out board and the constants and error types
//! shared with the console front-end.

pub mod constants;
pub mod errors;
pub mod linear_game;
