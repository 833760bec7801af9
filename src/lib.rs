//! Lights Out
//!
//! A single row of lights. Pressing a light toggles it and its immediate
//! neighbors; the puzzle is solved when every light is off.
//!
//! # Modules
//!
//! - [`models`] - The [`LinearGame`] board, constants and error types
//! - [`game_engine`] - Command interface and Playing/Won state
//! - [`services`] - Command parsing and the console loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of the board and status message
//! - [`cli`] - Command-line options
//!
//! # Example
//!
//! ```rust
//! use lightsout::LinearGame;
//!
//! let mut game = LinearGame::with_seed(13, 42);
//! assert!(!game.check_for_win());
//! game.pressed_light_at_index(6);
//! assert_eq!(game.num_moves_taken(), 1);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameState};
pub use models::linear_game::LinearGame;
