//! Game state machine
//!
//! Wraps the [`LinearGame`] board behind the command interface used by the
//! front-end. The state is never stored: Playing and Won are derived from
//! the board on every query.

use log::{debug, info};

use crate::models::linear_game::LinearGame;

/// Owns the board and exposes the press and new-game commands
pub struct GameEngine {
    game: LinearGame,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Playing { moves: u32 },
    Won { moves: u32 },
}

impl GameEngine {
    /// Creates a new engine with a freshly scrambled board
    ///
    /// # Arguments
    ///
    /// * `num_lights` - Number of lights in the row, clamped to the minimum
    pub fn new(num_lights: usize) -> Self {
        Self::from_game(LinearGame::new(num_lights))
    }

    /// Creates a new engine whose scrambles are reproducible from `seed`
    pub fn with_seed(num_lights: usize, seed: u64) -> Self {
        Self::from_game(LinearGame::with_seed(num_lights, seed))
    }

    pub fn from_game(game: LinearGame) -> Self {
        info!("starting game with {} lights", game.num_lights());
        Self { game }
    }

    /// Returns an immutable reference to the board
    pub fn game(&self) -> &LinearGame {
        &self.game
    }

    /// Presses the light at `index`
    ///
    /// # Returns
    ///
    /// `true` if the board is won after the press, or was already won.
    /// `false` for an out-of-range index or an unsolved board.
    pub fn press(&mut self, index: isize) -> bool {
        let moves_before = self.game.num_moves_taken();
        let won = self.game.pressed_light_at_index(index);

        if self.game.num_moves_taken() == moves_before {
            if won {
                debug!("ignored press at {}: game already won", index);
            } else {
                debug!("ignored press at {}: no such light", index);
            }
        } else if won {
            info!("game won in {} moves", self.game.num_moves_taken());
        }
        won
    }

    /// Scrambles a new board and resets the move count
    pub fn new_game(&mut self) {
        self.game.new_game();
        info!("new game started");
    }

    /// Returns the current game state
    pub fn state(&self) -> GameState {
        let moves = self.game.num_moves_taken();
        if self.game.check_for_win() {
            GameState::Won { moves }
        } else {
            GameState::Playing { moves }
        }
    }
}
