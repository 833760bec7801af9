//! Linear game model
//!
//! A single row of lights. Pressing a light toggles it and its immediate
//! neighbors; the row has no wraparound, so the end lights only have one
//! neighbor. The game is won when every light is off.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::constants::{MAX_NUM_LIGHTS, MIN_NUM_LIGHTS, NUM_RANDOM_INITIAL_CLICKS};

/// Game state for one row of lights.
#[derive(Clone)]
pub struct LinearGame {
    num_lights: usize,
    num_moves_taken: u32,
    /// `true` means the light is on.
    light_states: Vec<bool>,
    /// Set while `new_game` scrambles the board.
    doing_setup: bool,
    rng: StdRng,
}

impl LinearGame {
    /// Creates a scrambled game with `num_lights` lights, seeded from entropy.
    ///
    /// Values outside [`MIN_NUM_LIGHTS`]..=[`MAX_NUM_LIGHTS`] are clamped.
    pub fn new(num_lights: usize) -> Self {
        Self::with_rng(num_lights, StdRng::from_entropy())
    }

    /// Creates a scrambled game whose scrambles are reproducible from `seed`.
    pub fn with_seed(num_lights: usize, seed: u64) -> Self {
        Self::with_rng(num_lights, StdRng::seed_from_u64(seed))
    }

    /// Creates a game from an optional, possibly negative, requested size.
    ///
    /// A missing or negative request falls back to [`MIN_NUM_LIGHTS`].
    pub fn from_requested(requested: Option<i64>) -> Self {
        let num_lights = match requested {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(MAX_NUM_LIGHTS),
            _ => MIN_NUM_LIGHTS,
        };
        Self::new(num_lights)
    }

    fn with_rng(num_lights: usize, rng: StdRng) -> Self {
        let num_lights = num_lights.clamp(MIN_NUM_LIGHTS, MAX_NUM_LIGHTS);
        let mut game = LinearGame {
            num_lights,
            num_moves_taken: 0,
            light_states: vec![false; num_lights],
            doing_setup: false,
            rng,
        };
        game.new_game();
        game
    }

    /// Resets the board to a fresh, scrambled, unsolved position.
    ///
    /// The board is scrambled with the same press logic players use, so
    /// every starting position is solvable.
    pub fn new_game(&mut self) {
        self.doing_setup = true;
        self.light_states.iter_mut().for_each(|light| *light = false);

        for _ in 0..NUM_RANDOM_INITIAL_CLICKS {
            self.press_random_light();
        }
        if self.check_for_win() {
            trace!("scramble landed on a solved board, pressing once more");
            self.press_random_light();
        }

        self.num_moves_taken = 0;
        self.doing_setup = false;
        debug!("new game with {} lights", self.num_lights);
    }

    fn press_random_light(&mut self) {
        let index = self.rng.gen_range(0..self.num_lights) as isize;
        self.pressed_light_at_index(index);
    }

    /// Applies a press to the light at `index`.
    ///
    /// Returns `true` if the board is won after the press. An out-of-range
    /// index is ignored and returns `false`. Once the game is won, presses
    /// are ignored and return `true` until the next [`new_game`].
    ///
    /// [`new_game`]: LinearGame::new_game
    pub fn pressed_light_at_index(&mut self, index: isize) -> bool {
        if index < 0 || index >= self.num_lights as isize {
            return false;
        }
        if !self.doing_setup && self.check_for_win() {
            return true;
        }
        self.num_moves_taken += 1;
        self.toggle_state_at_index(index - 1);
        self.toggle_state_at_index(index);
        self.toggle_state_at_index(index + 1);
        self.check_for_win()
    }

    fn toggle_state_at_index(&mut self, index: isize) {
        if let Ok(i) = usize::try_from(index) {
            if let Some(light) = self.light_states.get_mut(i) {
                *light = !*light;
            }
        }
    }

    /// Returns true if every light is off.
    pub fn check_for_win(&self) -> bool {
        self.light_states.iter().all(|on| !on)
    }

    /// Returns the state of the light at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_lights()`.
    pub fn is_light_on_at_index(&self, index: usize) -> bool {
        self.light_states[index]
    }

    pub fn num_moves_taken(&self) -> u32 {
        self.num_moves_taken
    }

    pub fn num_lights(&self) -> usize {
        self.num_lights
    }

    pub fn light_states(&self) -> &[bool] {
        &self.light_states
    }

    /// Overwrites the board and clears the move count. Test fixture only.
    #[cfg(test)]
    pub(crate) fn set_light_states(&mut self, states: &[bool]) {
        assert_eq!(states.len(), self.num_lights);
        self.light_states.copy_from_slice(states);
        self.num_moves_taken = 0;
    }
}

impl Default for LinearGame {
    fn default() -> Self {
        Self::new(MIN_NUM_LIGHTS)
    }
}
