/// Smallest row the game can be played on.
pub const MIN_NUM_LIGHTS: usize = 3;
/// Largest row the game allocates; bigger requests are clamped.
pub const MAX_NUM_LIGHTS: usize = 1024;
/// Row length used by the console front-end when none is requested.
pub const DEFAULT_NUM_LIGHTS: usize = 13;
/// Random presses used to scramble the board at the start of a game.
pub const NUM_RANDOM_INITIAL_CLICKS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightDisplay {
    On,
    Off,
    GameWon,
}

impl LightDisplay {
    pub fn symbol(&self) -> &'static str {
        match self {
            LightDisplay::On => "[*]",
            LightDisplay::Off => "[ ]",
            LightDisplay::GameWon => "[-]",
        }
    }
}
