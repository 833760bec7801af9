use std::io::ErrorKind;

use log::warn;

use crate::game_engine::GameEngine;
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::{GameError, GameResult};
use crate::services::commands::{parse_command, Command};
use crate::ui::presenters::BoardPresenter;

/// Console front-end: owns one engine and redraws the board after
/// every command.
pub struct Game<I: InputReader, O: OutputWriter> {
    pub engine: GameEngine,
    input: I,
    output: O,
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(engine: GameEngine, input: I, output: O) -> Self {
        Game { engine, input, output }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Runs until the player quits or input ends.
    pub fn run(&mut self) -> GameResult<()> {
        BoardPresenter::show_command_menu(self.engine.game().num_lights(), &mut self.output);
        BoardPresenter::show_board(self.engine.game(), &mut self.output);

        loop {
            let line = match self.input.read_line("COMMAND") {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    self.output.writeln("");
                    break;
                }
                Err(e) => return Err(GameError::IoError(e)),
            };

            match parse_command(&line) {
                Ok(command) => {
                    if !self.execute(command) {
                        break;
                    }
                }
                Err(e) => {
                    warn!("rejected command {:?}: {}", line.trim(), e);
                    self.output.writeln(&format!("Error: {}", e));
                }
            }
        }

        self.output.writeln("GOODBYE.");
        Ok(())
    }

    /// Applies one command; returns false once the player quits.
    fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Press(index) => {
                let num_lights = self.engine.game().num_lights() as isize;
                self.engine.press(index);
                if index < 0 || index >= num_lights {
                    self.output.writeln("NO SUCH LIGHT");
                }
                BoardPresenter::show_board(self.engine.game(), &mut self.output);
            }
            Command::NewGame => {
                self.engine.new_game();
                BoardPresenter::show_board(self.engine.game(), &mut self.output);
            }
            Command::Help => {
                BoardPresenter::show_command_menu(self.engine.game().num_lights(), &mut self.output);
            }
            Command::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::GameState;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::linear_game::LinearGame;

    fn game_with(states: &[bool], commands: Vec<&str>) -> Game<MockInput, MockOutput> {
        let mut board = LinearGame::with_seed(states.len(), 5);
        board.set_light_states(states);
        Game::new(GameEngine::from_game(board), MockInput::new(commands), MockOutput::new())
    }

    #[test]
    fn winning_session_reports_win() {
        let mut game = game_with(&[true, true, true], vec!["2", "q"]);
        game.run().unwrap();

        assert_eq!(game.engine.state(), GameState::Won { moves: 1 });
        let text = game.output().text();
        assert!(text.contains("You won in 1 moves!"));
        assert!(text.contains("[-] [-] [-]"));
        assert!(text.ends_with("GOODBYE.\n"));
    }

    #[test]
    fn bad_commands_do_not_stop_the_loop() {
        let mut game = game_with(&[true, false, true], vec!["fire", "7", "1"]);
        game.run().unwrap();

        let text = game.output().text();
        assert!(text.contains("Error: Parse error"));
        assert!(text.contains("NO SUCH LIGHT"));
        assert!(text.contains("You have taken 1 move."));
        assert_eq!(game.engine.state(), GameState::Playing { moves: 1 });
    }

    #[test]
    fn new_game_resets_moves() {
        let mut game = game_with(&[true, false, true, false], vec!["1", "n"]);
        game.run().unwrap();

        assert_eq!(game.engine.state(), GameState::Playing { moves: 0 });
        assert!(game.output().text().contains("Turn the lights off!"));
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let mut game = game_with(&[true, false, false], vec![]);
        assert!(game.run().is_ok());
        assert!(game.output().text().contains("GOODBYE."));
    }

    #[test]
    fn quit_stops_reading_input() {
        let mut game = game_with(&[true, false, false], vec!["q", "1"]);
        game.run().unwrap();

        assert_eq!(game.input.prompts, vec!["COMMAND"]);
        assert_eq!(game.engine.state(), GameState::Playing { moves: 0 });
    }

    #[test]
    fn help_lists_every_command() {
        let mut game = game_with(&[true, false, false], vec!["?"]);
        game.run().unwrap();

        let text = game.output().text();
        assert_eq!(text.matches("H = SHOW THIS MENU").count(), 2);
        assert!(text.contains("N = NEW GAME"));
        assert!(text.contains("Q = QUIT"));
    }
}
