use crate::io::OutputWriter;
use crate::models::constants::LightDisplay;
use crate::models::linear_game::LinearGame;

pub struct BoardPresenter;

impl BoardPresenter {
    /// Headline shown above the board.
    pub fn status_message(game: &LinearGame) -> String {
        let moves = game.num_moves_taken();
        if game.check_for_win() {
            format!("You won in {} moves!", moves)
        } else if moves == 0 {
            "Turn the lights off!".to_string()
        } else if moves == 1 {
            format!("You have taken {} move.", moves)
        } else {
            format!("You have taken {} moves.", moves)
        }
    }

    /// How each light should be drawn, in row order.
    pub fn light_displays(game: &LinearGame) -> Vec<LightDisplay> {
        let won = game.check_for_win();
        (0..game.num_lights())
            .map(|i| {
                if won {
                    LightDisplay::GameWon
                } else if game.is_light_on_at_index(i) {
                    LightDisplay::On
                } else {
                    LightDisplay::Off
                }
            })
            .collect()
    }

    pub fn render_row(game: &LinearGame) -> String {
        Self::light_displays(game)
            .iter()
            .map(|d| d.symbol())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_labels(num_lights: usize) -> String {
        (1..=num_lights)
            .map(|n| format!("{:^3}", n))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn show_board(game: &LinearGame, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&Self::status_message(game));
        output.writeln(&Self::render_labels(game.num_lights()));
        output.writeln(&Self::render_row(game));
    }

    pub fn show_command_menu(num_lights: usize, output: &mut dyn OutputWriter) {
        output.writeln(&format!("   1-{} = PRESS THAT LIGHT", num_lights));
        output.writeln("   N = NEW GAME");
        output.writeln("   H = SHOW THIS MENU");
        output.writeln("   Q = QUIT");
    }
}
