use lightsout::io::test_utils::{MockInput, MockOutput};
use lightsout::services::game::Game;
use lightsout::{GameEngine, GameState, LinearGame};

/// Finds presses that solve `game`: choose whether to press the first
/// light, then chase every remaining light rightward.
fn solution(game: &LinearGame) -> Option<Vec<isize>> {
    for press_first in [false, true] {
        let mut trial = game.clone();
        let mut presses = Vec::new();
        if press_first {
            trial.pressed_light_at_index(0);
            presses.push(0);
        }
        for i in 0..trial.num_lights() - 1 {
            if trial.is_light_on_at_index(i) {
                trial.pressed_light_at_index(i as isize + 1);
                presses.push(i as isize + 1);
            }
        }
        if trial.check_for_win() {
            return Some(presses);
        }
    }
    None
}

#[test]
fn game_initialization() {
    let game = LinearGame::with_seed(13, 42);

    assert_eq!(game.num_lights(), 13);
    assert_eq!(game.light_states().len(), 13);
    assert_eq!(game.num_moves_taken(), 0);
    assert!(!game.check_for_win());
}

#[test]
fn deterministic_board_same_seed() {
    let game1 = LinearGame::with_seed(21, 100);
    let game2 = LinearGame::with_seed(21, 100);

    assert_eq!(game1.light_states(), game2.light_states());
}

#[test]
fn repeated_new_games_never_start_solved() {
    for num_lights in 3..=16 {
        let mut game = LinearGame::with_seed(num_lights, num_lights as u64);
        for _ in 0..50 {
            game.new_game();
            assert!(!game.check_for_win());
            assert_eq!(game.num_moves_taken(), 0);
            assert_eq!(game.light_states().len(), num_lights);
        }
    }
}

#[test]
fn scrambled_boards_are_solvable() {
    for num_lights in 3usize..=16 {
        for seed in 0..20 {
            let game = LinearGame::with_seed(num_lights, seed);
            assert!(
                solution(&game).is_some(),
                "{} lights, seed {} has no solution",
                num_lights,
                seed
            );
        }
    }
}

#[test]
fn engine_reports_win_and_freezes() {
    let mut engine = GameEngine::with_seed(7, 9);
    let presses = solution(engine.game()).expect("scramble is solvable");

    for (n, index) in presses.iter().enumerate() {
        let won = engine.press(*index);
        assert_eq!(won, n + 1 == presses.len());
    }

    let moves = engine.game().num_moves_taken();
    assert_eq!(moves as usize, presses.len());
    assert_eq!(engine.state(), GameState::Won { moves });

    let before = engine.game().light_states().to_vec();
    assert!(engine.press(3));
    assert_eq!(engine.game().light_states(), before.as_slice());
    assert_eq!(engine.state(), GameState::Won { moves });
}

#[test]
fn console_session_plays_through() {
    let engine = GameEngine::with_seed(5, 1);
    let input = MockInput::new(vec!["help", "3", "3", "n", "q"]);
    let mut game = Game::new(engine, input, MockOutput::new());

    game.run().expect("session should end cleanly");

    let text = game.output().text();
    assert!(text.contains("PRESS THAT LIGHT"));
    assert!(text.contains("Turn the lights off!"));
    assert!(text.contains("GOODBYE."));
    assert_eq!(game.engine.state(), GameState::Playing { moves: 0 });
}
