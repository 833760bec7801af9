use env_logger::Env;
use log::error;

use lightsout::cli::args;
use lightsout::io::TerminalIO;
use lightsout::services::game::Game;
use lightsout::GameEngine;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = args::parse();

    println!("*** LIGHTS OUT ***");

    let engine = match args.seed {
        Some(seed) => GameEngine::with_seed(args.lights, seed),
        None => GameEngine::new(args.lights),
    };
    let mut game = Game::new(engine, TerminalIO, TerminalIO);
    if let Err(e) = game.run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
