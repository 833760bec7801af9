use clap::Parser;

use crate::models::constants::DEFAULT_NUM_LIGHTS;

/// Lights Out - turn every light in the row off
#[derive(Parser, Debug)]
#[command(name = "lightsout")]
#[command(version)]
pub struct Args {
    /// Number of lights in the row (clamped to 3..=1024)
    #[arg(short, long, default_value_t = DEFAULT_NUM_LIGHTS)]
    pub lights: usize,

    /// Seed for the board scrambler
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}
