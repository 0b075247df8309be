#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{
    cli::{self, Console, PlayOptions},
    init_logging, Game, GameConfig, MAX_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, MIN_BOARD_SIZE,
    BOARD_SIZE, SHOT_PAUSE_MS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

/// Two-player hot-seat Battleship for the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleet placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = BOARD_SIZE,
        value_parser = parse_board_size,
        help = "Side length of each square board"
    )]
    board_size: usize,
    #[arg(long, default_value_t = SHOT_PAUSE_MS, help = "Milliseconds to show each shot result (0 disables)")]
    pause_ms: u64,
    #[arg(long, help = "Do not clear the screen between turns")]
    no_clear: bool,
    #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS, help = "Random samples allowed per ship before giving up")]
    max_placement_attempts: u32,
    #[arg(long, help = "Log level (overrides BATTLESHIP_LOG), e.g. debug")]
    log_level: Option<String>,
}

#[cfg(feature = "std")]
fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {} and {}",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE
        ))
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.log_level.as_deref());

    let mut rng = if let Some(s) = args.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let name1 = console.prompt_name("Enter name for Player 1: ")?;
    let name2 = console.prompt_name("Enter name for Player 2: ")?;

    let config = GameConfig {
        board_size: args.board_size,
        max_placement_attempts: args.max_placement_attempts,
    };
    let mut game = Game::new(&name1, &name2, config);
    console.say(&format!("Placing ships for {}...", name1))?;
    console.say(&format!("Placing ships for {}...", name2))?;
    game.setup(&mut rng)?;

    let options = PlayOptions {
        pause: Duration::from_millis(args.pause_ms),
        clear_screen: !args.no_clear,
    };
    cli::play(&mut game, &mut console, options)?;
    Ok(())
}
