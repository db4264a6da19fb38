//! Play a game of War from the command line.
//!
//! ```text
//! RUST_LOG=war_engine=debug war-sim --player1 Alice --player2 Bob --seed 42
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use war_engine::core::GameConfig;
use war_engine::games::war::WarSession;
use war_engine::rules::GameResult;

#[derive(Parser, Debug)]
#[command(name = "war-sim")]
#[command(about = "Simulate a two-player game of War")]
struct Args {
    /// Name of the first player
    #[arg(long, default_value = "Alice")]
    player1: String,

    /// Name of the second player
    #[arg(long, default_value = "Bob")]
    player2: String,

    /// Shuffle seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Deal the deck in canonical order instead of shuffling
    #[arg(long)]
    no_shuffle: bool,

    /// Stop after this many rounds
    #[arg(long, default_value_t = war_engine::core::DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = GameConfig::default()
        .with_players(args.player1, args.player2)
        .with_shuffle(!args.no_shuffle)
        .with_max_rounds(args.max_rounds);
    config.seed = args.seed;

    let mut session = WarSession::start(config)?;
    let result = session.play_to_completion();
    let game = session.game();

    if args.json {
        println!("{}", session.snapshot().to_json_pretty()?);
        return Ok(());
    }

    match result {
        Some(GameResult::Winner(winner)) => println!(
            "{} wins after {} rounds ({} wars, longest chain {})",
            game.player(winner).name(),
            game.rounds_played(),
            game.wars_count(),
            game.longest_war_chain()
        ),
        None => println!(
            "No winner after {} rounds ({} wars, longest chain {})",
            game.rounds_played(),
            game.wars_count(),
            game.longest_war_chain()
        ),
    }
    Ok(())
}
