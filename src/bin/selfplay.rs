//! Plays the built-in opponent against itself and prints the game.
//!
//! ```text
//! RUST_LOG=checkers_engine=debug checkers-selfplay --seed 7 --policy uniform
//! ```

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use checkers_engine::{
    CapturePolicy, CheckersEngine, Color, GameRng, GameState, GameStatus, Opponent, PromotionRule,
};
use checkers_engine::opponent::policy_for;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Random among the longest capture chains.
    Max,
    /// Random among all legal moves.
    Uniform,
}

impl From<PolicyArg> for CapturePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Max => CapturePolicy::MaxCaptures,
            PolicyArg::Uniform => CapturePolicy::AnyCapture,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PromotionArg {
    /// Crowning ends the capture chain.
    Ends,
    /// A crowned piece keeps capturing as a king.
    Continue,
}

impl From<PromotionArg> for PromotionRule {
    fn from(arg: PromotionArg) -> Self {
        match arg {
            PromotionArg::Ends => PromotionRule::EndsSequence,
            PromotionArg::Continue => PromotionRule::ContinueAsKing,
        }
    }
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "checkers-selfplay")]
#[command(about = "Play the random opponent against itself")]
struct Args {
    /// Base RNG seed; each side plays from its own fork.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many turns.
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Move selection policy for both sides.
    #[arg(long, value_enum, default_value_t = PolicyArg::Max)]
    policy: PolicyArg,

    /// What happens when a man is crowned mid-chain.
    #[arg(long, value_enum, default_value_t = PromotionArg::Ends)]
    promotion: PromotionArg,

    /// Print only the final board.
    #[arg(long)]
    quiet: bool,
}

const DEFAULT_LOG: &str = "checkers_engine=info";

/// `RUST_LOG` when set and valid, otherwise info-level engine logs.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(rust_log.as_deref()))
        .init();

    let args = Args::parse();
    let engine = CheckersEngine::new(args.promotion.into());
    let policy = CapturePolicy::from(args.policy);

    let mut streams = GameRng::new(args.seed);
    let mut red = Opponent::with_rng(Color::Red, streams.fork());
    red.set_policy(policy_for(policy));
    let mut black = Opponent::with_rng(Color::Black, streams.fork());
    black.set_policy(policy_for(policy));

    let mut state = GameState::new();
    tracing::info!(seed = args.seed, ?policy, "self-play starting");

    while state.turn_number() <= args.max_turns {
        if let GameStatus::NoLegalMoves(stuck) = engine.status(&state) {
            println!("{stuck} has no legal move; {} wins", stuck.opponent());
            break;
        }

        let mover = match state.current_player() {
            Color::Red => &mut red,
            Color::Black => &mut black,
        };
        if let Some(outcome) = mover.take_turn(&engine, &mut state)? {
            if !args.quiet {
                let promoted = if outcome.promoted { " (crowned)" } else { "" };
                println!("{}{}", last_move(&state), promoted);
                println!("{}", state.board());
            }
        }
    }

    let board = state.board();
    println!("{board}");
    println!(
        "red {} ({} kings), black {} ({} kings) after {} turns",
        board.count(Color::Red),
        board.kings(Color::Red),
        board.count(Color::Black),
        board.kings(Color::Black),
        state.turn_number() - 1,
    );
    Ok(())
}

fn last_move(state: &GameState) -> String {
    state
        .history()
        .last()
        .map(|record| format!("{:>3}. {} {}", record.turn, record.player, record.mv))
        .unwrap_or_default()
}
