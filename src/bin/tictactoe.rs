//! Tic-tac-toe in the terminal.
//!
//! Moves and game events are logged through `tracing` on stderr; the
//! board and prompts go to stdout. Set `RUST_LOG=debug` to see every
//! policy decision.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use turnboard::core::{GameConfig, PolicyKind};
use turnboard::games::tictactoe::{self, Mode, TicTacToeBuilder};

/// Play tic-tac-toe against a friend or a random AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe on a configurable grid", long_about = None)]
#[command(version)]
struct Cli {
    /// Who plays
    #[arg(value_enum, default_value_t = ModeArg::Pvp)]
    mode: ModeArg,

    /// TOML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Move policy (defaults to replacement for pvp, blank-only otherwise)
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Grid side length
    #[arg(long)]
    size: Option<usize>,

    /// Accepted moves before the game is declared a draw
    #[arg(long)]
    max_turns: Option<u32>,

    /// Overwrites each mark may perform under the replacement policy
    #[arg(long)]
    budget: Option<u32>,

    /// Seed for the AI players
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Two players at the keyboard
    Pvp,
    /// You (X) against a random AI (O)
    VsAi,
    /// Two random AIs
    AiVsAi,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::VsAi => Mode::PlayerVsAi,
            ModeArg::AiVsAi => Mode::AiVsAi,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Marks only go into empty cells
    BlankOnly,
    /// Empty cells plus a limited number of overwrites
    Replacement,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::BlankOnly => PolicyKind::BlankOnly,
            PolicyArg::Replacement => PolicyKind::Replacement,
        }
    }
}

/// Layer the mode defaults, the config file (if any) and command-line
/// overrides, in that order.
fn load_config(cli: &Cli, mode: Mode) -> Result<GameConfig> {
    let mut config = mode.base_config();
    if let Some(path) = &cli.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        config = config
            .merge_toml_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
    }

    if let Some(policy) = cli.policy {
        config.policy = policy.into();
    }
    if let Some(size) = cli.size {
        config.grid_size = size;
    }
    if let Some(max_turns) = cli.max_turns {
        config.max_turns = max_turns;
    }
    if let Some(budget) = cli.budget {
        config.replacement_budget = budget;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = Mode::from(cli.mode);
    let config = load_config(&cli, mode)?;
    info!(?mode, ?config, "starting");

    println!("{}\n", tictactoe::instructions(mode, config.grid_size));

    let mut game = TicTacToeBuilder::new(config).mode(mode).build()?;
    let outcome = loop {
        println!("{}\n", tictactoe::render(game.board()));
        if let Some(outcome) = game.play_turn()? {
            break outcome;
        }
    };

    println!("{}\n", tictactoe::render(game.board()));
    println!("{}", tictactoe::announce(outcome));
    Ok(())
}
