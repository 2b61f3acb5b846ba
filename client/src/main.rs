mod renderer;
mod runner;

use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use arcade_common::config::{ConfigManager, EngineConfig};
use arcade_common::engine::session::{ChannelBroadcaster, MatchMode, MatchSession};
use arcade_common::games::tictactoe::Difficulty;
use arcade_common::games::{Geometry, SessionRng};
use arcade_common::{log, logger};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GameArg {
    TicTacToe,
    GravityConnect,
}

impl From<GameArg> for Geometry {
    fn from(game: GameArg) -> Self {
        match game {
            GameArg::TicTacToe => Geometry::TicTacToe,
            GameArg::GravityConnect => Geometry::GravityConnect,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Computer,
    Friend,
}

impl From<ModeArg> for MatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Computer => MatchMode::VsComputer,
            ModeArg::Friend => MatchMode::VsFriend,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "arcade_client")]
struct Args {
    #[arg(long, value_enum, default_value_t = GameArg::TicTacToe)]
    game: GameArg,

    #[arg(long, value_enum, default_value_t = ModeArg::Computer)]
    mode: ModeArg,

    /// Overrides the tic-tac-toe difficulty from the config file.
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Seed for the opponent's random choices; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "arcade.yaml")]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, EngineConfig, _> = ConfigManager::from_yaml_file(args.config.clone());
    let mut config = config_manager.get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.tictactoe.difficulty = difficulty.into();
    }

    let geometry = Geometry::from(args.game);
    let settings = config.match_settings(geometry, args.mode.into());
    let session_rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {} ({:?}, {}) with seed {}",
        geometry,
        settings.mode,
        config.tictactoe.difficulty,
        session_rng.seed()
    );

    let (broadcaster, events) = ChannelBroadcaster::channel();
    let session = MatchSession::new(settings, broadcaster, session_rng)?;
    runner::run_match(session, events).await?;

    log!("Client shut down");
    Ok(())
}
