//! Console entry point.
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use arcade_frontend_cli::{ArcadeApp, ArcadeConfig, logging};
use arcade_frontend_core::{BattleGame, GameModule, GameShelf};
use battle_content::{ConfigLoader, RosterLoader, default_roster};
use battle_core::{Arena, BattleConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ArcadeConfig::from_env();
    logging::setup_logging(config.session_id.as_deref())?;

    let roster = match &config.roster_path {
        Some(path) => RosterLoader::load(path)?,
        None => default_roster()?,
    };
    let battle_config = match &config.battle_config_path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Invalid battle config {}", path.display()))?,
        None => BattleConfig::default(),
    };
    let seed = config.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, "arcade configured");

    let mut shelf = GameShelf::new();
    shelf.register(GameModule::dual(BattleGame::new(Arena::new(
        Arc::new(roster),
        battle_config,
        seed,
    ))));

    ArcadeApp::new(shelf, config).run().await
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
