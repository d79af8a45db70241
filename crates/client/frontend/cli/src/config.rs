//! Console configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ArcadeConfig {
    /// Delay between frames.
    pub frame_interval: Duration,
    /// Roster RON file; the bundled roster when unset.
    pub roster_path: Option<PathBuf>,
    /// Battle TOML file; built-in defaults when unset.
    pub battle_config_path: Option<PathBuf>,
    /// Session seed; derived from the clock when unset.
    pub seed: Option<u64>,
    /// Name of the log directory for this run.
    pub session_id: Option<String>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(Self::DEFAULT_FRAME_MS),
            roster_path: None,
            battle_config_path: None,
            seed: None,
            session_id: None,
        }
    }
}

impl ArcadeConfig {
    pub const DEFAULT_FRAME_MS: u64 = 16;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARCADE_FRAME_MS` - Frame interval in milliseconds (default: 16)
    /// - `ARCADE_ROSTER` - Path to a roster RON file
    /// - `ARCADE_BATTLE_CONFIG` - Path to a battle TOML file
    /// - `ARCADE_SEED` - Session seed
    /// - `ARCADE_SESSION_ID` - Log directory name
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("ARCADE_FRAME_MS") {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }
        config.roster_path = read_env("ARCADE_ROSTER");
        config.battle_config_path = read_env("ARCADE_BATTLE_CONFIG");
        config.seed = read_env("ARCADE_SEED");
        config.session_id = read_env::<String>("ARCADE_SESSION_ID").filter(|id| !id.is_empty());

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
