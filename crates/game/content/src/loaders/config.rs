//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
///
/// Every field is optional; missing ones keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        for (field, secs) in [
            ("effect_duration_secs", config.effect_duration_secs),
            ("tween_duration_secs", config.tween_duration_secs),
            ("post_action_wait_secs", config.post_action_wait_secs),
            ("flash_duration_secs", config.flash_duration_secs),
        ] {
            anyhow::ensure!(
                secs.is_finite() && secs >= 0.0,
                "{field} must be a non-negative number of seconds, got {secs}"
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::Position;

    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        let config = ConfigLoader::parse(include_str!("../../data/battle.toml")).unwrap();
        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            post_action_wait_secs = 0.25
            opponent_anchor = { x = 600, y = 120 }
            "#,
        )
        .unwrap();

        assert_eq!(config.post_action_wait_secs, 0.25);
        assert_eq!(config.opponent_anchor, Position::new(600, 120));
        assert_eq!(
            config.effect_duration_secs,
            BattleConfig::DEFAULT_EFFECT_DURATION_SECS
        );
    }

    #[test]
    fn rejects_negative_durations() {
        let err = ConfigLoader::parse("tween_duration_secs = -1.0").unwrap_err();
        assert!(err.to_string().contains("tween_duration_secs"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "effect_duration_secs = 0.75").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.effect_duration_secs, 0.75);
    }
}
