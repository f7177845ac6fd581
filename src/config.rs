//! Game setup parameters.
//!
//! Config files are YAML with a `quoridor` section. Every field has a default,
//! and unknown keys are ignored so the same file can carry other sections.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::fences::{FenceRules, TrapCheck};

/// Letters `a` to `z` name the columns.
pub const MAX_WIDTH: usize = 26;

/// Board and rule parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Fences for the whole game, split evenly between the two players.
    pub total_fences: usize,
    /// Refuse fences once a player has used up their share.
    pub enforce_fence_limit: bool,
    pub trap_check: TrapCheck,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            total_fences: 20,
            enforce_fence_limit: true,
            trap_check: TrapCheck::WithCandidate,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 2 || self.height < 2 {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_WIDTH {
            return Err(ConfigError::BoardTooWide(self.width));
        }
        if self.total_fences % 2 != 0 {
            return Err(ConfigError::OddFenceTotal(self.total_fences));
        }
        Ok(())
    }

    pub fn fences_per_player(&self) -> usize {
        self.total_fences / 2
    }

    pub fn fence_rules(&self) -> FenceRules {
        FenceRules {
            enforce_fence_limit: self.enforce_fence_limit,
            trap_check: self.trap_check,
        }
    }
}

/// Top-level file layout; only the `quoridor` section is read.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    quoridor: GameConfig,
}

/// Load and validate a `GameConfig` from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
    let file: ConfigFile = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
    file.quoridor
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
    Ok(file.quoridor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(yaml.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_full_config() {
        let f = write_config(
            r#"
run_id: test-run
quoridor:
  width: 7
  height: 11
  total_fences: 12
  enforce_fence_limit: false
  trap_check: pre_existing
display:
  colour: false
"#,
        );

        let config = load_config(f.path()).unwrap();
        assert_eq!(config.width, 7);
        assert_eq!(config.height, 11);
        assert_eq!(config.fences_per_player(), 6);
        assert!(!config.enforce_fence_limit);
        assert_eq!(config.trap_check, TrapCheck::PreExisting);
    }

    #[test]
    fn test_load_minimal_config() {
        let f = write_config(
            r#"
quoridor:
  width: 5
"#,
        );

        let config = load_config(f.path()).unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 9);
        assert_eq!(config.total_fences, 20);
        assert!(config.enforce_fence_limit);
        assert_eq!(config.trap_check, TrapCheck::WithCandidate);
    }

    #[test]
    fn test_load_config_missing_quoridor() {
        let f = write_config(
            r#"
display:
  colour: true
"#,
        );
        assert!(load_config(f.path()).is_err());
    }

    #[test]
    fn test_load_config_rejects_bad_values() {
        let f = write_config(
            r#"
quoridor:
  total_fences: 7
"#,
        );
        let err = load_config(f.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::OddFenceTotal(7))
        );

        let f = write_config(
            r#"
quoridor:
  trap_check: sometimes
"#,
        );
        assert!(load_config(f.path()).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("/nonexistent/quoridor.yaml").is_err());
    }

    #[test]
    fn test_validate() {
        assert_eq!(GameConfig::default().validate(), Ok(()));

        let narrow = GameConfig {
            width: 1,
            ..GameConfig::default()
        };
        assert_eq!(
            narrow.validate(),
            Err(ConfigError::BoardTooSmall {
                width: 1,
                height: 9
            })
        );

        let wide = GameConfig {
            width: 27,
            ..GameConfig::default()
        };
        assert_eq!(wide.validate(), Err(ConfigError::BoardTooWide(27)));
    }
}
