use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Validate;
use crate::engine::session::{MatchMode, MatchSettings};
use crate::games::gravity_connect::CENTER_BIAS;
use crate::games::tictactoe::{Difficulty, MEDIUM_MISTAKE_THRESHOLD};
use crate::games::{Geometry, OpponentConfig};

const MAX_THINKING_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub difficulty: Difficulty,
    pub mistake_threshold: f64,
    pub thinking_delay_ms: u64,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            mistake_threshold: MEDIUM_MISTAKE_THRESHOLD,
            thinking_delay_ms: 600,
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.mistake_threshold) {
            return Err(format!(
                "mistake_threshold must be between 0 and 1, got {}",
                self.mistake_threshold
            ));
        }
        validate_delay(self.thinking_delay_ms)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GravityConnectConfig {
    pub center_bias: f64,
    pub thinking_delay_ms: u64,
}

impl Default for GravityConnectConfig {
    fn default() -> Self {
        Self {
            center_bias: CENTER_BIAS,
            thinking_delay_ms: 700,
        }
    }
}

impl Validate for GravityConnectConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.center_bias) {
            return Err(format!(
                "center_bias must be between 0 and 1, got {}",
                self.center_bias
            ));
        }
        validate_delay(self.thinking_delay_ms)
    }
}

fn validate_delay(delay_ms: u64) -> Result<(), String> {
    if delay_ms > MAX_THINKING_DELAY_MS {
        return Err(format!(
            "thinking_delay_ms must not exceed {}, got {}",
            MAX_THINKING_DELAY_MS, delay_ms
        ));
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub tictactoe: TicTacToeConfig,
    pub gravity_connect: GravityConnectConfig,
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.gravity_connect.validate()?;
        Ok(())
    }
}

impl EngineConfig {
    pub fn match_settings(&self, geometry: Geometry, mode: MatchMode) -> MatchSettings {
        let (opponent, delay_ms) = match geometry {
            Geometry::TicTacToe => (
                OpponentConfig::TicTacToe {
                    difficulty: self.tictactoe.difficulty,
                    mistake_threshold: self.tictactoe.mistake_threshold,
                },
                self.tictactoe.thinking_delay_ms,
            ),
            Geometry::GravityConnect => (
                OpponentConfig::GravityConnect {
                    center_bias: self.gravity_connect.center_bias,
                },
                self.gravity_connect.thinking_delay_ms,
            ),
        };

        MatchSettings {
            geometry,
            mode,
            opponent,
            thinking_delay: Duration::from_millis(delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigError, ConfigManager, ConfigSerializer,
        FileContentConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_arcade_engine_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = EngineConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: EngineConfig = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = EngineConfig::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: EngineConfig = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = EngineConfig {
            tictactoe: TicTacToeConfig {
                difficulty: Difficulty::Hard,
                ..TicTacToeConfig::default()
            },
            ..EngineConfig::default()
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::from_yaml_file(file_path.clone());

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh: ConfigManager<_, EngineConfig, _> = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, EngineConfig, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let content = "tictactoe:\n  difficulty: easy\n";
        let config: EngineConfig = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert_eq!(config.tictactoe.difficulty, Difficulty::Easy);
        assert_eq!(config.tictactoe.thinking_delay_ms, 600);
        assert_eq!(config.gravity_connect, GravityConnectConfig::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "gravity_connect:\n  center_bias: 1.5\n").unwrap();

        let manager: ConfigManager<_, EngineConfig, _> = ConfigManager::from_yaml_file(file_path.clone());
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let result: Result<EngineConfig, _> =
            YamlConfigSerializer::new().deserialize("tictactoe:\n  difficulty: impossible\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let config = EngineConfig {
            tictactoe: TicTacToeConfig {
                mistake_threshold: -0.1,
                ..TicTacToeConfig::default()
            },
            ..EngineConfig::default()
        };
        let manager: ConfigManager<_, EngineConfig, _> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        assert!(matches!(manager.set_config(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_match_settings_use_configured_values() {
        let config = EngineConfig::default();

        let settings = config.match_settings(Geometry::TicTacToe, MatchMode::VsComputer);
        assert_eq!(settings.opponent, OpponentConfig::tictactoe(Difficulty::Medium));
        assert_eq!(settings.thinking_delay, Duration::from_millis(600));

        let settings = config.match_settings(Geometry::GravityConnect, MatchMode::VsFriend);
        assert_eq!(settings.opponent, OpponentConfig::gravity_connect());
        assert_eq!(settings.thinking_delay, Duration::from_millis(700));
        assert!(settings.validate().is_ok());
    }
}
