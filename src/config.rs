//! エンジン設定管理モジュール
//! 既定の対局モードとコンピューター側の設定を
//! 設定ファイルと環境変数から読み込んで管理する。

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::ai::strategies::Difficulty;
use crate::game::types::{GameMode, Player};

/// 対局の既定設定を管理する構造体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// ゲーム開始時の既定モード
    pub default_mode: GameMode,
}

impl Default for GameConfig {
    /// 人間が黒（先手）を持つ設定
    fn default() -> Self {
        Self {
            default_mode: GameMode::HumanVsComputer {
                human: Player::Black,
            },
        }
    }
}

/// コンピューター対戦相手の設定を管理する構造体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// 戦略の難易度
    pub difficulty: Difficulty,
    /// 同点手の抽選に使う乱数シード
    /// 同じシードなら同じ対局が再現される
    pub rng_seed: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Standard,
            rng_seed: 0,
        }
    }
}

/// エンジンの全設定を統合するメイン設定構造体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub ai: AiConfig,
}

/// 設定関連のエラーを表すenum
/// ファイル読み込み、パース、環境変数の解釈エラーを含む
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定ファイル読み込みエラー: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("設定ファイル解析エラー: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("環境変数エラー: {name} = {value}")]
    EnvVarError { name: String, value: String },
}

impl Config {
    /// 指定したファイルパスから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 環境変数から設定を読み込む
    /// デフォルト値をベースに環境変数で上書きする
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(mode) = env::var("REVERSI_DEFAULT_MODE") {
            config.game.default_mode = mode.parse().map_err(|_| ConfigError::EnvVarError {
                name: "REVERSI_DEFAULT_MODE".to_string(),
                value: mode,
            })?;
        }

        if let Ok(difficulty) = env::var("REVERSI_AI_DIFFICULTY") {
            config.ai.difficulty = difficulty.parse().map_err(|_| ConfigError::EnvVarError {
                name: "REVERSI_AI_DIFFICULTY".to_string(),
                value: difficulty,
            })?;
        }

        if let Ok(seed) = env::var("REVERSI_AI_SEED") {
            config.ai.rng_seed = seed.parse().map_err(|_| ConfigError::EnvVarError {
                name: "REVERSI_AI_SEED".to_string(),
                value: seed,
            })?;
        }

        Ok(config)
    }

    /// 設定ファイルと環境変数を結合して設定を読み込む
    /// 設定ファイルがなくてもデフォルト値で動作する
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(file_config) = Self::from_file("config.json") {
            config = file_config;
        } else if let Ok(file_config) = Self::from_file("config/engine.json") {
            config = file_config;
        }

        // 環境変数で設定を上書き
        if let Ok(env_config) = Self::from_env() {
            if env::var("REVERSI_DEFAULT_MODE").is_ok() {
                config.game.default_mode = env_config.game.default_mode;
            }
            if env::var("REVERSI_AI_DIFFICULTY").is_ok() {
                config.ai.difficulty = env_config.ai.difficulty;
            }
            if env::var("REVERSI_AI_SEED").is_ok() {
                config.ai.rng_seed = env_config.ai.rng_seed;
            }
        }

        config
    }

    /// 現在の設定を指定したファイルに保存する
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(
            config.game.default_mode,
            GameMode::HumanVsComputer {
                human: Player::Black
            }
        );
        assert_eq!(config.ai.difficulty, Difficulty::Standard);
        assert_eq!(config.ai.rng_seed, 0);
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = Config::default();
        config.game.default_mode = GameMode::Demo;
        config.ai.rng_seed = 99;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
