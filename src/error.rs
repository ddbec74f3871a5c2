//! エンジン全体のエラー定義モジュール
//! 着手が拒否される理由を列挙し、呼び出し側へ同期的に返す。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::types::{Player, Position};

/// 着手要求が拒否された理由を表すエラー
/// いずれも回復可能で、拒否時に盤面は一切変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// 8x8盤面の範囲外の座標が指定された（盤面アクセス前に検出する）
    #[error("position out of bounds: ({row}, {col})")]
    OutOfBounds { row: usize, col: usize },

    /// 指定マスに既に石が置かれている
    #[error("cell already occupied at ({}, {})", .position.row, .position.col)]
    CellOccupied { position: Position },

    /// 空きマスだが、8方向いずれにも裏返せる石がない
    #[error("no captures available at ({}, {})", .position.row, .position.col)]
    NoCaptures { position: Position },

    /// 手番ではないプレイヤーが着手を試みた
    #[error("not {player:?}'s turn")]
    NotPlayersTurn { player: Player },

    /// 対局中以外のフェーズで着手が送られた
    #[error("game is not in playing phase")]
    NotPlaying,
}

/// ゲームエラーをベースとした結果型
pub type Result<T> = std::result::Result<T, GameError>;
