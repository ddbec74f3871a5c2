//! コンピューター側の着手評価モジュール
//! マスごとの静的な位置重みと獲得石数で候補手を採点する。
//! 先読みは行わず、現在の盤面だけを評価する。

use crate::game::board::Board;
use crate::game::rules::ReversiRules;
use crate::game::types::{Player, Position};

/// 盤面各マスの静的な位置重みテーブル
/// 四隅を最重視し、隅の内側の斜め・隣接マスを強く減点する。
/// 辺は内側よりやや高い。
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// 候補手の採点を行うスタティックメソッド集
pub struct MoveEvaluator;

impl MoveEvaluator {
    /// 指定マスの位置重みを返す
    pub fn positional_weight(position: Position) -> i32 {
        POSITION_WEIGHTS[position.row][position.col]
    }

    /// 候補手を採点する
    /// スコア = 裏返せる石の数 + マスの位置重み。合法手でない場合はNoneを返す
    pub fn score_move(board: &Board, position: Position, player: Player) -> Option<i32> {
        let flipped = ReversiRules::get_flipped_positions(board, position, player);
        if flipped.is_empty() {
            return None;
        }

        Some(flipped.len() as i32 + Self::positional_weight(position))
    }
}
