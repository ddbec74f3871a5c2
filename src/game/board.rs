//! リバーシ盤面の状態管理モジュール
//! 8x8グリッドの保持と、石の配置・集計のプリミティブを提供する。

use super::types::{Cell, Player, Position};
use serde::{Deserialize, Serialize};

/// 8x8リバーシ盤面を表現する構造体
/// 盤面への書き込みは検証済みの着手経由に限る（呼び出し側が保証する）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// 新しいリバーシ盤面を作成する
    /// 中央の4マスに標準初期配置（黒白2個ずつの対角配置）を設定する
    pub fn new() -> Self {
        let mut board = Board {
            cells: [[Cell::Empty; 8]; 8],
        };

        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;

        board
    }

    /// 指定した位置のセル状態を取得する
    /// 範囲外の場合はNoneを返す
    pub fn get_cell(&self, position: Position) -> Option<Cell> {
        if position.is_valid() {
            Some(self.cells[position.row][position.col])
        } else {
            None
        }
    }

    /// 指定した位置にセル状態を設定する
    /// 範囲外の場合はfalseを返す
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> bool {
        if position.is_valid() {
            self.cells[position.row][position.col] = cell;
            true
        } else {
            false
        }
    }

    /// 指定した位置が空かチェックする
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.get_cell(position), Some(Cell::Empty))
    }

    /// 盤面上の黒石と白石の数を数える
    /// 戻り値: (黒石数, 白石数)
    pub fn count_pieces(&self) -> (u8, u8) {
        let mut black_count = 0;
        let mut white_count = 0;

        for row in &self.cells {
            for &cell in row {
                match cell {
                    Cell::Black => black_count += 1,
                    Cell::White => white_count += 1,
                    Cell::Empty => {}
                }
            }
        }

        (black_count, white_count)
    }

    /// 指定したプレイヤーの石数を数える
    pub fn count_stones(&self, player: Player) -> u8 {
        let (black_count, white_count) = self.count_pieces();
        match player {
            Player::Black => black_count,
            Player::White => white_count,
        }
    }

    /// 空きマスの数を数える
    /// 黒石数 + 白石数 + 空きマス数 = 64 が常に成り立つ
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count_pieces();
        64 - black_count - white_count
    }

    /// デバッグ用の盤面表示文字列を生成する
    /// ●で黒、○で白、.で空マスを表現
    pub fn display(&self) -> String {
        let mut result = String::new();
        result.push_str("  0 1 2 3 4 5 6 7\n");

        for (row_idx, row) in self.cells.iter().enumerate() {
            result.push_str(&format!("{} ", row_idx));
            for &cell in row {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Black => "●",
                    Cell::White => "○",
                };
                result.push_str(&format!("{} ", symbol));
            }
            result.push('\n');
        }

        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
