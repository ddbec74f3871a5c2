//! ゲームの基本型定義モジュール
//! 盤面のマス・プレイヤー・座標・確定した1手など、クレート全体で共有する型を定義する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 盤面の各マスの状態を表現するenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// 対局するプレイヤーを表すenum
/// 先手は黒、後手は白
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// 相手プレイヤーを返す
    pub fn opposite(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// プレイヤーを対応するセル状態に変換する
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// 8x8リバーシ盤面上の座標を表す構造体
/// row, colともに0-7の範囲で有効
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// 範囲チェック付きのコンストラクタ
    /// 8x8盤面の範囲外の座標の場合はNoneを返す
    pub fn new(row: usize, col: usize) -> Option<Position> {
        if row < 8 && col < 8 {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// 座標が有効範囲内かチェックする
    pub fn is_valid(&self) -> bool {
        self.row < 8 && self.col < 8
    }
}

/// 確定した1手を表現する構造体
/// flippedは裏返した石の公開順（方向の列挙順、方向内は着手点に近い順）を保持し、
/// アニメーション側はこの順序をそのまま再生する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub position: Position,
    pub flipped: Vec<Position>,
    pub timestamp: DateTime<Utc>,
}

impl Move {
    /// 新しい手を作成する
    /// タイムスタンプは現在時刻で自動設定される
    pub fn new(player: Player, position: Position, flipped: Vec<Position>) -> Self {
        Self {
            player,
            position,
            flipped,
            timestamp: Utc::now(),
        }
    }
}

/// 対局モードを表すenum
/// タイトル画面での選択に対応し、どちらの色をコンピューターが担当するかを決める
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// 人間対コンピューター。humanは人間側の色
    HumanVsComputer { human: Player },
    /// 両者ともコンピューターが指すデモ対局
    Demo,
}

impl GameMode {
    /// 指定した色をコンピューターが担当するかを返す
    pub fn is_computer(&self, player: Player) -> bool {
        match self {
            GameMode::HumanVsComputer { human } => *human != player,
            GameMode::Demo => true,
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(GameMode::HumanVsComputer { human: Player::Black }),
            "white" => Ok(GameMode::HumanVsComputer { human: Player::White }),
            "demo" => Ok(GameMode::Demo),
            _ => Err(format!("Invalid game mode: {}. Valid options: black, white, demo", s)),
        }
    }
}
