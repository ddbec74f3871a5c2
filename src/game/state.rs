//! 対局状態管理モジュール
//! 1対局分の状態（盤面、手番、フェーズ、手の履歴）を管理する。

use super::board::Board;
use super::types::{GameMode, Move, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ゲームのフェーズを表すenum
/// 遷移は一方向（Title → Playing → GameOver）で、外部からのリセットだけがTitleへ戻す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// タイトル画面（盤面なし、モード選択待ち）
    Title,
    /// 対局進行中
    Playing,
    /// 終局。winnerがNoneの場合は引き分け
    GameOver {
        winner: Option<Player>,
        score: (u8, u8),
    },
}

/// 1対局分の全体状態を保持する構造体
/// 盤面、手番、手の履歴などを全て含む
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub id: Uuid,
    pub board: Board,
    pub current_player: Player,
    pub mode: GameMode,
    pub phase: GamePhase,
    pub move_history: Vec<Move>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl GameState {
    /// 新しい対局状態を作成する
    /// 初期状態：標準初期配置の盤面で黒の手番から開始
    pub fn new(mode: GameMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            board: Board::new(),
            current_player: Player::Black,
            mode,
            phase: GamePhase::Playing,
            move_history: Vec::new(),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    /// 対局が進行中かチェックする
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, GamePhase::Playing)
    }

    /// 対局が終局しているかチェックする
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// 現在のプレイヤーを交代する
    /// 着手の確定後やパス時に呼び出される
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
        self.last_updated = Utc::now();
    }

    /// 手の履歴に新しい手を追加する
    /// 最終更新時刻も同時に更新する
    pub fn add_move(&mut self, game_move: Move) {
        self.move_history.push(game_move);
        self.last_updated = Utc::now();
    }

    /// 対局を終局させる
    /// 勝者と最終スコアをフェーズに記録する
    pub fn finish(&mut self, winner: Option<Player>) {
        self.phase = GamePhase::GameOver {
            winner,
            score: self.board.count_pieces(),
        };
        self.last_updated = Utc::now();
    }

    /// 現在のスコアを取得する
    /// 戻り値: (黒石数, 白石数)
    pub fn get_score(&self) -> (u8, u8) {
        self.board.count_pieces()
    }

    /// これまでの手数を取得する
    pub fn get_move_count(&self) -> usize {
        self.move_history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Position;

    #[test]
    fn test_game_state_new() {
        let game = GameState::new(GameMode::Demo);

        assert_eq!(game.current_player, Player::Black);
        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.mode, GameMode::Demo);
        assert_eq!(game.move_history.len(), 0);
        assert_eq!(game.get_score(), (2, 2));
    }

    #[test]
    fn test_game_state_phase_checks() {
        let mut game = GameState::new(GameMode::Demo);

        assert!(game.is_playing());
        assert!(!game.is_finished());

        game.finish(Some(Player::Black));
        assert!(!game.is_playing());
        assert!(game.is_finished());
    }

    #[test]
    fn test_game_state_switch_player() {
        let mut game = GameState::new(GameMode::Demo);

        assert_eq!(game.current_player, Player::Black);

        game.switch_player();
        assert_eq!(game.current_player, Player::White);

        game.switch_player();
        assert_eq!(game.current_player, Player::Black);
    }

    #[test]
    fn test_game_state_add_move() {
        let mut game = GameState::new(GameMode::Demo);
        let pos = Position::new(2, 3).unwrap();
        let game_move = Move::new(Player::Black, pos, vec![]);

        assert_eq!(game.get_move_count(), 0);

        game.add_move(game_move.clone());
        assert_eq!(game.get_move_count(), 1);
        assert_eq!(game.move_history[0].position, pos);
    }

    #[test]
    fn test_game_state_finish_records_winner_and_score() {
        let mut game = GameState::new(GameMode::Demo);

        game.finish(Some(Player::Black));

        assert!(game.is_finished());
        if let GamePhase::GameOver { winner, score } = &game.phase {
            assert_eq!(*winner, Some(Player::Black));
            assert_eq!(*score, (2, 2)); // Initial board state
        } else {
            panic!("Game should be finished");
        }
    }

    #[test]
    fn test_game_state_finish_draw() {
        let mut game = GameState::new(GameMode::Demo);

        game.finish(None);

        if let GamePhase::GameOver { winner, .. } = &game.phase {
            assert_eq!(*winner, None);
        } else {
            panic!("Game should be finished");
        }
    }
}
