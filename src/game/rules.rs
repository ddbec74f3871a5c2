//! リバーシのルール実装モジュール
//! 合法手の判定、裏返す石の列挙と適用、パスと終局の解決を担当する。

use super::board::Board;
use super::state::GameState;
use super::types::{Move, Player, Position};
use crate::error::{GameError, Result};

/// 盤面上の8方向への移動ベクトル
/// 列挙順は固定で、裏返した石の公開順はこの順に各方向の並びを連結したものになる
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),  // 左上、上、右上
    (0, -1),           (0, 1),   // 左、右
    (1, -1),  (1, 0),  (1, 1),   // 左下、下、右下
];

/// 手番を進めた結果を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// 次のプレイヤーがそのまま着手できる
    NextPlayer(Player),
    /// passedに合法手がなく、手番がnextへ飛んだ（強制パス）
    Passed { passed: Player, next: Player },
    /// 両者に合法手がなく終局した。winnerがNoneなら引き分け
    Finished { winner: Option<Player> },
}

/// リバーシのルールを実装する構造体
/// スタティックメソッドのみを提供する
pub struct ReversiRules;

impl ReversiRules {
    /// 指定した位置に現在のプレイヤーが置けるかチェックする
    /// 空のマスで、かつ相手の石を少なくとも1個裏返せる必要がある
    pub fn is_valid_move(board: &Board, position: Position, player: Player) -> bool {
        !Self::get_flipped_positions(board, position, player).is_empty()
    }

    /// 指定した位置に石を置いた場合に裏返される石の位置を返す
    /// 占有済みのマス、またはどの方向にも裏返せる石がない場合は空のVecを返す。
    /// 戻り値の並びは方向の列挙順で、各方向内は着手点に近い石が先に来る。
    /// 部分的な結果を返すことはない（方向単位で有効な並びだけを連結する）。
    pub fn get_flipped_positions(board: &Board, position: Position, player: Player) -> Vec<Position> {
        if !board.is_empty(position) {
            return Vec::new();
        }

        let mut flipped = Vec::new();
        let player_cell = player.to_cell();
        let opponent_cell = player.opposite().to_cell();

        // 8方向に向かって探索し、裏返せる石の並びを方向単位で確定する
        for &(dr, dc) in &DIRECTIONS {
            let mut line_flipped = Vec::new();
            let mut current_row = position.row as i8 + dr;
            let mut current_col = position.col as i8 + dc;

            // この方向に盤面の端まで探索
            while current_row >= 0 && current_row < 8 && current_col >= 0 && current_col < 8 {
                let current_pos = Position {
                    row: current_row as usize,
                    col: current_col as usize,
                };

                match board.get_cell(current_pos) {
                    Some(cell) if cell == opponent_cell => {
                        // 相手の石を発見、裏返し候補に追加
                        line_flipped.push(current_pos);
                    }
                    Some(cell) if cell == player_cell => {
                        // 自分の石で挟めたので、この方向の並びが確定
                        flipped.extend(line_flipped);
                        break;
                    }
                    _ => {
                        // 空マスまたは範囲外、この方向は裏返し不可
                        break;
                    }
                }

                current_row += dr;
                current_col += dc;
            }
        }

        flipped
    }

    /// 指定したプレイヤーの合法手を全て取得する
    /// 盤面全体を行優先でスキャンする
    pub fn get_valid_moves(board: &Board, player: Player) -> Vec<Position> {
        let mut valid_moves = Vec::new();

        for row in 0..8 {
            for col in 0..8 {
                if let Some(position) = Position::new(row, col) {
                    if Self::is_valid_move(board, position, player) {
                        valid_moves.push(position);
                    }
                }
            }
        }

        valid_moves
    }

    /// 指定したプレイヤーに合法手があるかチェックする
    /// パス判定に使用される
    pub fn has_valid_moves(board: &Board, player: Player) -> bool {
        for row in 0..8 {
            for col in 0..8 {
                if let Some(position) = Position::new(row, col) {
                    if Self::is_valid_move(board, position, player) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// 現在の手番の着手を適用し、盤面を更新する
    /// 着手した石を置いた後、裏返す石を公開順どおりに1つずつ自分の色へ変更する。
    /// 拒否時（占有済み・裏返し不可）は盤面を一切変更しない。
    pub fn apply_move(game_state: &mut GameState, position: Position) -> Result<Move> {
        if !game_state.board.is_empty(position) {
            return Err(GameError::CellOccupied { position });
        }

        let player = game_state.current_player;
        let flipped_positions = Self::get_flipped_positions(&game_state.board, position, player);
        if flipped_positions.is_empty() {
            return Err(GameError::NoCaptures { position });
        }

        // 新しい石を配置
        game_state.board.set_cell(position, player.to_cell());

        // 裏返す石を公開順に自分の色へ変更
        for flip_pos in &flipped_positions {
            game_state.board.set_cell(*flip_pos, player.to_cell());
        }

        // 手の履歴に記録
        let game_move = Move::new(player, position, flipped_positions);
        game_state.add_move(game_move.clone());

        Ok(game_move)
    }

    /// 着手の確定後に手番を進め、パスと終局を解決する
    /// 手番交代後のプレイヤーに合法手がなければもう一度交代し（強制パス）、
    /// 交代し直した側にも合法手がなければ終局させる。
    /// パスはターンとして数えない：この呼び出しの後、手番のプレイヤーは
    /// 必ず合法手を持つか、対局が終局している。
    pub fn advance_turn(game_state: &mut GameState) -> TurnOutcome {
        game_state.switch_player();
        if Self::has_valid_moves(&game_state.board, game_state.current_player) {
            return TurnOutcome::NextPlayer(game_state.current_player);
        }

        // 手番のプレイヤーに合法手がないため強制パス
        let passed = game_state.current_player;
        game_state.switch_player();
        if Self::has_valid_moves(&game_state.board, game_state.current_player) {
            return TurnOutcome::Passed {
                passed,
                next: game_state.current_player,
            };
        }

        // 両者とも合法手がないので終局
        let winner = Self::determine_winner(&game_state.board);
        game_state.finish(winner);
        TurnOutcome::Finished { winner }
    }

    /// ゲーム終了判定（両プレイヤーとも合法手がない）
    pub fn is_game_over(board: &Board) -> bool {
        !Self::has_valid_moves(board, Player::Black) && !Self::has_valid_moves(board, Player::White)
    }

    /// 最終スコアに基づいて勝者を決定する
    /// 同数の場合はNone（引き分け）を返す
    pub fn determine_winner(board: &Board) -> Option<Player> {
        let (black_count, white_count) = board.count_pieces();

        if black_count > white_count {
            Some(Player::Black)
        } else if white_count > black_count {
            Some(Player::White)
        } else {
            None
        }
    }
}
