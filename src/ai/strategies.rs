//! コンピューター対戦相手の実装モジュール
//! 難易度ごとの戦略を統一インターフェースで提供する。
//! 乱数はシード注入で決定的に再現できる。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::ai::evaluation::MoveEvaluator;
use crate::game::board::Board;
use crate::game::rules::ReversiRules;
use crate::game::types::{Player, Position};

/// コンピューター対戦相手の難易度を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 初心者レベル（合法手からランダムに選ぶ）
    Beginner,
    /// 標準レベル（位置重みテーブルによる1手評価）
    Standard,
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "standard" => Ok(Difficulty::Standard),
            _ => Err(format!("Invalid difficulty: {}. Valid options: beginner, standard", s)),
        }
    }
}

/// コンピューター対戦相手の共通インターフェース
/// 異なる戦略を統一して扱うためのtrait
pub trait Strategy: Send + Sync {
    /// 指定プレイヤーの手番で指す手を選ぶ
    /// 合法手が1つもない場合はNone（パス）を返す。エラーにはしない
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position>;
    /// この戦略の難易度を返す
    fn difficulty(&self) -> Difficulty;
    /// 戦略の名前を返す
    fn name(&self) -> &'static str;
}

/// 合法手からランダムに選択する戦略
#[derive(Debug)]
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    /// シードを指定して新しいRandomAIを作成する
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomAI {
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        let valid_moves = ReversiRules::get_valid_moves(board, player);
        valid_moves.choose(&mut self.rng).copied()
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Beginner
    }

    fn name(&self) -> &'static str {
        "RandomAI"
    }
}

/// 位置重みテーブルによる1手評価の戦略
/// 全64マスを走査し、スコア（獲得石数 + 位置重み）が最大の手を選ぶ。
/// 同点の手が複数ある場合はシード付き乱数で一様に抽選する。
#[derive(Debug)]
pub struct HeuristicAI {
    rng: StdRng,
}

impl HeuristicAI {
    /// シードを指定して新しいHeuristicAIを作成する
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for HeuristicAI {
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        let mut best_moves: Vec<Position> = Vec::new();
        let mut max_score = i32::MIN;

        for row in 0..8 {
            for col in 0..8 {
                if let Some(position) = Position::new(row, col) {
                    if let Some(score) = MoveEvaluator::score_move(board, position, player) {
                        if score > max_score {
                            max_score = score;
                            best_moves.clear();
                            best_moves.push(position);
                        } else if score == max_score {
                            best_moves.push(position);
                        }
                    }
                }
            }
        }

        best_moves.choose(&mut self.rng).copied()
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Standard
    }

    fn name(&self) -> &'static str {
        "HeuristicAI"
    }
}

/// 難易度に応じた戦略を生成するファクトリ関数
pub fn create_ai_strategy(difficulty: Difficulty, seed: u64) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Beginner => Box::new(RandomAI::new(seed)),
        Difficulty::Standard => Box::new(HeuristicAI::new(seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Cell;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    /// 指定した石だけを並べた盤面を作る
    fn board_with(black: &[(usize, usize)], white: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for row in 0..8 {
            for col in 0..8 {
                board.set_cell(pos(row, col), Cell::Empty);
            }
        }
        for &(row, col) in black {
            board.set_cell(pos(row, col), Cell::Black);
        }
        for &(row, col) in white {
            board.set_cell(pos(row, col), Cell::White);
        }
        board
    }

    #[test]
    fn test_random_ai_returns_legal_move() {
        let board = Board::new();
        let mut ai = RandomAI::new(1);

        let position = ai.choose_move(&board, Player::Black).unwrap();
        assert!(ReversiRules::is_valid_move(&board, position, Player::Black));
    }

    #[test]
    fn test_random_ai_same_seed_same_move() {
        let board = Board::new();

        let first = RandomAI::new(7).choose_move(&board, Player::Black);
        let second = RandomAI::new(7).choose_move(&board, Player::Black);
        assert_eq!(first, second);
    }

    #[test]
    fn test_heuristic_ai_returns_legal_move() {
        let board = Board::new();
        let mut ai = HeuristicAI::new(1);

        let position = ai.choose_move(&board, Player::Black).unwrap();
        assert!(ReversiRules::is_valid_move(&board, position, Player::Black));
    }

    #[test]
    fn test_heuristic_ai_prefers_corner() {
        // (0,0)の隅と(0,4)の辺が両方合法手になる局面。
        // 隅の重み100が勝つため、どのシードでも(0,0)を選ぶ
        let board = board_with(&[(0, 2), (0, 6)], &[(0, 1), (0, 5)]);

        for seed in 0..16 {
            let mut ai = HeuristicAI::new(seed);
            assert_eq!(ai.choose_move(&board, Player::Black), Some(pos(0, 0)));
        }
    }

    #[test]
    fn test_heuristic_ai_single_option_any_seed() {
        // 黒の合法手が(0,2)だけの局面では、シードに関係なく(0,2)を返す
        let board = board_with(&[(0, 0)], &[(0, 1)]);

        for seed in 0..16 {
            let mut ai = HeuristicAI::new(seed);
            assert_eq!(ai.choose_move(&board, Player::Black), Some(pos(0, 2)));
        }
    }

    #[test]
    fn test_heuristic_ai_no_moves_is_pass() {
        // 相手の石がなければ合法手はなく、パスを返す
        let board = board_with(&[(0, 0)], &[]);

        let mut ai = HeuristicAI::new(1);
        assert_eq!(ai.choose_move(&board, Player::Black), None);
    }

    #[test]
    fn test_heuristic_ai_same_seed_same_sequence() {
        let board = Board::new();

        // 初期局面の黒の合法手は4つとも同点になるため、抽選がシードで決まる
        let first = HeuristicAI::new(42).choose_move(&board, Player::Black);
        let second = HeuristicAI::new(42).choose_move(&board, Player::Black);
        assert_eq!(first, second);
    }

    #[test]
    fn test_create_ai_strategy_factory() {
        let beginner = create_ai_strategy(Difficulty::Beginner, 0);
        assert_eq!(beginner.name(), "RandomAI");
        assert_eq!(beginner.difficulty(), Difficulty::Beginner);

        let standard = create_ai_strategy(Difficulty::Standard, 0);
        assert_eq!(standard.name(), "HeuristicAI");
        assert_eq!(standard.difficulty(), Difficulty::Standard);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!("Standard".parse::<Difficulty>().unwrap(), Difficulty::Standard);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
