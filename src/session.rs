//! 対局セッション管理モジュール
//! フェーズ遷移（タイトル・対局中・終局）、着手の受理と拒否、
//! 強制パスと終局の解決、外部コラボレーター向けイベント発行を担当する。

use tracing::{debug, info};

use crate::ai::strategies::{create_ai_strategy, Strategy};
use crate::config::Config;
use crate::error::{GameError, Result};
use crate::events::GameEvent;
use crate::game::board::Board;
use crate::game::rules::{ReversiRules, TurnOutcome};
use crate::game::state::{GamePhase, GameState};
use crate::game::types::{GameMode, Move, Player, Position};

/// 1つの対局セッションを管理する構造体
/// 盤面はこの構造体経由でのみ書き換えられ、外部には読み取り専用で公開される。
/// 着手は全体が確定するか全体が拒否されるかのどちらかで、中間状態は観測できない
pub struct GameSession {
    /// 進行中（または終局直後）の対局状態。Noneはタイトル画面
    state: Option<GameState>,
    /// コンピューター側の着手を決める戦略
    strategy: Box<dyn Strategy>,
    /// 未回収の通知イベント
    events: Vec<GameEvent>,
    /// 黒の勝数（セッション内通算、タイトルへ戻っても保持）
    black_wins: u32,
    /// 白の勝数（セッション内通算、タイトルへ戻っても保持）
    white_wins: u32,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("strategy", &self.strategy.name())
            .field("pending_events", &self.events.len())
            .field("black_wins", &self.black_wins)
            .field("white_wins", &self.white_wins)
            .finish()
    }
}

impl GameSession {
    /// 指定した戦略で新しいセッションを作成する
    /// 初期フェーズはタイトル画面
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            state: None,
            strategy,
            events: Vec::new(),
            black_wins: 0,
            white_wins: 0,
        }
    }

    /// 設定からセッションを構築する
    pub fn from_config(config: &Config) -> Self {
        Self::new(create_ai_strategy(config.ai.difficulty, config.ai.rng_seed))
    }

    /// タイトルから対局を開始する
    /// 盤面を標準初期配置にし、黒の手番で対局中フェーズへ遷移する
    pub fn start(&mut self, mode: GameMode) {
        let state = GameState::new(mode);
        info!(game_id = %state.id, ?mode, "game started");
        self.events.clear();
        self.state = Some(state);
    }

    /// 任意の局面から対局を開始する（検証・リプレイ用）
    pub fn start_from_state(&mut self, state: GameState) {
        info!(game_id = %state.id, "game started from custom state");
        self.events.clear();
        self.state = Some(state);
    }

    /// タイトル画面へ戻る
    /// 盤面は破棄されるが通算勝数は保持される
    pub fn back_to_title(&mut self) {
        info!("back to title");
        self.state = None;
        self.events.clear();
    }

    /// 現在のフェーズを返す
    pub fn phase(&self) -> GamePhase {
        match &self.state {
            Some(state) => state.phase.clone(),
            None => GamePhase::Title,
        }
    }

    /// 対局中の手番プレイヤーを返す
    /// 対局中フェーズ以外ではNone
    pub fn current_player(&self) -> Option<Player> {
        self.state
            .as_ref()
            .filter(|state| state.is_playing())
            .map(|state| state.current_player)
    }

    /// 盤面の読み取り専用スナップショットを返す
    pub fn board(&self) -> Option<&Board> {
        self.state.as_ref().map(|state| &state.board)
    }

    /// 対局状態全体への読み取り専用アクセス
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// セッション内の通算勝数を返す
    /// 戻り値: (黒の勝数, 白の勝数)
    pub fn wins(&self) -> (u32, u32) {
        (self.black_wins, self.white_wins)
    }

    /// 未回収のイベントを参照する
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// たまっているイベントを発生順に取り出し、キューを空にする
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// 入力コラボレーターからの着手を処理する
    /// 受理時は確定した手（裏返した石の公開順を含む）を返す。
    /// 拒否時は盤面を一切変更せず、理由を返すとともにMoveRejectedイベントを発行する
    pub fn submit_move(&mut self, row: usize, col: usize, player: Player) -> Result<Move> {
        // 盤面アクセス前の範囲チェック
        let position = match Position::new(row, col) {
            Some(position) => position,
            None => {
                let reason = GameError::OutOfBounds { row, col };
                self.reject(reason.clone());
                return Err(reason);
            }
        };

        match self.commit_move(position, player) {
            Ok(game_move) => Ok(game_move),
            Err(reason) => {
                self.reject(reason.clone());
                Err(reason)
            }
        }
    }

    /// コンピューター側の1手を計算して適用する
    /// 合法手がない場合はパスとして処理し、Noneを返す（強制パスと同じ経路）
    pub fn request_opponent_move(&mut self, player: Player) -> Result<Option<Move>> {
        let choice = {
            let state = self.state.as_ref().ok_or(GameError::NotPlaying)?;
            if !state.is_playing() {
                return Err(GameError::NotPlaying);
            }
            if state.current_player != player {
                return Err(GameError::NotPlayersTurn { player });
            }
            self.strategy.choose_move(&state.board, player)
        };

        match choice {
            Some(position) => {
                debug!(?player, ?position, "opponent move selected");
                let game_move = self.commit_move(position, player)?;
                Ok(Some(game_move))
            }
            None => {
                info!(?player, "opponent has no legal move, passing");
                self.events.push(GameEvent::TurnPassed { player });

                let finished = {
                    // 強制パス：手番を渡し、相手にも合法手がなければ終局
                    let state = match self.state.as_mut() {
                        Some(state) => state,
                        None => return Err(GameError::NotPlaying),
                    };
                    state.switch_player();
                    if ReversiRules::has_valid_moves(&state.board, state.current_player) {
                        None
                    } else {
                        let winner = ReversiRules::determine_winner(&state.board);
                        state.finish(winner);
                        Some(winner)
                    }
                };

                if let Some(winner) = finished {
                    self.record_game_over(winner);
                }
                Ok(None)
            }
        }
    }

    /// 着手を検証・適用し、手番を進める共通経路
    fn commit_move(&mut self, position: Position, player: Player) -> Result<Move> {
        let (game_move, outcome) = {
            let state = self.state.as_mut().ok_or(GameError::NotPlaying)?;
            if !state.is_playing() {
                return Err(GameError::NotPlaying);
            }
            if state.current_player != player {
                return Err(GameError::NotPlayersTurn { player });
            }

            let game_move = ReversiRules::apply_move(state, position)?;

            self.events.push(GameEvent::MoveAccepted { player, position });
            for &flip_pos in &game_move.flipped {
                self.events.push(GameEvent::StoneFlipped {
                    player,
                    position: flip_pos,
                });
            }
            debug!(?player, ?position, captured = game_move.flipped.len(), "move committed");

            let outcome = ReversiRules::advance_turn(state);
            (game_move, outcome)
        };

        match outcome {
            TurnOutcome::NextPlayer(next) => {
                debug!(?next, "turn advanced");
            }
            TurnOutcome::Passed { passed, next } => {
                info!(?passed, ?next, "forced pass");
                self.events.push(GameEvent::TurnPassed { player: passed });
            }
            TurnOutcome::Finished { winner } => {
                self.record_game_over(winner);
            }
        }

        Ok(game_move)
    }

    /// 拒否理由をイベントとして記録する
    fn reject(&mut self, reason: GameError) {
        debug!(%reason, "move rejected");
        self.events.push(GameEvent::MoveRejected { reason });
    }

    /// 終局を通知し、通算勝数を更新する
    fn record_game_over(&mut self, winner: Option<Player>) {
        match winner {
            Some(player) => {
                info!(?player, "game over");
                self.events.push(GameEvent::GameWon { winner: player });
                match player {
                    Player::Black => self.black_wins += 1,
                    Player::White => self.white_wins += 1,
                }
            }
            None => {
                info!("game over (draw)");
                self.events.push(GameEvent::GameDrawn);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::strategies::HeuristicAI;

    fn new_session() -> GameSession {
        GameSession::new(Box::new(HeuristicAI::new(0)))
    }

    #[test]
    fn test_session_starts_at_title() {
        let session = new_session();

        assert_eq!(session.phase(), GamePhase::Title);
        assert_eq!(session.current_player(), None);
        assert!(session.board().is_none());
    }

    #[test]
    fn test_start_enters_playing_phase() {
        let mut session = new_session();
        session.start(GameMode::Demo);

        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.current_player(), Some(Player::Black));
        assert_eq!(session.board().unwrap().count_pieces(), (2, 2));
    }

    #[test]
    fn test_submit_move_in_title_is_rejected() {
        let mut session = new_session();

        let result = session.submit_move(2, 3, Player::Black);
        assert_eq!(result, Err(GameError::NotPlaying));
    }

    #[test]
    fn test_submit_move_out_of_bounds() {
        let mut session = new_session();
        session.start(GameMode::Demo);

        let result = session.submit_move(8, 0, Player::Black);
        assert_eq!(result, Err(GameError::OutOfBounds { row: 8, col: 0 }));
        // 盤面は変化しない
        assert_eq!(session.board().unwrap().count_pieces(), (2, 2));
    }

    #[test]
    fn test_submit_move_wrong_player() {
        let mut session = new_session();
        session.start(GameMode::Demo);

        let result = session.submit_move(2, 3, Player::White);
        assert_eq!(result, Err(GameError::NotPlayersTurn { player: Player::White }));
        assert_eq!(session.current_player(), Some(Player::Black));
    }

    #[test]
    fn test_submit_valid_move_switches_turn() {
        let mut session = new_session();
        session.start(GameMode::Demo);

        let game_move = session.submit_move(2, 3, Player::Black).unwrap();
        assert_eq!(game_move.flipped, vec![Position::new(3, 3).unwrap()]);
        assert_eq!(session.current_player(), Some(Player::White));
    }

    #[test]
    fn test_back_to_title_keeps_wins() {
        let mut session = new_session();
        session.start(GameMode::Demo);
        session.back_to_title();

        assert_eq!(session.phase(), GamePhase::Title);
        assert_eq!(session.wins(), (0, 0));
    }

    #[test]
    fn test_from_config_uses_configured_strategy() {
        let config = Config::default();
        let session = GameSession::from_config(&config);

        assert_eq!(session.phase(), GamePhase::Title);
    }
}
