//! 外部コラボレーター向けイベント通知モジュール
//! 描画・サウンド側が消費する抽象的なトリガーを定義する。
//! コア自身は音も絵も扱わず、発生した事実だけを順序付きで通知する。

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::types::{Player, Position};

/// セッション操作の結果として発生する通知イベント
/// StoneFlippedは1回の着手につき裏返した石ごとに1件、公開順どおりに発行される。
/// 再生間隔（1石ごとのアニメーション速度）は消費側のタイマーが決める。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// 着手が受理された
    MoveAccepted { player: Player, position: Position },
    /// 着手が拒否された（エラー音などのトリガー）
    MoveRejected { reason: GameError },
    /// 石が1つ裏返り、playerの色になった
    StoneFlipped { player: Player, position: Position },
    /// 合法手がなく手番がパスされた
    TurnPassed { player: Player },
    /// 勝者が決まって終局した
    GameWon { winner: Player },
    /// 引き分けで終局した
    GameDrawn,
}
