//! リバーシエンジンのデモ実行エントリポイント
//! 設定読み込み後、両者コンピューターのデモ対局を終局まで進めて結果を表示する。

use reversi_engine::game::GamePhase;
use reversi_engine::{Config, GameMode, GameSession};

fn main() {
    tracing_subscriber::fmt::init();

    // 設定ファイルと環境変数から統合設定を読み込み
    let config = Config::load();

    println!("設定読み込み完了:");
    println!("  既定モード: {:?}", config.game.default_mode);
    println!("  AI難易度: {:?}", config.ai.difficulty);
    println!("  乱数シード: {}", config.ai.rng_seed);

    let mut session = GameSession::from_config(&config);
    session.start(GameMode::Demo);

    // 1手ずつ交互に進める。パスは着手確定時に自動解決されるため、
    // 手番のプレイヤーは常に合法手を持つ（上限はパス込みでも十分な手数）
    for _ in 0..128 {
        let player = match session.current_player() {
            Some(player) => player,
            None => break,
        };

        let is_computer = match session.state() {
            Some(state) => state.mode.is_computer(player),
            None => break,
        };
        if !is_computer {
            // デモ対局では起こらない：人間の入力待ちはこのバイナリの範囲外
            break;
        }

        if let Err(e) = session.request_opponent_move(player) {
            eprintln!("対局が継続できません: {}", e);
            std::process::exit(1);
        }
    }

    if let Some(board) = session.board() {
        println!("{}", board.display());
    }

    match session.phase() {
        GamePhase::GameOver { winner, score } => {
            println!("最終スコア: 黒 {} - 白 {}", score.0, score.1);
            match winner {
                Some(player) => println!("勝者: {:?}", player),
                None => println!("引き分け"),
            }
        }
        phase => {
            eprintln!("対局が終局しませんでした: {:?}", phase);
            std::process::exit(1);
        }
    }

    let (black_wins, white_wins) = session.wins();
    println!("通算勝数: 黒 {} - 白 {}", black_wins, white_wins);
}
