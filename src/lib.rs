pub mod game;
pub mod ai;
pub mod session;
pub mod events;
pub mod error;
pub mod config;

pub use config::Config;
pub use error::{GameError, Result};
pub use events::GameEvent;
pub use game::{Board, Cell, GameMode, GamePhase, Player, Position};
pub use session::GameSession;
