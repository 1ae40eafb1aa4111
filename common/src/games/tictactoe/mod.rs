mod board;
mod bot_controller;
mod error;
mod game_state;
mod room;
mod session;
mod snapshot;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{MEDIUM_RANDOM_CHANCE, best_move, calculate_minimax_move};
pub use error::{GameError, MoveRejection};
pub use game_state::TicTacToeGameState;
pub use room::{Room, RoomStatus};
pub use session::{BOT_MARK, HUMAN_MARK, SinglePlayerSession};
pub use snapshot::{EMPTY_CELL, GameSnapshot, PlayerNames, SnapshotStatus, board_symbols};
pub use types::{Difficulty, GameStatus, Mark, WinTally};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
