use std::time::Instant;

use crate::RoomCode;
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::snapshot::{GameSnapshot, PlayerNames, SnapshotStatus, board_symbols};
use super::types::{GameStatus, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Waiting,
    Active,
    Finished(GameStatus),
}

/// Two humans sharing one board through a join code. The host plays X.
#[derive(Debug)]
pub struct Room {
    code: RoomCode,
    host_name: String,
    guest_name: Option<String>,
    game: TicTacToeGameState,
    last_activity: Instant,
}

impl Room {
    pub fn new(code: RoomCode, host_name: String) -> Self {
        Self {
            code,
            host_name,
            guest_name: None,
            game: TicTacToeGameState::new(),
            last_activity: Instant::now(),
        }
    }

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn guest_name(&self) -> Option<&str> {
        self.guest_name.as_deref()
    }

    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    pub fn status(&self) -> RoomStatus {
        if self.guest_name.is_none() {
            return RoomStatus::Waiting;
        }
        match self.game.status() {
            GameStatus::InProgress => RoomStatus::Active,
            finished => RoomStatus::Finished(finished),
        }
    }

    pub fn join(&mut self, guest_name: String) -> Result<(), GameError> {
        if self.guest_name.is_some() {
            return Err(GameError::RoomFull);
        }
        self.guest_name = Some(guest_name);
        self.touch();
        Ok(())
    }

    /// Moves are only accepted while the room is active and from the side to move.
    pub fn apply_move(&mut self, mark: Mark, cell: usize) -> Result<GameStatus, GameError> {
        if self.status() != RoomStatus::Active || mark != self.game.current_mark() {
            return Err(GameError::NotYourTurn);
        }
        let status = self.game.place_mark(mark, cell)?;
        self.touch();
        Ok(status)
    }

    pub fn reset(&mut self) {
        self.game.reset_board();
        self.touch();
    }

    pub fn reset_scores(&mut self) {
        self.game.reset_scores();
        self.touch();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let status = match self.status() {
            RoomStatus::Waiting => SnapshotStatus::Waiting,
            RoomStatus::Active => SnapshotStatus::Active,
            RoomStatus::Finished(_) => SnapshotStatus::Finished,
        };
        GameSnapshot {
            board: board_symbols(self.game.board()),
            current: self.game.current_mark(),
            winner: self.game.status().winner(),
            draw: self.game.status() == GameStatus::Drawn,
            wins: *self.game.tally(),
            status,
            players: PlayerNames {
                x: self.host_name.clone(),
                o: self.guest_name.clone(),
            },
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{MoveRejection, WinTally};

    fn create_room() -> Room {
        Room::new(RoomCode::normalize("abc123"), "Host".to_string())
    }

    #[test]
    fn test_room_waits_for_guest() {
        let mut room = create_room();
        assert_eq!(room.code().as_str(), "ABC123");
        assert_eq!(room.status(), RoomStatus::Waiting);
        assert_eq!(room.apply_move(Mark::X, 0), Err(GameError::NotYourTurn));
        assert_eq!(room.game().board().get(0), None);

        room.join("Guest".to_string()).unwrap();
        assert_eq!(room.status(), RoomStatus::Active);
        assert_eq!(room.guest_name(), Some("Guest"));
        assert_eq!(room.join("Other".to_string()), Err(GameError::RoomFull));
        assert_eq!(room.guest_name(), Some("Guest"));
    }

    #[test]
    fn test_wrong_side_cannot_move() {
        let mut room = create_room();
        room.join("Guest".to_string()).unwrap();
        assert_eq!(room.apply_move(Mark::O, 0), Err(GameError::NotYourTurn));
        room.apply_move(Mark::X, 0).unwrap();
        assert_eq!(room.apply_move(Mark::X, 1), Err(GameError::NotYourTurn));
        assert_eq!(
            room.apply_move(Mark::O, 0),
            Err(GameError::InvalidMove(MoveRejection::Occupied(0)))
        );
    }

    #[test]
    fn test_finished_room_resets_with_names_and_tally() {
        let mut room = create_room();
        room.join("Guest".to_string()).unwrap();
        for (mark, cell) in [(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)] {
            room.apply_move(mark, cell).unwrap();
        }
        assert_eq!(room.status(), RoomStatus::Finished(GameStatus::Won(Mark::X)));
        assert_eq!(room.apply_move(Mark::O, 8), Err(GameError::NotYourTurn));

        room.reset();
        assert_eq!(room.status(), RoomStatus::Active);
        assert_eq!(room.host_name(), "Host");
        assert_eq!(room.code().as_str(), "ABC123");
        assert_eq!(room.game().tally(), &WinTally { x: 1, o: 0 });
        assert_eq!(room.game().current_mark(), Mark::X);

        room.reset_scores();
        assert_eq!(room.snapshot().wins, WinTally::default());
    }
}
