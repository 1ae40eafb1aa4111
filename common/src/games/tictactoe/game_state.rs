use super::board::Board;
use super::error::{GameError, MoveRejection};
use super::types::{GameStatus, Mark, WinTally};

/// Board, side to move, outcome and tally kept consistent as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    tally: WinTally,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            tally: WinTally::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tally(&self) -> &WinTally {
        &self.tally
    }

    /// Places `mark` at `cell` and settles the outcome. On error nothing changes.
    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(MoveRejection::GameOver.into());
        }
        if mark != self.current_mark {
            return Err(GameError::NotYourTurn);
        }

        self.board.place(cell, mark)?;

        if let Some(winner) = self.board.winner() {
            self.tally.record_win(winner);
            self.status = GameStatus::Won(winner);
        } else if self.board.is_draw() {
            self.status = GameStatus::Drawn;
        } else {
            self.current_mark = mark.opponent();
        }

        Ok(self.status)
    }

    /// Clears the board for a new game. The tally survives.
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    pub fn reset_scores(&mut self) {
        self.tally.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[(Mark, usize)]) {
        for &(mark, cell) in moves {
            state.place_mark(mark, cell).unwrap();
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.current_mark(), Mark::X);
        state.place_mark(Mark::X, 4).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.place_mark(Mark::X, 0), Err(GameError::NotYourTurn));
        assert_eq!(state.board().get(0), None);
    }

    #[test]
    fn test_top_row_win_updates_tally() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)],
        );
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
        assert_eq!(state.tally(), &WinTally { x: 1, o: 0 });
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)],
        );
        let before = state.clone();
        assert_eq!(
            state.place_mark(Mark::O, 8),
            Err(GameError::InvalidMove(MoveRejection::GameOver))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_leaves_tally_alone() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[
                (Mark::X, 0),
                (Mark::O, 1),
                (Mark::X, 2),
                (Mark::O, 4),
                (Mark::X, 3),
                (Mark::O, 5),
                (Mark::X, 7),
                (Mark::O, 6),
                (Mark::X, 8),
            ],
        );
        assert_eq!(state.status(), GameStatus::Drawn);
        assert_eq!(state.tally(), &WinTally::default());
    }

    #[test]
    fn test_reset_board_keeps_tally_and_reset_scores_clears_it() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)],
        );
        state.reset_board();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.tally().wins(Mark::X), 1);

        state.reset_scores();
        assert_eq!(state.tally(), &WinTally::default());
    }
}
