use std::time::Instant;

use crate::games::SessionRng;
use super::bot_controller::best_move;
use super::error::{GameError, MoveRejection};
use super::game_state::TicTacToeGameState;
use super::snapshot::{GameSnapshot, PlayerNames, SnapshotStatus, board_symbols};
use super::types::{Difficulty, GameStatus, Mark};

pub const HUMAN_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

/// A human playing X against the automated opponent as O.
#[derive(Debug)]
pub struct SinglePlayerSession {
    player_name: String,
    bot_name: String,
    difficulty: Difficulty,
    game: TicTacToeGameState,
    rng: SessionRng,
    last_activity: Instant,
}

impl SinglePlayerSession {
    pub fn new(player_name: String, bot_name: String, difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            player_name,
            bot_name,
            difficulty,
            game: TicTacToeGameState::new(),
            rng,
            last_activity: Instant::now(),
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    /// The human's move followed, if the game goes on, by the bot's reply.
    pub fn apply_human_move(&mut self, cell: usize) -> Result<GameStatus, GameError> {
        let status = self.place_human_move(cell)?;
        if status.is_over() {
            return Ok(status);
        }
        self.play_bot_move()
    }

    /// First half of a human move: only the human's mark is placed.
    pub fn place_human_move(&mut self, cell: usize) -> Result<GameStatus, GameError> {
        let status = self.game.place_mark(HUMAN_MARK, cell)?;
        self.touch();
        Ok(status)
    }

    /// Second half: the bot answers on its own turn.
    pub fn play_bot_move(&mut self) -> Result<GameStatus, GameError> {
        if self.game.status().is_over() {
            return Err(MoveRejection::GameOver.into());
        }
        if self.game.current_mark() != BOT_MARK {
            return Err(GameError::NotYourTurn);
        }

        let cell = best_move(self.game.board(), self.difficulty, BOT_MARK, &mut self.rng)
            .ok_or(GameError::InvalidMove(MoveRejection::GameOver))?;
        let status = self.game.place_mark(BOT_MARK, cell)?;
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
        let status = match self.game.status() {
            GameStatus::InProgress => SnapshotStatus::InProgress,
            GameStatus::Won(_) => SnapshotStatus::Won,
            GameStatus::Drawn => SnapshotStatus::Drawn,
        };
        GameSnapshot {
            board: board_symbols(self.game.board()),
            current: self.game.current_mark(),
            winner: self.game.status().winner(),
            draw: self.game.status() == GameStatus::Drawn,
            wins: *self.game.tally(),
            status,
            players: PlayerNames {
                x: self.player_name.clone(),
                o: Some(self.bot_name.clone()),
            },
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}
