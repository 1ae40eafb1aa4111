use derive_more::Display;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    #[display("cell {} is outside the board", _0)]
    OutOfRange(usize),
    #[display("cell {} is already taken", _0)]
    Occupied(usize),
    #[display("the game is already over")]
    GameOver,
}

/// Errors surfaced to callers. A failed operation leaves all state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameError {
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveRejection),
    #[display("Not your turn")]
    NotYourTurn,
    #[display("Room not found")]
    RoomNotFound,
    #[display("Room is full")]
    RoomFull,
    #[display("Session not found")]
    SessionNotFound,
}

impl GameError {
    /// Stable machine-readable name for transports.
    pub fn kind(&self) -> &'static str {
        match self {
            GameError::InvalidMove(_) => "InvalidMove",
            GameError::NotYourTurn => "NotYourTurn",
            GameError::RoomNotFound => "RoomNotFound",
            GameError::RoomFull => "RoomFull",
            GameError::SessionNotFound => "SessionNotFound",
        }
    }
}

impl std::error::Error for GameError {}

impl From<MoveRejection> for GameError {
    fn from(rejection: MoveRejection) -> Self {
        GameError::InvalidMove(rejection)
    }
}
