use serde::{Deserialize, Serialize};

use super::board::Board;
use super::types::{Mark, WinTally};

/// Blank cell in the transport encoding.
pub const EMPTY_CELL: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotStatus {
    Waiting,
    Active,
    Finished,
    InProgress,
    Won,
    Drawn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    #[serde(rename = "X")]
    pub x: String,
    #[serde(rename = "O")]
    pub o: Option<String>,
}

/// Read-only view of a session or room, returned by every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<String>,
    pub current: Mark,
    pub winner: Option<Mark>,
    pub draw: bool,
    pub wins: WinTally,
    pub status: SnapshotStatus,
    pub players: PlayerNames,
}

pub fn board_symbols(board: &Board) -> Vec<String> {
    board
        .cells()
        .iter()
        .map(|cell| match cell {
            Some(mark) => mark.as_str().to_string(),
            None => EMPTY_CELL.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_json_shape() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();

        let snapshot = GameSnapshot {
            board: board_symbols(&board),
            current: Mark::X,
            winner: None,
            draw: false,
            wins: WinTally { x: 2, o: 1 },
            status: SnapshotStatus::InProgress,
            players: PlayerNames {
                x: "Alice".to_string(),
                o: None,
            },
        };

        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({
                "board": ["X", " ", " ", " ", "O", " ", " ", " ", " "],
                "current": "X",
                "winner": null,
                "draw": false,
                "wins": {"X": 2, "O": 1},
                "status": "in_progress",
                "players": {"X": "Alice", "O": null},
            })
        );
    }
}
