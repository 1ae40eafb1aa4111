use super::error::{GameError, MoveRejection};
use super::types::Mark;
use super::win_detector::check_win;

pub const CELL_COUNT: usize = 9;

/// The 3x3 grid, indexed row-major from the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(MoveRejection::GameOver.into());
        }
        match self.cells.get(cell) {
            None => Err(MoveRejection::OutOfRange(cell).into()),
            Some(Some(_)) => Err(MoveRejection::Occupied(cell).into()),
            Some(None) => {
                self.cells[cell] = Some(mark);
                Ok(())
            }
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    pub fn available_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    // Unchecked setters for the search, which undoes its own moves.
    pub(crate) fn set(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = Some(mark);
    }

    pub(crate) fn unset(&mut self, cell: usize) {
        self.cells[cell] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::WINNING_LINES;

    fn board_from(layout: &str) -> Board {
        let mut cells = [None; CELL_COUNT];
        for (i, ch) in layout.chars().enumerate() {
            cells[i] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_cells(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.winner(), None);
        assert!(!board.is_draw());
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_place_out_of_range_is_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.place(9, Mark::X),
            Err(GameError::InvalidMove(MoveRejection::OutOfRange(9)))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(
            board.place(4, Mark::O),
            Err(GameError::InvalidMove(MoveRejection::Occupied(4)))
        );
        assert_eq!(board.get(4), Some(Mark::X));
    }

    #[test]
    fn test_place_after_win_is_rejected() {
        let mut board = board_from("XXXOO    ");
        assert_eq!(
            board.place(8, Mark::O),
            Err(GameError::InvalidMove(MoveRejection::GameOver))
        );
        assert_eq!(board.get(8), None);
    }

    #[test]
    fn test_available_cells_are_ascending() {
        let board = board_from("X O  O X ");
        assert_eq!(board.available_cells(), vec![1, 3, 4, 6, 8]);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from("XOXXOOOXX");
        assert_eq!(board.winner(), None);
        assert!(board.is_draw());
        assert!(board.is_terminal());
        assert!(board.available_cells().is_empty());
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = board_from("XXXOOXOXO");
        assert_eq!(board.winner(), Some(Mark::X));
        assert!(!board.is_draw());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_clear_then_nine_moves_without_line_draws() {
        let mut board = board_from("XXX OO   ");
        board.clear();
        let order = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        let mut mark = Mark::X;
        for cell in order {
            board.place(cell, mark).unwrap();
            mark = mark.opponent();
        }
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_random_legal_games_never_have_two_winners() {
        let mut rng = SessionRng::new(7);
        for _ in 0..500 {
            let mut board = Board::new();
            let mut mark = Mark::X;
            while !board.is_terminal() {
                let available = board.available_cells();
                let cell = available[rng.random_range(0..available.len())];
                board.place(cell, mark).unwrap();
                mark = mark.opponent();

                let owners: Vec<Mark> = WINNING_LINES
                    .iter()
                    .filter_map(|line| {
                        let first = board.get(line[0])?;
                        line.iter().all(|&i| board.get(i) == Some(first)).then_some(first)
                    })
                    .collect();
                assert!(owners.windows(2).all(|pair| pair[0] == pair[1]));
                assert_eq!(board.is_draw(), board.is_full() && board.winner().is_none());
            }
        }
    }
}
