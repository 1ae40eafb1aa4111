use super::types::Mark;

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Option<Mark>; 9]) -> Option<Mark> {
    check_win_with_line(cells).map(|(mark, _)| mark)
}

/// First fully owned line in table order, with its owner.
pub fn check_win_with_line(cells: &[Option<Mark>; 9]) -> Option<(Mark, [usize; 3])> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match cells[a] {
            Some(mark) if cells[b] == Some(mark) && cells[c] == Some(mark) => Some((mark, line)),
            _ => None,
        }
    })
}
