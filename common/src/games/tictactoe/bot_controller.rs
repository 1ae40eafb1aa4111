use crate::games::SessionRng;
use super::board::{Board, CELL_COUNT};
use super::types::{Difficulty, Mark};

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Chance that a `Medium` bot plays a random cell instead of searching.
pub const MEDIUM_RANDOM_CHANCE: f64 = 0.5;

/// Picks the cell the bot playing `bot_mark` should take next.
///
/// Returns `None` when no cell is free. The difficulty roll happens once per
/// call: `Easy` never searches, `Medium` searches half the time, `Hard` always.
pub fn best_move(
    board: &Board,
    difficulty: Difficulty,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_RANDOM_CHANCE) {
                calculate_random_move(board, rng)
            } else {
                calculate_minimax_move(board, bot_mark)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board, bot_mark),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.available_cells())
}

/// Exhaustive minimax with `bot_mark` maximizing.
///
/// Scores are +1/-1/0 with no depth discount, and only a strictly better
/// score replaces the current best, so the lowest index wins ties.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let mut board = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in board.available_cells() {
        board.set(cell, bot_mark);
        let score = minimax(&mut board, false, bot_mark);
        board.unset(cell);

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

fn minimax(board: &mut Board, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == bot_mark { WIN_SCORE } else { LOSS_SCORE };
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for cell in 0..CELL_COUNT {
            if board.get(cell).is_some() {
                continue;
            }
            board.set(cell, bot_mark);
            let eval = minimax(board, false, bot_mark);
            board.unset(cell);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent_mark = bot_mark.opponent();
        let mut min_eval = i32::MAX;
        for cell in 0..CELL_COUNT {
            if board.get(cell).is_some() {
                continue;
            }
            board.set(cell, opponent_mark);
            let eval = minimax(board, true, bot_mark);
            board.unset(cell);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
