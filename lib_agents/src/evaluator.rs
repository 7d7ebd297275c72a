//! Static scoring of Connect Four positions.
//!
//! A position is scored for one player by sliding a window of four cells
//! across every row, column and diagonal and summing what each window is worth,
//! plus a bonus for pieces in the center column.

use lib_boardgame::Player;
use lib_connect_four::{Board, Cell, CONNECT_LENGTH};

/// Value of a position won by the player being searched for.
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Value of a position lost by the player being searched for.
pub const LOSS_SCORE: i64 = -WIN_SCORE;

pub const DRAW_SCORE: i64 = 0;

/// What each kind of window is worth to the player being scored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeightTable {
    pub own_four: i64,

    /// Three own pieces and one empty cell.
    pub own_three: i64,

    /// Two own pieces and two empty cells.
    pub own_two: i64,

    /// Three opponent pieces and one empty cell.
    pub opponent_three: i64,
    pub opponent_four: i64,

    /// Added per own piece in the center column.
    pub center: i64,
}

/// One-ply greedy play.
pub const GREEDY_WEIGHTS: WeightTable = WeightTable {
    own_four: 1000,
    own_three: 50,
    own_two: 5,
    opponent_three: -80,
    opponent_four: -1000,
    center: 2,
};

/// Leaf evaluation for depth-limited minimax.
pub const MINIMAX_WEIGHTS: WeightTable = WeightTable {
    own_four: 1_000_000,
    own_three: 1,
    own_two: 0,
    opponent_three: -100,
    opponent_four: -10_000,
    center: 0,
};

/// Minimax leaf evaluation that only counts center control.
pub const CENTER_ONLY_WEIGHTS: WeightTable = WeightTable {
    own_four: 0,
    own_three: 0,
    own_two: 0,
    opponent_three: 0,
    opponent_four: 0,
    center: 3,
};

/// Scores `board` for `player`. Higher is better for `player`.
pub fn score_position(board: &Board, player: Player, weights: &WeightTable) -> i64 {
    let own = Cell::from(player);
    let center = board.center_column();

    let center_count = (0..board.rows())
        .filter(|&row| board.get(row, center) == own)
        .count() as i64;

    let windows: i64 = board
        .windows()
        .map(|window| score_window(&window, player, weights))
        .sum();

    center_count * weights.center + windows
}

pub fn score_window(window: &[Cell; CONNECT_LENGTH], player: Player, weights: &WeightTable) -> i64 {
    let own = Cell::from(player);
    let opponent = Cell::from(player.opponent());

    let count = |target: Cell| window.iter().filter(|&&c| c == target).count();
    let own_count = count(own);
    let opponent_count = count(opponent);
    let empty_count = count(Cell::Empty);

    let mut score = 0;

    if own_count == 4 {
        score += weights.own_four;
    } else if own_count == 3 && empty_count == 1 {
        score += weights.own_three;
    } else if own_count == 2 && empty_count == 2 {
        score += weights.own_two;
    }

    if opponent_count == 4 {
        score += weights.opponent_four;
    } else if opponent_count == 3 && empty_count == 1 {
        score += weights.opponent_three;
    }

    score
}
