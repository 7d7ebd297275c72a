use crate::evaluator::{score_position, WeightTable, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::util;
use lib_boardgame::{AgentError, GameAgent, GameState, Player};
use lib_connect_four::{Board, ConnectFourAction, ConnectFourState};
use rand::Rng;
use rand_xorshift::XorShiftRng;
use tracing::debug;

pub const DEFAULT_DEPTH: usize = 4;

/// How the root chooses between columns of equal value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep the leftmost best column.
    FirstEncountered,

    /// Pick uniformly among all best columns.
    Random,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::FirstEncountered
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// None at terminal nodes and at the depth horizon.
    pub column: Option<usize>,
    pub value: i64,
}

impl SearchOutcome {
    fn leaf(value: i64) -> Self {
        Self {
            column: None,
            value,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning, valued for `perspective`.
///
/// Probes by dropping into `board` and clearing again, so the board is
/// unchanged when this returns.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    perspective: Player,
    weights: &WeightTable,
) -> SearchOutcome {
    let opponent = perspective.opponent();

    if board.has_connect_four(perspective) {
        return SearchOutcome::leaf(WIN_SCORE);
    } else if board.has_connect_four(opponent) {
        return SearchOutcome::leaf(LOSS_SCORE);
    } else if board.is_full() {
        return SearchOutcome::leaf(DRAW_SCORE);
    } else if depth == 0 {
        return SearchOutcome::leaf(score_position(board, perspective, weights));
    }

    let mover = if maximizing { perspective } else { opponent };
    let columns = board.valid_columns();

    // A side that can connect four right now does so;
    // nothing deeper can beat that value.
    if let Some(column) = first_winning_column(board, &columns, mover) {
        let value = if maximizing { WIN_SCORE } else { LOSS_SCORE };
        return SearchOutcome {
            column: Some(column),
            value,
        };
    }

    let mut best = SearchOutcome {
        column: columns.first().copied(),
        value: if maximizing { i64::MIN } else { i64::MAX },
    };

    for &column in &columns {
        let row = match board.next_open_row(column) {
            Some(row) => row,
            None => continue,
        };

        board.drop(row, column, mover);
        let value = minimax(
            board,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            perspective,
            weights,
        )
        .value;
        board.clear(row, column);

        if maximizing {
            if value > best.value {
                best = SearchOutcome {
                    column: Some(column),
                    value,
                };
            }
            alpha = alpha.max(best.value);
        } else {
            if value < best.value {
                best = SearchOutcome {
                    column: Some(column),
                    value,
                };
            }
            beta = beta.min(best.value);
        }

        if alpha >= beta {
            break;
        }
    }

    best
}

/// Searches the root for `perspective` and resolves ties by `tie_break`.
pub fn best_column<R: Rng>(
    board: &mut Board,
    depth: usize,
    perspective: Player,
    weights: &WeightTable,
    tie_break: TieBreak,
    rng: &mut R,
) -> SearchOutcome {
    let depth = depth.max(1);

    match tie_break {
        TieBreak::FirstEncountered => minimax(
            board,
            depth,
            i64::MIN,
            i64::MAX,
            true,
            perspective,
            weights,
        ),
        TieBreak::Random => best_column_random(board, depth, perspective, weights, rng),
    }
}

fn best_column_random<R: Rng>(
    board: &mut Board,
    depth: usize,
    perspective: Player,
    weights: &WeightTable,
    rng: &mut R,
) -> SearchOutcome {
    let columns = board.valid_columns();

    let over = board.has_connect_four(perspective)
        || board.has_connect_four(perspective.opponent())
        || columns.is_empty();
    if over {
        return minimax(board, depth, i64::MIN, i64::MAX, true, perspective, weights);
    }

    let winning: Vec<usize> = columns
        .iter()
        .copied()
        .filter(|&c| completes_four(board, c, perspective))
        .collect();
    if !winning.is_empty() {
        return SearchOutcome {
            column: util::random_pick(&winning, rng).copied(),
            value: WIN_SCORE,
        };
    }

    let mut best_value = i64::MIN;
    let mut best_columns = Vec::new();

    for &column in &columns {
        let row = match board.next_open_row(column) {
            Some(row) => row,
            None => continue,
        };

        // One below the best so far: anything that can tie it is searched exactly,
        // anything worse fails low.
        let alpha = if best_columns.is_empty() {
            i64::MIN
        } else {
            best_value.saturating_sub(1)
        };

        board.drop(row, column, perspective);
        let value = minimax(
            board,
            depth - 1,
            alpha,
            i64::MAX,
            false,
            perspective,
            weights,
        )
        .value;
        board.clear(row, column);

        if value > best_value {
            best_value = value;
            best_columns.clear();
            best_columns.push(column);
        } else if value == best_value {
            best_columns.push(column);
        }
    }

    SearchOutcome {
        column: util::random_pick(&best_columns, rng).copied(),
        value: best_value,
    }
}

fn completes_four(board: &mut Board, column: usize, player: Player) -> bool {
    let row = match board.next_open_row(column) {
        Some(row) => row,
        None => return false,
    };

    board.drop(row, column, player);
    let wins = board.has_connect_four(player);
    board.clear(row, column);

    wins
}

fn first_winning_column(board: &mut Board, columns: &[usize], player: Player) -> Option<usize> {
    columns
        .iter()
        .copied()
        .find(|&c| completes_four(board, c, player))
}

pub struct MinimaxAgent {
    depth: usize,
    weights: WeightTable,
    tie_break: TieBreak,
    rng: XorShiftRng,
    name: String,
}

impl MinimaxAgent {
    pub fn new(depth: usize, weights: WeightTable, tie_break: TieBreak, seed: Option<u64>) -> Self {
        Self {
            depth,
            weights,
            tie_break,
            rng: util::get_rng_from(seed),
            name: String::from("MinimaxAI"),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl GameAgent<ConnectFourState> for MinimaxAgent {
    fn pick_move(
        &mut self,
        state: &ConnectFourState,
        _legal_moves: &[ConnectFourAction],
    ) -> Result<ConnectFourAction, AgentError> {
        let player = state.current_player_turn();
        let mut board = state.board().clone();

        let outcome = best_column(
            &mut board,
            self.depth,
            player,
            &self.weights,
            self.tie_break,
            &mut self.rng,
        );

        debug!(
            agent = %self.name,
            depth = self.depth,
            column = ?outcome.column,
            value = outcome.value,
            "minimax search finished"
        );

        outcome
            .column
            .map(ConnectFourAction)
            .ok_or_else(|| AgentError::NoMoveFound {
                agent: self.name.clone(),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{CENTER_ONLY_WEIGHTS, MINIMAX_WEIGHTS};
    use crate::util::{get_rng_deterministic, get_rng_seeded};
    use std::collections::HashSet;

    fn board_from_drops(drops: &[(usize, Player)]) -> Board {
        let mut board = Board::default();
        for &(column, player) in drops {
            board.drop_piece(column, player).unwrap();
        }

        board
    }

    fn search(board: &mut Board, depth: usize, player: Player) -> SearchOutcome {
        minimax(
            board,
            depth,
            i64::MIN,
            i64::MAX,
            true,
            player,
            &MINIMAX_WEIGHTS,
        )
    }

    /// One threatens the bottom row at column 3; Two has pieces stacked at 6.
    fn one_threatens_bottom_row() -> Board {
        board_from_drops(&[
            (0, Player::One),
            (6, Player::Two),
            (1, Player::One),
            (6, Player::Two),
            (2, Player::One),
            (5, Player::Two),
        ])
    }

    #[test]
    fn minimax_expects_takes_immediate_win() {
        let mut board = one_threatens_bottom_row();

        for depth in 1..=5 {
            let outcome = search(&mut board, depth, Player::One);

            assert_eq!(Some(3), outcome.column, "depth {}", depth);
            assert_eq!(WIN_SCORE, outcome.value);
        }
    }

    #[test]
    fn minimax_expects_blocks_opponent_immediate_win() {
        // One has three along the bottom and Two is to move.
        let mut board = board_from_drops(&[
            (0, Player::One),
            (6, Player::Two),
            (1, Player::One),
            (6, Player::Two),
            (2, Player::One),
        ]);

        for &depth in &[2, 4] {
            let outcome = search(&mut board, depth, Player::Two);

            assert_eq!(Some(3), outcome.column, "depth {}", depth);
            assert!(outcome.value > LOSS_SCORE);
        }
    }

    #[test]
    fn minimax_expects_board_restored_after_search() {
        let mut board = one_threatens_bottom_row();
        board.drop_piece(3, Player::Two).unwrap();
        let before = board.clone();

        search(&mut board, 4, Player::One);

        assert_eq!(before, board);
    }

    #[test]
    fn minimax_when_terminal_expects_sentinel_without_column() {
        let mut board = one_threatens_bottom_row();
        board.drop_piece(3, Player::One).unwrap();

        assert_eq!(SearchOutcome::leaf(WIN_SCORE), search(&mut board, 3, Player::One));
        assert_eq!(SearchOutcome::leaf(LOSS_SCORE), search(&mut board, 3, Player::Two));
    }

    #[test]
    fn minimax_at_depth_zero_expects_static_score() {
        let mut board = board_from_drops(&[(3, Player::One), (3, Player::Two)]);
        let expected = score_position(&board, Player::One, &CENTER_ONLY_WEIGHTS);

        let outcome = minimax(
            &mut board,
            0,
            i64::MIN,
            i64::MAX,
            true,
            Player::One,
            &CENTER_ONLY_WEIGHTS,
        );

        assert_eq!(SearchOutcome::leaf(expected), outcome);
    }

    #[test]
    fn minimax_center_only_expects_prefers_center() {
        let mut board = Board::default();

        let outcome = minimax(
            &mut board,
            1,
            i64::MIN,
            i64::MAX,
            true,
            Player::One,
            &CENTER_ONLY_WEIGHTS,
        );

        assert_eq!(Some(3), outcome.column);
        assert_eq!(3, outcome.value);
    }

    #[test]
    fn pruned_search_expects_same_value_as_full_window_children() {
        let mut board = board_from_drops(&[(3, Player::One), (2, Player::Two), (3, Player::One)]);
        let root = search(&mut board, 3, Player::Two);

        let best_child = board
            .valid_columns()
            .into_iter()
            .map(|column| {
                let row = board.next_open_row(column).unwrap();
                board.drop(row, column, Player::Two);
                let value = minimax(
                    &mut board,
                    2,
                    i64::MIN,
                    i64::MAX,
                    false,
                    Player::Two,
                    &MINIMAX_WEIGHTS,
                )
                .value;
                board.clear(row, column);
                value
            })
            .max()
            .unwrap();

        assert_eq!(best_child, root.value);
    }

    #[test]
    fn best_column_first_encountered_expects_leftmost_on_ties() {
        let flat = WeightTable {
            center: 0,
            ..CENTER_ONLY_WEIGHTS
        };
        let mut board = Board::default();

        let outcome = best_column(
            &mut board,
            1,
            Player::One,
            &flat,
            TieBreak::FirstEncountered,
            &mut get_rng_deterministic(),
        );

        assert_eq!(Some(0), outcome.column);
    }

    #[test]
    fn best_column_random_expects_reproducible_with_seed() {
        let mut board = board_from_drops(&[(3, Player::One), (4, Player::Two)]);

        let a = best_column(
            &mut board,
            3,
            Player::One,
            &MINIMAX_WEIGHTS,
            TieBreak::Random,
            &mut get_rng_seeded(11),
        );
        let b = best_column(
            &mut board,
            3,
            Player::One,
            &MINIMAX_WEIGHTS,
            TieBreak::Random,
            &mut get_rng_seeded(11),
        );

        assert_eq!(a, b);
    }

    #[test]
    fn best_column_random_expects_same_value_as_first_encountered() {
        let mut board = board_from_drops(&[(3, Player::One), (4, Player::Two), (2, Player::One)]);

        let first = best_column(
            &mut board,
            3,
            Player::Two,
            &MINIMAX_WEIGHTS,
            TieBreak::FirstEncountered,
            &mut get_rng_deterministic(),
        );
        let random = best_column(
            &mut board,
            3,
            Player::Two,
            &MINIMAX_WEIGHTS,
            TieBreak::Random,
            &mut get_rng_deterministic(),
        );

        assert_eq!(first.value, random.value);
    }

    #[test]
    fn best_column_random_when_all_equal_expects_spread_over_columns() {
        let flat = WeightTable {
            center: 0,
            ..CENTER_ONLY_WEIGHTS
        };
        let mut board = Board::default();

        let chosen: HashSet<usize> = (0..40)
            .filter_map(|seed| {
                best_column(
                    &mut board,
                    1,
                    Player::One,
                    &flat,
                    TieBreak::Random,
                    &mut get_rng_seeded(seed),
                )
                .column
            })
            .collect();

        assert!(chosen.len() > 1);
        assert!(chosen.iter().all(|&c| c < 7));
    }

    #[test]
    fn best_column_random_expects_takes_immediate_win() {
        let mut board = one_threatens_bottom_row();

        for seed in 0..10 {
            let outcome = best_column(
                &mut board,
                4,
                Player::One,
                &MINIMAX_WEIGHTS,
                TieBreak::Random,
                &mut get_rng_seeded(seed),
            );
            assert_eq!(Some(3), outcome.column);
        }
    }

    #[test]
    fn agent_expects_legal_winning_action() {
        let state = ConnectFourState::from_board(one_threatens_bottom_row(), Player::One);
        let mut agent = MinimaxAgent::new(DEFAULT_DEPTH, MINIMAX_WEIGHTS, TieBreak::default(), None);

        let action = agent
            .pick_move(&state, &state.legal_moves())
            .expect("a move exists");

        assert_eq!(ConnectFourAction(3), action);
        assert_eq!("MinimaxAI", GameAgent::<ConnectFourState>::name(&agent));
    }
}
