use crate::evaluator::{score_position, WeightTable, GREEDY_WEIGHTS};
use lib_boardgame::{AgentError, GameAgent, GameState, Player};
use lib_connect_four::{Board, ConnectFourAction, ConnectFourState};
use tracing::trace;

/// The column whose resulting position scores best for `player`, one ply deep.
/// The leftmost column wins ties. None if the board has no valid column.
pub fn greedy_column(board: &mut Board, player: Player, weights: &WeightTable) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;

    for column in board.valid_columns() {
        let row = match board.next_open_row(column) {
            Some(row) => row,
            None => continue,
        };

        board.drop(row, column, player);
        let score = score_position(board, player, weights);
        board.clear(row, column);

        trace!(column, score, "greedy candidate");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((column, score));
        }
    }

    best.map(|(column, _)| column)
}

pub struct GreedyAgent {
    weights: WeightTable,
}

impl GreedyAgent {
    pub fn new() -> Self {
        Self {
            weights: GREEDY_WEIGHTS,
        }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl GameAgent<ConnectFourState> for GreedyAgent {
    fn pick_move(
        &mut self,
        state: &ConnectFourState,
        _legal_moves: &[ConnectFourAction],
    ) -> Result<ConnectFourAction, AgentError> {
        let mut board = state.board().clone();

        greedy_column(&mut board, state.current_player_turn(), &self.weights)
            .map(ConnectFourAction)
            .ok_or_else(|| AgentError::NoMoveFound {
                agent: String::from("GreedyAI"),
            })
    }

    fn name(&self) -> &str {
        "GreedyAI"
    }
}
