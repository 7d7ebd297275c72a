use super::tree_search::{self, MctsParams};
use crate::util;
use lib_boardgame::{AgentError, GameAgent, GameState};
use monte_carlo_tree::{MctsData, RcNode};
use rand_xorshift::XorShiftRng;
use std::time::Instant;
use tracing::debug;

/// Plays the most visited move of a fresh time-limited search every turn.
pub struct MctsAgent {
    params: MctsParams,
    rng: XorShiftRng,
}

impl MctsAgent {
    pub fn new(params: MctsParams, seed: Option<u64>) -> Self {
        Self {
            params,
            rng: util::get_rng_from(seed),
        }
    }
}

impl<TState: GameState> GameAgent<TState> for MctsAgent {
    fn pick_move(
        &mut self,
        state: &TState,
        _legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError> {
        let player = state.current_player_turn();

        let now = Instant::now();
        let summary = tree_search::mcts_result::<RcNode<MctsData<TState>>, TState, _>(
            state.clone(),
            player,
            &self.params,
            &mut self.rng,
        );
        let elapsed = now.elapsed();

        if summary.iterations > 0 {
            let sims_per_sec = summary.iterations as f64 / elapsed.as_secs_f64();
            debug!(%player, iterations = summary.iterations, sims_per_sec, "mcts agent searched");
        }

        summary.best.ok_or_else(|| AgentError::NoMoveFound {
            agent: String::from("MCTS"),
        })
    }

    fn name(&self) -> &str {
        "MCTS"
    }
}
