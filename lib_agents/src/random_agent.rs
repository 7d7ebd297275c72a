use crate::util;
use lib_boardgame::{AgentError, GameAgent, GameState};
use rand_xorshift::XorShiftRng;

/// Picks uniformly among the legal moves.
pub struct RandomAgent {
    rng: XorShiftRng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: util::get_rng_from(seed),
        }
    }
}

impl<TState: GameState> GameAgent<TState> for RandomAgent {
    fn pick_move(
        &mut self,
        _state: &TState,
        legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError> {
        util::random_pick(legal_moves, &mut self.rng)
            .copied()
            .ok_or_else(|| AgentError::NoMoveFound {
                agent: String::from("RandomAI"),
            })
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
