use crate::{AgentError, GameAgent, GameResult, GameState, Player};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Wall-clock time one player spent choosing moves during a game.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MoveTiming {
    pub total: Duration,
    pub moves: usize,
}

impl MoveTiming {
    pub fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.moves += 1;
    }

    /// Average time per move, or zero if no moves were made.
    pub fn average(&self) -> Duration {
        if self.moves == 0 {
            Duration::default()
        } else {
            self.total / self.moves as u32
        }
    }
}

/// Everything the runner learned while playing one game to the end.
#[derive(Clone, Debug)]
pub struct GameRecord<S: GameState> {
    pub result: GameResult,

    /// The player who handed in an illegal move, if the game ended that way.
    pub forfeited_by: Option<Player>,

    pub player_one: MoveTiming,
    pub player_two: MoveTiming,
    pub final_state: S,
}

impl<S: GameState> GameRecord<S> {
    pub fn timing(&self, player: Player) -> MoveTiming {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

/// Plays `state` to the end, alternating between the two agents.
///
/// An agent that answers with a move outside the legal set loses on the spot,
/// regardless of the position on the board.
/// An agent that fails to answer at all is a fault, and is returned as an error.
pub fn play_game<S: GameState>(
    mut state: S,
    player_one: &mut dyn GameAgent<S>,
    player_two: &mut dyn GameAgent<S>,
) -> Result<GameRecord<S>, AgentError> {
    let mut timings = [MoveTiming::default(), MoveTiming::default()];

    let (result, forfeited_by) = loop {
        if let Some(result) = state.game_result() {
            break (result, None);
        }

        let player = state.current_player_turn();
        let agent: &mut dyn GameAgent<S> = match player {
            Player::One => &mut *player_one,
            Player::Two => &mut *player_two,
        };

        let legal_moves = state.legal_moves();

        let started = Instant::now();
        let selected_action = agent.pick_move(&state, &legal_moves)?;
        timings[timing_slot(player)].record(started.elapsed());

        if !legal_moves.contains(&selected_action) {
            debug!(
                agent = agent.name(),
                %player,
                action = ?selected_action,
                "illegal move, forfeiting"
            );
            break (GameResult::win_for(player.opponent()), Some(player));
        }

        trace!(agent = agent.name(), %player, action = ?selected_action, "move");
        state.apply_move(selected_action);
    };

    debug!(?result, "game over\n{}", state.human_friendly());

    Ok(GameRecord {
        result,
        forfeited_by,
        player_one: timings[timing_slot(Player::One)],
        player_two: timings[timing_slot(Player::Two)],
        final_state: state,
    })
}

fn timing_slot(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}
