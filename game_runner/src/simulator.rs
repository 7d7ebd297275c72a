use crate::error::HarnessError;
use crate::stats::MatchStats;
use lib_boardgame::{play_game, GameAgent, Player};
use lib_connect_four::ConnectFourState;
use tracing::{debug, info};

/// Plays `games` games on an empty `rows` x `columns` board.
/// Agent A moves first in even-numbered games and second in odd ones.
pub fn run_matchup(
    agent_a: &mut dyn GameAgent<ConnectFourState>,
    agent_b: &mut dyn GameAgent<ConnectFourState>,
    games: usize,
    rows: usize,
    columns: usize,
) -> Result<MatchStats, HarnessError> {
    let start = ConnectFourState::new(rows, columns)?;

    run_matchup_from(&start, agent_a, agent_b, games)
}

/// Like `run_matchup`, but every game begins from a copy of `start`.
pub fn run_matchup_from(
    start: &ConnectFourState,
    agent_a: &mut dyn GameAgent<ConnectFourState>,
    agent_b: &mut dyn GameAgent<ConnectFourState>,
    games: usize,
) -> Result<MatchStats, HarnessError> {
    if games == 0 {
        return Err(HarnessError::InvalidGameCount(games.to_string()));
    }

    let mut stats = MatchStats::new(agent_a.name(), agent_b.name());

    for game in 0..games {
        let a_side = if game % 2 == 0 { Player::One } else { Player::Two };

        let record = match a_side {
            Player::One => play_game(start.clone(), &mut *agent_a, &mut *agent_b)?,
            Player::Two => play_game(start.clone(), &mut *agent_b, &mut *agent_a)?,
        };

        debug!(
            game,
            a_side = %a_side,
            result = ?record.result,
            forfeited_by = ?record.forfeited_by,
            "game finished"
        );

        stats.record(&record, a_side);
    }

    info!(
        agent_a = %stats.agent_a,
        agent_b = %stats.agent_b,
        games = stats.games,
        a_wins = stats.a_wins,
        b_wins = stats.b_wins,
        draws = stats.draws,
        "matchup finished"
    );

    Ok(stats)
}
