use lib_boardgame::{GameRecord, GameResult, GameState, MoveTiming, Player};
use std::fmt;

/// Running totals for a series of games between agent A and agent B.
/// Sides are tracked per agent, not per seat, since the seats alternate.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchStats {
    pub agent_a: String,
    pub agent_b: String,
    pub games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,

    /// Games decided by an illegal move. Each is also counted as a win.
    pub forfeits: usize,

    pub a_timing: MoveTiming,
    pub b_timing: MoveTiming,
}

impl MatchStats {
    pub fn new(agent_a: &str, agent_b: &str) -> Self {
        MatchStats {
            agent_a: agent_a.to_string(),
            agent_b: agent_b.to_string(),
            games: 0,
            a_wins: 0,
            b_wins: 0,
            draws: 0,
            forfeits: 0,
            a_timing: MoveTiming::default(),
            b_timing: MoveTiming::default(),
        }
    }

    /// Folds one finished game into the totals. `a_side` is the seat agent A played.
    pub fn record<S: GameState>(&mut self, record: &GameRecord<S>, a_side: Player) {
        self.games += 1;

        match record.result {
            GameResult::Tie => self.draws += 1,
            result if result.is_win_for_player(a_side) => self.a_wins += 1,
            _ => self.b_wins += 1,
        }

        if record.forfeited_by.is_some() {
            self.forfeits += 1;
        }

        let a_timing = record.timing(a_side);
        let b_timing = record.timing(a_side.opponent());
        self.a_timing.total += a_timing.total;
        self.a_timing.moves += a_timing.moves;
        self.b_timing.total += b_timing.total;
        self.b_timing.moves += b_timing.moves;
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            agent_a: self.agent_a.clone(),
            agent_b: self.agent_b.clone(),
            games: self.games,
            a_wins: self.a_wins,
            b_wins: self.b_wins,
            draws: self.draws,
            forfeits: self.forfeits,
            a_win_rate: percent(self.a_wins, self.games),
            b_win_rate: percent(self.b_wins, self.games),
            draw_rate: percent(self.draws, self.games),
            a_secs_per_move: self.a_timing.average().as_secs_f64(),
            b_secs_per_move: self.b_timing.average().as_secs_f64(),
        }
    }
}

fn percent(count: usize, games: usize) -> f64 {
    if games == 0 {
        0.0
    } else {
        count as f64 / games as f64 * 100.0
    }
}

/// Derived figures for a finished matchup. Rates are percentages.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchReport {
    pub agent_a: String,
    pub agent_b: String,
    pub games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub forfeits: usize,
    pub a_win_rate: f64,
    pub b_win_rate: f64,
    pub draw_rate: f64,
    pub a_secs_per_move: f64,
    pub b_secs_per_move: f64,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Matchup: {} vs {} ===", self.agent_a, self.agent_b)?;
        writeln!(f, "Total Games: {}", self.games)?;
        writeln!(f, "{} Wins: {}", self.agent_a, self.a_wins)?;
        writeln!(f, "{} Wins: {}", self.agent_b, self.b_wins)?;
        writeln!(f, "Draws: {}", self.draws)?;
        if self.forfeits > 0 {
            writeln!(f, "Forfeits: {}", self.forfeits)?;
        }

        writeln!(f)?;
        writeln!(f, "Win Rate:")?;
        writeln!(f, "{}: {:.2}%", self.agent_a, self.a_win_rate)?;
        writeln!(f, "{}: {:.2}%", self.agent_b, self.b_win_rate)?;
        writeln!(f, "Draws: {:.2}%", self.draw_rate)?;

        writeln!(f)?;
        writeln!(f, "Average Move Time:")?;
        writeln!(f, "{}: {:.4} sec/move", self.agent_a, self.a_secs_per_move)?;
        writeln!(f, "{}: {:.4} sec/move", self.agent_b, self.b_secs_per_move)?;
        write!(f, "====================================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_connect_four::ConnectFourState;
    use std::time::Duration;

    fn record_with(
        result: GameResult,
        forfeited_by: Option<Player>,
        one_moves: usize,
        two_moves: usize,
    ) -> GameRecord<ConnectFourState> {
        GameRecord {
            result,
            forfeited_by,
            player_one: MoveTiming {
                total: Duration::from_millis(10) * one_moves as u32,
                moves: one_moves,
            },
            player_two: MoveTiming {
                total: Duration::from_millis(30) * two_moves as u32,
                moves: two_moves,
            },
            final_state: ConnectFourState::default(),
        }
    }

    #[test]
    fn record_expects_wins_credited_by_seat() {
        let mut stats = MatchStats::new("A", "B");

        // A as One wins, then A as Two wins, then B as One wins.
        stats.record(&record_with(GameResult::PlayerOneWins, None, 4, 3), Player::One);
        stats.record(&record_with(GameResult::PlayerTwoWins, None, 4, 4), Player::Two);
        stats.record(&record_with(GameResult::PlayerOneWins, None, 4, 3), Player::Two);

        assert_eq!(3, stats.games);
        assert_eq!(2, stats.a_wins);
        assert_eq!(1, stats.b_wins);
        assert_eq!(0, stats.draws);
    }

    #[test]
    fn record_expects_timings_follow_agent_not_seat() {
        let mut stats = MatchStats::new("A", "B");

        stats.record(&record_with(GameResult::Tie, None, 2, 2), Player::One);
        stats.record(&record_with(GameResult::Tie, None, 2, 2), Player::Two);

        assert_eq!(4, stats.a_timing.moves);
        assert_eq!(Duration::from_millis(80), stats.a_timing.total);
        assert_eq!(4, stats.b_timing.moves);
        assert_eq!(Duration::from_millis(80), stats.b_timing.total);
        assert_eq!(2, stats.draws);
    }

    #[test]
    fn record_when_forfeit_expects_win_and_forfeit_counted() {
        let mut stats = MatchStats::new("A", "B");

        stats.record(
            &record_with(GameResult::PlayerTwoWins, Some(Player::One), 1, 0),
            Player::Two,
        );

        assert_eq!(1, stats.a_wins);
        assert_eq!(1, stats.forfeits);
    }

    #[test]
    fn report_when_no_games_expects_zero_rates() {
        let report = MatchStats::new("A", "B").report();

        assert_eq!(0.0, report.a_win_rate);
        assert_eq!(0.0, report.draw_rate);
        assert_eq!(0.0, report.a_secs_per_move);
    }

    #[test]
    fn report_display_expects_rates_and_latency() {
        let mut stats = MatchStats::new("GreedyAI", "RandomAI");
        stats.record(&record_with(GameResult::PlayerOneWins, None, 4, 3), Player::One);
        stats.record(&record_with(GameResult::PlayerOneWins, None, 4, 3), Player::Two);
        stats.record(&record_with(GameResult::Tie, None, 4, 3), Player::One);

        let printed = stats.report().to_string();

        assert!(printed.starts_with("=== Matchup: GreedyAI vs RandomAI ==="));
        assert!(printed.contains("Total Games: 3"));
        assert!(printed.contains("GreedyAI Wins: 1"));
        assert!(printed.contains("RandomAI Wins: 1"));
        assert!(printed.contains("Draws: 1\n"));
        assert!(printed.contains("GreedyAI: 33.33%"));
        assert!(printed.contains("Draws: 33.33%"));
        assert!(!printed.contains("Forfeits"));

        // GreedyAI: 8 moves at 10ms and 3 at 30ms.
        assert!(printed.contains("GreedyAI: 0.0155 sec/move"), "{}", printed);
    }
}
