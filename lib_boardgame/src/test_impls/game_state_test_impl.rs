use crate::*;

/// A tiny take-away game used to exercise the generic machinery:
/// players alternately take one or two stones, and taking the last stone
/// wins (or ties, when `last_stone_wins` is false).
#[derive(Clone, Debug)]
pub struct TestGameState {
    pub stones: u8,
    pub last_stone_wins: bool,
    current_player: Player,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestMove(pub u8);

impl GameMove for TestMove {}

impl TestGameState {
    pub fn new(stones: u8) -> Self {
        Self {
            stones,
            last_stone_wins: true,
            current_player: Player::One,
        }
    }

    pub fn tied(stones: u8) -> Self {
        Self {
            last_stone_wins: false,
            ..Self::new(stones)
        }
    }
}

impl GameState for TestGameState {
    type Move = TestMove;

    fn human_friendly(&self) -> String {
        format!("{} stones, {} to move", self.stones, self.current_player)
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        (1..=2)
            .filter(|&take| take <= self.stones)
            .map(TestMove)
            .collect()
    }

    fn apply_move(&mut self, action: Self::Move) {
        self.stones -= action.0;
        self.current_player = self.current_player.opponent();
    }

    fn current_player_turn(&self) -> Player {
        self.current_player
    }

    fn game_result(&self) -> Option<GameResult> {
        if self.stones > 0 {
            None
        } else if self.last_stone_wins {
            Some(GameResult::win_for(self.current_player.opponent()))
        } else {
            Some(GameResult::Tie)
        }
    }
}

/// Always takes a fixed number of stones, legal or not.
pub struct FixedAgent(pub u8);

impl GameAgent<TestGameState> for FixedAgent {
    fn pick_move(
        &mut self,
        _state: &TestGameState,
        _legal_moves: &[TestMove],
    ) -> Result<TestMove, AgentError> {
        Ok(TestMove(self.0))
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}

/// Never finds a move.
pub struct StuckAgent;

impl GameAgent<TestGameState> for StuckAgent {
    fn pick_move(
        &mut self,
        _state: &TestGameState,
        _legal_moves: &[TestMove],
    ) -> Result<TestMove, AgentError> {
        Err(AgentError::NoMoveFound {
            agent: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "Stuck"
    }
}
