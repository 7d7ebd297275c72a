use crate::evaluator::{CENTER_ONLY_WEIGHTS, MINIMAX_WEIGHTS};
use crate::mcts_agent::{MctsAgent, MctsParams, DEFAULT_EXPLORATION, DEFAULT_TIME_BUDGET};
use crate::minimax_agent::{MinimaxAgent, TieBreak, DEFAULT_DEPTH};
use crate::{GreedyAgent, HumanAgent, RandomAgent};
use lib_boardgame::{AgentError, GameAgent, GameState, Player};
use lib_connect_four::{Board, ConnectFourState};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Random,
    Greedy,
    Minimax,

    /// Minimax scored only by center control.
    MinimaxCenter,
    Mcts,
    Human,
}

impl AgentKind {
    /// Every kind, in menu order.
    pub const ALL: [AgentKind; 6] = [
        AgentKind::Random,
        AgentKind::Greedy,
        AgentKind::Minimax,
        AgentKind::MinimaxCenter,
        AgentKind::Mcts,
        AgentKind::Human,
    ];

    pub fn menu_key(self) -> &'static str {
        match self {
            AgentKind::Random => "1",
            AgentKind::Greedy => "2",
            AgentKind::Minimax => "3",
            AgentKind::MinimaxCenter => "4",
            AgentKind::Mcts => "5",
            AgentKind::Human => "6",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AgentKind::Random => "RandomAI",
            AgentKind::Greedy => "GreedyAI",
            AgentKind::Minimax => "MinimaxAI",
            AgentKind::MinimaxCenter => "MinimaxAI-H1",
            AgentKind::Mcts => "MCTS",
            AgentKind::Human => "Human",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    /// Accepts a menu key ("1".."6") or a display name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        AgentKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.menu_key() == wanted || kind.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| AgentError::UnknownAgent(wanted.to_string()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentConfig {
    pub minimax_depth: usize,
    pub mcts_time_budget: Duration,
    pub exploration: f64,
    pub tie_break: TieBreak,

    /// Seeds every random choice the agent makes; None draws from entropy.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            minimax_depth: DEFAULT_DEPTH,
            mcts_time_budget: DEFAULT_TIME_BUDGET,
            exploration: DEFAULT_EXPLORATION,
            tie_break: TieBreak::default(),
            seed: None,
        }
    }
}

impl AgentConfig {
    fn mcts_params(&self) -> MctsParams {
        MctsParams {
            time_budget: self.mcts_time_budget,
            exploration: self.exploration,
        }
    }
}

pub fn build_agent(kind: AgentKind, config: &AgentConfig) -> Box<dyn GameAgent<ConnectFourState>> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::new(config.seed)),
        AgentKind::Greedy => Box::new(GreedyAgent::new()),
        AgentKind::Minimax => Box::new(MinimaxAgent::new(
            config.minimax_depth,
            MINIMAX_WEIGHTS,
            config.tie_break,
            config.seed,
        )),
        AgentKind::MinimaxCenter => Box::new(
            MinimaxAgent::new(
                config.minimax_depth,
                CENTER_ONLY_WEIGHTS,
                config.tie_break,
                config.seed,
            )
            .with_name(kind.display_name()),
        ),
        AgentKind::Mcts => Box::new(MctsAgent::new(config.mcts_params(), config.seed)),
        AgentKind::Human => Box::new(HumanAgent::stdio()),
    }
}

/// The column `kind` would play for `player` on `board`.
pub fn select_move(
    board: &Board,
    player: Player,
    kind: AgentKind,
    config: &AgentConfig,
) -> Result<usize, AgentError> {
    let state = ConnectFourState::from_board(board.clone(), player);
    let legal_moves = state.legal_moves();

    let mut agent = build_agent(kind, config);

    agent
        .pick_move(&state, &legal_moves)
        .map(|action| action.column())
}
