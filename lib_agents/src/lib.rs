pub mod agent_kind;
pub mod evaluator;
mod greedy_agent;
mod human_agent;
pub mod mcts_agent;
pub mod minimax_agent;
mod random_agent;
pub mod util;

pub use agent_kind::{build_agent, select_move, AgentConfig, AgentKind};
pub use greedy_agent::{greedy_column, GreedyAgent};
pub use human_agent::{HumanAgent, LineSource, SharedStdin};
pub use mcts_agent::{MctsAgent, MctsParams};
pub use minimax_agent::{best_column, minimax, MinimaxAgent, SearchOutcome, TieBreak};
pub use random_agent::RandomAgent;
